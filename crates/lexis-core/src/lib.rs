pub mod controller;
pub mod detail;
pub mod normalize;
pub mod resolver;
pub mod state;

pub use controller::{FailureKind, Navigation, SearchController, SearchState, Submission};
pub use detail::load_word_view;
pub use normalize::{RawDefinitions, normalize_definitions};
pub use resolver::{ConfigurationError, EntryResolver, Outcome, SearchTerm};

#[cfg(test)]
mod tests;
