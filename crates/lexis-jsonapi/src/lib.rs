mod document;
mod error;
mod resolver;

pub use document::{JsonApiDocument, JsonApiResource};
pub use error::FetchError;
pub use resolver::{JSON_API_MEDIA_TYPE, JsonApiResolver};
