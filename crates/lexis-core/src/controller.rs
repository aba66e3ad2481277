use crate::resolver::{ConfigurationError, EntryResolver, Outcome, SearchTerm};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a word to search";
pub const SERVICE_ERROR_MESSAGE: &str =
    "Failed to connect to dictionary service. Please try again.";

pub fn not_found_message(term: &SearchTerm) -> String {
    format!("Word \"{term}\" not found in the dictionary")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Validating,
    Loading,
    Succeeded,
    Failed(FailureKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    NotFound,
    Service,
}

/// Where the front end should go after a successful search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub term: SearchTerm,
}

impl Navigation {
    /// `/word/<term>`, term as typed (trimmed, case preserved)
    pub fn word_path(&self) -> String {
        format!("/word/{}", self.term)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Navigate(Navigation),
    Failed(FailureKind),
}

/// Drives one search box: validate, resolve, classify
///
/// Submitting takes `&mut self`, so a single controller never has two
/// lookups in flight.
pub struct SearchController<R> {
    resolver: R,
    input: String,
    error: String,
    state: SearchState,
}

impl<R: EntryResolver> SearchController<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            input: String::new(),
            error: String::new(),
            state: SearchState::Idle,
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current error text, empty when there is none
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == SearchState::Loading
    }

    /// Update the retained input; the previous error stays until the next submit
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Start a submission: clear the old error and validate the input
    ///
    /// Leaves the controller in `Loading` when a term was accepted.
    pub fn begin(&mut self) -> Result<SearchTerm, FailureKind> {
        self.error.clear();
        self.state = SearchState::Validating;

        match SearchTerm::parse(&self.input) {
            Some(term) => {
                self.state = SearchState::Loading;
                Ok(term)
            }
            None => {
                tracing::debug!("Rejected empty search input");
                self.fail(FailureKind::Validation, EMPTY_INPUT_MESSAGE.to_string());
                Err(FailureKind::Validation)
            }
        }
    }

    /// Resolve a term accepted by [`begin`](Self::begin) and classify the outcome
    pub async fn run(&mut self, term: SearchTerm) -> Result<Submission, ConfigurationError> {
        tracing::info!("Searching for '{}'", term);

        let outcome = match self.resolver.resolve(&term).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Search aborted, resolver misconfigured: {}", e);
                self.state = SearchState::Idle;
                return Err(e);
            }
        };

        Ok(self.classify(term, outcome))
    }

    /// `begin` followed by `run`
    pub async fn submit(&mut self) -> Result<Submission, ConfigurationError> {
        match self.begin() {
            Ok(term) => self.run(term).await,
            Err(kind) => Ok(Submission::Failed(kind)),
        }
    }

    fn classify(&mut self, term: SearchTerm, outcome: Outcome) -> Submission {
        match outcome {
            Outcome::Found(entry) => {
                tracing::debug!("Found '{}'", entry.word);
                self.state = SearchState::Succeeded;
                Submission::Navigate(Navigation { term })
            }
            Outcome::NotFound => {
                tracing::info!("'{}' not in dictionary", term);
                self.fail(FailureKind::NotFound, not_found_message(&term));
                Submission::Failed(FailureKind::NotFound)
            }
            Outcome::ServiceError(message) => {
                tracing::warn!("Dictionary service error: {}", message);
                self.fail(FailureKind::Service, SERVICE_ERROR_MESSAGE.to_string());
                Submission::Failed(FailureKind::Service)
            }
        }
    }

    fn fail(&mut self, kind: FailureKind, message: String) {
        self.state = SearchState::Failed(kind);
        self.error = message;
    }
}
