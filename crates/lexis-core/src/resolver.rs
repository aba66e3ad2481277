use std::fmt;

use lexis_types::DictionaryEntry;

/// Trimmed, non-empty search input
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Returns `None` for empty or whitespace-only input
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SearchTerm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Result of a single lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(DictionaryEntry),
    /// Upstream answered and holds no such word
    NotFound,
    /// Upstream could not be reached or answered badly
    ServiceError(String),
}

/// Resolver cannot run at all; not a lookup result
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("DRUPAL_BASE_URL environment variable is not configured")]
    MissingBaseUrl,

    #[error("Invalid dictionary API configuration: {0}")]
    Invalid(String),
}

/// Dictionary lookup backend
#[async_trait::async_trait]
pub trait EntryResolver: Send + Sync {
    /// Look up exactly one term
    ///
    /// Runtime failures come back as `Outcome::ServiceError`; `Err` is
    /// reserved for configuration problems.
    async fn resolve(&self, term: &SearchTerm) -> Result<Outcome, ConfigurationError>;
}

#[async_trait::async_trait]
impl<'a, R: EntryResolver + ?Sized> EntryResolver for &'a R {
    async fn resolve(&self, term: &SearchTerm) -> Result<Outcome, ConfigurationError> {
        (**self).resolve(term).await
    }
}

#[async_trait::async_trait]
impl<R: EntryResolver + ?Sized> EntryResolver for std::sync::Arc<R> {
    async fn resolve(&self, term: &SearchTerm) -> Result<Outcome, ConfigurationError> {
        (**self).resolve(term).await
    }
}
