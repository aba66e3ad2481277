use async_trait::async_trait;
use reqwest::header::{ACCEPT, CACHE_CONTROL};

use lexis_config::dictionary::DictionaryApiConfig;
use lexis_core::{ConfigurationError, EntryResolver, Outcome, SearchTerm};
use lexis_types::DictionaryEntry;

use crate::document::JsonApiDocument;
use crate::error::FetchError;

pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Entry resolver backed by a Drupal JSON:API collection
#[derive(Clone)]
pub struct JsonApiResolver {
    client: reqwest::Client,
    base_url: Option<String>,
    collection_path: String,
    word_field: String,
    definitions_field: String,
}

impl JsonApiResolver {
    pub fn new(config: &DictionaryApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &DictionaryApiConfig) -> Self {
        Self {
            client,
            base_url: config
                .base_url
                .as_ref()
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            collection_path: config.collection_path.clone(),
            word_field: config.word_field.clone(),
            definitions_field: config.definitions_field.clone(),
        }
    }

    /// Exact-match filter URL for `term`
    pub fn lookup_url(&self, term: &SearchTerm) -> Result<String, ConfigurationError> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or(ConfigurationError::MissingBaseUrl)?;

        if self.word_field.is_empty() {
            return Err(ConfigurationError::Invalid(
                "word field name is empty".to_string(),
            ));
        }

        let path = if self.collection_path.starts_with('/') || self.collection_path.is_empty() {
            self.collection_path.clone()
        } else {
            format!("/{}", self.collection_path)
        };

        Ok(format!(
            "{}{}?filter[{}]={}",
            base_url,
            path,
            self.word_field,
            urlencoding::encode(term.as_str())
        ))
    }

    async fn fetch(&self, url: &str) -> Result<Option<DictionaryEntry>, FetchError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, JSON_API_MEDIA_TYPE)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await?;
        let document: JsonApiDocument = serde_json::from_slice(&body)?;

        let Some(resource) = document.into_first() else {
            return Ok(None);
        };

        resource
            .to_entry(&self.word_field, &self.definitions_field)
            .map(Some)
    }
}

#[async_trait]
impl EntryResolver for JsonApiResolver {
    async fn resolve(&self, term: &SearchTerm) -> Result<Outcome, ConfigurationError> {
        let url = self.lookup_url(term)?;
        tracing::debug!("GET {}", url);

        let outcome = match self.fetch(&url).await {
            Ok(Some(entry)) => Outcome::Found(entry),
            Ok(None) => Outcome::NotFound,
            Err(e) => {
                tracing::warn!("Lookup of '{}' failed: {}", term, e);
                Outcome::ServiceError(format!("Failed to fetch dictionary entry: {}", e))
            }
        };

        Ok(outcome)
    }
}
