use std::env;

use serde::{Deserialize, Serialize};

fn default_collection_path() -> String {
    "/jsonapi/node/dictionary_entry".to_string()
}

fn default_word_field() -> String {
    "field_word".to_string()
}

fn default_definitions_field() -> String {
    "field_definitions".to_string()
}

/// Upstream JSON:API collection holding dictionary entries
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryApiConfig {
    /// Base endpoint, e.g. `https://cms.example.org`. Required for lookups.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_collection_path")]
    pub collection_path: String,
    #[serde(default = "default_word_field")]
    pub word_field: String,
    #[serde(default = "default_definitions_field")]
    pub definitions_field: String,
}

impl DictionaryApiConfig {
    pub fn new() -> Self {
        let collection_path =
            env::var("LEXIS_COLLECTION_PATH").unwrap_or_else(|_| default_collection_path());
        let word_field = env::var("LEXIS_WORD_FIELD").unwrap_or_else(|_| default_word_field());
        let definitions_field =
            env::var("LEXIS_DEFINITIONS_FIELD").unwrap_or_else(|_| default_definitions_field());

        Self {
            base_url: Self::base_url_from_env(),
            collection_path,
            word_field,
            definitions_field,
        }
    }

    /// `DRUPAL_BASE_URL`, ignoring an empty value
    pub fn base_url_from_env() -> Option<String> {
        env::var("DRUPAL_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
    }
}

impl Default for DictionaryApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            collection_path: default_collection_path(),
            word_field: default_word_field(),
            definitions_field: default_definitions_field(),
        }
    }
}
