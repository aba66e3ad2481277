use serde::Deserialize;
use serde_json::{Map, Value};

use lexis_core::normalize_definitions;
use lexis_types::DictionaryEntry;

use crate::error::FetchError;

/// JSON:API collection response, as it comes over the wire
///
/// `links`, `meta` and `included` are ignored.
#[derive(Debug, Deserialize)]
pub struct JsonApiDocument {
    #[serde(default)]
    pub data: Option<Vec<JsonApiResource>>,
}

#[derive(Debug, Deserialize)]
pub struct JsonApiResource {
    /// e.g. `node--dictionary_entry`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    pub attributes: Map<String, Value>,
}

impl JsonApiDocument {
    /// First resource, if the collection has any
    pub fn into_first(self) -> Option<JsonApiResource> {
        self.data.and_then(|data| data.into_iter().next())
    }
}

impl JsonApiResource {
    /// Map onto the app-level entry, normalising the definitions field
    pub fn to_entry(
        &self,
        word_field: &str,
        definitions_field: &str,
    ) -> Result<DictionaryEntry, FetchError> {
        let word = self
            .attributes
            .get(word_field)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                FetchError::MalformedEntry(format!(
                    "{} resource {} has no string attribute '{}'",
                    self.kind.as_deref().unwrap_or("untyped"),
                    self.id.as_deref().unwrap_or("<no id>"),
                    word_field
                ))
            })?;

        let definitions = self
            .attributes
            .get(definitions_field)
            .map(normalize_definitions)
            .unwrap_or_default();

        Ok(DictionaryEntry::new(word, definitions))
    }
}
