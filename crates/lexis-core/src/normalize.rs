use serde_json::Value;

use lexis_types::DictionaryEntry;

/// Shapes the upstream uses for the definitions field
///
/// Variant order mirrors the classification priority: a sequence wins over
/// a plain string, which wins over a single `{ "value": ... }` object.
#[derive(Debug, Clone, PartialEq)]
pub enum RawDefinitions {
    ValueList(Vec<Value>),
    PlainString(String),
    SingleValue(String),
    Unrecognized,
}

impl RawDefinitions {
    pub fn classify(raw: &Value) -> Self {
        match raw {
            Value::Array(items) => Self::ValueList(items.clone()),
            Value::String(text) => Self::PlainString(text.clone()),
            Value::Object(map) => match map.get("value") {
                Some(Value::String(text)) => Self::SingleValue(text.clone()),
                _ => Self::Unrecognized,
            },
            _ => Self::Unrecognized,
        }
    }

    /// Collapse into the canonical flat string
    pub fn normalize(&self) -> String {
        match self {
            Self::ValueList(items) => items
                .iter()
                .filter_map(list_item_text)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(DictionaryEntry::SEPARATOR),
            Self::PlainString(text) => text.clone(),
            Self::SingleValue(text) => text.clone(),
            Self::Unrecognized => String::new(),
        }
    }
}

fn list_item_text(item: &Value) -> Option<&str> {
    match item {
        Value::String(text) => Some(text.as_str()),
        Value::Object(map) => map.get("value").and_then(Value::as_str),
        _ => None,
    }
}

pub fn normalize_definitions(raw: &Value) -> String {
    RawDefinitions::classify(raw).normalize()
}
