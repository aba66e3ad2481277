use serde::{Deserialize, Serialize};

/// App-level dictionary entry
///
/// `definitions` is always a flat string, paragraphs separated by a blank line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub definitions: String,
}

impl DictionaryEntry {
    /// Paragraph separator used in `definitions`
    pub const SEPARATOR: &'static str = "\n\n";

    pub fn new(word: impl Into<String>, definitions: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definitions: definitions.into(),
        }
    }

    /// Split definitions back into the individual paragraphs
    pub fn definition_list(&self) -> Vec<String> {
        self.definitions
            .split(Self::SEPARATOR)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Text submitted from the front end
    SearchSubmitted(String),
    /// Front end asks for the detail view of a word
    OpenWord(String),
    LoadingChanged(bool),
    ShowError(String),
    ClearError,
    /// Navigation directive, e.g. `/word/hello`
    Navigate(String),
    ShowWord(WordView),
    BackendReady,
    Close,
}

/// Display data for the word detail destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordView {
    Entry {
        word: String,
        definitions: Vec<String>,
    },
    NotFound {
        word: String,
    },
    Unavailable {
        word: String,
    },
}
