mod detail_tests;

use std::sync::Mutex;

use crate::resolver::{ConfigurationError, EntryResolver, Outcome, SearchTerm};

/// Resolver returning a fixed answer and recording every term it was asked for
pub(crate) struct ScriptedResolver {
    answer: Result<Outcome, ConfigurationError>,
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedResolver {
    pub fn new(answer: Result<Outcome, ConfigurationError>) -> Self {
        Self {
            answer,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl EntryResolver for ScriptedResolver {
    async fn resolve(&self, term: &SearchTerm) -> Result<Outcome, ConfigurationError> {
        self.calls.lock().unwrap().push(term.to_string());
        self.answer.clone()
    }
}
