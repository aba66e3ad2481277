mod terminal_view_tests;

use std::sync::Mutex;

use lexis_core::{ConfigurationError, EntryResolver, Outcome, SearchTerm};

pub(crate) struct StubResolver {
    answer: Result<Outcome, ConfigurationError>,
    calls: Mutex<Vec<String>>,
}

impl StubResolver {
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
impl EntryResolver for StubResolver {
    async fn resolve(&self, term: &SearchTerm) -> Result<Outcome, ConfigurationError> {
        self.calls.lock().unwrap().push(term.to_string());
        self.answer.clone()
    }
}
