use std::env;

use serde::{Deserialize, Serialize};

fn default_prompt() -> String {
    "word> ".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Show the detail view after a successful search
    #[serde(default = "default_open_on_navigate")]
    pub open_on_navigate: bool,
}

fn default_open_on_navigate() -> bool {
    true
}

impl UiConfig {
    pub fn new() -> Self {
        let prompt = env::var("LEXIS_PROMPT").unwrap_or_else(|_| default_prompt());

        Self {
            prompt,
            open_on_navigate: default_open_on_navigate(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            open_on_navigate: default_open_on_navigate(),
        }
    }
}
