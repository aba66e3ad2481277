use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryApiConfig;
use self::ui::UiConfig;

pub mod dictionary;
pub mod ui;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryApiConfig,
    pub ui: UiConfig,

    /// `text` or `json`
    pub log_format: LogFormat,
    /// Capacity of the front end -> event loop channel
    pub ui_channel_capacity: usize,
    /// Capacity of the event loop -> front end channel
    pub app_channel_capacity: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let log_format = env::var("LEXIS_LOG_FORMAT")
            .ok()
            .and_then(|v| LogFormat::parse(&v))
            .unwrap_or_default();

        Config {
            dictionary: DictionaryApiConfig::new(),
            ui: UiConfig::new(),

            log_format,
            ui_channel_capacity: 64,
            app_channel_capacity: 256,
        }
    }

    /// Load a JSON profile; the environment fills a base URL the file leaves out
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let mut config: Config =
            serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        if config.dictionary.base_url.is_none() {
            config.dictionary.base_url = DictionaryApiConfig::base_url_from_env();
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryApiConfig::default(),
            ui: UiConfig::default(),
            log_format: LogFormat::default(),
            ui_channel_capacity: 64,
            app_channel_capacity: 256,
        }
    }
}
