use lexis_config::Config;
use lexis_config::ui::UiConfig;
use tokio::sync::RwLock;

/// Shared runtime state for the app's tasks
#[derive(Default)]
pub struct AppState {
    pub config: RwLock<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// Snapshot of the front end settings
    pub async fn ui_config(&self) -> UiConfig {
        self.config.read().await.ui.clone()
    }
}
