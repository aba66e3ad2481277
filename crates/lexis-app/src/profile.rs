use std::path::Path;

use anyhow::Context;
use lexis_config::Config;

/// Load config from a profile file, or from the environment when none is given
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            let config = Config::from_file(path)
                .with_context(|| format!("Failed to load profile {}", path.display()))?;
            tracing::info!("Loaded profile {}", path.display());
            Ok(config)
        }
        None => {
            tracing::debug!("No profile given, using environment config");
            Ok(Config::new())
        }
    }
}
