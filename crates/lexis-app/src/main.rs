use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use lexis_core::EntryResolver;
use lexis_core::state::AppState;
use lexis_jsonapi::JsonApiResolver;
use tokio::signal;

pub mod cli;
pub mod controller;
pub mod events;
pub mod logging;
pub mod lookup;
pub mod profile;
pub mod ui;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::controller::AppController;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load .env: {e}");
        }
    }

    let cli = Cli::parse();

    let mut config = match profile::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(format) = cli.log_format {
        config.log_format = format.into();
    }

    logging::init(config.log_format, cli.verbose);

    if config.dictionary.base_url.is_none() {
        tracing::warn!("DRUPAL_BASE_URL is not set; lookups will fail");
    }

    let resolver: Arc<dyn EntryResolver> = Arc::new(JsonApiResolver::new(&config.dictionary));

    let result = match cli.command.unwrap_or(Command::Search) {
        Command::Lookup { word } => lookup::run_lookup(resolver, word).await,
        Command::Search => run(Arc::new(AppState::new(config)), resolver).await,
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("lexis: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Interactive session until the front end quits, a task fails, or Ctrl+C
pub async fn run(state: Arc<AppState>, resolver: Arc<dyn EntryResolver>) -> anyhow::Result<ExitCode> {
    let controller = {
        let config = state.config.read().await;
        AppController::new(state.clone(), &config)
    };

    let mut tasks = controller.spawn_tasks(resolver);

    let result = tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            Ok(())
        }
        Some(joined) = tasks.join_next() => {
            match joined {
                Ok(Ok(())) => {
                    tracing::info!("task exited");
                    Ok(())
                }
                Ok(Err(e)) => Err(e),
                Err(e) => {
                    tracing::error!("task panicked: {e}");
                    Err(e.into())
                }
            }
        }
    };

    controller.shutdown();
    tasks.shutdown().await;

    result.map(|()| ExitCode::SUCCESS)
}
