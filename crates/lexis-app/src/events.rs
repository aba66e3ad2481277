use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexis_core::state::AppState;
use lexis_core::{EntryResolver, SearchController};
use lexis_types::AppEvent;

pub mod open_word;
pub mod search;

use open_word::handle_open_word;
use search::handle_search;

/// App's main loop
///
/// Owns the search controller; events are handled one at a time, so a
/// submission arriving mid-lookup waits for the previous one to finish.
/// `BackendReady` is sent at start and after every handled request.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    resolver: Arc<dyn EntryResolver>,
) -> anyhow::Result<()> {
    let mut controller = SearchController::new(resolver.clone());

    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let Ok(event) = ui_to_app_rx.recv().await else {
            tracing::info!("[EVENT_LOOP] Front end channel closed");
            return Ok(());
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );

        match event {
            AppEvent::SearchSubmitted(text) => {
                tracing::debug!("Search submitted: '{}'", text);
                handle_search(&state, &mut controller, text, &app_to_ui_tx).await?;
                app_to_ui_tx.send(AppEvent::BackendReady).await?;
            }
            AppEvent::OpenWord(word) => {
                handle_open_word(resolver.as_ref(), &word, &app_to_ui_tx).await?;
                app_to_ui_tx.send(AppEvent::BackendReady).await?;
            }
            AppEvent::Close => {
                tracing::info!("[EVENT_LOOP] Close requested");
                return Ok(());
            }
            AppEvent::LoadingChanged(_)
            | AppEvent::ShowError(_)
            | AppEvent::ClearError
            | AppEvent::Navigate(_)
            | AppEvent::ShowWord(_)
            | AppEvent::BackendReady => {
                // UI-only events, ignore in backend
            }
        }
    }
}
