use anyhow::Context;
use kanal::AsyncSender;
use lexis_core::state::AppState;
use lexis_core::{EntryResolver, SearchController, Submission};
use lexis_types::AppEvent;

use super::open_word::handle_open_word;

pub async fn handle_search<R: EntryResolver>(
    state: &AppState,
    controller: &mut SearchController<R>,
    text: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    controller.set_input(text);
    app_to_ui_tx.send(AppEvent::ClearError).await?;

    let term = match controller.begin() {
        Ok(term) => term,
        Err(_) => {
            app_to_ui_tx
                .send(AppEvent::ShowError(controller.error().to_string()))
                .await?;
            return Ok(());
        }
    };

    app_to_ui_tx.send(AppEvent::LoadingChanged(true)).await?;
    let result = controller.run(term).await;
    app_to_ui_tx.send(AppEvent::LoadingChanged(false)).await?;

    match result.context("Dictionary lookup is not configured")? {
        Submission::Navigate(navigation) => {
            app_to_ui_tx
                .send(AppEvent::Navigate(navigation.word_path()))
                .await?;

            if state.ui_config().await.open_on_navigate {
                handle_open_word(controller.resolver(), navigation.term.as_str(), app_to_ui_tx)
                    .await?;
            }
        }
        Submission::Failed(kind) => {
            tracing::debug!("Search failed: {:?}", kind);
            app_to_ui_tx
                .send(AppEvent::ShowError(controller.error().to_string()))
                .await?;
        }
    }

    Ok(())
}
