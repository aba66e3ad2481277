use anyhow::Context;
use kanal::AsyncSender;
use lexis_core::{EntryResolver, load_word_view};
use lexis_types::{AppEvent, WordView};

/// Load the `/word/<word>` destination and hand it to the front end
pub async fn handle_open_word<R>(
    resolver: &R,
    word: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()>
where
    R: EntryResolver + ?Sized,
{
    app_to_ui_tx.send(AppEvent::LoadingChanged(true)).await?;
    let view = load_word_view(resolver, word).await;
    app_to_ui_tx.send(AppEvent::LoadingChanged(false)).await?;

    let view = view.context("Dictionary lookup is not configured")?;
    match &view {
        WordView::Entry { word, definitions } => {
            tracing::debug!("Opened '{}' with {} definitions", word, definitions.len())
        }
        WordView::NotFound { word } => tracing::info!("No page for '{}'", word),
        WordView::Unavailable { word } => tracing::warn!("Page for '{}' unavailable", word),
    }

    app_to_ui_tx.send(AppEvent::ShowWord(view)).await?;
    Ok(())
}
