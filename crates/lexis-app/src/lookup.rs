use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use lexis_core::{EntryResolver, FailureKind, SearchController, Submission, load_word_view};
use lexis_types::{AppEvent, WordView};

use crate::ui::TerminalView;

/// Exit status for a failed one-shot lookup
pub fn failure_exit_code(kind: FailureKind) -> u8 {
    match kind {
        FailureKind::NotFound => 1,
        FailureKind::Validation => 2,
        FailureKind::Service => 3,
    }
}

/// One-shot `lexis lookup <word>`
pub async fn run_lookup(resolver: Arc<dyn EntryResolver>, word: String) -> anyhow::Result<ExitCode> {
    let mut controller = SearchController::new(resolver.clone());
    controller.set_input(word);

    let submission = controller
        .submit()
        .await
        .context("Dictionary lookup is not configured")?;

    match submission {
        Submission::Navigate(navigation) => {
            tracing::info!("Navigating to {}", navigation.word_path());

            let view = load_word_view(resolver.as_ref(), navigation.term.as_str())
                .await
                .context("Dictionary lookup is not configured")?;
            let unavailable = matches!(view, WordView::Unavailable { .. });

            let mut terminal = TerminalView::new(String::new(), false);
            for line in terminal.apply(&AppEvent::ShowWord(view)) {
                println!("{line}");
            }

            if unavailable {
                Ok(ExitCode::from(failure_exit_code(FailureKind::Service)))
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        Submission::Failed(kind) => {
            eprintln!("{}", controller.error());
            Ok(ExitCode::from(failure_exit_code(kind)))
        }
    }
}
