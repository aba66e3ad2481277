use std::io::{BufRead, Write};
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexis_core::state::AppState;
use lexis_types::{AppEvent, WordView};
use tokio_util::sync::CancellationToken;

const HELP: &str = "Type a word to search. Commands: :open <word>, :retry, :help, :q";

/// What a line typed at the prompt asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    Search(String),
    Open(String),
    Help,
    Quit,
    /// A lookup is still running
    Refused,
    /// `:retry` with nothing to retry
    Nothing,
}

/// Terminal rendering of app events plus the little state the prompt needs
pub struct TerminalView {
    prompt: String,
    interactive: bool,
    busy: bool,
    last_unavailable: Option<String>,
}

impl TerminalView {
    pub fn new(prompt: String, interactive: bool) -> Self {
        Self {
            prompt,
            interactive,
            // input stays disabled until the backend reports ready
            busy: true,
            last_unavailable: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Classify one input line; marks the view busy when something is sent
    pub fn parse_input(&mut self, line: &str) -> UserInput {
        let command = line.trim();

        match command {
            ":q" | ":quit" | ":exit" => return UserInput::Quit,
            ":help" | ":h" => return UserInput::Help,
            _ => {}
        }

        if self.busy {
            return UserInput::Refused;
        }

        let input = if command == ":retry" {
            match self.last_unavailable.clone() {
                Some(word) => UserInput::Open(word),
                None => UserInput::Nothing,
            }
        } else if let Some(word) = command.strip_prefix(":open ") {
            UserInput::Open(word.trim().to_string())
        } else {
            // the controller does its own trimming and validation
            UserInput::Search(line.to_string())
        };

        if matches!(input, UserInput::Search(_) | UserInput::Open(_)) {
            self.busy = true;
        }
        input
    }

    /// Lines to print for an event from the app
    pub fn apply(&mut self, event: &AppEvent) -> Vec<String> {
        match event {
            AppEvent::BackendReady => {
                self.busy = false;
                Vec::new()
            }
            AppEvent::LoadingChanged(true) if self.interactive => vec!["Searching...".to_string()],
            AppEvent::LoadingChanged(_) | AppEvent::ClearError => Vec::new(),
            AppEvent::ShowError(message) => vec![format!("error: {message}")],
            AppEvent::Navigate(path) => vec![format!("-> {path}")],
            AppEvent::ShowWord(view) => self.render_word(view),
            AppEvent::SearchSubmitted(_) | AppEvent::OpenWord(_) | AppEvent::Close => {
                Vec::new()
            }
        }
    }

    fn render_word(&mut self, view: &WordView) -> Vec<String> {
        match view {
            WordView::Entry { word, definitions } => {
                self.last_unavailable = None;
                let mut lines = vec![String::new(), word.clone(), String::new()];
                lines.push("Definitions".to_string());
                if definitions.is_empty() {
                    lines.push("  (none)".to_string());
                }
                for (i, definition) in definitions.iter().enumerate() {
                    lines.push(format!("  {}. {}", i + 1, definition));
                }
                lines.push(String::new());
                lines
            }
            WordView::NotFound { word } => {
                self.last_unavailable = None;
                vec![
                    format!("404 Word Not Found: {word}"),
                    "This word doesn't exist in our dictionary. Try searching for a different word."
                        .to_string(),
                ]
            }
            WordView::Unavailable { word } => {
                self.last_unavailable = Some(word.clone());
                vec![
                    "Something went wrong".to_string(),
                    "Unable to load this dictionary entry. The service may be temporarily unavailable."
                        .to_string(),
                    "Type :retry to try again.".to_string(),
                ]
            }
        }
    }
}

/// Read stdin on a plain thread so a blocked read never holds up runtime shutdown
fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (tx, rx) = kanal::bounded::<String>(16);

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
        tracing::debug!("stdin reader stopping");
    });

    rx.to_async()
}

pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn print_lines(lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    if let Err(e) = write_lines(&mut std::io::stdout().lock(), lines) {
        tracing::warn!("Failed to write to stdout: {}", e);
    }
}

fn print_prompt(view: &TerminalView) {
    let mut out = std::io::stdout().lock();
    if let Err(e) = write!(out, "{}", view.prompt()).and_then(|()| out.flush()) {
        tracing::warn!("Failed to write prompt: {}", e);
    }
}

/// Terminal front end
pub async fn ui_loop(
    state: Arc<AppState>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let prompt = state.ui_config().await.prompt;
    let interactive = atty::is(atty::Stream::Stdin);
    let mut view = TerminalView::new(prompt, interactive);
    let lines = spawn_stdin_reader();

    if interactive {
        print_lines(&[HELP.to_string()]);
    }

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Front end stopping");
                break;
            }
            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else {
                    tracing::info!("App channel closed");
                    break;
                };
                print_lines(&view.apply(&event));
                if interactive && matches!(event, AppEvent::BackendReady) {
                    print_prompt(&view);
                }
            }
            // piped input waits for the current lookup instead of being refused
            line = lines.recv(), if interactive || !view.is_busy() => {
                let Ok(line) = line else {
                    tracing::debug!("stdin closed");
                    let _ = ui_to_app_tx.send(AppEvent::Close).await;
                    break;
                };

                match view.parse_input(&line) {
                    UserInput::Search(text) => {
                        ui_to_app_tx.send(AppEvent::SearchSubmitted(text)).await?;
                    }
                    UserInput::Open(word) => {
                        ui_to_app_tx.send(AppEvent::OpenWord(word)).await?;
                    }
                    UserInput::Help => {
                        print_lines(&[HELP.to_string()]);
                        print_prompt(&view);
                    }
                    UserInput::Quit => {
                        let _ = ui_to_app_tx.send(AppEvent::Close).await;
                        break;
                    }
                    UserInput::Refused => print_lines(&["Searching...".to_string()]),
                    UserInput::Nothing => {
                        print_lines(&["Nothing to retry.".to_string()]);
                        print_prompt(&view);
                    }
                }
            }
        }
    }

    Ok(())
}
