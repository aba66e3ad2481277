use std::io::{self, Write};

use lexis_core::FailureKind;
use lexis_types::{AppEvent, WordView};

use crate::lookup::failure_exit_code;
use crate::ui::{TerminalView, UserInput, write_lines};

fn ready_view(interactive: bool) -> TerminalView {
    let mut view = TerminalView::new("word> ".to_string(), interactive);
    view.apply(&AppEvent::BackendReady);
    view
}

#[test]
fn test_input_refused_until_backend_ready() {
    let mut view = TerminalView::new("> ".to_string(), true);
    assert_eq!(view.parse_input("hello"), UserInput::Refused);

    view.apply(&AppEvent::BackendReady);
    assert_eq!(
        view.parse_input("hello"),
        UserInput::Search("hello".to_string())
    );
}

#[test]
fn test_resubmission_refused_while_searching() {
    let mut view = ready_view(true);

    assert_eq!(view.parse_input("one"), UserInput::Search("one".to_string()));
    assert!(view.is_busy());
    assert_eq!(view.parse_input("two"), UserInput::Refused);

    view.apply(&AppEvent::BackendReady);
    assert_eq!(view.parse_input("two"), UserInput::Search("two".to_string()));
}

#[test]
fn test_quit_and_help_always_accepted() {
    let mut view = ready_view(true);
    view.parse_input("busy");

    assert_eq!(view.parse_input(":help"), UserInput::Help);
    assert_eq!(view.parse_input(" :q "), UserInput::Quit);
}

#[test]
fn test_blank_line_is_still_submitted() {
    let mut view = ready_view(true);
    assert_eq!(view.parse_input("  "), UserInput::Search("  ".to_string()));
}

#[test]
fn test_retry_reopens_unavailable_word() {
    let mut view = ready_view(true);
    assert_eq!(view.parse_input(":retry"), UserInput::Nothing);

    view.apply(&AppEvent::ShowWord(WordView::Unavailable {
        word: "hello".to_string(),
    }));
    assert_eq!(
        view.parse_input(":retry"),
        UserInput::Open("hello".to_string())
    );
}

#[test]
fn test_open_command() {
    let mut view = ready_view(false);
    assert_eq!(
        view.parse_input(":open  Hello "),
        UserInput::Open("Hello".to_string())
    );
}

#[test]
fn test_entry_rendering() {
    let mut view = ready_view(false);
    let lines = view.apply(&AppEvent::ShowWord(WordView::Entry {
        word: "hello".to_string(),
        definitions: vec!["A greeting.".to_string(), "Surprise.".to_string()],
    }));

    assert!(lines.contains(&"hello".to_string()));
    assert!(lines.contains(&"  1. A greeting.".to_string()));
    assert!(lines.contains(&"  2. Surprise.".to_string()));
}

#[test]
fn test_error_and_navigation_rendering() {
    let mut view = ready_view(false);

    assert_eq!(
        view.apply(&AppEvent::ShowError("Please enter a word to search".to_string())),
        vec!["error: Please enter a word to search"]
    );
    assert_eq!(
        view.apply(&AppEvent::Navigate("/word/hello".to_string())),
        vec!["-> /word/hello"]
    );
    assert!(view.apply(&AppEvent::LoadingChanged(true)).is_empty());
    assert_eq!(
        ready_view(true).apply(&AppEvent::LoadingChanged(true)),
        vec!["Searching..."]
    );
}

#[test]
fn test_failure_exit_codes_are_distinct() {
    let codes = [
        failure_exit_code(FailureKind::NotFound),
        failure_exit_code(FailureKind::Validation),
        failure_exit_code(FailureKind::Service),
    ];
    assert!(codes.iter().all(|c| *c != 0));
    assert_ne!(codes[0], codes[1]);
    assert_ne!(codes[1], codes[2]);
    assert_ne!(codes[0], codes[2]);
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_lines_reports_broken_pipe() {
    let err = write_lines(&mut ClosedPipe, &["hello".to_string()]).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn test_write_lines_output() {
    let mut out = Vec::new();
    write_lines(&mut out, &["-> /word/hello".to_string(), "done".to_string()]).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "-> /word/hello\ndone\n");
}
