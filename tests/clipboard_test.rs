//! Tests for the command-backed clipboard and the service container
#![cfg(unix)]

use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Output};
use std::sync::{Arc, Mutex};

use ttree::config::Settings;
use ttree::infrastructure::di::ServiceContainer;
use ttree::infrastructure::traits::{Clipboard, CommandRunner, SystemClipboard};

/// Records invocations; programs listed in `available` succeed (or exit
/// with `exit_code`), everything else is NotFound.
struct MockCommandRunner {
    available: Vec<&'static str>,
    exit_code: i32,
    calls: Mutex<Vec<(String, Vec<String>, String)>>,
}

impl MockCommandRunner {
    fn with(available: &[&'static str]) -> Self {
        Self {
            available: available.to_vec(),
            exit_code: 0,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn programs(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(p, _, _)| p.clone())
            .collect()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run_with_stdin(&self, cmd: &str, args: &[&str], stdin: &str) -> io::Result<Output> {
        self.calls.lock().unwrap().push((
            cmd.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
            stdin.to_string(),
        ));
        if !self.available.contains(&cmd) {
            return Err(io::Error::new(io::ErrorKind::NotFound, cmd.to_string()));
        }
        Ok(Output {
            status: ExitStatus::from_raw(self.exit_code << 8),
            stdout: Vec::new(),
            stderr: b"display unavailable\n".to_vec(),
        })
    }
}

#[test]
fn given_configured_command_when_copying_then_pipes_text_with_args() {
    let runner = Arc::new(MockCommandRunner::with(&["xclip"]));
    let clipboard = SystemClipboard::new(runner.clone(), Some("xclip -selection clipboard"));

    clipboard.copy("└── a\n").unwrap();

    let calls = runner.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "xclip");
    assert_eq!(calls[0].1, vec!["-selection", "clipboard"]);
    assert_eq!(calls[0].2, "└── a\n");
}

#[test]
fn given_no_command_when_copying_then_tries_helpers_until_one_found() {
    let runner = Arc::new(MockCommandRunner::with(&["xclip"]));
    let clipboard = SystemClipboard::new(runner.clone(), None);

    clipboard.copy("text").unwrap();

    assert_eq!(runner.programs(), vec!["pbcopy", "wl-copy", "xclip"]);
}

#[test]
fn given_no_helper_installed_when_copying_then_not_found() {
    let runner = Arc::new(MockCommandRunner::with(&[]));
    let clipboard = SystemClipboard::new(runner.clone(), None);

    let err = clipboard.copy("text").unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::NotFound);
    assert_eq!(runner.programs().len(), 5);
}

#[test]
fn given_helper_fails_when_copying_then_error_carries_stderr() {
    let runner = Arc::new(MockCommandRunner {
        exit_code: 1,
        ..MockCommandRunner::with(&["wl-copy"])
    });
    let clipboard = SystemClipboard::new(runner.clone(), None);

    let err = clipboard.copy("text").unwrap_err();

    assert!(err.to_string().contains("display unavailable"), "{}", err);
    assert_eq!(runner.programs(), vec!["pbcopy", "wl-copy"], "stops at first helper present");
}

#[test]
fn given_blank_command_when_copying_then_falls_back_to_probing() {
    let runner = Arc::new(MockCommandRunner::with(&["pbcopy"]));
    let clipboard = SystemClipboard::new(runner.clone(), Some("   "));

    clipboard.copy("text").unwrap();

    assert_eq!(runner.programs(), vec!["pbcopy"]);
}

#[test]
fn given_container_with_mock_runner_when_copying_from_app_then_export_piped() {
    let runner = Arc::new(MockCommandRunner::with(&["pbcopy"]));
    let clipboard = Arc::new(SystemClipboard::new(runner.clone(), None));
    let container = ServiceContainer::with_deps(Settings::default(), runner.clone(), clipboard);
    let mut app = container.app();

    for c in "hi".chars() {
        app.handle_chord(&c.to_string());
    }
    app.handle_chord("ctrl+c");

    assert_eq!(app.message(), Some("Copied to clipboard!"));
    let calls = runner.calls.lock().unwrap();
    assert_eq!(calls.last().unwrap().2, "└── hi\n");
}
