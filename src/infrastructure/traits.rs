//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing the editor
//! to be tested with mock implementations.

use std::io;
use std::process::Output;
use std::sync::Arc;

use tracing::{debug, instrument};

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run a command, feeding `stdin` to its standard input.
    fn run_with_stdin(&self, cmd: &str, args: &[&str], stdin: &str) -> io::Result<Output>;
}

/// Real command runner using std::process.
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run_with_stdin(&self, cmd: &str, args: &[&str], stdin: &str) -> io::Result<Output> {
        use std::io::Write;
        use std::process::Stdio;

        let mut child = std::process::Command::new(cmd)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut child_stdin) = child.stdin.take() {
            child_stdin.write_all(stdin.as_bytes())?;
        }

        child.wait_with_output()
    }
}

/// System clipboard abstraction.
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard content with `text`.
    fn copy(&self, text: &str) -> io::Result<()>;
}

/// Clipboard helpers tried in order when no command is configured.
pub const CLIPBOARD_CANDIDATES: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["clip.exe"],
];

/// Clipboard backed by an external helper program reading stdin.
pub struct SystemClipboard {
    cmd: Arc<dyn CommandRunner>,
    command: Option<Vec<String>>,
}

impl SystemClipboard {
    /// `command` is a whitespace-separated program and arguments; `None`
    /// tries each of [`CLIPBOARD_CANDIDATES`] in order.
    pub fn new(cmd: Arc<dyn CommandRunner>, command: Option<&str>) -> Self {
        let command = command
            .map(|c| c.split_whitespace().map(String::from).collect::<Vec<_>>())
            .filter(|parts| !parts.is_empty());
        Self { cmd, command }
    }

    fn pipe(&self, parts: &[&str], text: &str) -> io::Result<()> {
        let (program, args) = parts
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty clipboard command"))?;
        let output = self.cmd.run_with_stdin(program, args, text)?;
        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{} exited with {}: {}", program, output.status, stderr.trim()),
            ))
        }
    }
}

impl Clipboard for SystemClipboard {
    #[instrument(level = "debug", skip(self, text))]
    fn copy(&self, text: &str) -> io::Result<()> {
        if let Some(parts) = &self.command {
            let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
            return self.pipe(&parts, text);
        }

        for candidate in CLIPBOARD_CANDIDATES {
            match self.pipe(candidate, text) {
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!("clipboard helper {} not available", candidate[0]);
                }
                result => return result,
            }
        }
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            "no clipboard helper found (pbcopy, wl-copy, xclip, xsel, clip.exe)",
        ))
    }
}
