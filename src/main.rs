use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};
use ttree::cli::output;
use ttree::cli::{execute_command, Cli, Commands};
use ttree::config::default_log_path;

fn main() {
    let cli = Cli::parse();

    let owns_terminal = matches!(cli.command, None | Some(Commands::Edit));
    let log_file = log_destination(cli.log_file.as_deref(), owns_terminal, default_log_path());
    setup_logging(cli.debug, log_file.as_deref(), owns_terminal);

    if let Err(e) = execute_command(&cli) {
        output::error(&e);
        std::process::exit(e.exit_code());
    }
}

/// Where logs go: the explicit file, else the cache file while the editor
/// owns the terminal, else stderr (`None`).
fn log_destination(
    explicit: Option<&Path>,
    owns_terminal: bool,
    fallback: Option<PathBuf>,
) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None if owns_terminal => fallback,
        None => None,
    }
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    File::create(path)
}

fn setup_logging(verbosity: u8, log_file: Option<&Path>, owns_terminal: bool) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            output::warning("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // stderr shares the tty with the alternate screen, so the editor never logs there
    let writer = match log_file.map(|p| (p, open_log_file(p))) {
        Some((_, Ok(file))) => BoxMakeWriter::new(Mutex::new(file)),
        Some((path, Err(e))) => {
            output::warning(&format!("cannot open log file {}: {}", path.display(), e));
            if owns_terminal {
                BoxMakeWriter::new(std::io::sink)
            } else {
                BoxMakeWriter::new(std::io::stderr)
            }
        }
        None if owns_terminal => BoxMakeWriter::new(std::io::sink),
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(log_file.is_none() && !owns_terminal)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttree::util::testing;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        testing::init_test_setup();
        Cli::command().debug_assert();
    }

    #[test]
    fn given_editor_without_log_file_when_routing_logs_then_uses_cache_file() {
        let cache = PathBuf::from("/cache/ttree/ttree.log");

        let dest = log_destination(None, true, Some(cache.clone()));

        assert_eq!(dest, Some(cache));
    }

    #[test]
    fn given_explicit_log_file_when_routing_logs_then_wins() {
        let explicit = Path::new("/tmp/explicit.log");

        let dest = log_destination(Some(explicit), true, Some(PathBuf::from("/cache/ttree.log")));

        assert_eq!(dest.as_deref(), Some(explicit));
    }

    #[test]
    fn given_non_interactive_command_when_routing_logs_then_stderr() {
        assert_eq!(log_destination(None, false, Some(PathBuf::from("/cache/ttree.log"))), None);
    }

    #[test]
    fn given_missing_log_dir_when_opening_then_created() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("ttree.log");

        open_log_file(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn given_repeated_debug_flag_when_parsing_then_counts_verbosity() {
        let cli = Cli::parse_from(["ttree", "-dd", "--print"]);
        assert_eq!(cli.debug, 2);
        assert!(cli.print);
        assert!(cli.command.is_none());
    }
}
