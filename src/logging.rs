//! Tracing setup.
//!
//! The interactive page owns the terminal, so it only logs to a file.
//! Headless runs may also log to stderr when `RUST_LOG` is set.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::{Mutex, Once};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Where log events end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Off,
}

fn log_target<'a>(
    log_file: Option<&'a Path>,
    rust_log: Option<&str>,
    headless: bool,
) -> LogTarget<'a> {
    match (log_file, rust_log) {
        (Some(path), _) => LogTarget::File(path),
        // stderr shares the tty with the alternate screen.
        (None, Some(_)) if headless => LogTarget::Stderr,
        (None, _) => LogTarget::Off,
    }
}

/// Install the global subscriber. Later calls are no-ops.
///
/// With `log_file`, events at `RUST_LOG` level (default `info`) are appended
/// to that file. Without it, headless runs log to stderr if `RUST_LOG` is
/// set and interactive runs log nothing.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_tracing(log_file: Option<&Path>, headless: bool) -> io::Result<()> {
    let env_filter = std::env::var("RUST_LOG").ok();

    match log_target(log_file, env_filter.as_deref(), headless) {
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let filter = env_filter.as_deref().unwrap_or("info");
            INIT.call_once(|| {
                let fmt_layer = tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_names(true)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file));
                let _ = tracing_subscriber::registry()
                    .with(filter_layer(filter))
                    .with(fmt_layer)
                    .try_init();
            });
        }
        LogTarget::Stderr => {
            let filter = env_filter.as_deref().unwrap_or("warn");
            INIT.call_once(|| {
                let fmt_layer = tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .compact()
                    .with_writer(io::stderr);
                let _ = tracing_subscriber::registry()
                    .with(filter_layer(filter))
                    .with(fmt_layer)
                    .try_init();
            });
        }
        LogTarget::Off => {}
    }
    Ok(())
}

fn filter_layer(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_falls_back_on_garbage() {
        let filter = filter_layer("folio=[[[");
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_unopenable_log_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending.
        assert!(init_tracing(Some(dir.path()), false).is_err());
    }

    #[test]
    fn test_interactive_without_log_file_stays_quiet() {
        assert_eq!(log_target(None, Some("debug"), false), LogTarget::Off);
        assert_eq!(log_target(None, Some("debug"), true), LogTarget::Stderr);
        assert_eq!(log_target(None, None, true), LogTarget::Off);

        let path = Path::new("folio.log");
        assert_eq!(log_target(Some(path), None, false), LogTarget::File(path));
        assert_eq!(log_target(Some(path), Some("debug"), true), LogTarget::File(path));
    }
}
