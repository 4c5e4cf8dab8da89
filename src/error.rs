//! Error types.
//!
//! [`ConfigError`] covers everything that can go wrong while constructing a
//! title cycler. [`FolioError`] is the application-level error returned by
//! the binary entry points.

use std::path::PathBuf;
use thiserror::Error;

/// A title cycler could not be constructed.
///
/// All of these are raised at construction time; a cycler that was built
/// successfully never fails afterwards.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The title list was empty.
    #[error("title list is empty: at least one title is required")]
    EmptyTitles,

    /// A per-character delay was negative.
    #[error("{which} delay must not be negative (got {millis} ms)")]
    NegativeDelay {
        /// Which delay was rejected (`type` or `erase`).
        which: &'static str,
        /// The rejected value.
        millis: i64,
    },

    /// A hold duration was zero or negative.
    #[error("hold duration for title {index} must be positive (got {millis} ms)")]
    NonPositiveHold {
        /// Title index the hold belongs to.
        index: usize,
        /// The rejected value.
        millis: i64,
    },

    /// Per-title holds did not line up with the title list.
    #[error("expected {expected} hold durations, got {actual}")]
    HoldCountMismatch {
        /// Number of titles.
        expected: usize,
        /// Number of holds supplied.
        actual: usize,
    },
}

/// Application error.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Cycler configuration was rejected.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The portfolio data file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the data file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The portfolio data file is not valid.
    #[error("invalid portfolio data in {path}: {source}")]
    Data {
        /// Path of the data file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The log file could not be opened.
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        /// Path of the log file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Terminal setup, drawing or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::EmptyTitles.to_string(),
            "title list is empty: at least one title is required"
        );
        let err = ConfigError::NegativeDelay { which: "type", millis: -5 };
        assert_eq!(err.to_string(), "type delay must not be negative (got -5 ms)");
    }

    #[test]
    fn test_config_error_converts() {
        let err: FolioError = ConfigError::EmptyTitles.into();
        assert!(matches!(err, FolioError::Config(ConfigError::EmptyTitles)));
        assert!(err.to_string().starts_with("configuration error:"));
    }
}
