//! Error types for plumage-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while generating a report.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The timeline holds no posts at all. User-facing and non-retryable:
    /// the condition is about the subject's data, not a transient fault.
    #[error("this user hasn't posted anything to analyze")]
    EmptyTimeline,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that can occur when loading lexicon resources from disk.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// A lexicon file could not be read.
    #[error("failed to read lexicon file {path}")]
    Io {
        /// Path of the unreadable file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A sentiment lexicon file was not valid word-to-polarity JSON.
    #[error("invalid sentiment lexicon {path}")]
    Parse {
        /// Path of the malformed file.
        path: Utf8PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias using [`LexiconError`].
pub type LexiconResult<T> = Result<T, LexiconError>;
