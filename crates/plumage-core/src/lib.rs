//! Core analytics engine for plumage.
//!
//! Takes a reverse-chronological slice of one user's posts and produces a
//! structured report: activity and engagement graphs, term-frequency
//! rankings, a readability grade, and aggregate sentiment. Everything here
//! is a pure, deterministic transformation over in-memory data; fetching
//! timelines and serving reports live in the `plumage` binary crate.
//!
//! # Modules
//!
//! - [`timeline`] - Post, author, and entity data model
//! - [`report`] - The analyzer and assembled report
//! - [`graph`] - Activity, engagement, and term-usage time series
//! - [`rank`] - Top-term ranking
//! - [`text`] - Entity stripping, tokenization, sentence splitting
//! - [`readability`] / [`sentiment`] / [`syllables`] - Per-post scoring
//! - [`lexicon`] - Injected common-word and sentiment resources
//! - [`memo`] - Memoization for repeated tokenization
//! - [`config`] / [`error`] - Configuration and error types
//!
//! # Quick Start
//!
//! ```
//! use plumage_core::{Analyzer, Lexicons};
//!
//! let analyzer = Analyzer::new(Lexicons::builtin());
//! let posts = Vec::new();
//! // An empty timeline is the one unconditional failure.
//! assert!(analyzer.generate_report(&posts).is_err());
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod freq;
pub mod graph;
pub mod lexicon;
pub mod memo;
pub mod rank;
pub mod readability;
pub mod report;
pub mod sentiment;
pub mod syllables;
pub mod text;
pub mod timeline;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use lexicon::Lexicons;
pub use memo::{MemoCache, TokenCache};
pub use report::{Analyzer, Report};
pub use timeline::Post;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Default series limit for term rankings.
pub const DEFAULT_TOP_TERMS: usize = 5;

/// Default port for `plumage serve`.
pub const DEFAULT_PORT: u16 = 8017;
