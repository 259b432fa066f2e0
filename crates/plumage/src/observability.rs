//! Logging and tracing initialization.
//!
//! Always logs human-readable output to stderr, filtered by `RUST_LOG` or
//! the CLI's quiet/verbose flags. When a log directory is configured, a
//! second JSONL layer writes daily-rotated files through a non-blocking
//! appender; the returned guard must stay alive for the process lifetime.

use camino::Utf8Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Build the stderr filter from CLI flags and the configured level.
///
/// `RUST_LOG` wins when set; otherwise quiet forces `error`, each `-v` steps
/// the level up, and the config level is the fallback.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Initialize the global subscriber.
///
/// Returns the file appender's guard when file logging is active; dropping
/// it flushes and stops the background writer.
pub fn init(log_dir: Option<&Utf8Path>, filter: EnvFilter) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir.as_std_path())?;
            let appender = tracing_appender::rolling::daily(dir.as_std_path(), "plumage.jsonl");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false);

            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer.boxed())
                .init();
            Ok(None)
        }
    }
}
