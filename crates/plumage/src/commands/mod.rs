//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

use plumage_core::config::Config;
use plumage_core::{Analyzer, Lexicons};

pub mod analyze;
pub mod serve;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Build an analyzer from config-resolved lexicons.
pub fn build_analyzer(config: &Config) -> anyhow::Result<Analyzer> {
    let common = config.common_words.clone().unwrap_or_default();
    let lexicons = Lexicons::with_overrides(&common, config.sentiment_lexicon.as_deref())
        .context("failed to load lexicon overrides")?;
    let analyzer = Analyzer::new(lexicons)
        .with_top_terms(config.top_terms.unwrap_or(plumage_core::DEFAULT_TOP_TERMS));
    Ok(analyzer)
}
