//! Lexicon resources: common-word lists and the sentiment lexicon.
//!
//! Built-in data is embedded at compile time and merged once at
//! construction. The resulting [`Lexicons`] value is immutable and injected
//! into whatever needs it; there is no module-level singleton, so tests can
//! run against tiny purpose-built lexicons.

use std::collections::{HashMap, HashSet};

use camino::Utf8Path;
use serde_json::Value;

use crate::error::{LexiconError, LexiconResult};

/// Built-in common-word sources, one word per line, merged at load.
const COMMON_WORD_SOURCES: &[&str] = &[
    include_str!("../resources/stopwords-english.txt"),
    include_str!("../resources/stopwords-social.txt"),
];

/// Built-in AFINN-style sentiment lexicon (word → integer polarity).
const SENTIMENT_SOURCE: &str = include_str!("../resources/sentiment-lexicon.json");

/// Immutable lexicon bundle consumed by the normalizer and scorers.
#[derive(Debug, Clone)]
pub struct Lexicons {
    common_words: HashSet<String>,
    sentiment: HashMap<String, i32>,
}

impl Lexicons {
    /// Build from the embedded resources.
    pub fn builtin() -> Self {
        let common_words = COMMON_WORD_SOURCES
            .iter()
            .flat_map(|src| parse_word_list(src))
            .collect();
        let sentiment =
            parse_sentiment(SENTIMENT_SOURCE).expect("embedded sentiment lexicon is valid JSON");
        Self {
            common_words,
            sentiment,
        }
    }

    /// Replace the common-word list, keeping the current sentiment lexicon.
    pub fn with_common_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lexicons = Self::builtin();
        lexicons.common_words = words
            .into_iter()
            .map(|w| w.into().to_lowercase())
            .collect();
        lexicons
    }

    /// Replace the sentiment lexicon, keeping the current common-word list.
    pub fn with_sentiment<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        let mut lexicons = Self::builtin();
        lexicons.sentiment = entries
            .into_iter()
            .map(|(w, score)| (w.into().to_lowercase(), score))
            .collect();
        lexicons
    }

    /// Build from the embedded resources with optional file overrides.
    ///
    /// When `common_words` paths are given they replace the built-in lists
    /// (multiple files merge); a `sentiment` path replaces the built-in
    /// lexicon wholesale.
    pub fn with_overrides(
        common_words: &[impl AsRef<Utf8Path>],
        sentiment: Option<&Utf8Path>,
    ) -> LexiconResult<Self> {
        let mut lexicons = Self::builtin();

        if !common_words.is_empty() {
            let mut merged = HashSet::new();
            for path in common_words {
                let path = path.as_ref();
                let content = read_file(path)?;
                merged.extend(parse_word_list(&content));
            }
            lexicons.common_words = merged;
        }

        if let Some(path) = sentiment {
            let content = read_file(path)?;
            lexicons.sentiment = parse_sentiment(&content).map_err(|source| {
                LexiconError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        }

        Ok(lexicons)
    }

    /// Whether a word is on the common-word list (case-insensitive).
    pub fn is_common(&self, word: &str) -> bool {
        self.common_words.contains(word.to_lowercase().as_str())
    }

    /// Polarity of a word per the sentiment lexicon; 0 when unlisted.
    pub fn polarity(&self, word: &str) -> i32 {
        self.sentiment
            .get(word.to_lowercase().as_str())
            .copied()
            .unwrap_or(0)
    }

    /// Number of words on the common-word list.
    pub fn common_word_count(&self) -> usize {
        self.common_words.len()
    }

    /// Number of entries in the sentiment lexicon.
    pub fn sentiment_entry_count(&self) -> usize {
        self.sentiment.len()
    }
}

/// Parse a one-word-per-line list; blank lines and `#` comments are skipped.
fn parse_word_list(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
}

/// Parse a word-to-polarity JSON object.
fn parse_sentiment(content: &str) -> Result<HashMap<String, i32>, serde_json::Error> {
    let value: HashMap<String, Value> = serde_json::from_str(content)?;
    Ok(value
        .into_iter()
        .filter_map(|(word, v)| v.as_i64().map(|score| (word.to_lowercase(), score as i32)))
        .collect())
}

fn read_file(path: &Utf8Path) -> LexiconResult<String> {
    std::fs::read_to_string(path.as_std_path()).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn builtin_lexicons_load() {
        let lexicons = Lexicons::builtin();
        assert!(lexicons.common_word_count() > 100);
        assert!(lexicons.sentiment_entry_count() > 200);
    }

    #[test]
    fn common_word_lookup_ignores_case() {
        let lexicons = Lexicons::builtin();
        assert!(lexicons.is_common("The"));
        assert!(lexicons.is_common("AND"));
        assert!(!lexicons.is_common("nightingale"));
    }

    #[test]
    fn multiple_builtin_sources_merge() {
        let lexicons = Lexicons::builtin();
        // One word from each source file.
        assert!(lexicons.is_common("the"));
        assert!(lexicons.is_common("rt"));
    }

    #[test]
    fn polarity_defaults_to_zero() {
        let lexicons = Lexicons::builtin();
        assert!(lexicons.polarity("love") > 0);
        assert!(lexicons.polarity("terrible") < 0);
        assert_eq!(lexicons.polarity("chair"), 0);
    }

    #[test]
    fn injected_common_words_replace_builtin() {
        let lexicons = Lexicons::with_common_words(["Foo"]);
        assert!(lexicons.is_common("foo"));
        assert!(!lexicons.is_common("the"));
    }

    #[test]
    fn file_overrides_replace_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let words = dir.path().join("words.txt");
        std::fs::write(&words, "# comment\nalpha\nBeta\n\n").unwrap();
        let lex = dir.path().join("lex.json");
        std::fs::write(&lex, r#"{"up": 2, "down": -2}"#).unwrap();

        let words = Utf8PathBuf::try_from(words).unwrap();
        let lex = Utf8PathBuf::try_from(lex).unwrap();

        let lexicons = Lexicons::with_overrides(&[&words], Some(&lex)).unwrap();
        assert!(lexicons.is_common("beta"));
        assert!(!lexicons.is_common("the"));
        assert_eq!(lexicons.polarity("up"), 2);
        assert_eq!(lexicons.polarity("love"), 0);
    }

    #[test]
    fn missing_override_file_errors() {
        let missing = Utf8PathBuf::from("/nonexistent/words.txt");
        let result = Lexicons::with_overrides(&[&missing], None);
        assert!(result.is_err());
    }
}
