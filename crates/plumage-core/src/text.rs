//! Text normalization.
//!
//! Post bodies arrive with URLs, `@mentions`, and `#hashtags` inline. The
//! scoring paths (readability, sentiment, significant-word ranking) work on
//! stripped prose; the entity-ranking paths read the structured entity lists
//! instead and never touch the stripped form.
//!
//! Word tokenization is the hot repeated step: it runs once per distinct
//! post body across several analyses, so callers route it through a
//! [`crate::memo::TokenCache`] keyed on the input text.

use regex::Regex;
use std::sync::LazyLock;

use crate::lexicon::Lexicons;

/// Regex for URLs, tolerant of a missing scheme or path.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://\S+|www\.\S+|\b[a-z0-9][a-z0-9-]*\.[a-z]{2,4}/\S*)")
        .expect("valid url regex")
});

/// Regex for `@mention` tokens.
static MENTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").expect("valid mention regex"));

/// Regex for `#hashtag` tokens.
static HASHTAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("valid hashtag regex"));

/// Words before a period that usually do not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co", "corp",
    "approx", "dept", "est", "fig",
];

/// Strip URLs, mentions, and hashtags from a post body.
///
/// Matched spans are removed outright; surrounding whitespace is left as-is.
pub fn strip_entities(text: &str) -> String {
    let text = URL_PATTERN.replace_all(text, "");
    let text = MENTION_PATTERN.replace_all(&text, "");
    HASHTAG_PATTERN.replace_all(&text, "").into_owned()
}

/// Tokenize text into words.
///
/// Splits on whitespace, strips surrounding punctuation, and discards
/// non-word tokens and contraction fragments (anything still carrying an
/// apostrophe). Original casing is preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-'))
        .filter(|w| !w.is_empty())
        .filter(|w| !w.contains('\''))
        .filter(|w| w.chars().any(char::is_alphabetic))
        .map(ToString::to_string)
        .collect()
}

/// Filter tokens down to significant vocabulary.
///
/// Drops words on the common-word list (compared case-insensitively) while
/// preserving each surviving word's original casing.
pub fn significant_words(tokens: &[String], lexicons: &Lexicons) -> Vec<String> {
    tokens
        .iter()
        .filter(|w| !lexicons.is_common(w))
        .cloned()
        .collect()
}

/// Split text into sentences with abbreviation and decimal awareness.
///
/// Character scan with context checks at each terminator; fragments shorter
/// than three characters are discarded as noise.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let min_length = 3;
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        current.push(ch);

        if matches!(ch, '.' | '!' | '?') && is_boundary(&chars, i, &current) {
            let sentence = current.trim().to_string();
            if sentence.len() >= min_length {
                sentences.push(sentence);
            }
            current.clear();
        }
    }

    let sentence = current.trim().to_string();
    if sentence.len() >= min_length {
        sentences.push(sentence);
    }

    sentences
}

/// Decide whether the terminator at `pos` ends a sentence.
fn is_boundary(chars: &[char], pos: usize, current: &str) -> bool {
    let next = chars[pos + 1..].iter().find(|c| !c.is_whitespace());

    // End of text always closes the sentence.
    let Some(&next) = next else {
        return true;
    };

    if chars[pos] == '!' || chars[pos] == '?' {
        return !next.is_lowercase();
    }

    // Period heuristics
    if current.ends_with("...") || current.ends_with('…') {
        return false;
    }
    let before = word_before(chars, pos);
    if is_abbreviation(&before) {
        return false;
    }
    // Decimal numbers: digit on both sides of the period.
    if next.is_ascii_digit() && before.chars().last().is_some_and(|c| c.is_ascii_digit()) {
        return false;
    }

    !next.is_lowercase()
}

/// The word immediately preceding the terminator at `pos`.
fn word_before(chars: &[char], pos: usize) -> String {
    let mut start = pos;
    while start > 0 && (chars[start - 1].is_alphanumeric() || chars[start - 1] == '.') {
        start -= 1;
    }
    chars[start..pos].iter().collect()
}

fn is_abbreviation(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let clean = word.trim_end_matches('.');
    if ABBREVIATIONS.contains(&clean.to_lowercase().as_str()) {
        return true;
    }
    // Single capital = initial (J. K. Rowling)
    clean.len() == 1 && clean.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_all_entity_kinds() {
        let stripped = strip_entities("Check this out @bob #fun http://x.co");
        assert_eq!(stripped, "Check this out   ");
    }

    #[test]
    fn strips_schemeless_urls() {
        let stripped = strip_entities("see www.example.org and t.co/abc123");
        assert!(!stripped.contains("www"));
        assert!(!stripped.contains("t.co"));
    }

    #[test]
    fn plain_prose_survives_stripping() {
        assert_eq!(strip_entities("nothing special here."), "nothing special here.");
    }

    #[test]
    fn tokenize_keeps_case_and_drops_punctuation() {
        let tokens = tokenize("Hello, World! This is GREAT.");
        assert_eq!(tokens, vec!["Hello", "World", "This", "is", "GREAT"]);
    }

    #[test]
    fn tokenize_discards_contraction_fragments() {
        let tokens = tokenize("don't can't we will");
        assert_eq!(tokens, vec!["we", "will"]);
    }

    #[test]
    fn tokenize_discards_non_word_tokens() {
        let tokens = tokenize("wow 100% — cool 42");
        assert_eq!(tokens, vec!["wow", "cool"]);
    }

    #[test]
    fn significant_words_filter_is_case_insensitive() {
        let lexicons = Lexicons::with_common_words(["the", "a"]);
        let tokens = tokenize("The quick fox");
        let words = significant_words(&tokens, &lexicons);
        assert_eq!(words, vec!["quick", "fox"]);
    }

    #[test]
    fn basic_sentence_split() {
        let sentences = split_sentences("This is one. This is two.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "This is one.");
    }

    #[test]
    fn abbreviations_do_not_split() {
        let sentences = split_sentences("Dr. Smith arrived. He sat down.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("Dr. Smith"));
    }

    #[test]
    fn decimals_do_not_split() {
        let sentences = split_sentences("It costs 3.50 today. Cheap.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("3.50"));
    }

    #[test]
    fn exclamations_and_questions_split() {
        let sentences = split_sentences("Really? Yes! Good.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn empty_input_has_no_sentences() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }
}
