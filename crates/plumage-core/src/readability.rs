//! Readability scoring using Flesch-Kincaid Grade Level.
//!
//! Formula: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`,
//! clamped to a minimum of 1 (grade levels below 1 are not meaningful).
//!
//! Posts are short, so scores are gated on minimum content: too few words,
//! sentences, or syllables and the post has no defined grade at all. Gated
//! posts are excluded from the batch average rather than counted as zero.

use crate::syllables;
use crate::text;

/// Minimum word count for a defined grade.
const MIN_WORDS: usize = 2;
/// Minimum sentence count for a defined grade.
const MIN_SENTENCES: usize = 1;
/// Minimum syllable count for a defined grade.
const MIN_SYLLABLES: usize = 5;

/// Grade one post's stripped body.
///
/// `stripped` is the entity-stripped text; `tokens` its word tokens (already
/// computed by the caller, usually via the token cache). Returns `None` when
/// the post fails the minimum-content gate.
pub fn grade_post(stripped: &str, tokens: &[String]) -> Option<f64> {
    let words = tokens.len();
    let sentences = text::split_sentences(stripped).len();
    let syllables = syllables::count_text(stripped);

    if words < MIN_WORDS || sentences < MIN_SENTENCES || syllables < MIN_SYLLABLES {
        return None;
    }

    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    let grade = 0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59;

    Some(grade.max(1.0))
}

/// Mean of the defined grades, rounded to the nearest integer.
///
/// `None` when no post in the batch yielded a defined grade; the field is
/// undefined, not zero.
pub fn average_grade<I>(grades: I) -> Option<u32>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let defined: Vec<f64> = grades.into_iter().flatten().collect();
    if defined.is_empty() {
        return None;
    }
    let mean = defined.iter().sum::<f64>() / defined.len() as f64;
    Some(mean.round() as u32)
}
