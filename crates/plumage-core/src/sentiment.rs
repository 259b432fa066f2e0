//! Lexicon-based sentiment scoring.
//!
//! Comparative sentiment is the sum of per-word polarities divided by the
//! token count, so long rants and short quips are comparable. Every post
//! contributes to the batch average; a score of 0 is a score, not a gap.

use crate::lexicon::Lexicons;

/// Length-normalized polarity of a tokenized text.
///
/// 0.0 for empty token lists.
pub fn comparative(tokens: &[String], lexicons: &Lexicons) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let sum: i64 = tokens
        .iter()
        .map(|word| i64::from(lexicons.polarity(word)))
        .sum();
    sum as f64 / tokens.len() as f64
}

/// Mean comparative score across a batch; 0.0 for an empty batch.
pub fn average<I>(scores: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let scores: Vec<f64> = scores.into_iter().collect();
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}
