//! Syllable counting for readability scoring.
//!
//! Dictionary lookup over frequent words, with a vowel-group estimation
//! fallback for everything else. The dictionary covers the words where the
//! estimator is known to miss (silent vowels, glided vowel pairs).

use std::collections::HashMap;
use std::sync::LazyLock;

/// Frequent words with known syllable counts.
static KNOWN: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    [
        // One syllable
        ("the", 1),
        ("be", 1),
        ("to", 1),
        ("of", 1),
        ("and", 1),
        ("have", 1),
        ("one", 1),
        ("would", 1),
        ("there", 1),
        ("their", 1),
        ("make", 1),
        ("like", 1),
        ("time", 1),
        ("know", 1),
        ("take", 1),
        ("see", 1),
        ("use", 1),
        ("good", 1),
        ("way", 1),
        ("more", 1),
        ("here", 1),
        ("house", 1),
        ("love", 1),
        ("great", 1),
        ("world", 1),
        ("lived", 1),
        ("once", 1),
        ("please", 1),
        ("thanks", 1),
        ("through", 1),
        ("clothes", 1),
        // Two syllables
        ("people", 2),
        ("into", 2),
        ("other", 2),
        ("because", 2),
        ("over", 2),
        ("only", 2),
        ("being", 2),
        ("very", 2),
        ("really", 2),
        ("today", 2),
        ("morning", 2),
        ("money", 2),
        ("going", 2),
        ("doing", 2),
        ("seeing", 2),
        ("super", 2),
        ("about", 2),
        ("little", 2),
        ("never", 2),
        ("always", 2),
        ("after", 2),
        ("maybe", 2),
        ("something", 2),
        ("even", 2),
        ("video", 2),
        ("photo", 2),
        ("quiet", 2),
        ("table", 2),
        ("real", 2),
        ("poem", 2),
        ("fire", 2),
        ("hour", 2),
        ("science", 2),
        // Three syllables
        ("together", 3),
        ("different", 3),
        ("however", 3),
        ("another", 3),
        ("important", 3),
        ("company", 3),
        ("family", 3),
        ("already", 3),
        ("beautiful", 3),
        ("amazing", 3),
        ("everyone", 3),
        ("favorite", 3),
        ("holiday", 3),
        ("idea", 3),
        ("area", 3),
        ("business", 3),
        ("probably", 3),
        ("actually", 3),
        ("yesterday", 3),
        ("tomorrow", 3),
        ("internet", 3),
        ("media", 3),
        ("social", 3),
        ("excited", 3),
        ("everything", 3),
        // Four or more
        ("everybody", 4),
        ("absolutely", 4),
        ("community", 4),
        ("experience", 4),
        ("technology", 4),
        ("information", 4),
        ("definitely", 4),
        ("immediately", 4),
        ("anniversary", 5),
        ("congratulations", 5),
        ("unfortunately", 5),
        ("opportunity", 5),
    ]
    .into_iter()
    .collect()
});

/// Look up a word's syllable count in the dictionary (case-insensitive).
fn lookup(word: &str) -> Option<usize> {
    KNOWN.get(word.to_lowercase().as_str()).copied()
}

/// Estimate syllables for an unknown word by counting vowel groups.
///
/// Adjusts for silent trailing `e`, consonant + `le` endings, and silent
/// `-ed` endings. Every non-empty word counts as at least one syllable.
pub fn estimate(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }

    let word = word.to_lowercase();
    let chars: Vec<char> = word.chars().collect();
    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut syllables = 0usize;
    let mut previous_was_vowel = false;
    for &c in &chars {
        let vowel = is_vowel(c);
        if vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = vowel;
    }

    // Silent trailing e ("make", "time"), unless preceded by l/d/t/n
    // where the e is often voiced ("able" handled below, "naked", "latte").
    if word.ends_with('e')
        && syllables > 1
        && let Some(&before) = chars.get(chars.len().saturating_sub(2))
        && !matches!(before, 'l' | 'd' | 't' | 'n')
    {
        syllables -= 1;
    }

    // Consonant + "le" endings voice an extra syllable ("table", "little").
    if chars.len() >= 3
        && word.ends_with("le")
        && let Some(&before) = chars.get(chars.len().saturating_sub(3))
        && !is_vowel(before)
    {
        syllables += 1;
    }

    // "-ed" is silent after most consonants ("walked"), voiced after t/d.
    if word.ends_with("ed")
        && syllables > 1
        && let Some(&before) = chars.get(chars.len().saturating_sub(3))
        && !matches!(before, 't' | 'd')
    {
        syllables = syllables.saturating_sub(1);
    }

    syllables.max(1)
}

/// Count syllables for one word: dictionary first, estimation fallback.
pub fn count_word(word: &str) -> usize {
    lookup(word).unwrap_or_else(|| estimate(word))
}

/// Count syllables across a whole text, word by word.
///
/// Non-alphabetic leading/trailing characters are stripped per word; tokens
/// with no alphabetic core contribute nothing.
pub fn count_text(text: &str) -> usize {
    text.split_whitespace()
        .map(|w| {
            let cleaned = w.trim_matches(|c: char| !c.is_alphabetic());
            if cleaned.is_empty() {
                0
            } else {
                count_word(cleaned)
            }
        })
        .sum()
}
