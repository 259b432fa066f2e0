//! Generic occurrence counting.

use std::collections::HashMap;
use std::hash::Hash;

/// Count occurrences of each distinct value, excluding absent ones.
///
/// Equal values accumulate into a single entry; `None` items are skipped
/// entirely rather than counted under a sentinel. No ordering is implied by
/// the returned map.
pub fn count_values<T, I>(values: I) -> HashMap<T, usize>
where
    T: Eq + Hash,
    I: IntoIterator<Item = Option<T>>,
{
    let mut counts = HashMap::new();
    for value in values.into_iter().flatten() {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_distinct_values() {
        let counts = count_values(vec![
            Some("a"),
            Some("a"),
            Some("b"),
            None,
            Some("b"),
            Some("b"),
        ]);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["a"], 2);
        assert_eq!(counts["b"], 3);
    }

    #[test]
    fn empty_input_yields_empty_map() {
        let counts: HashMap<u32, usize> = count_values(Vec::new());
        assert!(counts.is_empty());
    }

    #[test]
    fn all_absent_yields_empty_map() {
        let counts: HashMap<&str, usize> = count_values(vec![None, None]);
        assert!(counts.is_empty());
    }
}
