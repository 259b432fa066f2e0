//! Top-term ranking.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::freq::count_values;
use crate::timeline::Post;

/// A term with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TermCount {
    /// The ranked term.
    pub term: String,
    /// How many times the term occurred across the timeline.
    pub occurrences: usize,
}

/// Rank the most frequent terms a rule extracts from a timeline.
///
/// Applies `rule` to every post, counts the flattened multiset, and returns
/// the `limit` highest counts. Tie-break: equal counts keep first-appearance
/// order in the extraction sequence, so rankings are deterministic and
/// reproducible.
pub fn top_terms<F>(posts: &[Post], rule: F, limit: usize) -> Vec<TermCount>
where
    F: Fn(&Post) -> Vec<String>,
{
    let extracted: Vec<String> = posts.iter().flat_map(|post| rule(post)).collect();

    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (i, term) in extracted.iter().enumerate() {
        first_seen.entry(term.as_str()).or_insert(i);
    }

    let counts = count_values(extracted.iter().map(|t| Some(t.as_str())));
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| first_seen[a.0].cmp(&first_seen[b.0]))
    });
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(term, occurrences)| TermCount {
            term: term.to_string(),
            occurrences,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::{Author, Entities, PostText};

    fn post(hashtags: &[&str]) -> Post {
        Post {
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            text: PostText::Truncated {
                text: String::new(),
            },
            author: Author {
                name: "A".to_string(),
                handle: "a".to_string(),
                followers_count: 0,
                following_count: 0,
                avatar_url: String::new(),
                verified: false,
                bio: None,
                location: None,
                url: None,
                created_at: "2020-01-01T00:00:00Z".parse().unwrap(),
            },
            entities: Entities {
                hashtags: hashtags
                    .iter()
                    .map(|t| crate::timeline::Hashtag {
                        text: (*t).to_string(),
                    })
                    .collect(),
                mentions: Vec::new(),
                urls: Vec::new(),
            },
            reshare_of: None,
            favorite_count: 0,
            reshare_count: 0,
        }
    }

    fn hashtag_rule(p: &Post) -> Vec<String> {
        p.entities
            .hashtags
            .iter()
            .map(|h| format!("#{}", h.text))
            .collect()
    }

    #[test]
    fn ranks_by_count_descending() {
        let posts = vec![
            post(&["a", "b"]),
            post(&["a", "b"]),
            post(&["a", "c"]),
        ];
        let top = top_terms(&posts, hashtag_rule, 5);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0], TermCount { term: "#a".to_string(), occurrences: 3 });
        assert_eq!(top[1], TermCount { term: "#b".to_string(), occurrences: 2 });
        assert_eq!(top[2], TermCount { term: "#c".to_string(), occurrences: 1 });
    }

    #[test]
    fn limit_truncates_low_counts() {
        let posts = vec![
            post(&["a"]),
            post(&["a", "b"]),
            post(&["a", "b", "c"]),
        ];
        let top = top_terms(&posts, hashtag_rule, 2);
        assert_eq!(top.len(), 2);
        assert!(top.iter().all(|t| t.term != "#c"));
    }

    #[test]
    fn equal_counts_keep_first_seen_order() {
        // #b first appears before #a does, so it ranks first on the tie.
        let posts = vec![post(&["b", "a"]), post(&["a", "b"]), post(&["c"])];
        let top = top_terms(&posts, hashtag_rule, 2);
        assert_eq!(top[0].term, "#b");
        assert_eq!(top[1].term, "#a");
        assert_eq!(top[0].occurrences, 2);
        assert_eq!(top[1].occurrences, 2);
    }

    #[test]
    fn fewer_terms_than_limit() {
        let posts = vec![post(&["solo"])];
        let top = top_terms(&posts, hashtag_rule, 5);
        assert_eq!(top.len(), 1);
    }

    #[test]
    fn no_terms_yields_empty_ranking() {
        let posts = vec![post(&[])];
        assert!(top_terms(&posts, hashtag_rule, 5).is_empty());
    }
}
