//! Report assembly.
//!
//! [`Analyzer`] owns the injected lexicons and the token cache, and wires
//! the leaf analyses into the final [`Report`]. All the business rules for
//! which metric, term rule, and series limit feed each field live here, and
//! nothing else does: the assembler implements no algorithm of its own.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalysisError, AnalysisResult};
use crate::graph::{self, GraphPoint, TermSeries};
use crate::lexicon::Lexicons;
use crate::memo::TokenCache;
use crate::readability;
use crate::sentiment;
use crate::text;
use crate::timeline::Post;
use crate::DEFAULT_TOP_TERMS;

/// Subject profile, derived from the newest post's embedded author record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Account handle.
    pub handle: String,
    /// Follower count.
    pub followers: u64,
    /// Following count.
    pub following: u64,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Whether the account is verified.
    pub verified: bool,
    /// Profile bio, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Free-form location, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// External profile URL, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Calendar year the account was created.
    pub year_joined: i32,
}

/// A labeled per-post series (engagement metrics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LabeledSeries {
    /// Series label, e.g. "Likes".
    pub label: String,
    /// One point per post, in timeline order.
    pub points: Vec<GraphPoint>,
}

/// The assembled analytics report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Report {
    /// Subject profile.
    pub profile: Profile,
    /// Posts-per-month activity buckets.
    pub posts_per_month: Vec<GraphPoint>,
    /// Engagement series: "Likes" and "Retweets", one point per post.
    pub engagement: Vec<LabeledSeries>,
    /// Cumulative usage curves for the top hashtags.
    pub top_hashtags: Vec<TermSeries>,
    /// Cumulative usage curves for the top mentioned accounts.
    pub top_mentions: Vec<TermSeries>,
    /// Cumulative usage curves for the accounts most reshared from.
    pub top_reshared: Vec<TermSeries>,
    /// Cumulative usage curves for the top significant words.
    pub top_words: Vec<TermSeries>,
    /// Mean character length of post bodies, rounded.
    pub avg_post_length: u64,
    /// Mean Flesch-Kincaid grade of scoreable posts, rounded.
    ///
    /// Omitted when no post passes the minimum-content gate: a timeline of
    /// one-word posts has no defined grade, not a grade of zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_grade_level: Option<u32>,
    /// Mean comparative sentiment, two decimal places.
    pub avg_sentiment: f64,
    /// Mean entity count per post, two decimal places.
    pub avg_entities_per_post: f64,
}

/// The analytics engine: injected lexicons plus a process-lifetime token
/// cache, shared freely across report generations.
#[derive(Debug)]
pub struct Analyzer {
    lexicons: Lexicons,
    cache: TokenCache,
    top_terms: usize,
}

impl Analyzer {
    /// Build an analyzer around the given lexicons.
    pub fn new(lexicons: Lexicons) -> Self {
        Self {
            lexicons,
            cache: TokenCache::new(),
            top_terms: DEFAULT_TOP_TERMS,
        }
    }

    /// Override the per-ranking series limit (default 5).
    pub const fn with_top_terms(mut self, limit: usize) -> Self {
        self.top_terms = limit;
        self
    }

    /// The token cache, exposed for tests and diagnostics.
    pub const fn cache(&self) -> &TokenCache {
        &self.cache
    }

    /// Generate the full report for a reverse-chronological timeline.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::EmptyTimeline`] when `posts` is empty.
    pub fn generate_report(&self, posts: &[Post]) -> AnalysisResult<Report> {
        let Some(newest) = posts.first() else {
            return Err(AnalysisError::EmptyTimeline);
        };
        debug!(posts = posts.len(), "generating report");

        let author = &newest.author;
        let profile = Profile {
            name: author.name.clone(),
            handle: author.handle.clone(),
            followers: author.followers_count,
            following: author.following_count,
            avatar_url: author.avatar_url.clone(),
            verified: author.verified,
            bio: author.bio.clone(),
            location: author.location.clone(),
            url: author.url.clone(),
            year_joined: author.year_joined(),
        };

        let engagement = vec![
            LabeledSeries {
                label: "Likes".to_string(),
                // Reshares show the origin post's likes, not the wrapper's.
                points: graph::per_post(posts, |p| p.origin().favorite_count as f64),
            },
            LabeledSeries {
                label: "Retweets".to_string(),
                points: graph::per_post(posts, |p| p.reshare_count as f64),
            },
        ];

        let top_hashtags = graph::cumulative_term_usage(posts, hashtag_terms, self.top_terms);
        let top_mentions = graph::cumulative_term_usage(posts, mention_terms, self.top_terms);
        let top_reshared = graph::cumulative_term_usage(posts, reshared_terms, self.top_terms);
        let top_words =
            graph::cumulative_term_usage(posts, |p| self.word_terms(p), self.top_terms);

        // Per-post scalars over origin-resolved, entity-stripped prose.
        let mut lengths = Vec::with_capacity(posts.len());
        let mut grades = Vec::with_capacity(posts.len());
        let mut sentiments = Vec::with_capacity(posts.len());
        let mut entity_counts = Vec::with_capacity(posts.len());
        for post in posts {
            let body = post.effective_text();
            lengths.push(body.chars().count());
            entity_counts.push(post.entities.len());

            let stripped = text::strip_entities(body);
            let tokens = self.tokens(&stripped);
            grades.push(readability::grade_post(&stripped, &tokens));
            sentiments.push(sentiment::comparative(&tokens, &self.lexicons));
        }

        let avg_post_length = mean(&lengths).round() as u64;
        let reading_grade_level = readability::average_grade(grades);
        let avg_sentiment = round2(sentiment::average(sentiments));
        let avg_entities_per_post = round2(mean(&entity_counts));

        Ok(Report {
            profile,
            posts_per_month: graph::monthly_activity(posts),
            engagement,
            top_hashtags,
            top_mentions,
            top_reshared,
            top_words,
            avg_post_length,
            reading_grade_level,
            avg_sentiment,
            avg_entities_per_post,
        })
    }

    /// Memoized tokenization, keyed on the stripped body text.
    fn tokens(&self, stripped: &str) -> Arc<Vec<String>> {
        self.cache
            .get_or_compute(stripped, || text::tokenize(stripped))
    }

    /// Significant-word extraction rule for one post.
    fn word_terms(&self, post: &Post) -> Vec<String> {
        let stripped = text::strip_entities(post.effective_text());
        let tokens = self.tokens(&stripped);
        text::significant_words(&tokens, &self.lexicons)
    }
}

/// Hashtag extraction rule: `#` + entity text, case preserved.
fn hashtag_terms(post: &Post) -> Vec<String> {
    post.entities
        .hashtags
        .iter()
        .map(|h| format!("#{}", h.text))
        .collect()
}

/// Mention extraction rule: `@` + mentioned handle.
fn mention_terms(post: &Post) -> Vec<String> {
    post.entities
        .mentions
        .iter()
        .map(|m| format!("@{}", m.handle))
        .collect()
}

/// Reshared-from rule: the origin author of a reshare, nothing otherwise.
fn reshared_terms(post: &Post) -> Vec<String> {
    post.reshare_of
        .as_deref()
        .map(|origin| vec![format!("@{}", origin.author.handle)])
        .unwrap_or_default()
}

fn mean(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<usize>() as f64 / values.len() as f64
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
