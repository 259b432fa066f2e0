//! Time-series graph construction.
//!
//! Three graph shapes come out of a timeline: monthly activity counts,
//! per-post scalar metrics, and cumulative per-term usage curves. Timelines
//! arrive newest-first; cumulative curves re-order to chronological so the
//! running count climbs.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::freq::count_values;
use crate::rank::{self, TermCount};
use crate::timeline::Post;

/// One point on a graph: unix-millisecond timestamp and a numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GraphPoint {
    /// Unix timestamp in milliseconds.
    pub date: i64,
    /// The y value.
    pub value: f64,
}

/// A named series of points, one per term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TermSeries {
    /// The term this series tracks.
    pub term: String,
    /// Usage points, oldest first.
    pub points: Vec<GraphPoint>,
}

/// Bucket posts by calendar month of creation.
///
/// Each point's date is the first instant of a UTC month; its value is the
/// number of posts created that month. Only months containing at least one
/// post appear, and no ordering is guaranteed.
pub fn monthly_activity(posts: &[Post]) -> Vec<GraphPoint> {
    let months = posts
        .iter()
        .map(|post| Some(month_floor_millis(&post.created_at)));
    count_values(months)
        .into_iter()
        .map(|(date, count)| GraphPoint {
            date,
            value: count as f64,
        })
        .collect()
}

/// One point per post in input order, valued by a caller-supplied metric.
pub fn per_post<F>(posts: &[Post], metric: F) -> Vec<GraphPoint>
where
    F: Fn(&Post) -> f64,
{
    posts
        .iter()
        .map(|post| GraphPoint {
            date: post.created_at.timestamp_millis(),
            value: metric(post),
        })
        .collect()
}

/// Cumulative usage curves for the timeline's top terms.
///
/// Ranks the `limit` most frequent terms under `rule`, then builds one
/// chronological (oldest-first) series per term: each post using the term
/// adds a point valued one higher than the last, starting at 1.
pub fn cumulative_term_usage<F>(posts: &[Post], rule: F, limit: usize) -> Vec<TermSeries>
where
    F: Fn(&Post) -> Vec<String>,
{
    let top: Vec<TermCount> = rank::top_terms(posts, &rule, limit);

    top.into_iter()
        .map(|ranked| {
            let mut points = Vec::new();
            let mut used = 0u64;
            // Input is newest-first; accumulate oldest-first.
            for post in posts.iter().rev() {
                if rule(post).iter().any(|term| *term == ranked.term) {
                    used += 1;
                    points.push(GraphPoint {
                        date: post.created_at.timestamp_millis(),
                        value: used as f64,
                    });
                }
            }
            TermSeries {
                term: ranked.term,
                points,
            }
        })
        .collect()
}

/// First instant of the month containing `at`, as unix milliseconds.
fn month_floor_millis(at: &DateTime<Utc>) -> i64 {
    NaiveDate::from_ymd_opt(at.year(), at.month(), 1)
        .expect("first of month is a valid date")
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time")
        .and_utc()
        .timestamp_millis()
}
