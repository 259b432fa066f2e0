//! HTTP API for report generation.
//!
//! One POST endpoint: the caller supplies an already-fetched timeline as a
//! JSON array of posts and gets the assembled report back. Upstream
//! fetching (handles, auth, rate limits) is the caller's problem; the
//! server analyzes what it is given.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use plumage_core::{AnalysisError, Analyzer, Post, Report};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The analyzer, shared across requests; its token cache persists for
    /// the process lifetime.
    pub analyzer: Arc<Analyzer>,
}

/// Build the API router.
///
/// `max_body_bytes` caps the request body when set (the configured input
/// limit); `None` removes the cap entirely.
pub fn router(analyzer: Arc<Analyzer>, max_body_bytes: Option<usize>) -> Router {
    let state = AppState { analyzer };

    let body_limit = max_body_bytes.map_or_else(DefaultBodyLimit::disable, DefaultBodyLimit::max);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/report", post(report))
        .layer(body_limit)
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Generate a report for a POSTed timeline.
async fn report(
    State(state): State<AppState>,
    Json(posts): Json<Vec<Post>>,
) -> Result<Json<Report>, (StatusCode, String)> {
    info!(posts = posts.len(), "report requested");
    match state.analyzer.generate_report(&posts) {
        Ok(report) => Ok(Json(report)),
        Err(err @ AnalysisError::EmptyTimeline) => {
            warn!("report requested for an empty timeline");
            Err((StatusCode::UNPROCESSABLE_ENTITY, err.to_string()))
        }
    }
}
