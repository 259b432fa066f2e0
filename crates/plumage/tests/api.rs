//! HTTP API tests driving the router directly with oneshot requests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use plumage::api::router;
use plumage_core::{Analyzer, Lexicons};

fn timeline_json() -> String {
    serde_json::json!([
        {
            "created_at": "2024-06-12T09:00:00Z",
            "full_text": "Spotted a heron by the bridge this morning. Wonderful light today.",
            "author": {
                "name": "Bittern",
                "handle": "bittern",
                "followers_count": 42,
                "following_count": 7,
                "created_at": "2018-02-01T00:00:00Z"
            },
            "entities": {
                "hashtags": [{"text": "birds"}],
                "mentions": [{"handle": "audubon"}],
                "urls": []
            },
            "favorite_count": 5,
            "reshare_count": 1
        },
        {
            "created_at": "2024-05-02T18:30:00Z",
            "text": "Quiet evening by the lake. Peaceful water everywhere.",
            "author": {
                "name": "Bittern",
                "handle": "bittern",
                "created_at": "2018-02-01T00:00:00Z"
            },
            "favorite_count": 3,
            "reshare_count": 0
        }
    ])
    .to_string()
}

fn app() -> axum::Router {
    router(Arc::new(Analyzer::new(Lexicons::builtin())), None)
}

fn post_report(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/report")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn report_endpoint_returns_the_report() {
    let response = app().oneshot(post_report(timeline_json())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let report: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(report["profile"]["handle"], "bittern");
    assert_eq!(report["engagement"][0]["label"], "Likes");
    assert_eq!(report["engagement"][1]["label"], "Retweets");
    assert_eq!(report["engagement"][0]["points"].as_array().unwrap().len(), 2);
    assert_eq!(report["top_hashtags"][0]["term"], "#birds");
}

#[tokio::test]
async fn empty_timeline_is_unprocessable() {
    let response = app().oneshot(post_report("[]")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let message = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(message.contains("hasn't posted anything"));
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let response = app().oneshot(post_report("{not json")).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn oversized_body_is_rejected_when_limited() {
    let tiny = router(Arc::new(Analyzer::new(Lexicons::builtin())), Some(16));
    let response = tiny.oneshot(post_report(timeline_json())).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
