// tests/metrics_http.rs
//
// The Prometheus recorder is process-global, so this file installs it once
// and runs a single scenario.

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use sentiment_report::api::{create_router, AppState};
use sentiment_report::config::ServerConfig;
use sentiment_report::metrics::{Metrics, ANALYZE_REJECTED, ANALYZE_REQUESTS};

fn analyze_req(body: &'static str) -> Request<Body> {
    Request::post("/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn metrics_endpoint_contains_expected_series() {
    let metrics = Metrics::init().expect("install recorder");
    let app = create_router(AppState::default(), &ServerConfig::default(), Some(&metrics));

    let ok = app
        .clone()
        .oneshot(analyze_req(r#"{"text":"Great work, thank you!"}"#))
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);

    let bad = app.clone().oneshot(analyze_req(r#"{"text":""}"#)).await.unwrap();
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    // axum::body::to_bytes requires an explicit limit
    let body = body::to_bytes(resp.into_body(), 1_048_576).await.unwrap(); // 1 MiB
    let text = String::from_utf8(body.to_vec()).unwrap();

    for needle in [
        ANALYZE_REQUESTS,
        ANALYZE_REJECTED,
        "label=\"Positive\"",
        "reason=\"no_text\"",
    ] {
        assert!(text.contains(needle), "missing {needle} in:\n{text}");
    }

    // a second recorder cannot be installed
    assert!(Metrics::init().is_err());
}
