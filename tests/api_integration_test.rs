//! API integration tests.
//!
//! Drives the assembled router end to end, covering:
//! - Health check (GET /health)
//! - Analysis API (GET /api/analysis/:symbol) with defaults, query
//!   parameters, validation failures, and response shape
//! - Popular symbols API (GET /api/symbols/popular)

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use stockcast::app::create_app;
use stockcast::state::{AppConfig, AppState};

fn test_app() -> Router {
    // Latency theater off so the suite stays fast.
    let config = AppConfig {
        port: 0,
        simulated_latency_ms: 0,
    };
    create_app(AppState { config })
}

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(uri).await;
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_health_returns_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _) = get("/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Analysis API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_analysis_happy_path_shape() {
    let (status, json) = get_json("/api/analysis/AAPL").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(json["symbol"], "AAPL");
    assert_eq!(json["meta"]["points"], 30);
    assert_eq!(json["series"].as_array().unwrap().len(), 30);
    assert!(json["generated_at"].is_string());

    let quote = &json["quote"];
    assert!(quote["latest_price"].as_f64().unwrap() > 0.0);
    assert!(quote["change"].is_number());
    assert!(quote["change_percent"].is_number());
}

#[tokio::test]
async fn test_analysis_series_points_carry_annotations() {
    let (status, json) = get_json("/api/analysis/MSFT").await;
    assert_eq!(status, StatusCode::OK);

    let series = json["series"].as_array().unwrap();
    for (i, point) in series.iter().enumerate() {
        assert!(point["date"].is_string());
        assert!(!point["label"].as_str().unwrap().is_empty());
        assert!(point["price"].as_f64().unwrap() > 0.0);
        // Default window five: SMA defined from the fifth point on.
        assert_eq!(point["moving_average"].is_null(), i < 4, "index {i}");
        assert!(point["prediction"].is_null());
    }
}

#[tokio::test]
async fn test_analysis_prediction_summary_math() {
    let (status, json) = get_json("/api/analysis/GOOGL").await;
    assert_eq!(status, StatusCode::OK);

    let p = &json["prediction"];
    let moving_average = p["moving_average"].as_f64().unwrap();
    let linear_regression = p["linear_regression"].as_f64().unwrap();
    let combined = p["combined"].as_f64().unwrap();
    let latest = json["quote"]["latest_price"].as_f64().unwrap();

    assert!((combined - (moving_average + linear_regression) / 2.0).abs() < 1e-9);
    assert!((p["expected_change"].as_f64().unwrap() - (combined - latest)).abs() < 1e-9);
    assert_eq!(p["confidence_level"], 0.75);
}

#[tokio::test]
async fn test_analysis_lowercase_symbol_is_normalized() {
    let (status, json) = get_json("/api/analysis/tsla").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["symbol"], "TSLA");
}

#[tokio::test]
async fn test_analysis_honors_days_and_window_parameters() {
    let (status, json) = get_json("/api/analysis/AAPL?days=10&window=3").await;
    assert_eq!(status, StatusCode::OK);

    let series = json["series"].as_array().unwrap();
    assert_eq!(series.len(), 10);
    // Generator annotation keeps the default window regardless of the
    // forecast window requested.
    assert!(series[3]["moving_average"].is_null());
    assert!(series[4]["moving_average"].is_number());
}

#[tokio::test]
async fn test_analysis_caps_days_at_one_year() {
    let (status, json) = get_json("/api/analysis/AAPL?days=5000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["meta"]["points"], 365);
}

#[tokio::test]
async fn test_analysis_rejects_zero_days() {
    let (status, _) = get("/api/analysis/AAPL?days=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analysis_rejects_zero_window() {
    let (status, _) = get("/api/analysis/AAPL?window=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analysis_rejects_non_numeric_days() {
    let (status, _) = get("/api/analysis/AAPL?days=tomorrow").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analysis_rejects_blank_symbol() {
    let (status, _) = get("/api/analysis/%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Popular Symbols API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_popular_symbols_lists_quick_picks() {
    let (status, json) = get_json("/api/symbols/popular").await;
    assert_eq!(status, StatusCode::OK);

    let symbols: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(symbols, ["AAPL", "GOOGL", "MSFT", "TSLA", "AMZN", "META"]);
}
