use axum::{routing::get, Json, Router};
use tracing::info;

use crate::state::AppState;

/// Quick-pick tickers the UI offers before the user types anything.
const POPULAR_SYMBOLS: [&str; 6] = ["AAPL", "GOOGL", "MSFT", "TSLA", "AMZN", "META"];

pub fn router() -> Router<AppState> {
    Router::new().route("/popular", get(popular))
}

async fn popular() -> Json<Vec<&'static str>> {
    info!("GET /symbols/popular - Listing popular symbols");
    Json(POPULAR_SYMBOLS.to_vec())
}
