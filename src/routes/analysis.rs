use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::StockAnalysis;
use crate::services::{analysis_service, indicators};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/:symbol", get(get_analysis))
}

#[derive(Debug, Deserialize)]
struct AnalysisQuery {
    days: Option<usize>,
    window: Option<usize>,
}

async fn get_analysis(
    Path(symbol): Path<String>,
    Query(params): Query<AnalysisQuery>,
    State(state): State<AppState>,
) -> Result<Json<StockAnalysis>, AppError> {
    info!("GET /analysis/{} - Running analysis", symbol);

    // Latency theater for the demo UI's loading spinner. Not part of the
    // analysis contract; tests run with it set to zero.
    let latency = state.config.simulated_latency_ms;
    if latency > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(latency)).await;
    }

    let days = params.days.unwrap_or(analysis_service::DEFAULT_DAYS);
    let window = params.window.unwrap_or(indicators::DEFAULT_WINDOW);

    let mut rng = StdRng::from_os_rng();
    analysis_service::analyze(&mut rng, &symbol, days, window)
        .map(Json)
        .map_err(|e| {
            warn!("Rejected analysis request for {}: {}", symbol, e);
            e
        })
}
