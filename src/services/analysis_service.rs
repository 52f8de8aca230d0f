use chrono::Utc;
use rand::Rng;
use tracing::info;

use crate::errors::AppError;
use crate::models::{PredictionSummary, PricePoint, QuoteSummary, SeriesMeta, StockAnalysis};
use crate::services::{indicators, series_service};

pub const DEFAULT_DAYS: usize = 30;
/// Horizons beyond a year are silently capped rather than rejected.
pub const MAX_DAYS: usize = 365;

/// Displayed confidence for the combined forecast. The demo shows a fixed
/// 75%; nothing in the naive models produces a real interval.
const CONFIDENCE_LEVEL: f64 = 0.75;

/// Run the full demo analysis: synthesize a series, compute both one-step
/// forecasts, and assemble the response envelope the chart UI renders.
pub fn analyze<R: Rng>(
    rng: &mut R,
    symbol: &str,
    days: usize,
    window: usize,
) -> Result<StockAnalysis, AppError> {
    let symbol = normalize_symbol(symbol)?;
    if days < 1 {
        return Err(AppError::Validation("days must be at least 1".to_string()));
    }
    if window < 1 {
        return Err(AppError::Validation(
            "window must be at least 1".to_string(),
        ));
    }
    let days = days.min(MAX_DAYS);

    info!("Analyzing {} over {} days (window {})", symbol, days, window);

    let series = series_service::generate_series(rng, &symbol, days);
    let prices: Vec<f64> = series.iter().map(|p| p.price).collect();

    let by_average = indicators::predict_by_average(&prices, window);
    let by_trend = indicators::predict_by_trend(&prices);
    let combined = (by_average + by_trend) / 2.0;

    let quote = quote_summary(&series);
    let expected_change = combined - quote.latest_price;
    let expected_change_percent = expected_change / quote.latest_price * 100.0;

    let meta = SeriesMeta {
        points: series.len(),
        start: series.first().map(|p| p.date),
        end: series.last().map(|p| p.date),
    };

    Ok(StockAnalysis {
        symbol,
        series,
        quote,
        prediction: PredictionSummary {
            moving_average: by_average,
            linear_regression: by_trend,
            combined,
            expected_change,
            expected_change_percent,
            confidence_level: CONFIDENCE_LEVEL,
        },
        meta,
        generated_at: Utc::now(),
    })
}

fn normalize_symbol(symbol: &str) -> Result<String, AppError> {
    let normalized = symbol.trim().to_uppercase();
    if normalized.is_empty() {
        return Err(AppError::Validation(
            "symbol must not be empty".to_string(),
        ));
    }
    Ok(normalized)
}

/// Latest close and its move against the previous point; a single-point
/// series reports a zero move.
fn quote_summary(series: &[PricePoint]) -> QuoteSummary {
    let latest_price = series.last().map(|p| p.price).unwrap_or(0.0);

    let (change, change_percent) = if series.len() > 1 {
        let previous = series[series.len() - 2].price;
        let change = latest_price - previous;
        (change, change / previous * 100.0)
    } else {
        (0.0, 0.0)
    };

    QuoteSummary {
        latest_price,
        change,
        change_percent,
    }
}
