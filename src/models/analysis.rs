use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::PricePoint;

/// Chart header figures: latest close and its move against the prior day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub latest_price: f64,
    pub change: f64,
    pub change_percent: f64,
}

/// The three summary-card values plus the expected move they imply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionSummary {
    /// One-step forecast from the mean of the trailing window.
    pub moving_average: f64,
    /// One-step forecast from OLS trend extrapolation.
    pub linear_regression: f64,
    /// Arithmetic mean of the two forecasts; the headline number.
    pub combined: f64,
    pub expected_change: f64,
    pub expected_change_percent: f64,
    pub confidence_level: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesMeta {
    pub points: usize,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAnalysis {
    pub symbol: String,
    pub series: Vec<PricePoint>,
    pub quote: QuoteSummary,
    pub prediction: PredictionSummary,
    pub meta: SeriesMeta,
    pub generated_at: DateTime<Utc>,
}
