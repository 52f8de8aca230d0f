use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// One simulated trading day for a symbol. Points are emitted oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    /// Chart axis label, short month plus day ("Aug 5").
    pub label: String,
    /// Closing price, clamped to a floor of 1.0 at generation.
    pub price: f64,
    /// Trailing SMA, absent until enough history exists.
    pub moving_average: Option<f64>,
    /// Reserved for chart overlays; the generator never fills it.
    pub prediction: Option<f64>,
}
