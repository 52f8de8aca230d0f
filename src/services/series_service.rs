use chrono::{Duration, Utc};
use rand::Rng;

use crate::models::PricePoint;
use crate::services::indicators;

/// Per-step magnitude of the random price perturbation (3% daily).
const VOLATILITY: f64 = 0.03;
/// Amplitude of the slow sinusoidal drift layered on top of the noise.
const TREND_AMPLITUDE: f64 = 0.01;
/// Emitted prices never drop below this floor.
const MIN_PRICE: f64 = 1.0;

/// Starting prices for well-known tickers. Anything else gets a random base
/// in [100, 300) drawn from the caller's RNG, so repeated requests for the
/// same unknown symbol start from different levels.
const BASE_PRICES: [(&str, f64); 10] = [
    ("AAPL", 230.0),
    ("GOOGL", 175.0),
    ("MSFT", 420.0),
    ("TSLA", 240.0),
    ("AMZN", 185.0),
    ("META", 730.0),
    ("NVDA", 140.0),
    ("NFLX", 690.0),
    ("AMD", 140.0),
    ("INTC", 22.0),
];

fn base_price_for<R: Rng>(rng: &mut R, symbol: &str) -> f64 {
    BASE_PRICES
        .iter()
        .find(|(ticker, _)| *ticker == symbol)
        .map(|(_, price)| *price)
        .unwrap_or_else(|| 100.0 + rng.random::<f64>() * 200.0)
}

/// Generate a synthetic daily series for `symbol`, ending today.
///
/// The walk is multiplicative: each day moves the running price by a uniform
/// random change within +/- `VOLATILITY` plus a subtle sinusoidal trend keyed
/// to the days remaining. Emitted prices are clamped to `MIN_PRICE`; the
/// running value itself is not, so a long slump recovers gradually. Points
/// come back oldest first, annotated with the default-window SMA where
/// enough history exists. `days == 0` yields an empty series.
pub fn generate_series<R: Rng>(rng: &mut R, symbol: &str, days: usize) -> Vec<PricePoint> {
    let today = Utc::now().date_naive();
    let mut current = base_price_for(rng, symbol);
    let mut points = Vec::with_capacity(days);

    for remaining in (0..days).rev() {
        let date = today - Duration::days(remaining as i64);

        let random_change = (rng.random::<f64>() - 0.5) * 2.0 * VOLATILITY;
        let trend = (remaining as f64 / 5.0).sin() * TREND_AMPLITUDE;
        current *= 1.0 + random_change + trend;

        points.push(PricePoint {
            date,
            label: date.format("%b %-d").to_string(),
            price: current.max(MIN_PRICE),
            moving_average: None,
            prediction: None,
        });
    }

    let prices: Vec<f64> = points.iter().map(|p| p.price).collect();
    let averages = indicators::sma(&prices, indicators::DEFAULT_WINDOW);
    for (point, average) in points.iter_mut().zip(averages) {
        point.moving_average = average;
    }

    points
}
