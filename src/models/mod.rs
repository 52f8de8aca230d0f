mod analysis;
mod price_point;

pub use analysis::{PredictionSummary, QuoteSummary, SeriesMeta, StockAnalysis};
pub use price_point::PricePoint;
