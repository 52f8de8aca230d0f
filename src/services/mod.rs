pub mod analysis_service;
pub mod indicators;
pub mod series_service;
