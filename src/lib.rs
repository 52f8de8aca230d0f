//! Stockcast backend: synthetic stock analysis demo service.
//!
//! Generates a randomized daily price series for a ticker, annotates it with
//! a trailing simple moving average, and produces two naive one-step price
//! forecasts (SMA tail mean and OLS trend extrapolation). The numeric core
//! lives in [`services`] and is usable without the HTTP layer.

pub mod app;
pub mod errors;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
