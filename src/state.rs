#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Artificial delay before each analysis, so the demo UI gets a visible
    /// loading state. Zero disables it; tests run with zero.
    pub simulated_latency_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            simulated_latency_ms: std::env::var("SIMULATED_LATENCY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1000),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}
