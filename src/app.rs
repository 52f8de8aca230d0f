use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::routes::{analysis, health, symbols};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    // The chart UI is served from a different origin in development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/analysis", analysis::router())
        .nest("/api/symbols", symbols::router())
        .layer(cors)
        .with_state(state)
}
