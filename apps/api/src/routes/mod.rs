pub mod health;

use axum::{routing::get, Router};

use crate::horoscope::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/reading", get(handlers::handle_get_reading))
        .route("/zodiac/:sign", get(handlers::handle_zodiac_page))
        .with_state(state)
}
