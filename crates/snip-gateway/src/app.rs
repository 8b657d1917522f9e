use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{create_link_handler, health_handler, redirect_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the router. `/health` is a static route and wins over `/{code}`.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", post(create_link_handler))
            .route("/health", get(health_handler))
            .route("/{code}", get(redirect_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
