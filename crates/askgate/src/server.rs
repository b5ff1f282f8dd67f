use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::timeout::TimeoutLayer;

use crate::gate::AdmissionGate;
use crate::handlers;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub gate: AdmissionGate,
}

pub fn build_app(state: AppState, request_timeout_secs: u64) -> Router {
    let api = Router::new()
        .route("/ask", post(handlers::ask))
        .with_state(state.clone());

    Router::new()
        .route("/", get(handlers::home))
        .route("/chat", get(handlers::chat))
        .route("/about", get(handlers::about))
        .route("/livez", get(handlers::livez))
        .route("/readyz", get(handlers::readyz))
        .with_state(state)
        .nest("/api", api)
        .fallback(handlers::not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_secs),
        ))
}
