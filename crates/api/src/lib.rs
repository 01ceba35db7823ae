//! HTTP front end for the BMI health classifier.
//!
//! Serves an HTML form at `/`, a JSON API under `/api`, and Prometheus
//! metrics at `/metrics`. Handlers are stateless apart from the configured
//! service name.

pub mod config;
pub mod error;
pub mod page;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::form::show).post(routes::form::submit))
        .route("/api/health", get(routes::health::check))
        .route("/api/bmi", post(routes::bmi::assess))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Builds the shared state from configuration.
pub fn create_state(config: &Config) -> Arc<AppState> {
    Arc::new(AppState {
        service_name: config.service_name.clone(),
    })
}
