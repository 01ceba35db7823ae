//! HTTP route handlers.

pub mod bmi;
pub mod form;
pub mod health;
pub mod metrics;

/// Shared application state accessible from all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Name reported by the health check.
    pub service_name: String,
}
