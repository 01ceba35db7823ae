//! Prometheus scrape endpoint.

use axum::extract::State;
use axum::http::header::{self, HeaderName};
use metrics_exporter_prometheus::PrometheusHandle;

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// GET /metrics — renders `bmi_assessments_total` and `bmi_rejections_total`.
pub async fn render(
    State(handle): State<PrometheusHandle>,
) -> ([(HeaderName, &'static str); 1], String) {
    ([(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], handle.render())
}
