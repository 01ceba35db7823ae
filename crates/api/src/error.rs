//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use classifier::ClassifierError;
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
///
/// Every variant is a client error; the classifier has no failure mode that
/// is the server's fault.
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    /// One or more required fields are absent from the request body.
    #[error("Missing required fields")]
    MissingFields(Vec<&'static str>),

    /// A field is present but cannot be converted, or the values make BMI
    /// undefined.
    #[error("Invalid field types")]
    InvalidFieldTypes,
}

impl ApiError {
    fn reason(&self) -> &'static str {
        match self {
            ApiError::MissingFields(_) => "missing_fields",
            ApiError::InvalidFieldTypes => "invalid_field_types",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "rejected request");
        metrics::counter!("bmi_rejections_total", "reason" => self.reason()).increment(1);

        let body = match &self {
            ApiError::MissingFields(missing) => {
                serde_json::json!({ "error": self.to_string(), "missing": missing })
            }
            ApiError::InvalidFieldTypes => serde_json::json!({ "error": self.to_string() }),
        };

        (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
    }
}

impl From<ClassifierError> for ApiError {
    fn from(err: ClassifierError) -> Self {
        tracing::debug!(error = %err, "classifier rejected measurements");
        ApiError::InvalidFieldTypes
    }
}
