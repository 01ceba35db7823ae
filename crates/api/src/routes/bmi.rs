//! JSON BMI endpoint.

use axum::Json;
use axum::body::Bytes;
use classifier::{Assessment, Measurements};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Fields every request body must carry, in the order they are reported
/// when missing.
pub const REQUIRED_FIELDS: [&str; 4] = ["age", "height", "weight", "smoker"];

/// POST /api/bmi — assess the measurements in a JSON body.
///
/// The body is read regardless of content type. Anything that is not a JSON
/// object counts as an empty object, so every field is reported missing.
#[tracing::instrument(skip_all)]
pub async fn assess(body: Bytes) -> Result<Json<Assessment>, ApiError> {
    let fields = parse_object(&body);
    let measurements = measurements_from_fields(&fields)?;
    let assessment = classifier::assess(&measurements)?;

    tracing::info!(
        bmi = assessment.bmi,
        risk_level = %assessment.risk_level,
        "assessment served"
    );
    Ok(Json(assessment))
}

fn parse_object(body: &[u8]) -> Map<String, Value> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => Map::new(),
    }
}

/// Extracts measurements from a JSON object.
///
/// Missing fields are checked before any conversion, so a body with both
/// missing and malformed fields reports the missing ones.
pub fn measurements_from_fields(fields: &Map<String, Value>) -> Result<Measurements, ApiError> {
    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .into_iter()
        .filter(|name| !fields.contains_key(*name))
        .collect();
    if !missing.is_empty() {
        return Err(ApiError::MissingFields(missing));
    }

    let invalid = || ApiError::InvalidFieldTypes;
    Ok(Measurements {
        age: coerce_integer(&fields["age"]).ok_or_else(invalid)?,
        height: coerce_float(&fields["height"]).ok_or_else(invalid)?,
        weight: coerce_float(&fields["weight"]).ok_or_else(invalid)?,
        smoker: coerce_bool(&fields["smoker"]).ok_or_else(invalid)?,
    })
}

/// Integers pass through, finite floats truncate toward zero, and strings
/// must hold a plain integer.
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Booleans pass through, numbers are true when non-zero, and strings must
/// be one of `true`, `false`, `yes` or `no`.
fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
