//! Body Mass Index computation.

use crate::error::{ClassifierError, Result};

/// Computes BMI as `weight / height²`, rounded to two decimal places.
///
/// Weight is in kilograms and height in meters. Rounding is
/// round-half-away-from-zero on the value scaled by 100, so an exact
/// `22.125` becomes `22.13`. The rounded value is what category and risk
/// thresholds are compared against.
///
/// # Errors
///
/// Returns [`ClassifierError::InvalidHeight`] when `height <= 0` and
/// [`ClassifierError::NonFiniteInput`] when an input or the result is NaN
/// or infinite.
pub fn compute_bmi(weight: f64, height: f64) -> Result<f64> {
    if !weight.is_finite() {
        return Err(ClassifierError::NonFiniteInput { field: "weight" });
    }
    if !height.is_finite() {
        return Err(ClassifierError::NonFiniteInput { field: "height" });
    }
    if height <= 0.0 {
        return Err(ClassifierError::InvalidHeight { height });
    }

    let raw = weight / (height * height);
    if !raw.is_finite() {
        return Err(ClassifierError::NonFiniteInput { field: "bmi" });
    }

    Ok(round_to_hundredths(raw))
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
