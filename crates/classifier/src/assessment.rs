//! End-to-end assessment of one set of measurements.

use serde::Serialize;

use crate::bmi::compute_bmi;
use crate::category::{BmiCategory, categorize_bmi};
use crate::error::Result;
use crate::risk::{RiskLevel, risk_from_bmi_and_smoker};

/// Validated inputs for an assessment.
///
/// Range checks on age, height and weight belong to the caller; the
/// classifier only rejects values that make BMI undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    /// Age in years.
    pub age: i64,
    /// Height in meters.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    pub smoker: bool,
}

/// Result of running the classifier pipeline over a set of measurements.
///
/// Serializes with the inputs echoed first, then the derived fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub age: i64,
    pub height: f64,
    pub weight: f64,
    pub smoker: bool,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub risk_level: RiskLevel,
    pub message: &'static str,
}

/// Runs the full pipeline: BMI, category, risk level and message.
///
/// `bmi_category` and `risk_level` depend only on the rounded BMI and the
/// smoking flag.
pub fn assess(measurements: &Measurements) -> Result<Assessment> {
    let bmi = compute_bmi(measurements.weight, measurements.height)?;
    let bmi_category = categorize_bmi(bmi);
    let risk_level = risk_from_bmi_and_smoker(bmi, measurements.smoker);

    tracing::debug!(bmi, %bmi_category, %risk_level, "assessment computed");
    metrics::counter!("bmi_assessments_total", "risk_level" => risk_level.as_str()).increment(1);

    Ok(Assessment {
        age: measurements.age,
        height: measurements.height,
        weight: measurements.weight,
        smoker: measurements.smoker,
        bmi,
        bmi_category,
        risk_level,
        message: risk_level.message(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClassifierError;

    fn measurements(height: f64, weight: f64, smoker: bool) -> Measurements {
        Measurements {
            age: 30,
            height,
            weight,
            smoker,
        }
    }

    #[test]
    fn test_assess_reference_case() {
        let assessment = assess(&measurements(1.75, 70.0, false)).unwrap();
        assert_eq!(assessment.bmi, 22.86);
        assert_eq!(assessment.bmi_category, BmiCategory::Normal);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert_eq!(assessment.message, RiskLevel::Low.message());
    }

    #[test]
    fn test_assess_echoes_inputs() {
        let assessment = assess(&measurements(1.8, 95.0, true)).unwrap();
        assert_eq!(assessment.age, 30);
        assert_eq!(assessment.height, 1.8);
        assert_eq!(assessment.weight, 95.0);
        assert!(assessment.smoker);
        assert_eq!(assessment.bmi, 29.32);
        assert_eq!(assessment.bmi_category, BmiCategory::Overweight);
        assert_eq!(assessment.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_assess_propagates_invalid_height() {
        let err = assess(&measurements(0.0, 70.0, false)).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidHeight { .. }));
    }

    #[test]
    fn test_serialized_field_names() {
        let assessment = assess(&measurements(1.75, 70.0, false)).unwrap();
        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["bmi"], 22.86);
        assert_eq!(json["bmi_category"], "normal");
        assert_eq!(json["risk_level"], "low");
        assert_eq!(json["smoker"], false);
        assert_eq!(json["age"], 30);
    }
}
