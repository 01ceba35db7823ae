//! Risk classification and advice messages.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

const LOW_MESSAGE: &str = "Your risk level is low. Keep maintaining a healthy lifestyle.";
const MEDIUM_MESSAGE: &str =
    "Your risk level is moderate. Consider regular exercise and a balanced diet.";
const HIGH_MESSAGE: &str =
    "Your risk level is high. It may be worth talking to a doctor or nutritionist.";

/// Qualitative health-risk bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Returns the risk level name as it appears in responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Returns the advice text for this risk level.
    pub fn message(&self) -> &'static str {
        match self {
            RiskLevel::Low => LOW_MESSAGE,
            RiskLevel::Medium => MEDIUM_MESSAGE,
            RiskLevel::High => HIGH_MESSAGE,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(ClassifierError::UnknownRiskLevel(other.to_string())),
        }
    }
}

/// Combines BMI and smoking status into a risk level.
///
/// Clauses are evaluated top-down and the first match wins:
/// - `bmi >= 30`, or a smoker with `bmi >= 25`: high
/// - `bmi >= 25`, or any smoker: medium
/// - otherwise: low
///
/// Smoking alone only raises risk to medium; it lifts the overweight band
/// from medium to high.
pub fn risk_from_bmi_and_smoker(bmi: f64, smoker: bool) -> RiskLevel {
    if bmi >= 30.0 || (smoker && bmi >= 25.0) {
        RiskLevel::High
    } else if bmi >= 25.0 || smoker {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Returns the advice text for a risk level.
pub fn risk_message(risk: RiskLevel) -> &'static str {
    risk.message()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_table() {
        assert_eq!(risk_from_bmi_and_smoker(24.0, false), RiskLevel::Low);
        assert_eq!(risk_from_bmi_and_smoker(24.0, true), RiskLevel::Medium);
        assert_eq!(risk_from_bmi_and_smoker(27.0, true), RiskLevel::High);
        assert_eq!(risk_from_bmi_and_smoker(27.0, false), RiskLevel::Medium);
        assert_eq!(risk_from_bmi_and_smoker(31.0, false), RiskLevel::High);
    }

    #[test]
    fn test_risk_boundaries() {
        assert_eq!(risk_from_bmi_and_smoker(24.99, false), RiskLevel::Low);
        assert_eq!(risk_from_bmi_and_smoker(25.0, false), RiskLevel::Medium);
        assert_eq!(risk_from_bmi_and_smoker(25.0, true), RiskLevel::High);
        assert_eq!(risk_from_bmi_and_smoker(29.99, false), RiskLevel::Medium);
        assert_eq!(risk_from_bmi_and_smoker(30.0, false), RiskLevel::High);
    }

    #[test]
    fn test_underweight_smoker_is_medium() {
        assert_eq!(risk_from_bmi_and_smoker(16.0, true), RiskLevel::Medium);
    }

    #[test]
    fn test_messages_are_distinct() {
        let low = risk_message(RiskLevel::Low);
        let medium = risk_message(RiskLevel::Medium);
        let high = risk_message(RiskLevel::High);
        assert_ne!(low, medium);
        assert_ne!(medium, high);
        assert_ne!(low, high);
        assert!(medium.contains("moderate"));
    }

    #[test]
    fn test_parse_round_trips_names() {
        for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            assert_eq!(level.as_str().parse::<RiskLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_name() {
        assert_eq!(
            "severe".parse::<RiskLevel>(),
            Err(ClassifierError::UnknownRiskLevel("severe".to_string()))
        );
    }
}
