//! Health classifier for the BMI service.
//!
//! This crate holds the whole computational core:
//! - `compute_bmi` turns weight and height into a rounded BMI
//! - `categorize_bmi` maps a BMI onto its weight band
//! - `risk_from_bmi_and_smoker` combines BMI and smoking status into a risk level
//! - `risk_message` looks up the advice text for a risk level
//!
//! Everything here is a pure function of its inputs; `assess` runs the whole
//! pipeline and produces an [`Assessment`].

pub mod assessment;
pub mod bmi;
pub mod category;
pub mod error;
pub mod risk;

pub use assessment::{Assessment, Measurements, assess};
pub use bmi::compute_bmi;
pub use category::{BmiCategory, categorize_bmi};
pub use error::{ClassifierError, Result};
pub use risk::{RiskLevel, risk_from_bmi_and_smoker, risk_message};
