//! HTML form endpoints.

use axum::Form;
use axum::extract::rejection::FormRejection;
use axum::response::Html;
use classifier::Measurements;

use crate::page::{self, FormValues, ResultView};

/// Raw form submission. Every field is optional so that a partial or
/// malformed submission still reaches the handler.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FormInput {
    pub age: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub smoker: Option<String>,
}

impl FormInput {
    /// Builds a submission from decoded key/value pairs. When a field is
    /// repeated the first value wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut input = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "age" => &mut input.age,
                "height" => &mut input.height,
                "weight" => &mut input.weight,
                "smoker" => &mut input.smoker,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        input
    }
}

/// GET / — render the empty form.
pub async fn show() -> Html<String> {
    Html(page::render(&FormValues::default(), None))
}

/// POST / — assess the submitted form and re-render it with a result block.
///
/// A body the form extractor rejects (wrong content type, undecodable
/// bytes) is treated as an empty submission.
#[tracing::instrument(skip_all)]
pub async fn submit(form: Result<Form<Vec<(String, String)>>, FormRejection>) -> Html<String> {
    let input = match form {
        Ok(Form(pairs)) => FormInput::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable form body");
            FormInput::default()
        }
    };
    let values = FormValues::from(&input);
    let result = evaluate(&input);
    Html(page::render(&values, Some(&result)))
}

/// Runs the classifier over a submission. Any conversion or classification
/// failure yields the fixed invalid-input result.
pub fn evaluate(input: &FormInput) -> ResultView {
    match parse(input).and_then(|m| classifier::assess(&m).ok()) {
        Some(assessment) => ResultView::from(&assessment),
        None => {
            tracing::warn!("rejected form submission");
            metrics::counter!("bmi_rejections_total", "reason" => "invalid_form_input")
                .increment(1);
            ResultView::invalid()
        }
    }
}

fn parse(input: &FormInput) -> Option<Measurements> {
    Some(Measurements {
        age: input.age.as_deref()?.trim().parse().ok()?,
        height: input.height.as_deref()?.trim().parse().ok()?,
        weight: input.weight.as_deref()?.trim().parse().ok()?,
        smoker: input.smoker.as_deref() == Some("yes"),
    })
}
