//! HTML rendering for the form page.

use classifier::Assessment;

use crate::routes::form::FormInput;

const INVALID_MESSAGE: &str = "Invalid input. Please enter numeric values.";

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Health &amp; BMI Calculator</title>
    <style>
        body { font-family: Arial, sans-serif; background: #0f172a; color: #e5e7eb;
               display: flex; justify-content: center; align-items: flex-start;
               min-height: 100vh; margin: 0; padding: 40px 0; }
        .container { background: #020617; border-radius: 12px; padding: 24px 32px;
                     box-shadow: 0 10px 40px rgba(0,0,0,0.6); width: 480px; }
        h1, h2 { margin-top: 0; color: #38bdf8; }
        label { display: block; margin-top: 12px; font-size: 14px; }
        input, select { width: 100%; padding: 8px 10px; margin-top: 4px; border-radius: 6px;
                        border: 1px solid #4b5563; background: #020617; color: #e5e7eb; }
        button { margin-top: 18px; width: 100%; padding: 10px; border-radius: 6px; border: none;
                 background: #22c55e; color: #022c22; font-weight: bold; cursor: pointer; }
        button:hover { background: #16a34a; }
        .result { margin-top: 20px; padding: 12px; border-radius: 8px; background: #0f172a; }
        .badge { display: inline-block; padding: 3px 8px; border-radius: 999px;
                 font-size: 12px; margin-left: 6px; }
        .low { background: #22c55e33; color: #bbf7d0; }
        .medium { background: #facc1533; color: #facc15; }
        .high { background: #ef444433; color: #fecaca; }
        .api-info { margin-top: 18px; font-size: 13px; color: #9ca3af; }
        code { background: #020617; padding: 2px 4px; border-radius: 4px; }
    </style>
</head>
<body>
<div class="container">
    <h1>Health &amp; BMI Calculator</h1>
    <p>Enter your details to see your BMI and risk category.</p>
"#;

const API_INFO: &str = r#"    <div class="api-info">
        <p><strong>API endpoints:</strong></p>
        <ul>
            <li><code>GET /api/health</code> &rarr; status info</li>
            <li><code>POST /api/bmi</code> &rarr; JSON BMI calculator</li>
        </ul>
        <p>Example JSON for <code>/api/bmi</code>:</p>
        <pre>{
  "age": 30,
  "height": 1.75,
  "weight": 70,
  "smoker": false
}</pre>
    </div>
</div>
</body>
</html>
"#;

/// Values echoed back into the form inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub age: String,
    pub height: String,
    pub weight: String,
    pub smoker: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            age: String::new(),
            height: String::new(),
            weight: String::new(),
            smoker: "no".to_string(),
        }
    }
}

impl From<&FormInput> for FormValues {
    fn from(input: &FormInput) -> Self {
        let echo = |field: &Option<String>| field.as_deref().unwrap_or_default().trim().to_string();
        Self {
            age: echo(&input.age),
            height: echo(&input.height),
            weight: echo(&input.weight),
            smoker: input.smoker.clone().unwrap_or_else(|| "no".to_string()),
        }
    }
}

/// Result block shown under the form.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub bmi: Option<f64>,
    pub bmi_category: &'static str,
    pub risk_level: &'static str,
    pub message: &'static str,
}

impl ResultView {
    /// The fixed result shown when a submission cannot be assessed.
    pub fn invalid() -> Self {
        Self {
            bmi: None,
            bmi_category: "invalid",
            risk_level: "high",
            message: INVALID_MESSAGE,
        }
    }
}

impl From<&Assessment> for ResultView {
    fn from(assessment: &Assessment) -> Self {
        Self {
            bmi: Some(assessment.bmi),
            bmi_category: assessment.bmi_category.as_str(),
            risk_level: assessment.risk_level.as_str(),
            message: assessment.message,
        }
    }
}

/// Renders the full page: form with echoed values, optional result block,
/// and the API usage notes.
pub fn render(values: &FormValues, result: Option<&ResultView>) -> String {
    let mut html = String::with_capacity(HEAD.len() + API_INFO.len() + 2048);
    html.push_str(HEAD);
    html.push_str(&render_form(values));
    if let Some(result) = result {
        html.push_str(&render_result(result));
    }
    html.push_str(API_INFO);
    html
}

fn render_form(values: &FormValues) -> String {
    let selected = |option: &str| if values.smoker == option { " selected" } else { "" };

    format!(
        "    <form method=\"post\" action=\"/\">
        <label>Age
            <input type=\"number\" name=\"age\" min=\"1\" max=\"120\" value=\"{age}\" required>
        </label>
        <label>Height (meters)
            <input type=\"number\" step=\"0.01\" name=\"height\" min=\"0.5\" max=\"2.5\" value=\"{height}\" required>
        </label>
        <label>Weight (kg)
            <input type=\"number\" step=\"0.1\" name=\"weight\" min=\"10\" max=\"300\" value=\"{weight}\" required>
        </label>
        <label>Smoker?
            <select name=\"smoker\">
                <option value=\"no\"{no}>No</option>
                <option value=\"yes\"{yes}>Yes</option>
            </select>
        </label>
        <button type=\"submit\">Calculate</button>
    </form>
",
        age = escape(&values.age),
        height = escape(&values.height),
        weight = escape(&values.weight),
        no = selected("no"),
        yes = selected("yes"),
    )
}

fn render_result(result: &ResultView) -> String {
    // Debug formatting keeps the decimal point on whole values (25.0).
    let bmi = result
        .bmi
        .map_or_else(|| "n/a".to_string(), |bmi| format!("{bmi:?}"));

    format!(
        "    <div class=\"result\">\n        <h2>Result</h2>\n        <p>BMI: <strong>{bmi}</strong></p>\n        <p>\n            Category:\n            <strong>{category}</strong>\n            <span class=\"badge {level}\">{label} risk</span>\n        </p>\n        <p>Message: {message}</p>\n    </div>\n",
        category = escape(result.bmi_category),
        level = escape(result.risk_level),
        label = capitalize(result.risk_level),
        message = escape(result.message),
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Escapes text for use in element content and double-quoted attributes.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}
