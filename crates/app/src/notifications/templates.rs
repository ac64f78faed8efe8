//! Named email templates with placeholder substitution.
//!
//! Bodies are rendered from a template name plus a flat variable mapping;
//! `{{key}}` markers are replaced with the stringified value.

use serde_json::{Map, Value};
use thiserror::Error;

/// Order confirmation template name.
pub const ORDER_CONFIRMATION: &str = "order-confirmation";

const ORDER_CONFIRMATION_HTML: &str = include_str!("templates/order_confirmation.html");

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
}

/// Render a named template with the given variables.
///
/// # Errors
///
/// Returns an error when no template is registered under `name`.
pub fn render(name: &str, vars: &Map<String, Value>) -> Result<String, TemplateError> {
    let template = match name {
        ORDER_CONFIRMATION => ORDER_CONFIRMATION_HTML,
        other => return Err(TemplateError::UnknownTemplate(other.to_string())),
    };

    let mut rendered = template.to_string();

    for (key, value) in vars {
        let marker = format!("{{{{{key}}}}}");

        let replacement = match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };

        rendered = rendered.replace(&marker, &replacement);
    }

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn vars() -> Map<String, Value> {
        let Value::Object(map) = json!({
            "name": "Reader",
            "order_id": "0192a0c1-0000-7000-8000-000000000000",
            "order_date": "2026-02-21T12:00:00Z",
            "lines": "<tr><td>1984</td><td>1</td><td>13.99</td></tr>",
            "total": "13.99",
        }) else {
            unreachable!("literal is an object");
        };

        map
    }

    #[test]
    fn order_confirmation_substitutes_all_placeholders() -> TestResult {
        let rendered = render(ORDER_CONFIRMATION, &vars())?;

        assert!(rendered.contains("Reader"));
        assert!(rendered.contains("0192a0c1-0000-7000-8000-000000000000"));
        assert!(rendered.contains("<td>1984</td>"));
        assert!(!rendered.contains("{{"), "no unreplaced markers expected");

        Ok(())
    }

    #[test]
    fn unknown_template_name_is_rejected() {
        let result = render("password-reset", &Map::new());

        assert!(
            matches!(result, Err(TemplateError::UnknownTemplate(_))),
            "expected UnknownTemplate, got {result:?}"
        );
    }
}
