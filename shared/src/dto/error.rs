use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body shapes returned by the API on non-success statuses.
///
/// Views answer either `{"error": "..."}` or `{"detail": "..."}`; serializer
/// validation failures answer a map of field name to message list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Best-effort human readable reason from an error body.
///
/// Returns `None` when the body is not JSON or carries nothing usable, in
/// which case callers fall back to the status reason phrase.
pub fn error_reason(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    if let Ok(response) = serde_json::from_value::<ErrorResponse>(value.clone()) {
        if let Some(reason) = response.error.or(response.detail) {
            return Some(reason);
        }
    }

    let fields = value.as_object()?;
    let mut messages = Vec::new();
    for (field, errors) in fields {
        let text = match errors {
            Value::String(message) => message.clone(),
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" "),
            _ => continue,
        };
        if text.is_empty() {
            continue;
        }
        if field == "non_field_errors" {
            messages.push(text);
        } else {
            messages.push(format!("{}: {}", field, text));
        }
    }

    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}
