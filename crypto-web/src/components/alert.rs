//! Dismissible alert banner

use uuid::Uuid;

use crate::utils::html::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Warning,
    Danger,
}

impl AlertKind {
    pub fn class(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Warning => "warning",
            AlertKind::Danger => "danger",
        }
    }
}

/// Bootstrap alert with a close button. The message is escaped; every banner
/// gets its own element id.
pub fn render_alert(message: &str, kind: AlertKind) -> String {
    format!(
        r#"<div id="alert-{id}" class="alert alert-{kind} alert-dismissible fade show" role="alert">{message}<button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Close"></button></div>"#,
        id = Uuid::new_v4(),
        kind = kind.class(),
        message = escape_html(message),
    )
}
