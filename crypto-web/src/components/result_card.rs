//! Result card shown next to the calculator forms

use crate::utils::html::escape_html;

/// Card with a title and a `label: value` list. Labels and values are
/// escaped.
pub fn render_result_card(title: &str, rows: &[(&str, String)]) -> String {
    let items: String = rows
        .iter()
        .map(|(label, value)| {
            format!(
                r#"<li class="list-group-item d-flex justify-content-between"><strong>{}:</strong> <span>{}</span></li>"#,
                escape_html(label),
                escape_html(value)
            )
        })
        .collect();

    format!(
        r#"<div class="card shadow-sm border rounded p-4"><h4 class="text-center mb-4">{}</h4><ul class="list-group list-group-flush">{}</ul></div>"#,
        escape_html(title),
        items
    )
}

/// In-flight placeholder for a result region.
pub fn render_pending(text: &str) -> String {
    format!(r#"<div class="text-muted p-3 text-center">{}</div>"#, escape_html(text))
}
