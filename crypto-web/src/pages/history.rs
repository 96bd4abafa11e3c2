//! Conversion history table.

use std::rc::Rc;

use shared::dto::conversion::ConversionHistoryEntry;

use crate::app::AppContext;
use crate::components::{render_alert, AlertKind};
use crate::services::api::conversion::fetch_conversion_history;
use crate::state::ViewHandle;
use crate::utils::constants::HISTORY_COLUMNS;
use crate::utils::format::{format_locale_number, format_timestamp};
use crate::utils::html::escape_html;

pub const BODY_REGION: &str = "history-body";

pub async fn render(ctx: Rc<AppContext>, view: ViewHandle) {
    if !view.render(&shell_markup()) {
        return;
    }

    let body = match fetch_conversion_history(&ctx.api).await {
        Ok(entries) if entries.is_empty() => message_row("No conversion history available."),
        Ok(entries) => entries.iter().map(entry_row).collect(),
        Err(e) => {
            log::error!("Failed to load history: {}", e);
            full_width_row(&render_alert("Failed to load history ❌", AlertKind::Danger))
        }
    };
    view.render_region(BODY_REGION, &body);
}

fn shell_markup() -> String {
    format!(
        r#"<div class="container" style="padding-top: 0;">
    <h2 class="text-center mb-4">Conversion History</h2>
    <div class="table-responsive">
        <table class="table table-striped table-hover shadow-sm mx-auto" style="max-width: 95%;">
            <thead>
                <tr>
                    <th>Timestamp</th>
                    <th>From Currency</th>
                    <th>Amount</th>
                    <th>To Currency</th>
                    <th>Converted Amount</th>
                    <th>Conversion Rate</th>
                </tr>
            </thead>
            <tbody id="{}">{}</tbody>
        </table>
    </div>
</div>"#,
        BODY_REGION,
        message_row("Loading history...")
    )
}

fn full_width_row(content: &str) -> String {
    format!(
        r#"<tr><td colspan="{}" class="text-center">{}</td></tr>"#,
        HISTORY_COLUMNS, content
    )
}

fn message_row(text: &str) -> String {
    full_width_row(&escape_html(text))
}

fn entry_row(entry: &ConversionHistoryEntry) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape_html(&format_timestamp(&entry.timestamp)),
        escape_html(&entry.from_currency.to_uppercase()),
        format_locale_number(entry.amount, 4, 4),
        escape_html(&entry.to_currency.to_uppercase()),
        format_locale_number(entry.converted_amount, 4, 4),
        format_locale_number(entry.conversion_rate, 4, 4),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::services::api::Method;
    use crate::testing::Harness;

    const HISTORY_URL: &str = "/api/conversion-history/";

    #[tokio::test]
    async fn test_loading_row_spans_all_columns() {
        let harness = Harness::new();
        let _release = harness.http.hold(Method::Get, HISTORY_URL);
        let view = harness.ctx.issue_view();

        let pending = render(harness.ctx.clone(), view);
        futures::pin_mut!(pending);
        assert!(futures::FutureExt::now_or_never(&mut pending).is_none());

        assert!(harness
            .mount
            .root()
            .contains(r#"<tr><td colspan="6" class="text-center">Loading history...</td></tr>"#));
    }

    #[tokio::test]
    async fn test_empty_history_renders_one_row() {
        let harness = Harness::new();
        harness.http.respond(Method::Get, HISTORY_URL, 200, "[]");

        render(harness.ctx.clone(), harness.ctx.issue_view()).await;

        let body = harness.mount.region(BODY_REGION).unwrap();
        assert_eq!(body.matches("<tr>").count(), 1);
        assert!(body.contains("No conversion history available."));
    }

    #[tokio::test]
    async fn test_rows_keep_server_order() {
        let harness = Harness::new();
        harness.http.respond(
            Method::Get,
            HISTORY_URL,
            200,
            r#"[
                {"id": 2, "timestamp": "2024-03-11T08:15:00Z", "from_currency": "eth", "amount": "2.00000000",
                 "to_currency": "btc", "converted_amount": "0.13300000", "conversion_rate": "0.06650000"},
                {"id": 1, "timestamp": "2024-03-10T08:15:00Z", "from_currency": "btc", "amount": "0.50000000",
                 "to_currency": "eth", "converted_amount": "7.51234500", "conversion_rate": "15.02469000"}
            ]"#,
        );

        render(harness.ctx.clone(), harness.ctx.issue_view()).await;

        let body = harness.mount.region(BODY_REGION).unwrap();
        assert_eq!(body.matches("<tr>").count(), 2);
        let first = body.find("<td>ETH</td>").unwrap();
        let second = body.find("<td>0.5000</td>").unwrap();
        assert!(first < second);
        assert!(body.contains("<td>7.5123</td>"));
        assert!(body.contains("<td>15.0247</td>"));
        assert!(body.contains("<td>0.0665</td>"));
    }

    #[tokio::test]
    async fn test_failure_row() {
        let harness = Harness::new();
        harness
            .http
            .fail(Method::Get, HISTORY_URL, ApiError::Network("offline".into()));

        render(harness.ctx.clone(), harness.ctx.issue_view()).await;

        let body = harness.mount.region(BODY_REGION).unwrap();
        assert!(body.starts_with(r#"<tr><td colspan="6" class="text-center"><div id="alert-"#));
        assert!(body.contains("Failed to load history ❌"));
    }
}
