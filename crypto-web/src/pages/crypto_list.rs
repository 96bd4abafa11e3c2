//! # Asset List
//!
//! Market table plus the manual "Update Data" action. An update re-renders
//! only the table body and the "Last Updated" label, then shows a banner that
//! clears itself after the configured delay.

use std::rc::Rc;

use futures::FutureExt;
use shared::dto::market::Asset;

use crate::app::AppContext;
use crate::components::{render_alert, AlertKind};
use crate::error::ApiError;
use crate::platform::{ActionHandler, Binding, FormFields};
use crate::router::Route;
use crate::services::api::market::{fetch_crypto_list, update_market_data};
use crate::state::{SubmissionTicket, ViewHandle};
use crate::utils::format::{
    change_class, format_human_readable, format_percent_change, format_price, format_timestamp,
};
use crate::utils::html::escape_html;

pub const UPDATE_BUTTON_ID: &str = "update-data-btn";
pub const ROWS_REGION: &str = "market-rows";
pub const LAST_UPDATED_REGION: &str = "last-updated";
pub const MESSAGE_REGION: &str = "update-message";

const LOADING: &str = "<p>Loading crypto list...</p>";

pub async fn render(ctx: Rc<AppContext>, view: ViewHandle) {
    view.render(LOADING);

    match fetch_crypto_list(&ctx.api).await {
        Ok(assets) => {
            if view.render(&page_markup(&assets)) {
                view.bind(Binding::Click {
                    element_id: UPDATE_BUTTON_ID.to_string(),
                    handler: update_handler(ctx, view.clone()),
                });
            }
        }
        Err(e) => {
            log::error!("Failed to fetch crypto list: {}", e);
            view.render(&render_alert("Failed to fetch crypto list.", AlertKind::Danger));
        }
    }
}

fn update_handler(ctx: Rc<AppContext>, view: ViewHandle) -> ActionHandler {
    Rc::new(move |_: FormFields| refresh(ctx.clone(), view.begin_submission()).boxed_local())
}

async fn refresh(ctx: Rc<AppContext>, ticket: SubmissionTicket) {
    ticket.render_region(MESSAGE_REGION, "Updating...");

    let banner = match update_and_refetch(&ctx).await {
        Ok(assets) => {
            ticket.render_region(ROWS_REGION, &rows_markup(&assets));
            ticket.render_region(LAST_UPDATED_REGION, &last_updated_label(&assets));
            render_alert("Updated successfully.", AlertKind::Success)
        }
        Err(e) => {
            log::error!("Market update failed: {}", e);
            render_alert("Update failed.", AlertKind::Danger)
        }
    };

    if !ticket.render_region(MESSAGE_REGION, &banner) {
        return;
    }
    ctx.timer.sleep(ctx.config().banner_dismiss_ms).await;
    ticket.render_region(MESSAGE_REGION, "");
}

async fn update_and_refetch(ctx: &AppContext) -> Result<Vec<Asset>, ApiError> {
    update_market_data(&ctx.api).await?;
    fetch_crypto_list(&ctx.api).await
}

fn page_markup(assets: &[Asset]) -> String {
    format!(
        r#"<div class="page-header compact-header d-flex justify-content-between align-items-center mb-3">
    <div><button id="{button}" class="btn btn-primary btn-sm update-btn">Update Data</button></div>
    <div class="text-end"><span id="{label_id}" class="text-muted small">{label}</span></div>
</div>
<div id="{message}" class="mt-2 text-center text-muted"></div>
<div class="table-responsive">
    <table class="table table-hover" style="width: 100%;">
        <thead class="thead-light">
            <tr>
                <th>Name</th>
                <th>Symbol</th>
                <th class="text-end">Price</th>
                <th class="text-end">Change (24h)</th>
                <th class="text-end">Market Cap</th>
                <th class="text-end">Volume (24h)</th>
                <th class="text-end">Circulating Supply</th>
            </tr>
        </thead>
        <tbody id="{rows_id}">{rows}</tbody>
    </table>
</div>"#,
        button = UPDATE_BUTTON_ID,
        label_id = LAST_UPDATED_REGION,
        label = last_updated_label(assets),
        message = MESSAGE_REGION,
        rows_id = ROWS_REGION,
        rows = rows_markup(assets),
    )
}

fn last_updated_label(assets: &[Asset]) -> String {
    let when = assets
        .first()
        .map(|asset| format_timestamp(&asset.last_updated))
        .unwrap_or_else(|| "N/A".to_string());
    format!("Last Updated: {}", escape_html(&when))
}

fn rows_markup(assets: &[Asset]) -> String {
    assets.iter().map(row_markup).collect()
}

fn row_markup(asset: &Asset) -> String {
    let href = Route::CryptoDetail(asset.symbol.clone()).href();
    format!(
        r#"<tr><td><a href="{href}">{name}</a></td><td>{symbol}</td><td class="text-end">${price}</td><td class="text-end {class}">{change}</td><td class="text-end">{cap}</td><td class="text-end">{volume}</td><td class="text-end">{supply}</td></tr>"#,
        href = escape_html(&href),
        name = escape_html(&asset.name),
        symbol = escape_html(&asset.display_symbol()),
        price = format_price(asset.price_usd),
        class = change_class(asset.percent_change_24h),
        change = format_percent_change(asset.percent_change_24h),
        cap = format_human_readable(asset.market_cap),
        volume = format_human_readable(asset.volume_24h),
        supply = format_human_readable(asset.circulating_supply),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::Method;
    use crate::testing::{asset_json, Harness};

    fn list_body(assets: &[(&str, &str, &str)]) -> String {
        let items: Vec<String> = assets
            .iter()
            .map(|(symbol, name, price)| asset_json(symbol, name, price))
            .collect();
        format!("[{}]", items.join(","))
    }

    #[tokio::test]
    async fn test_renders_table() {
        let harness = Harness::new();
        harness.http.respond(
            Method::Get,
            "/api/crypto-list/",
            200,
            &list_body(&[("btc", "Bitcoin", "64000.7"), ("shib", "Shiba Inu", "0.00001234")]),
        );

        render(harness.ctx.clone(), harness.ctx.issue_view()).await;

        let root = harness.mount.root();
        assert!(root.contains(r##"<a href="#/crypto/btc">Bitcoin</a>"##));
        assert!(root.contains("<td>BTC</td>"));
        assert!(root.contains("$64,001"));
        assert!(root.contains("$0.00001234"));
        assert!(root.contains(r#"class="text-end text-danger">-2.50%"#));
        assert!(root.contains("1.25T"));
        assert!(root.contains("35.00B"));
        assert!(root.contains("19.70M"));
        assert!(root.contains("Last Updated: "));
        assert!(harness.mount.has_binding(UPDATE_BUTTON_ID));
    }

    #[tokio::test]
    async fn test_empty_list_label() {
        let harness = Harness::new();
        harness.http.respond(Method::Get, "/api/crypto-list/", 200, "[]");

        render(harness.ctx.clone(), harness.ctx.issue_view()).await;

        assert!(harness.mount.root().contains("Last Updated: N/A"));
    }

    #[tokio::test]
    async fn test_failure_replaces_table() {
        let harness = Harness::new();
        harness.http.fail(Method::Get, "/api/crypto-list/", ApiError::Network("offline".into()));

        render(harness.ctx.clone(), harness.ctx.issue_view()).await;

        let root = harness.mount.root();
        assert!(root.contains("alert-danger"));
        assert!(root.contains("Failed to fetch crypto list."));
        assert!(!root.contains("<table"));
        assert!(!harness.mount.has_binding(UPDATE_BUTTON_ID));
    }

    #[tokio::test]
    async fn test_update_rerenders_rows_and_clears_banner() {
        let harness = Harness::new();
        harness.http.respond(
            Method::Get,
            "/api/crypto-list/",
            200,
            &list_body(&[("btc", "Bitcoin", "64000")]),
        );
        harness.http.respond(
            Method::Get,
            "/api/crypto-list/",
            200,
            &list_body(&[("btc", "Bitcoin", "65000"), ("eth", "Ethereum", "3000")]),
        );
        harness
            .http
            .respond(Method::Get, "/api/update-data/", 200, r#"{"updated_cryptos": ["BTC"]}"#);
        render(harness.ctx.clone(), harness.ctx.issue_view()).await;
        let release = harness.timer.hold();

        let update = harness.mount.click(UPDATE_BUTTON_ID);
        futures::pin_mut!(update);
        assert!((&mut update).now_or_never().is_none());

        let rows = harness.mount.region(ROWS_REGION).unwrap();
        assert!(rows.contains("$65,000"));
        assert!(rows.contains("Ethereum"));
        assert!(harness
            .mount
            .region(LAST_UPDATED_REGION)
            .unwrap()
            .starts_with("Last Updated: "));
        assert!(harness.mount.region(MESSAGE_REGION).unwrap().contains("Updated successfully."));
        assert_eq!(harness.timer.sleeps(), vec![3000]);

        let _ = release.send(());
        update.await;
        assert_eq!(harness.mount.region(MESSAGE_REGION).as_deref(), Some(""));
        assert_eq!(harness.http.request_count("/api/update-data/"), 1);
        assert_eq!(harness.mount.root_writes(), 2);
    }

    #[tokio::test]
    async fn test_update_failure_banner() {
        let harness = Harness::new();
        harness.http.respond(
            Method::Get,
            "/api/crypto-list/",
            200,
            &list_body(&[("btc", "Bitcoin", "64000")]),
        );
        harness.http.respond(Method::Get, "/api/update-data/", 503, "");
        render(harness.ctx.clone(), harness.ctx.issue_view()).await;
        let release = harness.timer.hold();

        let update = harness.mount.click(UPDATE_BUTTON_ID);
        futures::pin_mut!(update);
        assert!((&mut update).now_or_never().is_none());

        assert!(harness.mount.region(MESSAGE_REGION).unwrap().contains("Update failed."));
        assert!(harness.mount.region(ROWS_REGION).is_none());
        assert_eq!(harness.http.request_count("/api/crypto-list/"), 1);

        drop(release);
        update.await;
        assert_eq!(harness.mount.region(MESSAGE_REGION).as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_banner_clear_dropped_after_navigation() {
        let harness = Harness::new();
        harness.http.respond(Method::Get, "/api/crypto-list/", 200, "[]");
        harness.http.respond(Method::Get, "/api/update-data/", 200, "{}");
        render(harness.ctx.clone(), harness.ctx.issue_view()).await;
        let release = harness.timer.hold();

        let update = harness.mount.click(UPDATE_BUTTON_ID);
        futures::pin_mut!(update);
        assert!((&mut update).now_or_never().is_none());

        crate::pages::convert::render(harness.ctx.clone(), harness.ctx.issue_view());
        let _ = release.send(());
        update.await;

        assert!(harness.mount.region(MESSAGE_REGION).is_none());
        assert!(harness.mount.root().contains("convert-form"));
    }
}
