//! Single asset page reached through `#/crypto/{symbol}`.

use std::rc::Rc;

use shared::dto::market::Asset;

use crate::app::AppContext;
use crate::components::{render_alert, AlertKind};
use crate::router::Route;
use crate::services::api::market::fetch_crypto_detail;
use crate::state::ViewHandle;
use crate::utils::format::{
    change_class, format_locale_number, format_percent_change, format_price, format_timestamp,
};
use crate::utils::html::escape_html;

pub async fn render(ctx: Rc<AppContext>, view: ViewHandle, symbol: String) {
    view.render(&format!(
        r#"<p class="text-center">Loading {} details...</p>"#,
        escape_html(&symbol)
    ));

    match fetch_crypto_detail(&ctx.api, &symbol).await {
        Ok(asset) => {
            view.render(&detail_markup(&asset));
        }
        Err(e) => {
            log::error!("Failed to load details for {}: {}", symbol, e);
            view.render(&render_alert(
                &format!("Failed to load details for {} ❌", symbol),
                AlertKind::Danger,
            ));
        }
    }
}

fn description_markup(asset: &Asset) -> String {
    match asset.description() {
        Some(text) => format!(
            r#"<p class="lead description-style text-center">{}</p>"#,
            escape_html(text)
        ),
        None => format!(
            r#"<p class="lead description-style text-center mw300">{} is a digital currency that operates without a central bank or single administrator. It utilizes decentralized technology, typically blockchain, to enable secure and transparent peer-to-peer transactions. Aiming to offer an alternative to traditional financial systems.</p>"#,
            escape_html(&asset.name)
        ),
    }
}

fn item(label: &str, value: &str) -> String {
    format!(
        r#"<li class="list-group-item d-flex justify-content-between align-items-center"><strong>{}:</strong><span>{}</span></li>"#,
        label, value
    )
}

fn detail_markup(asset: &Asset) -> String {
    let name = escape_html(&asset.name);
    let symbol = escape_html(&asset.display_symbol());

    let items = [
        item("Price", &format!("${}", format_price(asset.price_usd))),
        item("Market Cap", &format!("${}", format_locale_number(asset.market_cap, 0, 2))),
        item("Volume (24h)", &format!("${}", format_locale_number(asset.volume_24h, 0, 2))),
        item(
            "Change (24h)",
            &format!(
                r#"<span class="{}">{}</span>"#,
                change_class(asset.percent_change_24h),
                format_percent_change(asset.percent_change_24h)
            ),
        ),
        item(
            "Circulating Supply",
            &format!("{} {}", format_locale_number(asset.circulating_supply, 0, 2), symbol),
        ),
    ]
    .concat();

    format!(
        r#"<a href="{back}" class="back-button">← Back to Cryptocurrencies</a>
<div class="detail-page-content">
    <h2 class="text-center mb-3">{name} ({symbol})</h2>
    <div class="mb-4">{description}</div>
    <div class="card mx-auto" style="max-width: 600px;">
        <div class="card-body">
            <h5 class="card-title text-center">{name} Overview</h5>
            <ul class="list-group list-group-flush">{items}<li class="list-group-item text-center small text-muted">Last Updated: {updated}</li></ul>
        </div>
    </div>
</div>"#,
        back = Route::CryptoList.href(),
        name = name,
        symbol = symbol,
        description = description_markup(asset),
        items = items,
        updated = escape_html(&format_timestamp(&asset.last_updated)),
    )
}
