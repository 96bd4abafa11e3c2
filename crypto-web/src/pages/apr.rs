//! APR calculator page. Same submit/result shape as the converter, plus a
//! human-readable duration.

use std::rc::Rc;

use futures::FutureExt;
use shared::dto::apr::{AprRequest, AprResult};

use crate::app::AppContext;
use crate::components::{render_alert, render_pending, render_result_card, AlertKind};
use crate::error::Result;
use crate::platform::{ActionHandler, Binding, FormFields};
use crate::services::api::apr::calculate_apr;
use crate::state::ViewHandle;
use crate::utils::format::{format_duration, format_locale_number};

use super::form;

pub const FORM_ID: &str = "apr-form";
pub const RESULT_REGION: &str = "apr-result";

const FORM: &str = r#"<div class="container" style="padding-top: 0;">
    <div class="d-flex flex-column flex-md-row justify-content-center align-items-start gap-4 animated-form-container">
        <div class="apr-form card p-4 shadow w-100" style="max-width: 480px;">
            <form id="apr-form">
                <h2 class="form-title mb-4 text-center">APR Calculator</h2>
                <div class="mb-3">
                    <label for="crypto_symbol" class="form-label">Crypto Symbol</label>
                    <input name="crypto_symbol" class="form-control form-control-lg" placeholder="XRP" required />
                </div>
                <div class="mb-3">
                    <label for="principal" class="form-label">Principal (in crypto)</label>
                    <input type="number" name="principal" class="form-control form-control-lg" placeholder="Principal amount" step="any" required />
                </div>
                <div class="mb-3">
                    <label for="rate" class="form-label">APR (%)</label>
                    <input type="number" name="rate" class="form-control form-control-lg" placeholder="Annual rate" step="any" required />
                </div>
                <div class="mb-4">
                    <label for="time_years" class="form-label">Years</label>
                    <input type="number" name="time_years" class="form-control form-control-lg" placeholder="Years" step="any" required />
                </div>
                <button type="submit" class="btn btn-primary btn-lg w-100">Calculate</button>
            </form>
        </div>
        <div id="apr-result" class="apr-result d-none w-100" style="max-width: 500px;"></div>
    </div>
</div>"#;

pub fn render(ctx: Rc<AppContext>, view: ViewHandle) {
    if !view.render(FORM) {
        return;
    }
    view.bind(Binding::Uppercase {
        form_id: FORM_ID.to_string(),
        field: "crypto_symbol".to_string(),
    });

    let handler: ActionHandler = {
        let view = view.clone();
        Rc::new(move |fields| submit(ctx.clone(), view.clone(), fields).boxed_local())
    };
    view.bind(Binding::Submit {
        form_id: FORM_ID.to_string(),
        handler,
    });
}

fn parse_request(fields: &FormFields) -> Result<AprRequest> {
    Ok(AprRequest {
        crypto_symbol: form::symbol(fields, "crypto_symbol", "Crypto symbol")?,
        principal: form::positive(fields, "principal", "Principal")?,
        rate: form::non_negative(fields, "rate", "APR")?,
        time_years: form::positive(fields, "time_years", "Years")?,
    })
}

async fn submit(ctx: Rc<AppContext>, view: ViewHandle, fields: FormFields) {
    let ticket = view.begin_submission();
    ticket.set_hidden(RESULT_REGION, false);

    let request = match parse_request(&fields) {
        Ok(request) => request,
        Err(e) => {
            ticket.render_region(RESULT_REGION, &render_alert(&e.to_string(), AlertKind::Warning));
            return;
        }
    };

    ticket.render_region(RESULT_REGION, &render_pending("Calculating..."));

    match calculate_apr(&ctx.api, &request).await {
        Ok(result) => {
            ticket.render_region(RESULT_REGION, &result_markup(&request, &result));
        }
        Err(e) => {
            log::error!("APR calculation failed: {}", e);
            ticket.render_region(
                RESULT_REGION,
                &render_alert("APR Calculation failed ❌", AlertKind::Danger),
            );
        }
    }
}

fn result_markup(request: &AprRequest, result: &AprResult) -> String {
    let symbol = if result.crypto_symbol.trim().is_empty() {
        request.crypto_symbol.clone()
    } else {
        result.crypto_symbol.to_uppercase()
    };

    render_result_card(
        &format!("{} APR Results", symbol),
        &[
            (
                "Principal (Crypto)",
                format!("{} {}", format_locale_number(result.principal_in_crypto, 4, 4), symbol),
            ),
            (
                "Principal (USD)",
                format!("${}", format_locale_number(result.principal_in_usd, 2, 3)),
            ),
            ("APR", format!("{}%", format_locale_number(result.annual_rate_percent, 2, 3))),
            ("Time", format_duration(result.time_years)),
            (
                "Interest Earned",
                format!("{} {}", format_locale_number(result.interest_earned_in_crypto, 4, 4), symbol),
            ),
            (
                "Total Amount",
                format!("{} {}", format_locale_number(result.total_amount_in_crypto, 4, 4), symbol),
            ),
        ],
    )
}
