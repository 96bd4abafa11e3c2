//! # Convert
//!
//! Conversion form. Each submission takes a fresh ticket; only the latest
//! submission of the current view may write the result region.

use std::rc::Rc;

use futures::FutureExt;
use shared::dto::conversion::{ConversionRequest, ConversionResult};

use crate::app::AppContext;
use crate::components::{render_alert, render_pending, render_result_card, AlertKind};
use crate::error::Result;
use crate::platform::{ActionHandler, Binding, FormFields};
use crate::services::api::conversion::convert;
use crate::state::ViewHandle;
use crate::utils::format::format_locale_number;

use super::form;

pub const FORM_ID: &str = "convert-form";
pub const RESULT_REGION: &str = "conversion-result";

const FORM: &str = r#"<div class="container">
    <div class="d-flex flex-column flex-md-row justify-content-center align-items-start gap-4 animated-form-container">
        <div class="conversion-form card p-4 shadow w-100" style="max-width: 480px;">
            <form id="convert-form">
                <h2 class="form-title mb-4 text-center">Crypto Converter</h2>
                <div class="mb-3">
                    <label for="from_currency" class="form-label">From</label>
                    <input type="text" name="from_currency" class="form-control form-control-lg" placeholder="BTC" required />
                </div>
                <div class="mb-3">
                    <label for="to_currency" class="form-label">To</label>
                    <input type="text" name="to_currency" class="form-control form-control-lg" placeholder="ETH" required />
                </div>
                <div class="mb-4">
                    <label for="amount" class="form-label">Amount</label>
                    <input type="number" name="amount" class="form-control form-control-lg" placeholder="Enter amount" step="any" required />
                </div>
                <button type="submit" class="btn btn-primary btn-lg w-100">Convert</button>
            </form>
        </div>
        <div id="conversion-result" class="conversion-result d-none w-100" style="max-width: 500px;"></div>
    </div>
</div>"#;

pub fn render(ctx: Rc<AppContext>, view: ViewHandle) {
    if !view.render(FORM) {
        return;
    }
    for field in ["from_currency", "to_currency"] {
        view.bind(Binding::Uppercase {
            form_id: FORM_ID.to_string(),
            field: field.to_string(),
        });
    }

    let handler: ActionHandler = {
        let view = view.clone();
        Rc::new(move |fields| submit(ctx.clone(), view.clone(), fields).boxed_local())
    };
    view.bind(Binding::Submit {
        form_id: FORM_ID.to_string(),
        handler,
    });
}

fn parse_request(fields: &FormFields) -> Result<ConversionRequest> {
    Ok(ConversionRequest {
        from_currency: form::symbol(fields, "from_currency", "From currency")?,
        to_currency: form::symbol(fields, "to_currency", "To currency")?,
        amount: form::positive(fields, "amount", "Amount")?,
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

    match convert(&ctx.api, &request).await {
        Ok(result) => {
            ticket.render_region(RESULT_REGION, &result_markup(&request, &result));
        }
        Err(e) => {
            log::error!("Conversion failed: {}", e);
            ticket.render_region(
                RESULT_REGION,
                &render_alert("Conversion failed ❌", AlertKind::Danger),
            );
        }
    }
}

fn echoed_or(echoed: &str, sent: &str) -> String {
    if echoed.trim().is_empty() {
        sent.to_string()
    } else {
        echoed.to_uppercase()
    }
}

fn result_markup(request: &ConversionRequest, result: &ConversionResult) -> String {
    let from = echoed_or(&result.from_currency, &request.from_currency);
    let to = echoed_or(&result.to_currency, &request.to_currency);
    let amount = format_locale_number(request.amount, 4, 4);
    let converted = format_locale_number(result.converted_amount, 4, 4);
    let rate = format_locale_number(result.conversion_rate, 4, 4);

    render_result_card(
        &format!("{} ➝ {}", from, to),
        &[
            ("Amount", format!("{} {}", amount, from)),
            ("Converted", format!("{} {}", converted, to)),
            ("Rate", format!("1 {} = {} {}", from, rate, to)),
        ],
    )
}
