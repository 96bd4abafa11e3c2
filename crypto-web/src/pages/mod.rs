//! # View Controllers
//!
//! One controller per route. Each renders a loading state, fetches through
//! the API client, then renders the result or a scoped failure notice. All
//! writes go through the [`ViewHandle`] handed over by the router.

use std::rc::Rc;

use crate::app::AppContext;
use crate::router::Route;
use crate::state::ViewHandle;

pub mod apr;
pub mod convert;
pub mod crypto_detail;
pub mod crypto_list;
pub mod history;

mod form;

/// Run the controller for `route`.
pub async fn mount(route: Route, ctx: Rc<AppContext>, view: ViewHandle) {
    match route {
        Route::CryptoList => crypto_list::render(ctx, view).await,
        Route::CryptoDetail(symbol) => crypto_detail::render(ctx, view, symbol).await,
        Route::Convert => convert::render(ctx, view),
        Route::History => history::render(ctx, view).await,
        Route::Apr => apr::render(ctx, view),
    }
}
