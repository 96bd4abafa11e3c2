//! # Fragment Router
//!
//! Maps the location fragment to a page controller. Every dispatch issues a
//! new [`ViewHandle`](crate::state::ViewHandle), so whatever an earlier view
//! still has in flight can no longer touch the mount point.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::app::AppContext;
use crate::pages;
use crate::utils::url::{encode_segment, normalize_fragment};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    CryptoList,
    CryptoDetail(String),
    Convert,
    History,
    Apr,
}

impl Route {
    /// Resolve a raw fragment (`"#/convert"`, `""`, ...). Unknown paths fall
    /// back to the asset list.
    pub fn from_fragment(fragment: &str) -> Self {
        let path = normalize_fragment(fragment);

        if let Some(rest) = path.strip_prefix("/crypto/") {
            let symbol = rest.trim_end_matches('/');
            let symbol = urlencoding::decode(symbol)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| symbol.to_string());
            if symbol.is_empty() {
                return Route::CryptoList;
            }
            return Route::CryptoDetail(symbol);
        }

        match path {
            "/" | "/crypto-list" => Route::CryptoList,
            "/convert" => Route::Convert,
            "/history" => Route::History,
            "/apr" => Route::Apr,
            other => {
                log::debug!("No route for {:?}; showing the asset list", other);
                Route::CryptoList
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::CryptoList => "/crypto-list".to_string(),
            Route::CryptoDetail(symbol) => format!("/crypto/{}", encode_segment(symbol)),
            Route::Convert => "/convert".to_string(),
            Route::History => "/history".to_string(),
            Route::Apr => "/apr".to_string(),
        }
    }

    /// Link target for markup.
    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }
}

#[derive(Clone)]
pub struct Router {
    ctx: Rc<AppContext>,
}

impl Router {
    pub fn new(ctx: Rc<AppContext>) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &Rc<AppContext> {
        &self.ctx
    }

    /// Dispatch the navigator's current fragment.
    pub fn dispatch(&self) -> LocalBoxFuture<'static, ()> {
        let fragment = self.ctx.navigator.fragment();
        self.dispatch_fragment(&fragment)
    }

    /// Dispatch `fragment`. The new view takes the mount point immediately;
    /// the returned future drives its controller.
    pub fn dispatch_fragment(&self, fragment: &str) -> LocalBoxFuture<'static, ()> {
        let route = Route::from_fragment(fragment);
        let view = self.ctx.issue_view();
        log::debug!("Dispatching {:?} as view {}", route, view.generation());

        pages::mount(route, self.ctx.clone(), view).boxed_local()
    }

    /// Log out. The hard redirect issued by the session layer replaces the
    /// page, so nothing is dispatched here.
    pub async fn logout(&self) {
        self.ctx.api.logout().await;
    }

    /// Point the fragment at `route` and dispatch it.
    pub fn navigate(&self, route: &Route) -> LocalBoxFuture<'static, ()> {
        let path = route.path();
        self.ctx.navigator.set_fragment(&path);
        self.dispatch_fragment(&path)
    }
}
