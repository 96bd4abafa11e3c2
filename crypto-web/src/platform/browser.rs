//! # Browser Platform
//!
//! DOM, `fetch`, cookie and timer implementations of the platform seams,
//! plus the start-up wiring called from the wasm entry point.

use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, Event, EventTarget, HtmlDocument, HtmlFormElement, HtmlInputElement,
    RequestCredentials,
};

use super::{Binding, CookieJar, FormFields, MountPoint, Navigator, Timer};
use crate::app::AppContext;
use crate::config::AppConfig;
use crate::error::{ApiError, AppError, Result};
use crate::router::Router;
use crate::services::api::{HttpClient, HttpRequest, HttpResponse, Method};

const HIDDEN_CLASS: &str = "d-none";
const LOGOUT_SELECTOR: &str = ".logout-link";

fn js_error(context: &str, value: JsValue) -> AppError {
    AppError::Config(format!("{}: {:?}", context, value))
}

/// Attach `callback` for `event` on `target`. Listeners live as long as their
/// element; the closure itself is leaked.
fn listen(target: &EventTarget, event: &str, callback: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(callback);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("Failed to attach {} listener: {:?}", event, e);
    }
    closure.forget();
}

/// `fetch` through gloo-net.
pub struct BrowserHttp;

#[async_trait(?Send)]
impl HttpClient for BrowserHttp {
    async fn send(&self, request: HttpRequest) -> std::result::Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        if request.same_origin_credentials {
            builder = builder.credentials(RequestCredentials::SameOrigin);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let outgoing = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = outgoing
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

/// `document.cookie`.
pub struct DocumentCookies;

impl DocumentCookies {
    fn document(&self) -> Option<HtmlDocument> {
        gloo_utils::document().dyn_into::<HtmlDocument>().ok()
    }
}

impl CookieJar for DocumentCookies {
    fn cookie_header(&self) -> String {
        self.document()
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }

    fn expire(&self, name: &str) {
        let Some(doc) = self.document() else {
            return;
        };
        if let Err(e) = doc.set_cookie(&format!("{}=; Max-Age=0; path=/", name)) {
            log::warn!("Failed to expire cookie {}: {:?}", name, e);
        }
    }
}

/// `window.location` and `window.localStorage`.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn fragment(&self) -> String {
        gloo_utils::window().location().hash().unwrap_or_default()
    }

    fn set_fragment(&self, path: &str) {
        if let Err(e) = gloo_utils::window().location().set_hash(path) {
            log::error!("Failed to set location hash: {:?}", e);
        }
    }

    fn redirect(&self, href: &str) {
        if let Err(e) = gloo_utils::window().location().set_href(href) {
            log::error!("Failed to redirect to {}: {:?}", href, e);
        }
    }

    fn clear_local_storage(&self) {
        match gloo_utils::window().local_storage() {
            Ok(Some(storage)) => {
                if let Err(e) = storage.clear() {
                    log::warn!("Failed to clear local storage: {:?}", e);
                }
            }
            Ok(None) => {}
            Err(e) => log::warn!("Local storage unavailable: {:?}", e),
        }
    }
}

/// Renders into the element with the configured mount id.
pub struct DomMount {
    root_id: String,
}

impl DomMount {
    pub fn new(root_id: &str) -> Self {
        Self {
            root_id: root_id.to_string(),
        }
    }

    fn element(&self, id: &str) -> Option<Element> {
        let element = gloo_utils::document().get_element_by_id(id);
        if element.is_none() {
            log::warn!("Element #{} not found", id);
        }
        element
    }
}

fn form_fields(form: &HtmlFormElement) -> FormFields {
    let controls = form.elements();
    let mut fields = HashMap::new();
    for index in 0..controls.length() {
        let Some(input) = controls
            .item(index)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        else {
            continue;
        };
        let name = input.name();
        if !name.is_empty() {
            fields.insert(name, input.value());
        }
    }
    fields
}

impl MountPoint for DomMount {
    fn replace_root(&self, markup: &str) {
        if let Some(root) = self.element(&self.root_id) {
            root.set_inner_html(markup);
        }
    }

    fn replace_region(&self, region_id: &str, markup: &str) {
        if let Some(region) = self.element(region_id) {
            region.set_inner_html(markup);
        }
    }

    fn set_hidden(&self, region_id: &str, hidden: bool) {
        if let Some(region) = self.element(region_id) {
            if let Err(e) = region.class_list().toggle_with_force(HIDDEN_CLASS, hidden) {
                log::warn!("Failed to toggle #{}: {:?}", region_id, e);
            }
        }
    }

    fn bind(&self, binding: Binding) {
        let Some(element) = self.element(binding.target()) else {
            return;
        };

        match binding {
            Binding::Submit { handler, .. } => {
                let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
                    log::warn!("Submit binding target is not a form");
                    return;
                };
                let target = form.clone();
                listen(&target, "submit", move |event: Event| {
                    event.prevent_default();
                    spawn_local(handler(form_fields(&form)));
                });
            }
            Binding::Click { handler, .. } => {
                listen(&element, "click", move |event: Event| {
                    event.prevent_default();
                    spawn_local(handler(FormFields::new()));
                });
            }
            Binding::Uppercase { field, .. } => {
                let selector = format!("[name=\"{}\"]", field);
                let input = match element.query_selector(&selector) {
                    Ok(Some(found)) => found.dyn_into::<HtmlInputElement>().ok(),
                    _ => None,
                };
                let Some(input) = input else {
                    log::warn!("No input named {} to upper-case", field);
                    return;
                };
                let target = input.clone();
                listen(&target, "input", move |_| {
                    input.set_value(&input.value().to_uppercase());
                });
            }
        }
    }
}

/// `setTimeout` through gloo-timers.
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        TimeoutFuture::new(ms).boxed_local()
    }
}

/// Wire the browser platform, dispatch the current fragment and listen for
/// navigation and logout.
pub fn start() -> Result<()> {
    let config = AppConfig::from_env()?;
    config.validate()?;

    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("CryptoView client starting (api base {:?})", config.api_base);

    let mount = Rc::new(DomMount::new(&config.mount_id));
    let ctx = Rc::new(AppContext::new(
        config,
        Rc::new(BrowserHttp),
        Rc::new(DocumentCookies),
        Rc::new(BrowserNavigator),
        mount,
        Rc::new(BrowserTimer),
    ));
    let router = Router::new(ctx);

    spawn_local(router.dispatch());

    {
        let router = router.clone();
        listen(&gloo_utils::window(), "hashchange", move |_| {
            spawn_local(router.dispatch());
        });
    }

    let links = gloo_utils::document()
        .query_selector_all(LOGOUT_SELECTOR)
        .map_err(|e| js_error("Failed to query logout links", e))?;
    for index in 0..links.length() {
        let Some(link) = links.item(index) else {
            continue;
        };
        let router = router.clone();
        listen(&link, "click", move |event: Event| {
            event.prevent_default();
            let router = router.clone();
            spawn_local(async move { router.logout().await });
        });
    }

    Ok(())
}
