//! In-memory doubles for the platform seams, shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::app::AppContext;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::platform::{ActionHandler, Binding, CookieJar, FormFields, MountPoint, Navigator, Timer};
use crate::services::api::{HttpClient, HttpRequest, HttpResponse, Method};

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "",
    }
}

type Reply = Result<HttpResponse, ApiError>;

/// Scripted HTTP backend. Replies are queued per `(method, url)`; the last
/// queued reply keeps answering once the queue is drained. Unscripted routes
/// answer 404.
#[derive(Default)]
pub struct StubHttp {
    routes: RefCell<HashMap<(Method, String), VecDeque<Reply>>>,
    holds: RefCell<HashMap<(Method, String), VecDeque<oneshot::Receiver<()>>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl StubHttp {
    pub fn respond(&self, method: Method, url: &str, status: u16, body: &str) {
        self.push(
            method,
            url,
            Ok(HttpResponse {
                status,
                status_text: reason_phrase(status).to_string(),
                body: body.to_string(),
            }),
        );
    }

    pub fn fail(&self, method: Method, url: &str, error: ApiError) {
        self.push(method, url, Err(error));
    }

    /// Hold the next request to `url` until the returned sender fires (or is
    /// dropped).
    pub fn hold(&self, method: Method, url: &str) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.holds
            .borrow_mut()
            .entry((method, url.to_string()))
            .or_default()
            .push_back(gate);
        release
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests.borrow().iter().filter(|r| r.url == url).count()
    }

    fn push(&self, method: Method, url: &str, reply: Reply) {
        self.routes
            .borrow_mut()
            .entry((method, url.to_string()))
            .or_default()
            .push_back(reply);
    }

    fn next_reply(&self, key: &(Method, String)) -> Reply {
        let mut routes = self.routes.borrow_mut();
        match routes.get_mut(key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_else(not_found),
            Some(queue) => queue.front().cloned().unwrap_or_else(not_found),
            None => not_found(),
        }
    }
}

fn not_found() -> Reply {
    Ok(HttpResponse {
        status: 404,
        status_text: reason_phrase(404).to_string(),
        body: String::new(),
    })
}

#[async_trait(?Send)]
impl HttpClient for StubHttp {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let key = (request.method, request.url.clone());
        self.requests.borrow_mut().push(request);

        let gate = self
            .holds
            .borrow_mut()
            .get_mut(&key)
            .and_then(|gates| gates.pop_front());
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        self.next_reply(&key)
    }
}

/// Cookie store backed by a plain `name=value; ...` string.
#[derive(Default)]
pub struct MemoryCookies {
    header: RefCell<String>,
    expired: RefCell<Vec<String>>,
}

impl MemoryCookies {
    pub fn set(&self, header: &str) {
        *self.header.borrow_mut() = header.to_string();
    }

    pub fn expired(&self) -> Vec<String> {
        self.expired.borrow().clone()
    }
}

impl CookieJar for MemoryCookies {
    fn cookie_header(&self) -> String {
        self.header.borrow().clone()
    }

    fn expire(&self, name: &str) {
        let kept: Vec<String> = self
            .header
            .borrow()
            .split(';')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .filter(|pair| pair.split('=').next() != Some(name))
            .map(str::to_string)
            .collect();
        *self.header.borrow_mut() = kept.join("; ");
        self.expired.borrow_mut().push(name.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    fragment: RefCell<String>,
    redirects: RefCell<Vec<String>>,
    storage_cleared: Cell<bool>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }

    pub fn storage_cleared(&self) -> bool {
        self.storage_cleared.get()
    }

    /// Simulate the user editing the address bar.
    pub fn visit(&self, fragment: &str) {
        *self.fragment.borrow_mut() = fragment.to_string();
    }
}

impl Navigator for RecordingNavigator {
    fn fragment(&self) -> String {
        self.fragment.borrow().clone()
    }

    fn set_fragment(&self, path: &str) {
        *self.fragment.borrow_mut() = format!("#{}", path);
    }

    fn redirect(&self, href: &str) {
        self.redirects.borrow_mut().push(href.to_string());
    }

    fn clear_local_storage(&self) {
        self.storage_cleared.set(true);
    }
}

/// Mount point that keeps the root markup, region contents and bindings in
/// memory. Regions only exist once written through `replace_region`.
#[derive(Default)]
pub struct MemoryMount {
    root: RefCell<String>,
    regions: RefCell<HashMap<String, String>>,
    hidden: RefCell<HashMap<String, bool>>,
    bindings: RefCell<Vec<Binding>>,
    root_writes: Cell<usize>,
}

impl MemoryMount {
    pub fn root(&self) -> String {
        self.root.borrow().clone()
    }

    pub fn region(&self, id: &str) -> Option<String> {
        self.regions.borrow().get(id).cloned()
    }

    pub fn hidden(&self, id: &str) -> Option<bool> {
        self.hidden.borrow().get(id).copied()
    }

    pub fn root_writes(&self) -> usize {
        self.root_writes.get()
    }

    /// Fields bound for live upper-casing, as `(form_id, field)`.
    pub fn uppercase_fields(&self) -> Vec<(String, String)> {
        self.bindings
            .borrow()
            .iter()
            .filter_map(|binding| match binding {
                Binding::Uppercase { form_id, field } => Some((form_id.clone(), field.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn has_binding(&self, target: &str) -> bool {
        self.bindings.borrow().iter().any(|b| b.target() == target)
    }

    /// Run the submit handler bound to `form_id` to completion.
    pub async fn submit(&self, form_id: &str, fields: FormFields) {
        let handler = self.handler(|binding| match binding {
            Binding::Submit { form_id: id, handler } if id == form_id => Some(handler.clone()),
            _ => None,
        });
        match handler {
            Some(handler) => handler(fields).await,
            None => panic!("no submit binding for #{}", form_id),
        }
    }

    /// Start the submit handler bound to `form_id` without awaiting it.
    pub fn start_submit(&self, form_id: &str, fields: FormFields) -> LocalBoxFuture<'static, ()> {
        let handler = self.handler(|binding| match binding {
            Binding::Submit { form_id: id, handler } if id == form_id => Some(handler.clone()),
            _ => None,
        });
        match handler {
            Some(handler) => handler(fields),
            None => panic!("no submit binding for #{}", form_id),
        }
    }

    /// Run the click handler bound to `element_id` to completion.
    pub async fn click(&self, element_id: &str) {
        let handler = self.handler(|binding| match binding {
            Binding::Click { element_id: id, handler } if id == element_id => Some(handler.clone()),
            _ => None,
        });
        match handler {
            Some(handler) => handler(FormFields::new()).await,
            None => panic!("no click binding for #{}", element_id),
        }
    }

    fn handler(&self, pick: impl Fn(&Binding) -> Option<ActionHandler>) -> Option<ActionHandler> {
        self.bindings.borrow().iter().find_map(pick)
    }
}

impl MountPoint for MemoryMount {
    fn replace_root(&self, markup: &str) {
        *self.root.borrow_mut() = markup.to_string();
        self.root_writes.set(self.root_writes.get() + 1);
        self.regions.borrow_mut().clear();
        self.hidden.borrow_mut().clear();
        self.bindings.borrow_mut().clear();
    }

    fn replace_region(&self, region_id: &str, markup: &str) {
        self.regions
            .borrow_mut()
            .insert(region_id.to_string(), markup.to_string());
    }

    fn set_hidden(&self, region_id: &str, hidden: bool) {
        self.hidden.borrow_mut().insert(region_id.to_string(), hidden);
    }

    fn bind(&self, binding: Binding) {
        self.bindings.borrow_mut().push(binding);
    }
}

/// Timer whose sleeps complete immediately unless a gate was queued.
#[derive(Default)]
pub struct InstantTimer {
    sleeps: RefCell<Vec<u32>>,
    gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
}

impl InstantTimer {
    pub fn sleeps(&self) -> Vec<u32> {
        self.sleeps.borrow().clone()
    }

    /// Make the next sleep wait for the returned sender.
    pub fn hold(&self) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.gates.borrow_mut().push_back(gate);
        release
    }
}

impl Timer for InstantTimer {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        self.sleeps.borrow_mut().push(ms);
        match self.gates.borrow_mut().pop_front() {
            Some(gate) => gate.map(|_| ()).boxed_local(),
            None => futures::future::ready(()).boxed_local(),
        }
    }
}

/// A fully wired context over in-memory doubles.
pub struct Harness {
    pub ctx: Rc<AppContext>,
    pub http: Rc<StubHttp>,
    pub cookies: Rc<MemoryCookies>,
    pub navigator: Rc<RecordingNavigator>,
    pub mount: Rc<MemoryMount>,
    pub timer: Rc<InstantTimer>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_cookies("")
    }

    pub fn with_cookies(header: &str) -> Self {
        let http = Rc::new(StubHttp::default());
        let cookies = Rc::new(MemoryCookies::default());
        cookies.set(header);
        let navigator = Rc::new(RecordingNavigator::default());
        let mount = Rc::new(MemoryMount::default());
        let timer = Rc::new(InstantTimer::default());

        let ctx = Rc::new(AppContext::new(
            AppConfig::default(),
            http.clone(),
            cookies.clone(),
            navigator.clone(),
            mount.clone(),
            timer.clone(),
        ));

        Self {
            ctx,
            http,
            cookies,
            navigator,
            mount,
            timer,
        }
    }
}

pub fn fields(pairs: &[(&str, &str)]) -> FormFields {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Serialized asset the way the backend emits it (decimals as strings).
pub fn asset_json(symbol: &str, name: &str, price: &str) -> String {
    format!(
        r#"{{"id": 1, "symbol": "{}", "name": "{}", "price_usd": "{}",
            "percent_change_24h": "-2.50", "market_cap": "1250000000000",
            "volume_24h": "35000000000", "circulating_supply": "19700000",
            "last_updated": "2024-05-01T12:30:00Z"}}"#,
        symbol, name, price
    )
}

pub fn apr_json() -> String {
    r#"{
        "crypto_symbol": "XRP",
        "principal_in_crypto": "1000.000000",
        "principal_in_usd": "520.00",
        "annual_rate_percent": "5.00",
        "time_years": "2.50",
        "total_amount_in_crypto": "1125.0000",
        "interest_earned_in_crypto": "125.0000"
    }"#
    .to_string()
}
