//! # Platform Seams
//!
//! Every browser facility the runtime touches is reached through one of these
//! traits. The wasm build wires them to the DOM in [`browser`]; tests wire
//! them to in-memory doubles.
//!
//! - [`MountPoint`] - the page region controllers render into
//! - [`Navigator`] - location fragment, hard redirects, local storage
//! - [`CookieJar`] - the readable cookie string
//! - [`Timer`] - delays for transient banners
//!
//! The HTTP seam lives with the transport in
//! [`crate::services::api::client::HttpClient`].

use std::collections::HashMap;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

#[cfg(target_arch = "wasm32")]
pub mod browser;

/// Named values of a submitted form (`name` attribute → current value).
pub type FormFields = HashMap<String, String>;

/// Follow-up interaction. The platform spawns the returned future as one
/// independent flow per event.
pub type ActionHandler = Rc<dyn Fn(FormFields) -> LocalBoxFuture<'static, ()>>;

/// Input handler attached to freshly rendered markup.
#[derive(Clone)]
pub enum Binding {
    /// Form submission; default submission is suppressed and the form's named
    /// fields are handed to the handler.
    Submit { form_id: String, handler: ActionHandler },
    /// Button click; the handler receives no fields.
    Click { element_id: String, handler: ActionHandler },
    /// Upper-case a text input's value as the user types.
    Uppercase { form_id: String, field: String },
}

impl Binding {
    /// Id of the element the binding attaches to.
    pub fn target(&self) -> &str {
        match self {
            Binding::Submit { form_id, .. } => form_id,
            Binding::Click { element_id, .. } => element_id,
            Binding::Uppercase { form_id, .. } => form_id,
        }
    }
}

/// The single page-level region controllers render into.
pub trait MountPoint {
    /// Replace everything under the mount element. Drops sub-regions and
    /// bindings that lived in the previous markup.
    fn replace_root(&self, markup: &str);

    /// Replace the content of one element (by id) inside the current markup.
    fn replace_region(&self, region_id: &str, markup: &str);

    /// Show or hide an element (by id) inside the current markup.
    fn set_hidden(&self, region_id: &str, hidden: bool);

    /// Attach an input handler to the current markup.
    fn bind(&self, binding: Binding);
}

/// Location and storage access.
pub trait Navigator {
    /// Raw location fragment, including the leading `#` if present.
    fn fragment(&self) -> String;

    /// Set the location fragment to a route path (`"/convert"`).
    fn set_fragment(&self, path: &str);

    /// Leave the page for `href`.
    fn redirect(&self, href: &str);

    /// Drop everything in client-side local storage.
    fn clear_local_storage(&self);
}

/// The script-readable cookie store.
pub trait CookieJar {
    /// `name=value; name2=value2` string of readable cookies.
    fn cookie_header(&self) -> String;

    /// Expire a cookie at path `/`.
    fn expire(&self, name: &str);
}

/// Delays.
pub trait Timer {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;
}
