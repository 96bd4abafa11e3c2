//! CryptoView Web Client
//!
//! Single-page client for browsing market data, converting between assets,
//! projecting APR interest and reviewing past conversions. Content is swapped
//! by location fragment inside one static shell page.
//!
//! The runtime is platform-neutral; [`platform::browser`] (wasm only) wires it
//! to the DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod platform;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use error::{ApiError, AppError, Result};
pub use router::{Route, Router};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = platform::browser::start() {
        web_sys::console::error_1(&format!("CryptoView failed to start: {}", e).into());
    }
}
