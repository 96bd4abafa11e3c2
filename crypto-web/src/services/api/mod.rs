//! # API Module
//!
//! Modular API client for the market data backend.
//!
//! - [`client`] - Authorized transport and the HTTP seam
//! - [`session`] - Session refresh and logout
//! - [`market`] - Asset list, detail and market refresh
//! - [`conversion`] - Conversions and conversion history
//! - [`apr`] - APR projection

pub mod apr;
pub mod client;
pub mod conversion;
pub mod market;
pub mod session;

pub use client::{ApiClient, HttpClient, HttpRequest, HttpResponse, Method, RequestOptions};
