//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the REST API.
//!
//! ## Module Organization
//!
//! - [`market`] - Asset list/detail and the market refresh trigger
//! - [`conversion`] - Conversions and the conversion history
//! - [`apr`] - Interest accrual projection
//! - [`error`] - Error bodies
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/crypto-conversion/
//! Content-Type: application/json
//! X-CSRFToken: <token from the csrftoken cookie>
//!
//! { "from_currency": "BTC", "to_currency": "ETH", "amount": 1.0 }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "from_currency": "BTC",
//!   "to_currency": "ETH",
//!   "amount": 1.0,
//!   "converted_amount": 15.0,
//!   "conversion_rate": 15.0
//! }
//! ```

pub mod apr;
pub mod conversion;
pub mod error;
pub mod market;

pub use apr::*;
pub use conversion::*;
pub use error::*;
pub use market::*;
