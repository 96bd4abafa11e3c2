//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the browser client and the market
//! data REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::market`]**: Asset listing, detail and market refresh DTOs
//!   - **[`dto::conversion`]**: Conversion request/result and history entries
//!   - **[`dto::apr`]**: APR projection request/result
//!   - **[`dto::error`]**: Error bodies returned on non-success statuses
//! - **[`utils`]**: Lenient decimal deserialization helpers
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in Rust and JSON.
//! - Decimal columns arrive either as JSON numbers or as decimal strings
//!   (`"64123.50000000"`); both decode to `f64` through
//!   [`utils::deserialize_decimal`].
//! - Unknown fields (database ids and the like) are ignored.
//!
//! ## Usage in the Client
//!
//! ```rust
//! use shared::dto::market::Asset;
//!
//! let body = r#"{
//!     "symbol": "btc", "name": "Bitcoin", "price_usd": "64123.50000000",
//!     "percent_change_24h": -1.25, "market_cap": 1260000000000,
//!     "volume_24h": 35000000000, "circulating_supply": 19700000,
//!     "last_updated": "2024-05-01T12:00:00Z"
//! }"#;
//! let asset: Asset = serde_json::from_str(body).unwrap();
//! assert_eq!(asset.display_symbol(), "BTC");
//! assert_eq!(asset.price_usd, 64123.5);
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
