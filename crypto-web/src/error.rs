//! # Error Types
//!
//! Consolidated error handling for the client runtime.
//!
//! ## Error Categories
//!
//! - [`ApiError`]: outcome of a network call that did not yield data
//!   - **Unauthorized**: 401; the transport has already redirected to the
//!     re-authentication entry point. Never retried.
//!   - **RequestFailed**: any other non-success status, with the best-effort
//!     reason parsed from the body. Surfaced, not retried.
//!   - **Network**: the call could not complete at all.
//!   - **Decode**: a success body that did not parse.
//! - [`AppError`]: everything a view controller can fail with, including
//!   client-side **Validation** that stops a request from being issued.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use crypto_web::error::{ApiError, AppError};
//!
//! let err: AppError = ApiError::RequestFailed { status: 400, reason: "Invalid currency symbol".into() }.into();
//! assert_eq!(err.to_string(), "API error: Request failed: 400 (Invalid currency symbol)");
//! ```

use thiserror::Error;

/// Transport failure taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered 401. The redirect has already been issued.
    #[error("Unauthorized")]
    Unauthorized,

    /// Any other non-success status.
    #[error("Request failed: {status} ({reason})")]
    RequestFailed { status: u16, reason: String },

    /// The request never completed (connection refused, CORS, offline).
    #[error("Network error: {0}")]
    Network(String),

    /// The success body could not be parsed.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Client-side input validation error; no request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid build-time configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
