//! # Application Configuration
//!
//! The client runs inside a browser, so overrides are captured at build time
//! from the environment of the `cargo build` / `trunk build` invocation:
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `CRYPTO_WEB_API_BASE` | *(empty: same origin)* | Prefix for every API path |
//! | `CRYPTO_WEB_LOG_LEVEL` | `info` | Console log level |
//! | `CRYPTO_WEB_BANNER_MS` | `3000` | Delay before transient banners clear |
//!
//! The remaining values are part of the server contract and only change in
//! tests.

use std::str::FromStr;

use crate::error::{AppError, Result};
use crate::utils::constants::{
    BANNER_DISMISS_MS, CSRF_COOKIE, CSRF_HEADER, LOGOUT_REDIRECT, MOUNT_ID, REAUTH_URL,
};

/// Client configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Prefix prepended to every API path. Empty means same origin.
    pub api_base: String,

    /// Cookie holding the anti-forgery token.
    pub csrf_cookie: String,

    /// Header the token is echoed back in.
    pub csrf_header: String,

    /// Hard-redirect target when the server answers 401.
    pub reauth_url: String,

    /// Hard-redirect target after logout.
    pub logout_redirect: String,

    /// Id of the element controllers render into.
    pub mount_id: String,

    /// How long transient banners stay visible.
    pub banner_dismiss_ms: u32,

    /// Console log level.
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            csrf_cookie: CSRF_COOKIE.to_string(),
            csrf_header: CSRF_HEADER.to_string(),
            reauth_url: REAUTH_URL.to_string(),
            logout_redirect: LOGOUT_REDIRECT.to_string(),
            mount_id: MOUNT_ID.to_string(),
            banner_dismiss_ms: BANNER_DISMISS_MS,
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Load configuration from build-time environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            option_env!("CRYPTO_WEB_API_BASE"),
            option_env!("CRYPTO_WEB_LOG_LEVEL"),
            option_env!("CRYPTO_WEB_BANNER_MS"),
        )
    }

    fn from_values(
        api_base: Option<&str>,
        log_level: Option<&str>,
        banner_ms: Option<&str>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base) = api_base {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level {
            config.log_level = log::Level::from_str(level).map_err(|_| {
                AppError::Config(format!("CRYPTO_WEB_LOG_LEVEL must be a log level, got {:?}", level))
            })?;
        }
        if let Some(ms) = banner_ms {
            config.banner_dismiss_ms = ms.parse().map_err(|e| {
                AppError::Config(format!("CRYPTO_WEB_BANNER_MS must be a valid number: {}", e))
            })?;
        }

        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.csrf_cookie.is_empty() || self.csrf_header.is_empty() {
            return Err(AppError::Config(
                "CSRF cookie and header names must not be empty".to_string(),
            ));
        }

        let is_navigable = |url: &str| {
            url.starts_with('/') || url.starts_with("http://") || url.starts_with("https://")
        };
        if !is_navigable(&self.reauth_url) || !is_navigable(&self.logout_redirect) {
            return Err(AppError::Config(
                "Redirect targets must be absolute paths or http(s) URLs".to_string(),
            ));
        }

        if self.banner_dismiss_ms == 0 {
            return Err(AppError::Config(
                "CRYPTO_WEB_BANNER_MS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Full URL for an API path.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}
