//! # API Client
//!
//! Authorized transport for every backend call.
//!
//! Each request carries `Content-Type: application/json`, the CSRF token read
//! fresh from the cookie jar (when present) and same-origin credentials. The
//! response is classified once, here:
//!
//! - `401` → hard redirect to the re-authentication entry point, then
//!   [`ApiError::Unauthorized`]. No data reaches the caller.
//! - other non-success → [`ApiError::RequestFailed`] with the best-effort
//!   reason from the body, never a redirect.
//! - success → the parsed JSON body.
//!
//! There is no retry: [`ApiClient::refresh_session`](super::session) exists but
//! is not part of this path.

use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use shared::dto::error::error_reason;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::platform::{CookieJar, Navigator};
use crate::state::SessionState;
use crate::utils::url::cookie_value;

const CONTENT_TYPE: &str = "Content-Type";
const JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A fully decorated outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Always `true` for requests built by [`ApiClient`]: cookies are sent
    /// ambiently for same-origin calls.
    pub same_origin_credentials: bool,
}

impl HttpRequest {
    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Reason from the body, else the status reason phrase.
    pub fn reason(&self) -> String {
        error_reason(&self.body).unwrap_or_else(|| {
            if self.status_text.is_empty() {
                format!("HTTP {}", self.status)
            } else {
                self.status_text.clone()
            }
        })
    }
}

/// The network seam. Fails only when no response was obtained at all.
#[async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Caller overrides merged over the transport defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Option<Method>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn post() -> Self {
        Self {
            method: Some(Method::Post),
            ..Self::default()
        }
    }

    /// POST with a JSON-serialized body.
    pub fn post_json<T: Serialize>(body: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?;
        Ok(Self {
            method: Some(Method::Post),
            body: Some(body),
            ..Self::default()
        })
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// HTTP client for communicating with the backend API.
pub struct ApiClient {
    config: AppConfig,
    http: Rc<dyn HttpClient>,
    pub(crate) cookies: Rc<dyn CookieJar>,
    pub(crate) navigator: Rc<dyn Navigator>,
    session: SessionState,
}

impl ApiClient {
    pub fn new(
        config: AppConfig,
        http: Rc<dyn HttpClient>,
        cookies: Rc<dyn CookieJar>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            config,
            http,
            cookies,
            navigator,
            session: SessionState::default(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Authenticated-or-unknown signal derived from request outcomes.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// CSRF token, read from the cookie jar at call time.
    pub fn current_csrf_token(&self) -> Option<String> {
        cookie_value(&self.cookies.cookie_header(), &self.config.csrf_cookie)
    }

    /// Merge defaults, caller overrides and the credential-bearing parts.
    pub(crate) fn build_request(&self, path: &str, options: RequestOptions) -> HttpRequest {
        let csrf_header = self.config.csrf_header.as_str();
        let mut headers = vec![(CONTENT_TYPE.to_string(), JSON.to_string())];

        for (name, value) in options.headers {
            if name.eq_ignore_ascii_case(csrf_header) {
                continue;
            }
            match headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(&name)) {
                Some(existing) => existing.1 = value,
                None => headers.push((name, value)),
            }
        }

        if let Some(token) = self.current_csrf_token() {
            headers.push((csrf_header.to_string(), token));
        }

        HttpRequest {
            method: options.method.unwrap_or(Method::Get),
            url: self.config.api_url(path),
            headers,
            body: options.body,
            same_origin_credentials: true,
        }
    }

    pub(crate) async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.http.send(request).await
    }

    /// Issue an authorized request and return the parsed JSON body.
    pub async fn authorized_request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        let request = self.build_request(path, options);
        let method = request.method;

        let response = self.send(request).await.map_err(|e| {
            log::error!("{} {} network error: {}", method.as_str(), path, e);
            e
        })?;

        if response.status == 401 {
            log::warn!(
                "{} {} answered 401; redirecting to {}",
                method.as_str(),
                path,
                self.config.reauth_url
            );
            self.session.record_expired();
            self.navigator.redirect(&self.config.reauth_url);
            return Err(ApiError::Unauthorized);
        }

        if !response.ok() {
            let reason = response.reason();
            log::error!("API Error {} on {} {}: {}", response.status, method.as_str(), path, reason);
            return Err(ApiError::RequestFailed {
                status: response.status,
                reason,
            });
        }

        self.session.record_success();
        serde_json::from_str(&response.body).map_err(|e| {
            log::error!("{} {} response parse error: {}", method.as_str(), path, e);
            ApiError::from(e)
        })
    }

    /// Authorized GET decoded into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.authorized_request(path, RequestOptions::default()).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Authorized POST of `body` decoded into `T`.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let value = self
            .authorized_request(path, RequestOptions::post_json(body)?)
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
