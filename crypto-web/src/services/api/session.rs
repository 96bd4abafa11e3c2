//! # Session Endpoints
//!
//! Best-effort session maintenance. Neither call is wired into the request
//! path; callers that detect staleness invoke them explicitly.

use super::client::{ApiClient, RequestOptions};
use crate::utils::constants::{LOGOUT_PATH, TOKEN_REFRESH_PATH};

impl ApiClient {
    /// Ask the server to renew the session.
    ///
    /// Returns `true` on success. A 401 means the refresh credential is gone
    /// too: the user is logged out (and redirected). Any other failure is
    /// logged and returns `false` without redirecting.
    pub async fn refresh_session(&self) -> bool {
        let request = self.build_request(TOKEN_REFRESH_PATH, RequestOptions::post());

        match self.send(request).await {
            Ok(response) if response.ok() => {
                log::info!("Session refreshed");
                self.session().record_success();
                true
            }
            Ok(response) if response.status == 401 => {
                log::warn!("Session refresh rejected; logging out");
                self.logout().await;
                false
            }
            Ok(response) => {
                log::error!("Token refresh failed: {}", response.reason());
                false
            }
            Err(e) => {
                log::error!("Refresh error: {}", e);
                false
            }
        }
    }

    /// Log out: notify the server, then always clear local state and leave
    /// for the application root.
    pub async fn logout(&self) {
        let request = self.build_request(LOGOUT_PATH, RequestOptions::post());

        match self.send(request).await {
            Ok(response) if response.ok() => log::info!("Logged out"),
            Ok(response) => log::warn!(
                "Logout request failed ({}): {}; clearing local session anyway",
                response.status,
                response.reason()
            ),
            Err(e) => log::warn!("Logout request error: {}; clearing local session anyway", e),
        }

        let config = self.config();
        self.cookies.expire(&config.csrf_cookie);
        self.navigator.clear_local_storage();
        self.session().record_expired();
        self.navigator.redirect(&config.logout_redirect);
    }
}
