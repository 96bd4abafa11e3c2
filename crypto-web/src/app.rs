//! # Application Context
//!
//! Everything a view controller needs, wired once at start-up and shared by
//! reference-counted handle between the router and every spawned flow.

use std::rc::Rc;

use crate::config::AppConfig;
use crate::platform::{CookieJar, MountPoint, Navigator, Timer};
use crate::services::api::{ApiClient, HttpClient};
use crate::state::{ViewClock, ViewHandle};

pub struct AppContext {
    pub api: ApiClient,
    pub navigator: Rc<dyn Navigator>,
    pub mount: Rc<dyn MountPoint>,
    pub timer: Rc<dyn Timer>,
    pub clock: ViewClock,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        http: Rc<dyn HttpClient>,
        cookies: Rc<dyn CookieJar>,
        navigator: Rc<dyn Navigator>,
        mount: Rc<dyn MountPoint>,
        timer: Rc<dyn Timer>,
    ) -> Self {
        Self {
            api: ApiClient::new(config, http, cookies, navigator.clone()),
            navigator,
            mount,
            timer,
            clock: ViewClock::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        self.api.config()
    }

    /// Take ownership of the mount point for a new view.
    pub fn issue_view(&self) -> ViewHandle {
        self.clock.issue(self.mount.clone())
    }
}
