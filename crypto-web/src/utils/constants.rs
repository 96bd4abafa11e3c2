//! Application constants

// REST endpoints (relative to the configured API base)
pub const CRYPTO_LIST_PATH: &str = "/api/crypto-list/";
pub const CRYPTO_DETAIL_PATH: &str = "/api/crypto-detail/";
pub const CONVERSION_PATH: &str = "/api/crypto-conversion/";
pub const CONVERSION_HISTORY_PATH: &str = "/api/conversion-history/";
pub const APR_CALCULATOR_PATH: &str = "/api/apr-calculator/";
pub const UPDATE_DATA_PATH: &str = "/api/update-data/";
pub const TOKEN_REFRESH_PATH: &str = "/api/token/refresh/";
pub const LOGOUT_PATH: &str = "/api/logout/";

// Session contract
pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const REAUTH_URL: &str = "/auth/oauth/callback/";
pub const LOGOUT_REDIRECT: &str = "/";

// UI constants
pub const MOUNT_ID: &str = "app";
pub const BANNER_DISMISS_MS: u32 = 3000;
pub const HISTORY_COLUMNS: usize = 6;
