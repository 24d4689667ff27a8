//! API client configuration.

use std::time::Duration;

/// Local-development backend, used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Per-request network timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how the client reaches the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `https://console.example.com/api`.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Resolve the base URL from the environment.
    ///
    /// Order: runtime `API_URL` (native builds, `.env` honoured), the
    /// `API_URL` value baked in at build time, then [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Ok(url) = std::env::var("API_URL") {
                if !url.trim().is_empty() {
                    return Self::new(url);
                }
            }
        }
        Self::new(option_env!("API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Absolute URL for an API path such as `/auth/login/`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}
