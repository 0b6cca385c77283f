//! Headline client configuration.

use std::fmt;
use std::time::Duration;

use crate::context::ContextError;

pub(crate) const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/top-headlines";

#[derive(Clone)]
pub struct NewsApiConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl fmt::Debug for NewsApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl NewsApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Create config from the `NEWS_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, ContextError> {
        match std::env::var("NEWS_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key.trim())),
            _ => Err(ContextError::NotConfigured(
                "news API key missing. Set NEWS_API_KEY or add it to .env.".into(),
            )),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
