//! NewsAPI client struct and response handling.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::context::ContextError;

use super::config::NewsApiConfig;
use super::headline::{Headline, TopHeadlinesResponse};
use super::HeadlineSource;

/// NewsAPI `top-headlines` client.
pub struct NewsApiClient {
    pub(crate) config: NewsApiConfig,
    pub(crate) http: reqwest::Client,
}

impl NewsApiClient {
    pub fn new(config: NewsApiConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(config.timeout)
                .user_agent(concat!("herald/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("failed to build HTTP client"),
            config,
        }
    }

    pub(crate) fn request_url(
        &self,
        country_code: &str,
        count: u32,
    ) -> Result<reqwest::Url, ContextError> {
        let page_size = count.to_string();
        reqwest::Url::parse_with_params(
            &self.config.base_url,
            &[("country", country_code), ("pageSize", page_size.as_str())],
        )
        .map_err(|e| ContextError::NotConfigured(format!("bad news base URL: {e}")))
    }
}

/// Turn a decoded response body into headlines, treating a non-`ok`
/// status and an empty article list as failures.
pub(crate) fn headlines_from_response(
    response: TopHeadlinesResponse,
) -> Result<Vec<Headline>, ContextError> {
    if response.status != "ok" {
        let message = response
            .message
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(ContextError::Api(message));
    }

    let headlines: Vec<Headline> = response
        .articles
        .into_iter()
        .flatten()
        .map(Headline::from)
        .collect();

    if headlines.is_empty() {
        return Err(ContextError::Empty);
    }
    Ok(headlines)
}

#[async_trait]
impl HeadlineSource for NewsApiClient {
    async fn fetch_headlines(
        &self,
        country_code: &str,
        count: u32,
    ) -> Result<Vec<Headline>, ContextError> {
        let url = self.request_url(country_code, count)?;

        debug!(country = country_code, count, "top headlines request");

        let response = self
            .http
            .get(url)
            .header("X-Api-Key", &self.config.api_key)
            .send()
            .await
            .map_err(|e| ContextError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(ContextError::Api(format!("HTTP {status}: {text}")));
        }

        let body: TopHeadlinesResponse = response
            .json()
            .await
            .map_err(|e| ContextError::Malformed(e.to_string()))?;

        let headlines = headlines_from_response(body)?;
        info!(country = country_code, fetched = headlines.len(), "headlines fetched");
        Ok(headlines)
    }
}
