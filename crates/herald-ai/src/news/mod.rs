//! NewsAPI top-headlines client.
//!
//! Fetches the live headlines the news assistant embeds as context.

mod client;
mod config;
mod headline;


use async_trait::async_trait;

use crate::context::ContextError;

pub use client::NewsApiClient;
pub use config::NewsApiConfig;
pub use headline::{render_headlines, Headline, NO_NEWS_TEXT};

/// A source of current headlines for a country.
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    /// Fetch up to `count` top headlines. An empty result is an error.
    async fn fetch_headlines(
        &self,
        country_code: &str,
        count: u32,
    ) -> Result<Vec<Headline>, ContextError>;
}
