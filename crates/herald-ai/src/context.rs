//! Externally fetched context embedded in the system turn.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::news::{render_headlines, Headline, HeadlineSource};
use crate::profiles::Country;

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("news source not configured: {0}")]
    NotConfigured(String),
    #[error("news request failed: {0}")]
    Network(String),
    #[error("news API error: {0}")]
    Api(String),
    #[error("malformed news payload: {0}")]
    Malformed(String),
    #[error("no headlines returned")]
    Empty,
}

impl From<ContextError> for herald_common::HeraldError {
    fn from(err: ContextError) -> Self {
        Self::Context(err.to_string())
    }
}

/// A batch of headlines rendered into the flat text the templates embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextBlock {
    headlines: Vec<Headline>,
    text: String,
    fetched_at: DateTime<Utc>,
}

impl ContextBlock {
    pub fn new(headlines: Vec<Headline>) -> Self {
        Self::fetched_at(headlines, Utc::now())
    }

    pub fn fetched_at(headlines: Vec<Headline>, fetched_at: DateTime<Utc>) -> Self {
        let text = render_headlines(&headlines);
        Self {
            headlines,
            text,
            fetched_at,
        }
    }

    pub fn headlines(&self) -> &[Headline] {
        &self.headlines
    }

    /// The rendered block, as interpolated into the system turn.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fetched_time(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

/// Supplies fresh context before a turn is sent.
#[async_trait]
pub trait ContextProvider: Send + Sync {
    async fn fetch_context(&self) -> Result<ContextBlock, ContextError>;
}

/// Context provider that fetches top headlines for one country.
pub struct HeadlineContext {
    source: Arc<dyn HeadlineSource>,
    country: Country,
    count: u32,
}

impl HeadlineContext {
    pub fn new(source: Arc<dyn HeadlineSource>, country: Country, count: u32) -> Self {
        Self {
            source,
            country,
            count,
        }
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

#[async_trait]
impl ContextProvider for HeadlineContext {
    async fn fetch_context(&self) -> Result<ContextBlock, ContextError> {
        let headlines = self
            .source
            .fetch_headlines(self.country.code, self.count)
            .await?;
        if headlines.is_empty() {
            return Err(ContextError::Empty);
        }
        info!(
            country = self.country.label,
            headlines = headlines.len(),
            "context block refreshed"
        );
        Ok(ContextBlock::new(headlines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::COUNTRIES;
    use crate::test_support::{headlines, FakeHeadlines};

    #[tokio::test]
    async fn fetches_for_configured_country_and_count() {
        let source = Arc::new(FakeHeadlines::new(vec![Ok(headlines("a", 3))]));
        let provider = HeadlineContext::new(source.clone(), COUNTRIES[0], 3);

        assert_eq!(provider.country().code, "us");
        assert_eq!(provider.count(), 3);

        let block = provider.fetch_context().await.unwrap();
        assert_eq!(block.headlines().len(), 3);
        assert!(block.text().starts_with("1. Title: a-1\n"));
        assert_eq!(source.calls(), vec![("us".to_string(), 3)]);
    }

    #[tokio::test]
    async fn empty_batch_is_unavailable() {
        let source = Arc::new(FakeHeadlines::new(vec![Ok(Vec::new())]));
        let provider = HeadlineContext::new(source, COUNTRIES[0], 5);

        let err = provider.fetch_context().await.unwrap_err();
        assert!(matches!(err, ContextError::Empty));
    }

    #[tokio::test]
    async fn source_error_propagates() {
        let source = Arc::new(FakeHeadlines::new(vec![Err(ContextError::Network(
            "connection refused".into(),
        ))]));
        let provider = HeadlineContext::new(source, COUNTRIES[0], 5);

        let err = provider.fetch_context().await.unwrap_err();
        assert_eq!(err.to_string(), "news request failed: connection refused");
    }

    #[test]
    fn block_text_matches_rendering() {
        let items = headlines("b", 2);
        let block = ContextBlock::new(items.clone());
        assert_eq!(block.text(), render_headlines(&items));
    }
}
