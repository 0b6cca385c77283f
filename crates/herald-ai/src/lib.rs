//! Conversation engine for Herald.
//!
//! Provides:
//! - A streaming chat-completion client (OpenAI-compatible SSE)
//! - A NewsAPI headline client used as live context
//! - Style profiles and system-turn templates for the email and news assistants
//! - The turn-based `Session` that ties them together

pub mod context;
pub mod extract;
pub mod news;
pub mod openai;
pub mod profiles;
pub mod prompts;
pub mod session;
pub mod streaming;

#[cfg(test)]
pub(crate) mod test_support;

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::Stream;

pub use context::{ContextBlock, ContextError, ContextProvider, HeadlineContext};
pub use extract::{extract_email, EmailDraft, Extraction, EXTRACTION_FAILED_SUBJECT};
pub use news::{Headline, HeadlineSource, NewsApiClient, NewsApiConfig};
pub use openai::{OpenAiClient, OpenAiConfig};
pub use profiles::{Country, StyleProfile, COUNTRIES, EMAIL_STYLES, NEWS_STYLES};
pub use session::{
    Assistant, RenderEvent, Session, SessionState, Transcript, TurnError, TurnOutcome,
    DEFAULT_MODEL, FALLBACK_REPLY,
};

/// Lazy, finite sequence of text fragments produced by one completion call.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, AiError>> + Send>>;

/// A hosted chat-completion service that streams its reply.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the whole transcript and return the reply as a fragment stream.
    ///
    /// Errors before the first fragment are returned directly; errors after
    /// that arrive as an `Err` item and end the stream.
    async fn stream_completion(
        &self,
        model: &str,
        messages: &[Message],
    ) -> Result<FragmentStream, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Not configured: {0}")]
    NotConfigured(String),
}

impl From<AiError> for herald_common::HeraldError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::NetworkError(msg) => Self::Network(msg),
            other => Self::Ai(other.to_string()),
        }
    }
}
