//! CompletionClient trait implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::streaming::sse_events;
use crate::{AiError, CompletionClient, FragmentStream, Message};

use super::client::{completion_fragments, map_reqwest_error, OpenAiClient};

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn stream_completion(
        &self,
        model: &str,
        messages: &[Message],
    ) -> Result<FragmentStream, AiError> {
        if messages.is_empty() {
            return Err(AiError::ApiError("refusing to send an empty transcript".into()));
        }

        let body = self.build_request_body(model, messages);

        debug!(model, messages = messages.len(), "chat completion streaming request");

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        Ok(Box::pin(completion_fragments(sse_events(response))))
    }
}
