//! Chat completion client struct, request building, and stream decoding.

use futures_util::{stream, Stream, StreamExt};

use crate::streaming::SseEvent;
use crate::{AiError, Message};

use super::config::OpenAiConfig;

/// Chat completion API client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

/// What one SSE `data:` payload of a completion stream carries.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum StreamData {
    Fragment(String),
    Skip,
    Done,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(config.connect_timeout)
                .timeout(config.timeout)
                .build()
                .expect("failed to build HTTP client"),
            config,
        }
    }

    pub(crate) fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Build the JSON request body for a streaming completion.
    pub(crate) fn build_request_body(
        &self,
        model: &str,
        messages: &[Message],
    ) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": model,
            "messages": messages,
            "temperature": self.config.temperature,
            "stream": true,
        });

        if let Some(max_tokens) = self.config.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }

        body
    }
}

/// Decode one SSE `data:` payload.
///
/// `[DONE]` ends the stream; an `error` object becomes `AiError::ApiError`;
/// chunks without text (role announcements, finish reasons) are skipped.
pub(crate) fn parse_stream_data(data: &str) -> Result<StreamData, AiError> {
    if data.trim() == "[DONE]" {
        return Ok(StreamData::Done);
    }

    let json: serde_json::Value =
        serde_json::from_str(data).map_err(|e| AiError::ParseError(e.to_string()))?;

    if let Some(error) = json.get("error") {
        let message = error["message"].as_str().unwrap_or("unknown error");
        return Err(AiError::ApiError(message.to_string()));
    }

    match json["choices"][0]["delta"]["content"].as_str() {
        Some(text) if !text.is_empty() => Ok(StreamData::Fragment(text.to_string())),
        _ => Ok(StreamData::Skip),
    }
}

/// Reduce SSE events to reply fragments.
///
/// The stream ends cleanly only at `[DONE]`. A body that closes before it
/// yields a final `NetworkError`, so a cut-off reply is never taken as
/// complete. Nothing is yielded after an error.
pub(crate) fn completion_fragments<S>(
    events: S,
) -> impl Stream<Item = Result<String, AiError>> + Send
where
    S: Stream<Item = Result<SseEvent, AiError>> + Send + 'static,
{
    stream::unfold(Some(Box::pin(events)), |state| async move {
        let mut events = state?;
        loop {
            let item = match events.next().await {
                Some(event) => event.and_then(|event| parse_stream_data(&event.data)),
                None => Err(AiError::NetworkError("stream ended before [DONE]".into())),
            };
            match item {
                Ok(StreamData::Fragment(text)) => return Some((Ok(text), Some(events))),
                Ok(StreamData::Skip) => continue,
                Ok(StreamData::Done) => return None,
                Err(e) => return Some((Err(e), None)),
            }
        }
    })
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> AiError {
    if err.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(err.to_string())
    }
}
