//! Chat completion endpoint settings.

use serde::{Deserialize, Serialize};

/// Completion API configuration.
///
/// The API key is not part of the file; it is read from `OPENAI_API_KEY`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    pub model: String,
    pub base_url: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Upper bound on generated tokens; `None` leaves it to the server.
    pub max_tokens: Option<u32>,
    /// TCP connect timeout in seconds (valid range: 1-60).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds, streaming included (valid range: 10-600).
    pub timeout_secs: u32,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".into(),
            base_url: "https://api.openai.com/v1".into(),
            temperature: 0.7,
            max_tokens: None,
            connect_timeout_secs: 10,
            timeout_secs: 120,
        }
    }
}
