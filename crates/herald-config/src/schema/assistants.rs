//! Per-assistant defaults: email drafting and news briefing.

use serde::{Deserialize, Serialize};

/// Email drafting assistant defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Name used in the salutation and closing of drafted emails.
    pub sender_name: String,
    /// Label of the default tone profile.
    pub style: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            sender_name: String::new(),
            style: "Business Formal".into(),
        }
    }
}

/// News briefing assistant defaults.
///
/// The API key is not part of the file; it is read from `NEWS_API_KEY`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub base_url: String,
    /// Country label, resolved against the built-in country table.
    pub country: String,
    /// Headlines fetched per question (valid range: 3-10).
    pub count: u32,
    /// Label of the default briefing profile.
    pub style: String,
    /// Answer from the last good headline batch when a refetch fails.
    pub reuse_stale_context: bool,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://newsapi.org/v2/top-headlines".into(),
            country: "United States".into(),
            count: 5,
            style: "Key Summary".into(),
            reuse_stale_context: false,
        }
    }
}
