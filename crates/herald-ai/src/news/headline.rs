//! Headline records and their flat text rendering.

use std::fmt::Write;

use serde::Deserialize;

/// Shown in place of the headline block when nothing could be fetched.
pub const NO_NEWS_TEXT: &str = "No news is available.";

/// One headline as embedded in the system turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub title: String,
    pub source_name: String,
    pub published_at: String,
    pub summary: String,
    pub url: String,
}

/// Render headlines as the numbered block the templates embed.
pub fn render_headlines(headlines: &[Headline]) -> String {
    if headlines.is_empty() {
        return NO_NEWS_TEXT.to_string();
    }

    let mut text = String::new();
    for (i, h) in headlines.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = write!(
            text,
            "{}. Title: {}\n   Source: {}\n   Published: {}\n   Summary: {}\n   URL: {}\n\n",
            i + 1,
            h.title,
            h.source_name,
            h.published_at,
            h.summary,
            h.url,
        );
    }
    text
}

/// `top-headlines` response body.
#[derive(Debug, Deserialize)]
pub(crate) struct TopHeadlinesResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub articles: Vec<Option<RawArticle>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    source: Option<RawSource>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSource {
    #[serde(default)]
    name: Option<String>,
}

impl From<RawArticle> for Headline {
    fn from(raw: RawArticle) -> Self {
        let or = |value: Option<String>, placeholder: &str| {
            value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| placeholder.to_string())
        };
        Self {
            title: or(raw.title, "No title"),
            source_name: or(raw.source.and_then(|s| s.name), "Unknown source"),
            published_at: or(raw.published_at, "Unknown date"),
            summary: or(raw.description, "No summary"),
            url: or(raw.url, "#"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headline(title: &str) -> Headline {
        Headline {
            title: title.into(),
            source_name: "Wire".into(),
            published_at: "2026-10-17T08:00:00Z".into(),
            summary: "Something happened.".into(),
            url: "https://example.com/a".into(),
        }
    }

    #[test]
    fn renders_numbered_entries() {
        let text = render_headlines(&[headline("First"), headline("Second")]);
        assert!(text.starts_with("1. Title: First\n   Source: Wire\n"));
        assert!(text.contains("2. Title: Second\n"));
        assert!(text.contains("   URL: https://example.com/a\n\n"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        assert_eq!(render_headlines(&[]), NO_NEWS_TEXT);
    }

    #[test]
    fn missing_fields_get_placeholders() {
        let raw: RawArticle =
            serde_json::from_str(r#"{"title": null, "source": {"id": null}}"#).unwrap();
        let h = Headline::from(raw);
        assert_eq!(h.title, "No title");
        assert_eq!(h.source_name, "Unknown source");
        assert_eq!(h.published_at, "Unknown date");
        assert_eq!(h.summary, "No summary");
        assert_eq!(h.url, "#");
    }
}
