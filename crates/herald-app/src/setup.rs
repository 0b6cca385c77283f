//! Builds the session, client and context provider for a subcommand.

use std::sync::Arc;
use std::time::Duration;

use herald_ai::{
    Assistant, Country, HeadlineContext, NewsApiClient, NewsApiConfig, OpenAiClient,
    OpenAiConfig, Session, StyleProfile,
};
use herald_common::HeraldError;
use herald_config::schema::CompletionConfig;
use herald_config::{HeraldConfig, NEWS_COUNT_MAX, NEWS_COUNT_MIN};

/// Everything the REPL needs to start a conversation.
pub struct Launch {
    pub session: Session,
    pub profile: &'static StyleProfile,
    pub context: Option<HeadlineContext>,
}

/// Completion client from the `[completion]` section plus `OPENAI_API_KEY`.
pub fn completion_client(config: &CompletionConfig) -> Result<OpenAiClient, HeraldError> {
    let client_config = OpenAiConfig::from_env()?
        .with_base_url(&config.base_url)
        .with_temperature(config.temperature)
        .with_max_tokens(config.max_tokens)
        .with_timeouts(
            Duration::from_secs(config.connect_timeout_secs.into()),
            Duration::from_secs(config.timeout_secs.into()),
        );
    Ok(OpenAiClient::new(client_config))
}

pub fn email(
    config: &HeraldConfig,
    model: &str,
    sender: Option<String>,
    style: Option<String>,
) -> Result<Launch, HeraldError> {
    let sender_name = sender.unwrap_or_else(|| config.email.sender_name.clone());
    let assistant = Assistant::Email { sender_name };
    let profile = resolve_style(&assistant, style.as_deref().unwrap_or(&config.email.style))?;

    Ok(Launch {
        session: Session::new(assistant).with_model(model),
        profile,
        context: None,
    })
}

pub fn news(
    config: &HeraldConfig,
    model: &str,
    style: Option<String>,
    country: Option<String>,
    count: Option<u32>,
) -> Result<Launch, HeraldError> {
    let country = resolve_country(country.as_deref().unwrap_or(&config.news.country))?;
    let count = resolve_count(count.unwrap_or(config.news.count))?;
    let assistant = Assistant::News { country };
    let profile = resolve_style(&assistant, style.as_deref().unwrap_or(&config.news.style))?;

    let news_config = NewsApiConfig::from_env()?.with_base_url(&config.news.base_url);
    let source = Arc::new(NewsApiClient::new(news_config));

    Ok(Launch {
        session: Session::new(assistant)
            .with_model(model)
            .with_stale_context_reuse(config.news.reuse_stale_context),
        profile,
        context: Some(HeadlineContext::new(source, country, count)),
    })
}

pub fn resolve_style(
    assistant: &Assistant,
    label: &str,
) -> Result<&'static StyleProfile, HeraldError> {
    StyleProfile::find(assistant.styles(), label).ok_or_else(|| {
        let known: Vec<&str> = assistant.styles().iter().map(|p| p.label).collect();
        HeraldError::Other(format!(
            "unknown {} style '{label}' (available: {})",
            assistant.name(),
            known.join(", ")
        ))
    })
}

pub fn resolve_country(name: &str) -> Result<Country, HeraldError> {
    Country::find(name)
        .copied()
        .ok_or_else(|| HeraldError::Other(format!("unsupported country '{name}'")))
}

pub fn resolve_count(count: u32) -> Result<u32, HeraldError> {
    if (NEWS_COUNT_MIN..=NEWS_COUNT_MAX).contains(&count) {
        Ok(count)
    } else {
        Err(HeraldError::Other(format!(
            "headline count {count} is out of range [{NEWS_COUNT_MIN}, {NEWS_COUNT_MAX}]"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_ai::COUNTRIES;

    #[test]
    fn style_lookup_is_per_assistant() {
        let email = Assistant::Email {
            sender_name: String::new(),
        };
        assert_eq!(resolve_style(&email, "friendly").unwrap().label, "Friendly");

        let err = resolve_style(&email, "In Depth").unwrap_err();
        assert!(err.to_string().contains("unknown email style"));
        assert!(err.to_string().contains("Business Formal"));
    }

    #[test]
    fn country_by_label_or_code() {
        assert_eq!(resolve_country("United States").unwrap(), COUNTRIES[0]);
        assert_eq!(resolve_country("US").unwrap(), COUNTRIES[0]);
        assert!(resolve_country("Atlantis").is_err());
    }

    #[test]
    fn count_bounds() {
        assert_eq!(resolve_count(3).unwrap(), 3);
        assert_eq!(resolve_count(10).unwrap(), 10);
        assert!(resolve_count(2).is_err());
        assert!(resolve_count(11).is_err());
    }

    #[test]
    fn email_launch_prefers_cli_overrides() {
        let mut config = HeraldConfig::default();
        config.email.sender_name = "Config Name".into();

        let launch = email(&config, "gpt-4o-mini", Some("Dana".into()), Some("Academic".into()))
            .unwrap();
        assert_eq!(
            launch.session.assistant(),
            &Assistant::Email {
                sender_name: "Dana".into()
            }
        );
        assert_eq!(launch.session.model(), "gpt-4o-mini");
        assert_eq!(launch.profile.label, "Academic");
        assert!(launch.context.is_none());
    }

    #[test]
    fn email_launch_falls_back_to_config() {
        let config = HeraldConfig::default();
        let launch = email(&config, "gpt-3.5-turbo", None, None).unwrap();
        assert_eq!(launch.profile.label, "Business Formal");
    }
}
