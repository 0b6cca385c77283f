//! Full configuration validation.
//!
//! Checks numeric ranges and required strings, collecting every problem
//! into a single `ConfigError`.

mod helpers;


use crate::schema::HeraldConfig;
use herald_common::ConfigError;

use helpers::{validate_http_url, validate_non_empty, validate_range, validate_range_f64};

/// Headline count bounds offered by the news assistant.
pub const NEWS_COUNT_MIN: u32 = 3;
pub const NEWS_COUNT_MAX: u32 = 10;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HeraldConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_completion(&mut errors, config);
    validate_news(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_completion(errors: &mut Vec<String>, config: &HeraldConfig) {
    let completion = &config.completion;
    validate_non_empty(errors, "completion.model", &completion.model);
    validate_http_url(errors, "completion.base_url", &completion.base_url);
    validate_range_f64(
        errors,
        "completion.temperature",
        completion.temperature,
        0.0,
        2.0,
    );
    if completion.max_tokens == Some(0) {
        errors.push("completion.max_tokens must be at least 1".into());
    }
    validate_range(
        errors,
        "completion.connect_timeout_secs",
        completion.connect_timeout_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "completion.timeout_secs",
        completion.timeout_secs,
        10,
        600,
    );
}

fn validate_news(errors: &mut Vec<String>, config: &HeraldConfig) {
    validate_http_url(errors, "news.base_url", &config.news.base_url);
    validate_non_empty(errors, "news.country", &config.news.country);
    validate_range(
        errors,
        "news.count",
        config.news.count,
        NEWS_COUNT_MIN,
        NEWS_COUNT_MAX,
    );
}
