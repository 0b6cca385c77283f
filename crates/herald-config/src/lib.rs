//! Herald configuration system.
//!
//! TOML-based configuration with validation. All sections use sensible
//! defaults so partial configs work out of the box. Secrets are never
//! stored here; API keys come from the environment.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{HeraldConfig, LogLevel, CONFIG_SCHEMA_VERSION};
pub use validation::{validate, NEWS_COUNT_MAX, NEWS_COUNT_MIN};

use herald_common::ConfigError;
use std::path::Path;

/// Load config from an explicit path, or from the platform default path
/// (creating it if missing), then validate the result.
pub fn load_config(path: Option<&Path>) -> Result<HeraldConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &HeraldConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
