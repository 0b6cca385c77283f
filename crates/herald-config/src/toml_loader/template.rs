//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Herald Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# API keys are read from OPENAI_API_KEY and NEWS_API_KEY (a .env file works too).

[completion]
# model = "gpt-3.5-turbo"
# base_url = "https://api.openai.com/v1"
# temperature = 0.7          # 0.0-2.0
# max_tokens = 1024          # unset = server default
# connect_timeout_secs = 10  # 1-60
# timeout_secs = 120         # 10-600

[email]
# sender_name = "Dana"
# style = "Business Formal"  # Business Formal, Business Casual, Academic, Friendly

[news]
# base_url = "https://newsapi.org/v2/top-headlines"
# country = "United States"
# count = 5                  # 3-10
# style = "Key Summary"      # Key Summary, In Depth
# reuse_stale_context = false

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
}
