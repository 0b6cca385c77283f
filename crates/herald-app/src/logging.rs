//! Stderr tracing subscriber with a filter that can be swapped once the
//! config file has been read.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

const FALLBACK_DIRECTIVE: &str = "herald=info";

pub struct LogControl {
    handle: reload::Handle<EnvFilter, Registry>,
}

/// Parse a directive, falling back to `herald=info` when it is invalid.
pub fn directive(text: &str) -> Directive {
    text.parse().unwrap_or_else(|_| {
        FALLBACK_DIRECTIVE
            .parse()
            .expect("static directive is valid")
    })
}

fn filter(text: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(directive(text))
}

/// Install the global subscriber. Output goes to stderr so stdout carries
/// only the conversation.
pub fn init(text: &str) -> LogControl {
    let (filter, handle) = reload::Layer::new(filter(text));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    LogControl { handle }
}

impl LogControl {
    pub fn set_directive(&self, text: &str) {
        if let Err(e) = self.handle.reload(filter(text)) {
            tracing::warn!("failed to apply log level {text}: {e}");
        }
    }
}
