//! Session value types: assistant variants, render events, turn results.

use crate::context::ContextError;
use crate::extract::Extraction;
use crate::profiles::{Country, StyleProfile, EMAIL_STYLES, NEWS_STYLES};

/// Assistant content used when the completion stream fails.
pub const FALLBACK_REPLY: &str =
    "Sorry, something went wrong while generating the response. Please try again.";

/// Which assistant a session drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assistant {
    /// Drafts emails signed by `sender_name`. The system turn is written
    /// once, so the first tone chosen stays in effect.
    Email { sender_name: String },
    /// Briefs on live headlines for `country`. The system turn is rebuilt
    /// on every question with the current profile and context.
    News { country: Country },
}

impl Assistant {
    pub fn name(&self) -> &'static str {
        match self {
            Assistant::Email { .. } => "email",
            Assistant::News { .. } => "news",
        }
    }

    /// The profile set this assistant selects from.
    pub fn styles(&self) -> &'static [StyleProfile] {
        match self {
            Assistant::Email { .. } => EMAIL_STYLES,
            Assistant::News { .. } => NEWS_STYLES,
        }
    }

    pub(crate) fn extracts_draft(&self) -> bool {
        matches!(self, Assistant::Email { .. })
    }
}

/// Incremental view of the assistant reply while it streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderEvent {
    /// Everything received so far (or the fallback text on failure).
    pub accumulated_text: String,
    /// Set on exactly one event per turn, the last one.
    pub is_final: bool,
}

impl RenderEvent {
    pub(crate) fn partial(accumulated_text: String) -> Self {
        Self {
            accumulated_text,
            is_final: false,
        }
    }

    pub(crate) fn finished(accumulated_text: String) -> Self {
        Self {
            accumulated_text,
            is_final: true,
        }
    }
}

/// Result of a completed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Final assistant text as stored in the transcript.
    pub reply: String,
    /// Draft extracted from the reply (email assistant only).
    pub artifact: Option<Extraction>,
    /// True when the stream failed and `reply` is `FALLBACK_REPLY`.
    pub degraded: bool,
}

/// Turn failures the caller has to act on.
#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error("context unavailable: {0}")]
    ContextUnavailable(#[source] ContextError),
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Empty transcript; the next turn writes the system turn.
    AwaitingFirstTurn,
    Active,
}
