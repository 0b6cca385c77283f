//! Session struct and conversation state management.

use herald_common::SessionId;
use tracing::debug;

use crate::context::ContextBlock;
use crate::extract::Extraction;
use crate::news::NO_NEWS_TEXT;
use crate::profiles::StyleProfile;
use crate::prompts::{email_system_prompt, news_follow_up_prompt, news_system_prompt};
use crate::Message;

use super::transcript::Transcript;
use super::types::{Assistant, SessionState};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// One assistant conversation, owned by the caller.
pub struct Session {
    pub(super) id: SessionId,
    pub(super) assistant: Assistant,
    /// Completion model id sent with every request.
    pub(super) model: String,
    pub(super) transcript: Transcript,
    /// Last successfully fetched context block.
    pub(super) context: Option<ContextBlock>,
    /// Draft extracted from the latest reply (email assistant).
    pub(super) artifact: Option<Extraction>,
    /// Fall back to `context` when a refetch fails instead of aborting.
    pub(super) reuse_stale_context: bool,
}

impl Session {
    pub fn new(assistant: Assistant) -> Self {
        Self {
            id: SessionId::new(),
            assistant,
            model: DEFAULT_MODEL.to_string(),
            transcript: Transcript::new(),
            context: None,
            artifact: None,
            reuse_stale_context: false,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_stale_context_reuse(mut self, reuse: bool) -> Self {
        self.reuse_stale_context = reuse;
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Full conversation, system turn included.
    pub fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }

    pub fn context(&self) -> Option<&ContextBlock> {
        self.context.as_ref()
    }

    pub fn artifact(&self) -> Option<&Extraction> {
        self.artifact.as_ref()
    }

    pub fn state(&self) -> SessionState {
        if self.transcript.is_empty() {
            SessionState::AwaitingFirstTurn
        } else {
            SessionState::Active
        }
    }

    /// Start over: drop the transcript, cached context and draft.
    pub fn reset(&mut self) {
        debug!(session = self.id.short(), "session reset");
        self.transcript.clear();
        self.context = None;
        self.artifact = None;
    }

    /// Invalidate the cached context block so nothing stale can stand in
    /// for the next fetch.
    pub fn refresh_context(&mut self) {
        debug!(session = self.id.short(), "context invalidated");
        self.context = None;
    }

    /// System turn to write before this turn's user message, if any.
    pub(super) fn system_turn(
        &self,
        first_turn: bool,
        profile: &StyleProfile,
        context: Option<&ContextBlock>,
    ) -> Option<String> {
        match &self.assistant {
            Assistant::Email { sender_name } => {
                first_turn.then(|| email_system_prompt(sender_name, profile))
            }
            Assistant::News { country } => {
                let text = context.map(ContextBlock::text).unwrap_or(NO_NEWS_TEXT);
                if first_turn {
                    Some(news_system_prompt(text, profile, country))
                } else {
                    Some(news_follow_up_prompt(text, profile, country))
                }
            }
        }
    }
}
