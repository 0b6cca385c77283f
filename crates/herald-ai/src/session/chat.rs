//! Async turn handling for Session.

use futures_util::StreamExt;
use tracing::{info, warn};

use crate::context::{ContextBlock, ContextProvider};
use crate::extract::extract_email;
use crate::profiles::StyleProfile;
use crate::{AiError, CompletionClient, Message};

use super::manager::Session;
use super::types::{RenderEvent, TurnError, TurnOutcome, FALLBACK_REPLY};

impl Session {
    /// Run one exchange: refresh context, write the system turn, send the
    /// transcript, stream the reply into `on_render`, and record it.
    ///
    /// Transcript changes are committed together once the reply is
    /// complete. Dropping the returned future mid-stream leaves the
    /// transcript as it was before the call.
    ///
    /// `user_text` is expected to be non-empty; callers reject blank input.
    pub async fn submit_turn<F>(
        &mut self,
        client: &dyn CompletionClient,
        context_provider: Option<&dyn ContextProvider>,
        user_text: &str,
        profile: &StyleProfile,
        mut on_render: F,
    ) -> Result<TurnOutcome, TurnError>
    where
        F: FnMut(RenderEvent) + Send,
    {
        let context = match context_provider {
            Some(provider) => Some(self.resolve_context(provider).await?),
            None => self.context.clone(),
        };

        let mut pending = self.transcript.clone();
        let first_turn = pending.is_empty();
        if let Some(system) = self.system_turn(first_turn, profile, context.as_ref()) {
            pending.set_system(system);
        }
        pending.push_user(user_text);

        let (reply, degraded) =
            match stream_reply(client, &self.model, pending.messages(), &mut on_render).await {
                Ok(reply) => (reply, false),
                Err(e) => {
                    warn!(
                        session = self.id.short(),
                        error = %e,
                        "completion stream failed, using fallback reply"
                    );
                    (FALLBACK_REPLY.to_string(), true)
                }
            };
        on_render(RenderEvent::finished(reply.clone()));

        pending.push_assistant(reply.as_str());
        self.transcript = pending;

        let artifact = if self.assistant.extracts_draft() {
            let extraction = extract_email(&reply);
            self.artifact = Some(extraction.clone());
            Some(extraction)
        } else {
            None
        };

        info!(
            session = self.id.short(),
            assistant = self.assistant.name(),
            turn = self.transcript.exchanges(),
            chars = reply.len(),
            degraded,
            "turn complete"
        );

        Ok(TurnOutcome {
            reply,
            artifact,
            degraded,
        })
    }

    /// Fetch fresh context, replacing the cached block on success.
    async fn resolve_context(
        &mut self,
        provider: &dyn ContextProvider,
    ) -> Result<ContextBlock, TurnError> {
        match provider.fetch_context().await {
            Ok(block) => {
                self.context = Some(block.clone());
                Ok(block)
            }
            Err(e) => match &self.context {
                Some(cached) if self.reuse_stale_context => {
                    warn!(
                        session = self.id.short(),
                        error = %e,
                        fetched_at = %cached.fetched_time(),
                        "context fetch failed, reusing cached block"
                    );
                    Ok(cached.clone())
                }
                _ => {
                    warn!(
                        session = self.id.short(),
                        error = %e,
                        "context unavailable, turn aborted"
                    );
                    Err(TurnError::ContextUnavailable(e))
                }
            },
        }
    }
}

/// Consume the fragment stream, emitting the growing reply after each
/// fragment. The first error ends the turn's stream.
async fn stream_reply<F>(
    client: &dyn CompletionClient,
    model: &str,
    messages: &[Message],
    on_render: &mut F,
) -> Result<String, AiError>
where
    F: FnMut(RenderEvent) + Send,
{
    let mut fragments = client.stream_completion(model, messages).await?;
    let mut accumulated = String::new();

    while let Some(fragment) = fragments.next().await {
        accumulated.push_str(&fragment?);
        on_render(RenderEvent::partial(accumulated.clone()));
    }

    Ok(accumulated)
}
