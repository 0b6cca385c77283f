//! Scripted fakes for the completion and headline seams.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use futures_util::{stream, StreamExt};

use crate::context::ContextError;
use crate::news::{Headline, HeadlineSource};
use crate::{AiError, CompletionClient, FragmentStream, Message};

/// How one scripted completion call behaves.
pub(crate) enum Script {
    Reply(Vec<&'static str>),
    FailMidStream(Vec<&'static str>),
    FailToStart,
    /// Yield the fragments, then never finish.
    Stall(Vec<&'static str>),
}

fn ok_fragments(fragments: Vec<&'static str>) -> Vec<Result<String, AiError>> {
    fragments.into_iter().map(|f| Ok(f.to_string())).collect()
}

/// Completion client that replays scripts in order and records requests.
pub(crate) struct ScriptedClient {
    scripts: Mutex<VecDeque<Script>>,
    requests: Mutex<Vec<(String, Vec<Message>)>>,
}

impl ScriptedClient {
    pub(crate) fn new(scripts: Vec<Script>) -> Self {
        Self {
            scripts: Mutex::new(scripts.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// `(model, transcript)` for every call so far.
    pub(crate) fn requests(&self) -> Vec<(String, Vec<Message>)> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn stream_completion(
        &self,
        model: &str,
        messages: &[Message],
    ) -> Result<FragmentStream, AiError> {
        self.requests
            .lock()
            .unwrap()
            .push((model.to_string(), messages.to_vec()));

        let script = self
            .scripts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Script::Reply(vec!["ok"]));

        let fragments: FragmentStream = match script {
            Script::Reply(fragments) => Box::pin(stream::iter(ok_fragments(fragments))),
            Script::FailMidStream(fragments) => {
                let mut items = ok_fragments(fragments);
                items.push(Err(AiError::NetworkError("connection reset".into())));
                Box::pin(stream::iter(items))
            }
            Script::FailToStart => return Err(AiError::RateLimited),
            Script::Stall(fragments) => {
                Box::pin(stream::iter(ok_fragments(fragments)).chain(stream::pending()))
            }
        };
        Ok(fragments)
    }
}

/// Headline source that replays results in order and records calls.
pub(crate) struct FakeHeadlines {
    results: Mutex<VecDeque<Result<Vec<Headline>, ContextError>>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl FakeHeadlines {
    pub(crate) fn new(results: Vec<Result<Vec<Headline>, ContextError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HeadlineSource for FakeHeadlines {
    async fn fetch_headlines(
        &self,
        country_code: &str,
        count: u32,
    ) -> Result<Vec<Headline>, ContextError> {
        self.calls
            .lock()
            .unwrap()
            .push((country_code.to_string(), count));
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ContextError::Empty))
    }
}

/// `count` distinct headlines titled `{prefix}-1`, `{prefix}-2`, ...
pub(crate) fn headlines(prefix: &str, count: usize) -> Vec<Headline> {
    (1..=count)
        .map(|i| Headline {
            title: format!("{prefix}-{i}"),
            source_name: format!("{prefix} wire"),
            published_at: "2026-10-17T08:00:00Z".into(),
            summary: format!("Summary of {prefix}-{i}."),
            url: format!("https://news.example/{prefix}/{i}"),
        })
        .collect()
}
