//! OpenAI-compatible Chat Completions client.
//!
//! Implements the `CompletionClient` trait against `/chat/completions`
//! with `stream: true`, decoding the SSE `delta.content` fragments.

mod api;
mod client;
mod config;


pub use client::OpenAiClient;
pub use config::OpenAiConfig;
