//! Conversation session management.
//!
//! A `Session` owns one assistant conversation: the transcript with its
//! single system turn, the cached context block (news), and the last
//! extracted email draft (email). `submit_turn` drives one exchange end to
//! end and reports progress through render events.

mod chat;
mod manager;
mod transcript;
mod types;


pub use manager::{Session, DEFAULT_MODEL};
pub use transcript::Transcript;
pub use types::{
    Assistant, RenderEvent, SessionState, TurnError, TurnOutcome, FALLBACK_REPLY,
};
