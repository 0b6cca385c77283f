//! Ordered turn log with a single leading system turn.

use crate::{Message, Role};

/// The conversation as sent to the completion service.
///
/// Only user and assistant turns can be appended; the system turn is
/// managed through `set_system`, which keeps it unique and at index 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn system(&self) -> Option<&Message> {
        self.messages.first().filter(|m| m.role == Role::System)
    }

    /// Insert the system turn at index 0, or replace it in place.
    pub fn set_system(&mut self, content: impl Into<String>) {
        let message = Message::system(content);
        match self.messages.first_mut() {
            Some(first) if first.role == Role::System => *first = message,
            _ => self.messages.insert(0, message),
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Number of user turns so far.
    pub fn exchanges(&self) -> usize {
        self.messages.iter().filter(|m| m.role == Role::User).count()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
