//! Append-only chat history for one session.

use crate::types::{ChatMessage, Role};

/// Ordered history of one chat session, oldest first.
///
/// Messages can only be appended; nothing is ever removed or reordered.
/// Each request replays the whole history via [`Conversation::snapshot`].
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Create an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message at the end.
    pub fn append(&mut self, role: Role, content: impl Into<String>, images: Option<Vec<String>>) {
        self.messages.push(ChatMessage {
            role,
            content: content.into(),
            images,
        });
    }

    /// The full history in chronological order.
    pub fn snapshot(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no message has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate over messages, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, ChatMessage> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a ChatMessage;
    type IntoIter = std::slice::Iter<'a, ChatMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
