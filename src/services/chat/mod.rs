//! In-session event chat.
//!
//! A flat message log; the panel is only reachable once a name is
//! confirmed, so senders are always valid participant names.

use chrono::Local;
use thiserror::Error;

use crate::models::chat::ChatMessage;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Message cannot be empty")]
    EmptyMessage,
}

/// Append-only message log for one event session.
#[derive(Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a message. Content is trimmed; empty content is rejected.
    pub fn post(&mut self, sender: &str, content: &str) -> Result<&ChatMessage, ChatError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let message = ChatMessage {
            id: self.next_id,
            sender: sender.trim().to_string(),
            content: content.to_string(),
            timestamp: Local::now(),
        };
        self.next_id += 1;
        self.messages.push(message);

        Ok(self.messages.last().unwrap())
    }

    /// All messages, in post order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_appends_with_sequential_ids() {
        let mut log = ChatLog::new();
        log.post("Bob", "hello").unwrap();
        log.post("Carol", "hi Bob").unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[0].id, 0);
        assert_eq!(log.messages()[1].id, 1);
        assert_eq!(log.messages()[1].sender, "Carol");
    }

    #[test]
    fn test_post_trims_content() {
        let mut log = ChatLog::new();
        let message = log.post("Bob", "  see you there  ").unwrap();
        assert_eq!(message.content, "see you there");
    }

    #[test]
    fn test_post_rejects_blank_content() {
        let mut log = ChatLog::new();
        assert_eq!(log.post("Bob", "   "), Err(ChatError::EmptyMessage));
        assert!(log.is_empty());
    }
}
