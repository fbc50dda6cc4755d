//! In-memory chat transcript. Lives for one session, never reloaded.

use crate::domain::summary::WELCOME_TEXT;
use crate::domain::{ChatMessage, ChatRole};

#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// A transcript that opens with the advisor's welcome.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::ai(WELCOME_TEXT)],
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of turns authored by `role`.
    pub fn count(&self, role: ChatRole) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_welcome() {
        let t = Transcript::new();
        assert_eq!(t.len(), 1);
        assert_eq!(t.messages()[0].role, ChatRole::Ai);
        assert!(t.messages()[0].content.contains("**Get Recommendation**"));
    }

    #[test]
    fn test_push_and_count() {
        let mut t = Transcript::default();
        t.push(ChatMessage::student("profile"));
        t.push(ChatMessage::ai("advice"));
        assert_eq!(t.count(ChatRole::Student), 1);
        assert_eq!(t.count(ChatRole::Ai), 2);
        assert_eq!(t.last().map(|m| m.content.as_str()), Some("advice"));
    }
}
