use serde::{Deserialize, Serialize};

use crate::types::Role;

/// One entry in a session transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// The author of the message.
    pub role: Role,

    /// The text of the message.
    pub content: String,
}

impl Message {
    /// Create a new `Message` with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a new human message.
    pub fn human(content: impl Into<String>) -> Self {
        Self::new(Role::Human, content)
    }

    /// Create a new ai message.
    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(Role::Ai, content)
    }

    /// Returns true if the content is empty once surrounding whitespace is
    /// removed.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn constructors_set_role() {
        assert_eq!(Message::system("s").role, Role::System);
        assert_eq!(Message::human("h").role, Role::Human);
        assert_eq!(Message::ai("a").role, Role::Ai);
    }

    #[test]
    fn blank_detection() {
        assert!(Message::human("").is_blank());
        assert!(Message::human(" \n\t").is_blank());
        assert!(!Message::human(" hi ").is_blank());
    }

    #[test]
    fn serializes_with_transcript_role_names() {
        let json = to_value(Message::ai("hello")).unwrap();
        assert_eq!(json, json!({"role": "ai", "content": "hello"}));
    }
}
