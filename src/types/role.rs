use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Who authored a message in the transcript.
///
/// The chat-completion wire format names the roles `system`, `user` and
/// `assistant`; [`Role::wire_name`] performs that mapping.  Everywhere else the
/// transcript speaks of `human` and `ai` turns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The hidden persona prompt at the head of every transcript.
    System,

    /// A turn typed by the user.
    Human,

    /// A turn produced by the model.
    Ai,
}

impl Role {
    /// The role name the provider expects on the wire.
    pub fn wire_name(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::Human => "user",
            Role::Ai => "assistant",
        }
    }

    /// Parses a role as the provider reports it.
    pub fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "system" | "developer" => Some(Role::System),
            "user" => Some(Role::Human),
            "assistant" => Some(Role::Ai),
            _ => None,
        }
    }

    /// Whether messages with this role are shown to the user.
    pub fn is_visible(self) -> bool {
        match self {
            Role::System => false,
            Role::Human | Role::Ai => true,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::System => "system",
            Role::Human => "human",
            Role::Ai => "ai",
        };
        f.write_str(name)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "system" => Ok(Role::System),
            "human" => Ok(Role::Human),
            "ai" => Ok(Role::Ai),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names() {
        assert_eq!(Role::System.wire_name(), "system");
        assert_eq!(Role::Human.wire_name(), "user");
        assert_eq!(Role::Ai.wire_name(), "assistant");
        assert_eq!(Role::from_wire_name("assistant"), Some(Role::Ai));
        assert_eq!(Role::from_wire_name("tool"), None);
    }

    #[test]
    fn display_and_parse() {
        for role in [Role::System, Role::Human, Role::Ai] {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
        assert!("robot".parse::<Role>().is_err());
    }

    #[test]
    fn only_system_is_hidden() {
        assert!(!Role::System.is_visible());
        assert!(Role::Human.is_visible());
        assert!(Role::Ai.is_visible());
    }
}
