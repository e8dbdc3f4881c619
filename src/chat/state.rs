//! Per-session conversation state.
//!
//! [`SessionState`] owns the transcript, the credential and the theme
//! selection for one interactive session.  The transcript always holds exactly
//! one system message at index 0; every operation here preserves that.

use std::borrow::Cow;

use crate::chat::theme::Theme;
use crate::error::{Error, Result};
use crate::types::{Credential, Message, Role};

/// Name the default persona answers to.
pub const ASSISTANT_NAME: &str = "Dahuang";

/// Persona used for the system message when none is configured.
pub const DEFAULT_PERSONA: &str = "You are an AI assistant named Dahuang (大黄). You are friendly and helpful, and you can answer all kinds of questions.";

/// The transcript, credential and theme of one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    messages: Vec<Message>,
    credential: Credential,
    theme: Theme,
    initial_persona: String,
    initial_theme: Theme,
}

impl SessionState {
    /// Creates a fresh session whose system message is [`DEFAULT_PERSONA`].
    pub fn initialize() -> Self {
        Self::new(DEFAULT_PERSONA, Theme::default())
    }

    /// Creates a fresh session with the given persona and theme.
    ///
    /// [`SessionState::reset`] returns to exactly this state.
    pub fn new(persona: impl Into<String>, theme: Theme) -> Self {
        let persona: String = persona.into();
        Self {
            messages: vec![Message::system(persona.clone())],
            credential: Credential::empty(),
            theme,
            initial_persona: persona,
            initial_theme: theme,
        }
    }

    /// Appends a human or ai message.
    ///
    /// Human messages must have non-blank content.  System messages cannot be
    /// appended; use [`SessionState::set_system_prompt`] instead.
    pub fn append(&mut self, message: Message) -> Result<()> {
        match message.role {
            Role::System => Err(Error::validation(
                "the transcript holds a single system message; use set_system_prompt",
                Some("role".to_string()),
            )),
            Role::Human if message.is_blank() => Err(Error::validation(
                "empty submission",
                Some("content".to_string()),
            )),
            Role::Human | Role::Ai => {
                self.messages.push(message);
                Ok(())
            }
        }
    }

    /// Replaces the system message.
    ///
    /// Earlier turns are left untouched; the new prompt is first sent with
    /// the next completion call.
    pub fn set_system_prompt(&mut self, text: impl Into<String>) {
        self.messages[0].content = text.into();
    }

    /// The current system prompt.
    pub fn system_prompt(&self) -> &str {
        &self.messages[0].content
    }

    /// The persona this session was created with.
    pub fn initial_persona(&self) -> &str {
        &self.initial_persona
    }

    /// Drops every turn, keeping the system message, credential and theme.
    pub fn clear(&mut self) {
        self.messages.truncate(1);
    }

    /// Discards the whole session, credential included.
    pub fn reset(&mut self) {
        *self = Self::new(self.initial_persona.clone(), self.initial_theme);
    }

    /// Drops messages past `len`, never removing the system message.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.messages.truncate(len.max(1));
    }

    /// Every message, system message first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The messages a user sees, oldest first (the system message is hidden).
    pub fn visible(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.role.is_visible())
    }

    /// Number of messages including the system message.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the transcript holds only the system message.
    pub fn is_empty(&self) -> bool {
        self.messages.len() <= 1
    }

    /// Number of human turns recorded.
    pub fn turn_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == Role::Human)
            .count()
    }

    /// The trailing human message when it has not been answered yet.
    pub fn pending_human(&self) -> Option<&Message> {
        self.messages.last().filter(|m| m.role == Role::Human)
    }

    /// The messages to send with the next completion call.
    ///
    /// With `window = None` every message is replayed.  With `Some(n)` the
    /// system message plus the `n` most recent turns are sent.
    pub fn replay(&self, window: Option<usize>) -> Cow<'_, [Message]> {
        let turns = self.messages.len() - 1;
        match window {
            Some(n) if n < turns => {
                let mut replay = Vec::with_capacity(n + 1);
                replay.push(self.messages[0].clone());
                replay.extend_from_slice(&self.messages[self.messages.len() - n..]);
                Cow::Owned(replay)
            }
            _ => Cow::Borrowed(&self.messages),
        }
    }

    /// The session credential.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Replaces the session credential.
    pub fn set_credential(&mut self, credential: Credential) {
        self.credential = credential;
    }

    /// The selected theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Selects a theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initialize()
    }
}
