use serde::{Deserialize, Serialize};

use crate::types::{Message, Usage};

/// A message as the chat-completions endpoint expects it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WireMessage {
    /// `system`, `user` or `assistant`.
    pub role: String,

    /// The message text.
    pub content: String,
}

impl From<&Message> for WireMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role.wire_name().to_string(),
            content: message.content.clone(),
        }
    }
}

/// Request body for `POST {endpoint}/chat/completions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequest {
    /// Model identifier.
    pub model: String,

    /// The replayed transcript, system prompt first, oldest turn next.
    pub messages: Vec<WireMessage>,

    /// Sampling temperature.
    pub temperature: f32,
}

impl ChatCompletionRequest {
    /// Builds a request from transcript messages in order.
    pub fn new(model: impl Into<String>, messages: &[Message], temperature: f32) -> Self {
        Self {
            model: model.into(),
            messages: messages.iter().map(WireMessage::from).collect(),
            temperature,
        }
    }
}

/// The generated message inside a [`Choice`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChoiceMessage {
    /// Reported role, normally `assistant`.
    #[serde(default)]
    pub role: Option<String>,

    /// Generated text; `null` when the provider refused or filtered.
    #[serde(default)]
    pub content: Option<String>,
}

/// One candidate completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Choice {
    /// Position of this candidate.
    #[serde(default)]
    pub index: u32,

    /// The generated message.
    #[serde(default)]
    pub message: ChoiceMessage,

    /// Why generation stopped (`stop`, `length`, ...).
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Response body from the chat-completions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatCompletionResponse {
    /// Provider-assigned completion id.
    #[serde(default)]
    pub id: Option<String>,

    /// The model that actually served the request.
    #[serde(default)]
    pub model: Option<String>,

    /// Candidate completions; parley only ever asks for one.
    #[serde(default)]
    pub choices: Vec<Choice>,

    /// Token accounting, when the provider reports it.
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatCompletionResponse {
    /// The first choice, if any.
    pub fn first_choice(&self) -> Option<&Choice> {
        self.choices.first()
    }

    /// The text of the first choice, if present.
    pub fn first_text(&self) -> Option<&str> {
        self.first_choice()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

/// The outcome of one successful completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The generated reply.
    pub text: String,

    /// Token accounting for the call, if reported.
    pub usage: Option<Usage>,

    /// The model that served the request, if reported.
    pub model: Option<String>,

    /// Why generation stopped, if reported.
    pub finish_reason: Option<String>,
}

impl Completion {
    /// A completion carrying only text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
            model: None,
            finish_reason: None,
        }
    }

    /// Sets the usage.
    pub fn with_usage(mut self, usage: Usage) -> Self {
        self.usage = Some(usage);
        self
    }
}
