// Public modules
pub mod chat_completion;
pub mod credential;
pub mod message;
pub mod model_config;
pub mod role;
pub mod usage;

// Re-exports
pub use chat_completion::{
    ChatCompletionRequest, ChatCompletionResponse, Choice, ChoiceMessage, Completion, WireMessage,
};
pub use credential::Credential;
pub use message::Message;
pub use model_config::{
    DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT, MAX_TEMPERATURE,
    ModelConfig, temperature_in_range,
};
pub use role::Role;
pub use usage::Usage;
