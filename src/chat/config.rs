//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling chat behavior.

use std::fmt;
use std::time::Duration;

use arrrg_derive::CommandLine;

use crate::chat::state::DEFAULT_PERSONA;
use crate::chat::theme::Theme;
use crate::types::{MAX_TEMPERATURE, ModelConfig, temperature_in_range};

/// Command-line arguments for the parley-chat tool.
///
/// The API key is not a flag; it is entered with `/key`.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Model to use for chat.
    #[arrrg(optional, "Model to use (default: gpt-4o-mini)", "MODEL")]
    pub model: Option<String>,

    /// API base for chat completions.
    #[arrrg(
        optional,
        "API base URL (default: https://twapi.openai-hk.com/v1)",
        "URL"
    )]
    pub endpoint: Option<String>,

    /// Sampling temperature.
    #[arrrg(optional, "Sampling temperature, 0 to 2 (default: 0.7)", "TEMP")]
    pub temperature: Option<String>,

    /// Per-request timeout in seconds.
    #[arrrg(optional, "Request timeout in seconds (default: 60)", "SECONDS")]
    pub timeout: Option<u32>,

    /// System prompt to set context for the conversation.
    #[arrrg(optional, "System role for the assistant", "PROMPT")]
    pub system: Option<String>,

    /// Initial theme.
    #[arrrg(optional, "Theme: light, dark or blue (default: light)", "THEME")]
    pub theme: Option<String>,

    /// Replay only the most recent messages.
    #[arrrg(
        optional,
        "Replay only the N most recent messages (default: all)",
        "N"
    )]
    pub history_window: Option<u32>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,

    /// Log debug events to stderr.
    #[arrrg(flag, "Enable debug logging")]
    pub verbose: bool,
}

/// A command-line value that could not be turned into configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatArgsError {
    /// `--temperature` was not a number in range.
    Temperature(String),

    /// `--timeout` was zero.
    Timeout,

    /// `--theme` named an unknown theme.
    Theme(String),

    /// `--endpoint` was not an http(s) URL.
    Endpoint(String),

    /// `--system` was blank.
    SystemPrompt,

    /// `--history-window` was zero.
    HistoryWindow,
}

impl fmt::Display for ChatArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatArgsError::Temperature(value) => write!(
                f,
                "invalid --temperature '{value}': expected a number between 0 and {MAX_TEMPERATURE}"
            ),
            ChatArgsError::Timeout => write!(f, "--timeout must be at least 1 second"),
            ChatArgsError::Theme(message) => write!(f, "invalid --theme: {message}"),
            ChatArgsError::Endpoint(message) => write!(f, "invalid --endpoint: {message}"),
            ChatArgsError::SystemPrompt => write!(f, "--system must not be empty"),
            ChatArgsError::HistoryWindow => write!(f, "--history-window must be at least 1"),
        }
    }
}

impl std::error::Error for ChatArgsError {}

/// Configuration for a chat session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    /// Model, endpoint, temperature and timeout for completion calls.
    pub model_config: ModelConfig,

    /// Persona placed in the system message of a fresh session.
    pub system_prompt: String,

    /// Theme selected when the session starts.
    pub theme: Theme,

    /// Number of recent non-system messages replayed, or `None` for all.
    pub history_window: Option<usize>,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,

    /// Whether debug logging is enabled.
    pub verbose: bool,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Model: gpt-4o-mini at 0.7 temperature, 60 s timeout
    /// - Persona: Dahuang, the friendly general-purpose assistant
    /// - Theme: light
    /// - Replay: the full transcript
    /// - Color: enabled
    pub fn new() -> Self {
        Self {
            model_config: ModelConfig::new(),
            system_prompt: DEFAULT_PERSONA.to_string(),
            theme: Theme::default(),
            history_window: None,
            use_color: true,
            verbose: false,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_config.model = model.into();
        self
    }

    /// Sets the API base.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.model_config.endpoint = endpoint.into();
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.model_config.temperature = temperature;
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.model_config.timeout = timeout;
        self
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Sets the initial theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Limits replay to the `window` most recent messages.
    pub fn with_history_window(mut self, window: Option<usize>) -> Self {
        self.history_window = window;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<ChatArgs> for ChatConfig {
    type Error = ChatArgsError;

    fn try_from(args: ChatArgs) -> Result<Self, Self::Error> {
        let mut config = ChatConfig::new();
        if let Some(model) = args.model {
            config = config.with_model(model);
        }
        if let Some(endpoint) = args.endpoint {
            config = config.with_endpoint(endpoint);
            config
                .model_config
                .completions_url()
                .map_err(|err| ChatArgsError::Endpoint(err.to_string()))?;
        }
        if let Some(raw) = args.temperature {
            let temperature = parse_temperature(&raw)
                .ok_or_else(|| ChatArgsError::Temperature(raw.clone()))?;
            config = config.with_temperature(temperature);
        }
        match args.timeout {
            Some(0) => return Err(ChatArgsError::Timeout),
            Some(secs) => config = config.with_timeout(Duration::from_secs(u64::from(secs))),
            None => {}
        }
        if let Some(system) = args.system {
            if system.trim().is_empty() {
                return Err(ChatArgsError::SystemPrompt);
            }
            config = config.with_system_prompt(system);
        }
        if let Some(theme) = args.theme {
            config = config.with_theme(theme.parse().map_err(ChatArgsError::Theme)?);
        }
        match args.history_window {
            Some(0) => return Err(ChatArgsError::HistoryWindow),
            Some(n) => config = config.with_history_window(Some(n as usize)),
            None => {}
        }
        config.use_color = !args.no_color;
        config.verbose = args.verbose;
        Ok(config)
    }
}

/// Parses a temperature, accepting only finite values in `0.0..=2.0`.
pub fn parse_temperature(raw: &str) -> Option<f32> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|t| temperature_in_range(*t))
}
