//! Slash command parsing for the chat application.
//!
//! This module handles parsing of special commands that start with `/`,
//! allowing users to control the chat session without sending messages
//! to the API.

use crate::chat::config::parse_temperature;
use crate::chat::theme::Theme;
use crate::types::MAX_TEMPERATURE;

/// A parsed chat command.
///
/// These commands control the chat session and are not sent to the API.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Prompt for the API key with masked input.
    Key,

    /// Show the system role.
    ShowRole,

    /// Replace the system role.
    SetRole(String),

    /// Restore the system role the session started with.
    DefaultRole,

    /// Switch theme and redraw the transcript.
    Theme(Theme),

    /// Clear the conversation history.
    Clear,

    /// Discard the whole session, API key included.
    Reset,

    /// Resend the unanswered message after a failure.
    Retry,

    /// Redraw the transcript.
    History,

    /// Change the model.
    Model(String),

    /// Set the sampling temperature.
    Temperature(f32),

    /// Change the API base URL.
    Endpoint(String),

    /// Display help information.
    Help,

    /// Exit the chat application.
    Quit,

    /// Display session statistics (message count, current model, etc.).
    Stats,

    /// Show the current configuration.
    ShowConfig,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a valid command,
/// or `None` if it should be treated as a regular message.
///
/// # Examples
///
/// ```
/// # use parley::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/theme dark").is_some());
/// assert!(parse_command("Hello there!").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    let rest = input.strip_prefix('/')?;
    let mut parts = rest.splitn(2, char::is_whitespace);
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "key" => match argument {
            None => ChatCommand::Key,
            Some(_) => ChatCommand::Invalid(
                "/key takes no argument; the key is entered at a hidden prompt".to_string(),
            ),
        },
        "role" | "system" => match argument {
            None => ChatCommand::ShowRole,
            Some(arg) if arg.eq_ignore_ascii_case("default") => ChatCommand::DefaultRole,
            Some(arg) => ChatCommand::SetRole(arg.to_string()),
        },
        "theme" => match argument {
            Some(arg) => match arg.parse::<Theme>() {
                Ok(theme) => ChatCommand::Theme(theme),
                Err(err) => ChatCommand::Invalid(format!("/theme: {err}")),
            },
            None => ChatCommand::Invalid("/theme requires light, dark or blue".to_string()),
        },
        "clear" => ChatCommand::Clear,
        "reset" => ChatCommand::Reset,
        "retry" => ChatCommand::Retry,
        "history" => ChatCommand::History,
        "model" => match argument {
            Some(model) => ChatCommand::Model(model.to_string()),
            None => ChatCommand::Invalid("/model requires a model name".to_string()),
        },
        "temperature" | "temp" => match argument {
            Some(arg) => match parse_temperature(arg) {
                Some(value) => ChatCommand::Temperature(value),
                None => ChatCommand::Invalid(format!(
                    "/temperature expects a value between 0 and {MAX_TEMPERATURE}"
                )),
            },
            None => ChatCommand::Invalid("/temperature requires a value".to_string()),
        },
        "endpoint" => match argument {
            Some(url) => ChatCommand::Endpoint(url.to_string()),
            None => ChatCommand::Invalid("/endpoint requires a URL".to_string()),
        },
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        "stats" | "status" => ChatCommand::Stats,
        "config" => ChatCommand::ShowConfig,
        _ => ChatCommand::Invalid(format!("Unknown command: /{}", command)),
    };

    Some(result)
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Available commands:
  /key                   Enter your API key (input is hidden;
                         press Enter on an empty key to cancel)
  /role [text]           Show the assistant's role, or set a new one
  /role default          Restore the starting role
  /theme light|dark|blue Switch the color theme
  /clear                 Clear conversation history
  /reset                 Start over, forgetting the API key
  /retry                 Resend the last unanswered message
  /history               Show the conversation so far
  /model <name>          Change the model (e.g., /model gpt-4o-mini)
  /temperature <v>       Set temperature 0.0-2.0
  /endpoint <url>        Change the API base URL
  /stats                 Show session statistics
  /config                Show current configuration
  /help                  Show this help message
  /quit                  Exit the chat"#
}
