//! Chat application module for interactive conversations.
//!
//! This module provides a REPL chat interface built on top of the parley
//! completion client. It supports:
//!
//! - A per-session transcript replayed with every request
//! - Themed ANSI output and an in-flight spinner
//! - Slash commands for session control
//! - Configurable model, endpoint, system role, and temperature
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`state`]: The transcript, API key and theme of one session
//! - [`theme`]: Color palettes
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: Turn handling and API interaction
//! - [`render`]: Output rendering
//! - [`commands`]: Slash command parsing

pub mod commands;
pub mod config;
pub mod render;
pub mod session;
pub mod state;
pub mod theme;

pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatArgsError, ChatConfig, parse_temperature};
pub use render::{PlainTextRenderer, Renderer, draw_transcript, format_message, speaker_label};
pub use session::{ChatSession, LARGE_REPLAY_MESSAGES, SessionStats, TurnPhase};
pub use state::{ASSISTANT_NAME, DEFAULT_PERSONA, SessionState};
pub use theme::{Rgb, Theme, ThemeStyle};
