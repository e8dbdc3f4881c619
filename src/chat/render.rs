//! Output rendering for the chat application.
//!
//! This module provides a trait-based rendering abstraction so the session can
//! report progress without knowing where output goes.  The default
//! implementation writes to stdout using 24-bit ANSI colors from the active
//! [`Theme`], and shows an `indicatif` spinner while a completion call is in
//! flight.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::chat::state::SessionState;
use crate::chat::theme::Theme;
use crate::types::{Message, Role};

/// ANSI escape code for bold text (used for speaker labels).
const ANSI_BOLD: &str = "\x1b[1m";

/// ANSI escape code for dim text (used for informational lines).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for red text (used for errors).
const ANSI_RED: &str = "\x1b[31m";

/// Trait for rendering chat output.
///
/// This abstraction allows for different rendering strategies:
/// - Plain text with ANSI styling
/// - Plain text without styling (for piping/redirecting)
/// - Recording renderers in tests
pub trait Renderer: Send {
    /// Print one transcript message.  System messages are never shown.
    fn print_message(&mut self, message: &Message);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);

    /// Print a warning, e.g. a missing credential.
    fn print_warning(&mut self, warning: &str);

    /// Print an error message.
    fn print_error(&mut self, error: &str);

    /// Called when a completion call is sent.
    fn start_waiting(&mut self, label: &str);

    /// Called when a completion call finishes, successfully or not.
    fn finish_waiting(&mut self);

    /// Called when the call is interrupted by the user.
    fn print_interrupted(&mut self);

    /// Switches the palette used for subsequent output.
    fn set_theme(&mut self, theme: Theme);
}

/// Prints every visible message of `state`, oldest first.
///
/// The system message is never drawn.
pub fn draw_transcript(state: &SessionState, renderer: &mut dyn Renderer) {
    for message in state.visible() {
        renderer.print_message(message);
    }
}

/// Label printed before a message body.
pub fn speaker_label(role: Role) -> &'static str {
    match role {
        Role::System => "System",
        Role::Human => "You",
        Role::Ai => "AI",
    }
}

/// Formats a message the way [`PlainTextRenderer`] prints it.
pub fn format_message(message: &Message, theme: Theme, use_color: bool) -> String {
    let label = speaker_label(message.role);
    if !use_color {
        return format!("{label}: {}", message.content);
    }
    let style = theme.style();
    let accent = style.accent(message.role).ansi_fg();
    let body = style.body_prefix();
    // Each line gets its own prefix so the background survives line wraps.
    let content = message
        .content
        .lines()
        .map(|line| format!("{body}{line}{ANSI_RESET}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{ANSI_BOLD}{accent}{label}:{ANSI_RESET} {content}")
}

/// Plain text renderer with optional ANSI styling.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
    theme: Theme,
    spinner: Option<ProgressBar>,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a new PlainTextRenderer with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
            theme: Theme::default(),
            spinner: None,
        }
    }

    /// Sets the initial theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flushes stdout to ensure immediate display.
    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }

    fn clear_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_message(&mut self, message: &Message) {
        if !message.role.is_visible() {
            return;
        }
        self.clear_spinner();
        println!("{}", format_message(message, self.theme, self.use_color));
        self.flush();
    }

    fn print_info(&mut self, info: &str) {
        self.clear_spinner();
        if self.use_color {
            println!("{ANSI_DIM}{info}{ANSI_RESET}");
        } else {
            println!("{info}");
        }
    }

    fn print_warning(&mut self, warning: &str) {
        self.clear_spinner();
        if self.use_color {
            let color = self.theme.style().warning.ansi_fg();
            eprintln!("{color}Warning:{ANSI_RESET} {warning}");
        } else {
            eprintln!("Warning: {warning}");
        }
    }

    fn print_error(&mut self, error: &str) {
        self.clear_spinner();
        if self.use_color {
            eprintln!("{ANSI_RED}Error:{ANSI_RESET} {error}");
        } else {
            eprintln!("Error: {error}");
        }
    }

    fn start_waiting(&mut self, label: &str) {
        self.clear_spinner();
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(label.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn finish_waiting(&mut self) {
        self.clear_spinner();
    }

    fn print_interrupted(&mut self) {
        self.clear_spinner();
        println!("[interrupted]");
        self.flush();
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}
