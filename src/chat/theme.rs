//! Presentation themes for the chat transcript.
//!
//! A theme is a fixed palette: the background and foreground used for message
//! bodies plus an accent color for each speaker label.  Palettes are emitted as
//! 24-bit ANSI escape sequences.

use std::fmt;
use std::str::FromStr;

use crate::types::Role;

/// An sRGB color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Renders the color as `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// ANSI escape selecting this color as the foreground.
    pub fn ansi_fg(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.0, self.1, self.2)
    }

    /// ANSI escape selecting this color as the background.
    pub fn ansi_bg(self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.0, self.1, self.2)
    }
}

/// The palette a [`Theme`] resolves to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ThemeStyle {
    /// Background behind message bodies.
    pub background: Rgb,

    /// Text color of message bodies.
    pub foreground: Rgb,

    /// Label color for the user's turns.
    pub human_accent: Rgb,

    /// Label color for the model's turns.
    pub ai_accent: Rgb,

    /// Color for warnings.
    pub warning: Rgb,
}

impl ThemeStyle {
    /// The accent for `role`'s label.  The system role never renders, so it
    /// falls back to the body foreground.
    pub fn accent(&self, role: Role) -> Rgb {
        match role {
            Role::Human => self.human_accent,
            Role::Ai => self.ai_accent,
            Role::System => self.foreground,
        }
    }

    /// Escape sequence that switches to body colors.
    pub fn body_prefix(&self) -> String {
        format!("{}{}", self.background.ansi_bg(), self.foreground.ansi_fg())
    }
}

/// The selectable themes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// White background, dark grey text.
    #[default]
    Light,

    /// Near-black background, white text.
    Dark,

    /// Pale blue background, black text.
    Blue,
}

impl Theme {
    /// All themes in menu order.
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Blue];

    /// Menu name of the theme.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Blue => "blue",
        }
    }

    /// The theme's palette.
    pub fn style(self) -> ThemeStyle {
        match self {
            Theme::Light => ThemeStyle {
                background: Rgb(0xff, 0xff, 0xff),
                foreground: Rgb(0x33, 0x33, 0x33),
                human_accent: Rgb(0x15, 0x65, 0xc0),
                ai_accent: Rgb(0x2e, 0x7d, 0x32),
                warning: Rgb(0xe6, 0x51, 0x00),
            },
            Theme::Dark => ThemeStyle {
                background: Rgb(0x1f, 0x1f, 0x1f),
                foreground: Rgb(0xff, 0xff, 0xff),
                human_accent: Rgb(0x64, 0xb5, 0xf6),
                ai_accent: Rgb(0x81, 0xc7, 0x84),
                warning: Rgb(0xff, 0xb7, 0x4d),
            },
            Theme::Blue => ThemeStyle {
                background: Rgb(0xe3, 0xf2, 0xfd),
                foreground: Rgb(0x00, 0x00, 0x00),
                human_accent: Rgb(0x0d, 0x47, 0xa1),
                ai_accent: Rgb(0x00, 0x69, 0x5c),
                warning: Rgb(0xbf, 0x36, 0x0c),
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name() == wanted)
            .ok_or_else(|| format!("unknown theme '{}' (expected light, dark or blue)", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_themes() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(" Dark ".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("BLUE".parse::<Theme>(), Ok(Theme::Blue));
        assert!("solarized".parse::<Theme>().is_err());
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn palettes_match_reference_colors() {
        assert_eq!(Theme::Light.style().background.to_hex(), "#ffffff");
        assert_eq!(Theme::Light.style().foreground.to_hex(), "#333333");
        assert_eq!(Theme::Dark.style().background.to_hex(), "#1f1f1f");
        assert_eq!(Theme::Dark.style().foreground.to_hex(), "#ffffff");
        assert_eq!(Theme::Blue.style().background.to_hex(), "#e3f2fd");
        assert_eq!(Theme::Blue.style().foreground.to_hex(), "#000000");
    }

    #[test]
    fn ansi_sequences() {
        let style = Theme::Dark.style();
        assert_eq!(style.background.ansi_bg(), "\x1b[48;2;31;31;31m");
        assert_eq!(style.foreground.ansi_fg(), "\x1b[38;2;255;255;255m");
        assert_eq!(
            style.body_prefix(),
            "\x1b[48;2;31;31;31m\x1b[38;2;255;255;255m"
        );
        assert_eq!(style.accent(Role::Ai), style.ai_accent);
        assert_eq!(style.accent(Role::System), style.foreground);
    }
}
