//! Theme configuration for CLI output
//!
//! Centralizes all color definitions. Colors are written as ANSI escape
//! sequences through crossterm and are dropped entirely when stdout is not
//! a terminal or `NO_COLOR` is set.

use crossterm::style::{Color, ResetColor, SetForegroundColor};

/// Color theme for CLI output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color (timestamps, hints)
    pub text_secondary: Color,
    /// Accent color for the active cue
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Whether escape sequences are emitted at all
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::lecture()
    }
}

impl Theme {
    /// Default theme - gray text, blue highlight for the active cue.
    pub fn lecture() -> Self {
        Self {
            text_primary: Color::Grey,
            text_secondary: Color::DarkGrey,
            accent: Color::Blue,
            error: Color::Red,
            success: Color::Green,
            enabled: true,
        }
    }

    /// Theme that never emits escape sequences.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::lecture()
        }
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", SetForegroundColor(color), text, ResetColor)
        } else {
            text.to_string()
        }
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }
}

/// Theme for the current process: colored only on an interactive stdout.
pub fn current_theme() -> Theme {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if no_color || !atty::is(atty::Stream::Stdout) {
        Theme::plain()
    } else {
        Theme::default()
    }
}
