//! Theme system for TUI color schemes

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available themes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Theme {
    #[default]
    Default,
    Dark,
    Light,
}

impl Theme {
    /// Get the color scheme for this theme
    pub fn colors(&self) -> ColorScheme {
        match self {
            Self::Default => ColorScheme::default(),
            Self::Dark => ColorScheme::dark(),
            Self::Light => ColorScheme::light(),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(format!(
                "Invalid theme '{}'. Valid options: default, dark, light",
                s
            )),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

/// Color scheme for the TUI
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // General UI
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Tables
    pub row_selected_bg: Color,
    pub action_name: Color,
    pub key_entry: Color,
    pub live_value: Color,

    // Tabs
    pub tab_active: Color,
    pub tab_inactive: Color,

    // Key hints
    pub key_action: Color,
    pub key_warning: Color,
    pub key_danger: Color,

    // Notices
    pub notice_error: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            border: Color::White,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            row_selected_bg: Color::DarkGray,
            action_name: Color::Cyan,
            key_entry: Color::White,
            live_value: Color::Magenta,

            tab_active: Color::Cyan,
            tab_inactive: Color::Gray,

            key_action: Color::Green,
            key_warning: Color::Yellow,
            key_danger: Color::Red,

            notice_error: Color::Red,
        }
    }
}

impl ColorScheme {
    /// Dark theme
    pub fn dark() -> Self {
        Self {
            border: Color::Rgb(80, 80, 80),
            text_primary: Color::Rgb(220, 225, 230),
            text_secondary: Color::Rgb(150, 155, 160),
            text_muted: Color::Rgb(90, 95, 100),

            row_selected_bg: Color::Rgb(40, 45, 50),
            action_name: Color::Rgb(100, 200, 240),  // Bright cyan
            key_entry: Color::Rgb(220, 225, 230),
            live_value: Color::Rgb(230, 150, 230),   // Pink/magenta

            tab_active: Color::Rgb(100, 200, 240),
            tab_inactive: Color::Rgb(120, 125, 130),

            key_action: Color::Rgb(100, 220, 150),   // Bright green
            key_warning: Color::Rgb(250, 200, 100),  // Bright yellow
            key_danger: Color::Rgb(250, 100, 100),   // Bright red

            notice_error: Color::Rgb(240, 90, 90),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            border: Color::Rgb(180, 185, 190),
            text_primary: Color::Rgb(20, 20, 25),    // Near black
            text_secondary: Color::Rgb(70, 75, 80),  // Dark gray
            text_muted: Color::Rgb(140, 145, 150),   // Medium gray

            row_selected_bg: Color::Rgb(235, 240, 245), // Very light blue-gray
            action_name: Color::Rgb(0, 90, 180),     // Deep blue
            key_entry: Color::Rgb(20, 20, 25),
            live_value: Color::Rgb(170, 50, 170),    // Rich magenta

            tab_active: Color::Rgb(0, 90, 180),
            tab_inactive: Color::Rgb(120, 125, 130),

            key_action: Color::Rgb(0, 140, 70),      // Rich green
            key_warning: Color::Rgb(210, 130, 0),    // Deep amber
            key_danger: Color::Rgb(220, 20, 20),     // Bold red

            notice_error: Color::Rgb(200, 20, 20),
        }
    }
}
