use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::config::ColorScheme;
use crate::tui::state::RenderSnapshot;

/// Render keyhint bar at the bottom
pub fn render_keyhint_bar(
    f: &mut Frame,
    snapshot: &RenderSnapshot,
    colors: &ColorScheme,
    area: Rect,
) {
    let keyhints = if snapshot.notice.is_some() {
        get_notice_keyhints(colors)
    } else if snapshot.tab_index == 1 {
        get_gamepad_keyhints(colors)
    } else {
        get_keyboard_keyhints(colors)
    };

    let keyhint_line = build_keyhint_line(&keyhints);
    let paragraph = Paragraph::new(vec![keyhint_line]);
    f.render_widget(paragraph, area);
}

/// Get keyhints for the keyboard tab
fn get_keyboard_keyhints(colors: &ColorScheme) -> Vec<KeyHint> {
    vec![
        KeyHint::new("Click", "Select row", colors.key_action),
        KeyHint::new("Any key", "Assign", colors.key_action),
        KeyHint::new("Bksp", "Remove", colors.key_warning),
        KeyHint::new("F4", "Clear row", colors.key_warning),
        KeyHint::new("F5", "Defaults", colors.key_warning),
        KeyHint::new("Tab", "Gamepad", colors.key_action),
        KeyHint::new("F2", "Save", colors.key_action),
        KeyHint::new("F10", "Quit", colors.key_danger),
    ]
}

/// Get keyhints for the gamepad tab
fn get_gamepad_keyhints(colors: &ColorScheme) -> Vec<KeyHint> {
    vec![
        KeyHint::new("Click", "Select row", colors.key_action),
        KeyHint::new("Button", "Assign", colors.key_action),
        KeyHint::new("Bksp", "Remove", colors.key_warning),
        KeyHint::new("F4", "Clear row", colors.key_warning),
        KeyHint::new("F5", "Defaults", colors.key_warning),
        KeyHint::new("Tab", "Keyboard", colors.key_action),
        KeyHint::new("F2", "Save", colors.key_action),
        KeyHint::new("F10", "Quit", colors.key_danger),
    ]
}

/// Get keyhints while a notice is open
fn get_notice_keyhints(colors: &ColorScheme) -> Vec<KeyHint> {
    vec![KeyHint::new("Enter/Esc", "Dismiss", colors.key_warning)]
}

/// Build a single line from a list of keyhints
fn build_keyhint_line(keyhints: &[KeyHint]) -> Line<'_> {
    let mut spans = Vec::new();
    for keyhint in keyhints {
        spans.extend(keyhint.to_spans());
    }
    Line::from(spans)
}

/// Represents a single hotkey with its display and description
struct KeyHint {
    keys: &'static str,
    description: &'static str,
    color: Color,
}

impl KeyHint {
    fn new(keys: &'static str, description: &'static str, color: Color) -> Self {
        Self {
            keys,
            description,
            color,
        }
    }

    fn to_spans(&self) -> Vec<Span<'_>> {
        vec![
            Span::styled(
                format!(" {} ", self.keys),
                Style::default().fg(self.color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{}  ", self.description)),
        ]
    }
}
