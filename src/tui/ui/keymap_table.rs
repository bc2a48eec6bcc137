use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Row, Table},
};

use crate::config::ColorScheme;
use crate::core::Action;
use crate::tui::state::RenderSnapshot;

/// Render the key map table of the active tab
pub fn render_keymap_table(
    f: &mut Frame,
    snapshot: &RenderSnapshot,
    area: Rect,
    colors: &ColorScheme,
) {
    let (title, rows) = if snapshot.tab_index == 1 {
        (" Gamepad ", gamepad_rows(snapshot, colors))
    } else {
        (" Keyboard ", keyboard_rows(snapshot, colors))
    };

    let header = Row::new(["Action", "Assigned inputs"]).style(
        Style::default()
            .fg(colors.text_secondary)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(10)])
        .header(header)
        .block(
            Block::bordered()
                .title(title)
                .border_style(Style::default().fg(colors.border)),
        );

    f.render_widget(table, area);
}

fn keyboard_rows<'a>(snapshot: &'a RenderSnapshot, colors: &ColorScheme) -> Vec<Row<'a>> {
    action_rows(
        &snapshot.keyboard_rows,
        snapshot.keyboard_selected,
        colors,
    )
}

fn gamepad_rows<'a>(snapshot: &'a RenderSnapshot, colors: &ColorScheme) -> Vec<Row<'a>> {
    let live_text = if !snapshot.monitoring {
        Span::styled("(paused)", Style::default().fg(colors.text_muted))
    } else {
        let button = snapshot.live_button.as_deref().unwrap_or("-");
        Span::styled(
            format!("stick: {}  button: {}", snapshot.direction_label, button),
            Style::default().fg(colors.live_value),
        )
    };
    let live_row = Row::new([
        Line::from(Span::styled(
            "Stick",
            Style::default().fg(colors.text_muted),
        )),
        Line::from(live_text),
    ]);

    let mut rows = vec![live_row];
    rows.extend(action_rows(
        &snapshot.gamepad_rows,
        snapshot.gamepad_selected,
        colors,
    ));
    rows
}

/// One line per action; the selected row carries the highlight
/// background. Each line is rebuilt from the cached view contents.
fn action_rows<'a>(
    rows: &'a [Vec<String>],
    selected: Option<usize>,
    colors: &ColorScheme,
) -> Vec<Row<'a>> {
    Action::ALL
        .iter()
        .enumerate()
        .map(|(index, action)| {
            let keys = rows.get(index).map(Vec::as_slice).unwrap_or_default();
            let row = Row::new([
                Line::from(Span::styled(
                    action.label(),
                    Style::default().fg(colors.action_name),
                )),
                Line::from(Span::styled(
                    keys.join(", "),
                    Style::default().fg(colors.key_entry),
                )),
            ]);
            if selected == Some(index) {
                row.style(
                    Style::default()
                        .bg(colors.row_selected_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                row
            }
        })
        .collect()
}
