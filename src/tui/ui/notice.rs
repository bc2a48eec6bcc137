use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
};

use crate::config::ColorScheme;
use crate::tui::state::Notice;

/// Render the blocking notice popup over the rest of the UI
pub fn render_notice(f: &mut Frame, notice: &Notice, colors: &ColorScheme) {
    let area = centered_rect(f.area(), 50, 7);

    let block = Block::bordered()
        .title(Span::styled(
            format!(" {} ", notice.title),
            Style::default()
                .fg(colors.notice_error)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(colors.notice_error));

    let text = vec![
        Line::from(Span::styled(
            notice.body.clone(),
            Style::default().fg(colors.text_primary),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter or Esc to dismiss",
            Style::default().fg(colors.text_muted),
        )),
    ];

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

/// Rect of the given size, centered in `area` and clamped to it
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped_and_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(area, 50, 7);
        assert_eq!(rect, Rect::new(15, 8, 50, 7));

        let tiny = Rect::new(0, 0, 10, 4);
        let clamped = centered_rect(tiny, 50, 7);
        assert_eq!(clamped, Rect::new(0, 0, 10, 4));
    }
}
