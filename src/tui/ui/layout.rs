use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::core::Action;

/// Screen regions of the editor
pub struct AppLayout {
    pub tabs: Rect,
    pub content: Rect,
    pub keyhints: Rect,
}

/// Create the layout for the TUI
pub fn create_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tab bar
            Constraint::Min(11),   // device table
            Constraint::Length(1), // bottom keyhint bar
        ])
        .split(area);

    AppLayout {
        tabs: chunks[0],
        content: chunks[1],
        keyhints: chunks[2],
    }
}

/// Area inside the table's border
pub fn content_inner(content: Rect) -> Rect {
    if content.width < 2 || content.height < 2 {
        return Rect::new(content.x, content.y, 0, 0);
    }
    Rect::new(
        content.x + 1,
        content.y + 1,
        content.width - 2,
        content.height - 2,
    )
}

/// What a click on the table body landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHit {
    /// The gamepad live-status row (not an assignment target)
    LiveDisplay,
    Action(usize),
}

/// Map a click position to a table row.
///
/// Shares its geometry with the renderer through [`create_layout`] and
/// [`content_inner`]: one header line inside the border, then one line
/// per row. The gamepad table carries its live-display row first.
pub fn hit_test_row(area: Rect, tab_index: usize, column: u16, row: u16) -> Option<RowHit> {
    let layout = create_layout(area);
    let inner = content_inner(layout.content);
    if inner.width == 0 || inner.height <= 1 {
        return None;
    }
    if column < inner.x || column >= inner.x + inner.width {
        return None;
    }
    let body_top = inner.y + 1; // header line
    if row < body_top || row >= inner.y + inner.height {
        return None;
    }

    let line = (row - body_top) as usize;
    if tab_index == 1 {
        match line {
            0 => Some(RowHit::LiveDisplay),
            n if n <= Action::COUNT => Some(RowHit::Action(n - 1)),
            _ => None,
        }
    } else if line < Action::COUNT {
        Some(RowHit::Action(line))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn keyboard_rows_map_below_the_header() {
        // Content starts at y=1; border at y=1, header at y=2, rows from y=3.
        assert_eq!(hit_test_row(AREA, 0, 10, 3), Some(RowHit::Action(0)));
        assert_eq!(hit_test_row(AREA, 0, 10, 10), Some(RowHit::Action(7)));
    }

    #[test]
    fn gamepad_table_leads_with_the_live_row() {
        assert_eq!(hit_test_row(AREA, 1, 10, 3), Some(RowHit::LiveDisplay));
        assert_eq!(hit_test_row(AREA, 1, 10, 4), Some(RowHit::Action(0)));
        assert_eq!(hit_test_row(AREA, 1, 10, 11), Some(RowHit::Action(7)));
    }

    #[test]
    fn header_border_and_chrome_are_not_rows() {
        assert_eq!(hit_test_row(AREA, 0, 10, 0), None); // tab bar
        assert_eq!(hit_test_row(AREA, 0, 10, 1), None); // top border
        assert_eq!(hit_test_row(AREA, 0, 10, 2), None); // header
        assert_eq!(hit_test_row(AREA, 0, 0, 5), None); // left border
        assert_eq!(hit_test_row(AREA, 0, 79, 5), None); // right border
        assert_eq!(hit_test_row(AREA, 0, 10, 23), None); // keyhint bar
    }

    #[test]
    fn clicks_past_the_last_row_miss() {
        assert_eq!(hit_test_row(AREA, 0, 10, 11), None);
        assert_eq!(hit_test_row(AREA, 1, 10, 12), None);
    }

    #[test]
    fn degenerate_area_never_hits() {
        let tiny = Rect {
            x: 0,
            y: 0,
            width: 1,
            height: 3,
        };
        assert_eq!(hit_test_row(tiny, 0, 0, 1), None);
    }
}
