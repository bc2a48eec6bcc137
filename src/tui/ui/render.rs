use ratatui::{
    Frame,
    style::{Modifier, Style},
    widgets::Tabs,
};

use crate::tui::state::{AppState, DeviceTab};
use crate::tui::ui::keyhint_bar::render_keyhint_bar;
use crate::tui::ui::keymap_table::render_keymap_table;
use crate::tui::ui::layout::create_layout;
use crate::tui::ui::notice::render_notice;

/// Render the TUI interface frame
pub fn render_ui(f: &mut Frame, state: &AppState) {
    let snapshot = state.get_render_snapshot();
    let colors = &state.colors;

    let layout = create_layout(f.area());

    let tabs = Tabs::new(DeviceTab::TITLES.to_vec())
        .select(snapshot.tab_index)
        .style(Style::default().fg(colors.tab_inactive))
        .highlight_style(
            Style::default()
                .fg(colors.tab_active)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, layout.tabs);

    render_keymap_table(f, &snapshot, layout.content, colors);
    render_keyhint_bar(f, &snapshot, colors, layout.keyhints);

    if let Some(ref notice) = snapshot.notice {
        render_notice(f, notice, colors);
    }
}
