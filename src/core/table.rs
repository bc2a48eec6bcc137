//! Table selection state: which row is the assignment target, and the
//! bookkeeping that keeps an attached view in sync with the key map.

use crate::core::keymap::KeyMap;
use crate::core::reconcile;

/// Rendering seam between the table state and whatever draws it.
///
/// `render_row` always receives the full canonical row contents; a view
/// is expected to rebuild that row from scratch rather than patch it,
/// so it cannot drift from the map after a multi-row change.
pub trait RowView {
    fn render_row(&mut self, index: usize, keys: &[String]);
    fn set_row_selected(&mut self, index: usize, selected: bool);
}

/// One device table: a key map plus the currently selected row.
///
/// `None` selection is the "no target" state; for the gamepad table it
/// doubles as the live-display mode. Assignments while nothing is
/// selected are dropped.
pub struct TableSelector {
    map: KeyMap,
    default_map: KeyMap,
    selection: Option<usize>,
}

impl TableSelector {
    pub fn new(map: KeyMap, default_map: KeyMap, selection: Option<usize>) -> Self {
        let selection = selection.filter(|&row| row < map.row_count());
        Self {
            map,
            default_map,
            selection,
        }
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Read-only view of the live map, for rendering.
    pub fn key_map(&self) -> &KeyMap {
        &self.map
    }

    /// Deep copy of the current map, for persistence. Callers never see
    /// the live instance.
    pub fn snapshot(&self) -> KeyMap {
        self.map.clone()
    }

    /// Change the selected row. The old row is visually deselected
    /// before the new one is selected, in that order, so an observer
    /// watching selection state never sees two selected rows.
    pub fn select_row(&mut self, index: Option<usize>, view: &mut dyn RowView) {
        let index = index.filter(|&row| row < self.map.row_count());
        if let Some(old) = self.selection {
            view.set_row_selected(old, false);
        }
        if let Some(new) = index {
            view.set_row_selected(new, true);
        }
        self.selection = index;
    }

    /// Assign an identifier to the selected row, pulling it out of any
    /// row that held it. No-op when nothing is selected or the
    /// identifier is empty. Changed rows are re-rendered from the map.
    pub fn assign(&mut self, identifier: &str, view: &mut dyn RowView) {
        let Some(target) = self.selection else {
            return;
        };
        let changed = reconcile::assign(&mut self.map, identifier, target);
        for row in changed {
            view.render_row(row, self.map.row(row));
        }
    }

    /// Remove one identifier from one row, if present.
    pub fn remove_key(&mut self, row: usize, identifier: &str, view: &mut dyn RowView) {
        if reconcile::remove(&mut self.map, row, identifier) {
            view.render_row(row, self.map.row(row));
        }
    }

    /// Empty one row.
    pub fn clear_row(&mut self, row: usize, view: &mut dyn RowView) {
        if reconcile::clear(&mut self.map, row) {
            view.render_row(row, self.map.row(row));
        }
    }

    /// Replace the whole map with a deep copy of `map` and re-render
    /// every row.
    pub fn set_key_map(&mut self, map: &KeyMap, view: &mut dyn RowView) {
        self.map = map.clone();
        self.render_all(view);
    }

    /// Replace the whole map with the construction-time default.
    pub fn reset_to_default(&mut self, view: &mut dyn RowView) {
        self.map = self.default_map.clone();
        self.render_all(view);
    }

    /// Push the full table state into a view: every row's contents plus
    /// the current selection highlight.
    pub fn render_all(&self, view: &mut dyn RowView) {
        for (index, keys) in self.map.rows().enumerate() {
            view.render_row(index, keys);
            view.set_row_selected(index, self.selection == Some(index));
        }
    }
}
