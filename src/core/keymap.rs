//! Key map data model: eight logical action slots, each holding the
//! physical inputs assigned to it.

use std::fmt;

/// The eight logical actions a physical input can be bound to.
/// Row order in a [`KeyMap`] follows this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Menu,
    Close,
    Multi,
    AllClose,
    Up,
    Right,
    Down,
    Left,
}

impl Action {
    pub const ALL: [Self; 8] = [
        Self::Menu,
        Self::Close,
        Self::Multi,
        Self::AllClose,
        Self::Up,
        Self::Right,
        Self::Down,
        Self::Left,
    ];

    /// Number of logical action slots (= row count of every key map).
    pub const COUNT: usize = Self::ALL.len();

    /// Display label for table rows and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Menu => "Menu",
            Self::Close => "Close",
            Self::Multi => "Multi",
            Self::AllClose => "All Close",
            Self::Up => "Up",
            Self::Right => "Right",
            Self::Down => "Down",
            Self::Left => "Left",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered rows of physical-input identifiers for one device class.
///
/// Invariants upheld by construction and by the reconciler:
/// an identifier lives in at most one row, and never twice in the
/// same row. Insertion order within a row is preserved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    rows: Vec<Vec<String>>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyMap {
    /// Create an empty map with [`Action::COUNT`] rows.
    pub fn new() -> Self {
        Self {
            rows: vec![Vec::new(); Action::COUNT],
        }
    }

    /// Build a map from untrusted row data (a loaded profile).
    ///
    /// Rows are normalized to exactly [`Action::COUNT`] entries
    /// (extra rows dropped, missing rows empty). Empty identifiers and
    /// identifiers already present anywhere in the map are skipped, so
    /// the exclusivity and no-duplicate invariants hold from birth.
    pub fn from_rows<R>(rows: R) -> Self
    where
        R: IntoIterator<Item = Vec<String>>,
    {
        let mut map = Self::new();
        for (index, row) in rows.into_iter().take(Action::COUNT).enumerate() {
            for key in row {
                if !key.is_empty() && map.position(&key).is_none() {
                    map.rows[index].push(key);
                }
            }
        }
        map
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Contents of one row, in insertion order.
    pub fn row(&self, index: usize) -> &[String] {
        &self.rows[index]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Deep copy of the row data, for serialization.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.rows.clone()
    }

    /// Locate an identifier: `(row_index, position_in_row)`.
    pub fn position(&self, identifier: &str) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(row, keys)| {
            keys.iter()
                .position(|k| k == identifier)
                .map(|pos| (row, pos))
        })
    }

    pub(crate) fn push(&mut self, row: usize, identifier: String) {
        self.rows[row].push(identifier);
    }

    /// Remove every occurrence of `identifier` from `row`, reporting
    /// whether anything was removed.
    pub(crate) fn remove(&mut self, row: usize, identifier: &str) -> bool {
        let before = self.rows[row].len();
        self.rows[row].retain(|k| k != identifier);
        self.rows[row].len() != before
    }

    /// Empty one row, reporting whether it held anything.
    pub(crate) fn clear_row(&mut self, row: usize) -> bool {
        let had_keys = !self.rows[row].is_empty();
        self.rows[row].clear();
        had_keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_map_has_one_empty_row_per_action() {
        let map = KeyMap::new();
        assert_eq!(map.row_count(), Action::COUNT);
        assert!(map.rows().all(<[String]>::is_empty));
    }

    #[test]
    fn from_rows_drops_cross_row_duplicates_keeping_first() {
        let map = KeyMap::from_rows(vec![
            vec!["KeyA".to_string(), "Enter".to_string()],
            vec!["Enter".to_string(), "KeyB".to_string()],
        ]);
        assert_eq!(map.row(0), ["KeyA", "Enter"]);
        assert_eq!(map.row(1), ["KeyB"]);
    }

    #[test]
    fn from_rows_drops_in_row_duplicates_and_empty_identifiers() {
        let map = KeyMap::from_rows(vec![vec![
            "KeyA".to_string(),
            String::new(),
            "KeyA".to_string(),
        ]]);
        assert_eq!(map.row(0), ["KeyA"]);
    }

    #[test]
    fn from_rows_normalizes_row_count() {
        let many: Vec<Vec<String>> = (0..12).map(|i| vec![format!("{i}")]).collect();
        assert_eq!(KeyMap::from_rows(many).row_count(), Action::COUNT);
        assert_eq!(
            KeyMap::from_rows(vec![vec!["KeyA".to_string()]]).row_count(),
            Action::COUNT
        );
    }

    #[test]
    fn position_finds_row_and_slot() {
        let map = KeyMap::from_rows(vec![
            vec!["KeyA".to_string()],
            vec!["KeyB".to_string(), "KeyC".to_string()],
        ]);
        assert_eq!(map.position("KeyC"), Some((1, 1)));
        assert_eq!(map.position("KeyZ"), None);
    }
}
