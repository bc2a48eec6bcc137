//! Row/key reconciliation: the rule that a physical input belongs to at
//! most one logical action at a time.

use std::collections::BTreeSet;

use crate::core::keymap::KeyMap;

/// Assign `identifier` to `target`, removing it from any row that held it.
///
/// Returns the indices of rows whose contents changed: the target row,
/// plus the donor row when the identifier moved. Re-assigning an
/// identifier to the row that already holds it changes nothing and
/// returns the empty set. An out-of-range target is a no-op.
///
/// Every row is scanned rather than stopping at the first match, so a
/// map that somehow acquired duplicates converges back to one owner.
pub fn assign(map: &mut KeyMap, identifier: &str, target: usize) -> BTreeSet<usize> {
    let mut changed = BTreeSet::new();
    if identifier.is_empty() || target >= map.row_count() {
        return changed;
    }
    if map.row(target).iter().any(|k| k == identifier) {
        return changed;
    }

    for row in 0..map.row_count() {
        if row != target && map.remove(row, identifier) {
            changed.insert(row);
        }
    }
    map.push(target, identifier.to_string());
    changed.insert(target);
    changed
}

/// Remove a single identifier from one row. Returns whether the row
/// changed; removing an identifier the row does not hold is a no-op.
pub fn remove(map: &mut KeyMap, row: usize, identifier: &str) -> bool {
    row < map.row_count() && map.remove(row, identifier)
}

/// Empty one row. Returns whether the row changed.
pub fn clear(map: &mut KeyMap, row: usize) -> bool {
    row < map.row_count() && map.clear_row(row)
}
