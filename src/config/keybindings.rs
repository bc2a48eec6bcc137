//! Editor chrome key bindings

use serde::{Deserialize, Serialize};

/// Bindings for the editor's own controls. Defaults stay inside the
/// capture denylist so chrome keys can never collide with a key the
/// user is trying to assign.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub save: Vec<String>,
    pub quit: Vec<String>,
    pub next_tab: Vec<String>,
    pub clear_row: Vec<String>,
    pub remove_entry: Vec<String>,
    pub reset: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            save: vec!["F2".to_string()],
            quit: vec!["F10".to_string()],
            next_tab: vec!["Tab".to_string()],
            clear_row: vec!["F4".to_string()],
            remove_entry: vec!["Backspace".to_string()],
            reset: vec!["F5".to_string()],
        }
    }
}

impl KeyBindings {
    /// Check if a key matches any binding for the given action
    pub fn matches(&self, action: &str, key: &str) -> bool {
        let bindings = match action {
            "save" => &self.save,
            "quit" => &self.quit,
            "next_tab" => &self.next_tab,
            "clear_row" => &self.clear_row,
            "remove_entry" => &self.remove_entry,
            "reset" => &self.reset,
            _ => return false,
        };
        bindings.iter().any(|b| b == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::app_config::DENIED_KEYS;

    #[test]
    fn default_bindings_match_their_actions() {
        let kb = KeyBindings::default();
        assert!(kb.matches("save", "F2"));
        assert!(kb.matches("quit", "F10"));
        assert!(kb.matches("next_tab", "Tab"));
        assert!(!kb.matches("save", "F10"));
        assert!(!kb.matches("unknown", "F2"));
    }

    #[test]
    fn default_bindings_are_never_assignable_keys() {
        let kb = KeyBindings::default();
        let all = [
            &kb.save,
            &kb.quit,
            &kb.next_tab,
            &kb.clear_row,
            &kb.remove_entry,
            &kb.reset,
        ];
        for key in all.into_iter().flatten() {
            assert!(
                DENIED_KEYS.contains(&key.as_str()),
                "chrome key {key} is assignable"
            );
        }
    }
}
