//! The input profile consumed by the host application: which physical
//! inputs map to which logical action, per device class.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::KeyMap;

/// Built-in keyboard assignments, row order = action order.
const DEFAULT_KEYBOARD: &[&[&str]] = &[
    &["KeyC", "Enter"],
    &["KeyX", "Escape"],
    &["KeyD", "Space"],
    &["KeyA"],
    &["ArrowUp"],
    &["ArrowDown"],
    &["ArrowLeft"],
    &["ArrowRight"],
];

/// Built-in gamepad assignments (1-based button indices).
const DEFAULT_GAMEPAD: &[&[&str]] = &[
    &["2"],
    &["3"],
    &["1"],
    &["4"],
    &["13"],
    &["14"],
    &["15"],
    &["16"],
];

fn map_from(defaults: &[&[&str]]) -> KeyMap {
    KeyMap::from_rows(
        defaults
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect()),
    )
}

pub fn default_keyboard_map() -> KeyMap {
    map_from(DEFAULT_KEYBOARD)
}

pub fn default_gamepad_map() -> KeyMap {
    map_from(DEFAULT_GAMEPAD)
}

/// On-disk form of the profile. Field names are fixed by the host
/// application.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileFile {
    log_level: i64,
    keyboard: Vec<Vec<String>>,
    game_pad: Vec<Vec<String>>,
}

/// The full editable profile: one key map per device class plus the
/// host's log level, which the editor carries through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct InputProfile {
    pub log_level: i64,
    pub keyboard: KeyMap,
    pub game_pad: KeyMap,
}

impl Default for InputProfile {
    fn default() -> Self {
        Self {
            log_level: 0,
            keyboard: default_keyboard_map(),
            game_pad: default_gamepad_map(),
        }
    }
}

impl InputProfile {
    /// Load a profile, falling back to defaults per field.
    ///
    /// A missing or unparseable file yields the built-in profile; a
    /// parseable file with a missing or malformed `keyboard` or
    /// `gamePad` field defaults only that field. Never fails.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                debug!("No profile at {:?} ({}), using defaults", path, e);
                return Self::default();
            }
        };

        let value: serde_json::Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to parse profile at {:?}: {}. Using defaults", path, e);
                return Self::default();
            }
        };

        Self {
            log_level: value
                .get("logLevel")
                .and_then(serde_json::Value::as_i64)
                .unwrap_or(0),
            keyboard: load_map_field(&value, "keyboard", default_keyboard_map),
            game_pad: load_map_field(&value, "gamePad", default_gamepad_map),
        }
    }

    /// Write the profile as pretty-printed JSON, creating the parent
    /// directory when needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create profile directory {parent:?}"))?;
        }
        let file = ProfileFile {
            log_level: self.log_level,
            keyboard: self.keyboard.to_rows(),
            game_pad: self.game_pad.to_rows(),
        };
        let json = serde_json::to_string_pretty(&file).context("Failed to serialize profile")?;
        fs::write(path, json).with_context(|| format!("Failed to write profile to {path:?}"))?;
        debug!("Saved profile to {:?}", path);
        Ok(())
    }
}

/// Decode one key-map field, defaulting it independently when absent or
/// not an array of string arrays.
fn load_map_field(
    value: &serde_json::Value,
    field: &str,
    default: fn() -> KeyMap,
) -> KeyMap {
    match value.get(field) {
        Some(rows) => match serde_json::from_value::<Vec<Vec<String>>>(rows.clone()) {
            Ok(rows) => KeyMap::from_rows(rows),
            Err(e) => {
                warn!("Invalid {} field in profile: {}. Using defaults", field, e);
                default()
            }
        },
        None => {
            debug!("Profile has no {} field, using defaults", field);
            default()
        }
    }
}

/// Default location of the profile: `<config_dir>/rebind/profile.json`.
pub fn default_profile_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rebind")
        .join("profile.json")
}
