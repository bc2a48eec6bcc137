use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

use crate::config::{AppConfig, ColorScheme, InputProfile};
use crate::core::keymap::Action;
use crate::core::{
    GamepadSource, NullSource, PadScan, RowView, StickDirection, TableSelector,
};

/// Device tabs of the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceTab {
    Keyboard,
    Gamepad,
}

impl DeviceTab {
    pub const TITLES: [&'static str; 2] = ["Keyboard", "Gamepad"];

    pub fn next(self) -> Self {
        match self {
            Self::Keyboard => Self::Gamepad,
            Self::Gamepad => Self::Keyboard,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Keyboard => 0,
            Self::Gamepad => 1,
        }
    }
}

/// Cached table contents the renderer draws from.
///
/// This is the `RowView` the TUI plugs into the table state: each
/// callback rebuilds one cached row from the canonical key map, so the
/// drawn table can never drift from the data model.
#[derive(Debug, Clone)]
pub struct TableView {
    rows: Vec<Vec<String>>,
    selected: Option<usize>,
}

impl Default for TableView {
    fn default() -> Self {
        Self {
            rows: vec![Vec::new(); Action::COUNT],
            selected: None,
        }
    }
}

impl TableView {
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

impl RowView for TableView {
    fn render_row(&mut self, index: usize, keys: &[String]) {
        if index < self.rows.len() {
            self.rows[index] = keys.to_vec();
        }
    }

    fn set_row_selected(&mut self, index: usize, selected: bool) {
        if selected {
            self.selected = Some(index);
        } else if self.selected == Some(index) {
            self.selected = None;
        }
    }
}

/// Blocking popup contents
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

/// Everything the event loop and the gamepad poll task share.
pub struct EditorState {
    config: Arc<AppConfig>,
    log_level: i64,
    pub tab: DeviceTab,
    pub keyboard: TableSelector,
    pub keyboard_view: TableView,
    pub gamepad: TableSelector,
    pub gamepad_view: TableView,
    /// Keyboard capture flag; checked on the single dispatch task, so
    /// a detached capture provably receives nothing.
    pub capture_attached: bool,
    /// Gamepad poll task flags; both only touched under the state lock.
    pub monitoring: bool,
    pub monitor_epoch: u64,
    scan: PadScan,
    source: Box<dyn GamepadSource>,
    pub live_direction: StickDirection,
    pub live_button: Option<String>,
    pub notice: Option<Notice>,
    pub focused: bool,
    pub saved: bool,
}

impl EditorState {
    pub fn new(config: Arc<AppConfig>, profile: InputProfile) -> Self {
        Self::with_source(config, profile, Box::new(NullSource))
    }

    pub fn with_source(
        config: Arc<AppConfig>,
        profile: InputProfile,
        source: Box<dyn GamepadSource>,
    ) -> Self {
        // The keyboard table opens with its first row targeted; the
        // gamepad table opens in the live-display pseudo-state.
        let keyboard = TableSelector::new(
            profile.keyboard,
            crate::config::profile::default_keyboard_map(),
            Some(0),
        );
        let gamepad = TableSelector::new(
            profile.game_pad,
            crate::config::profile::default_gamepad_map(),
            None,
        );

        let mut keyboard_view = TableView::default();
        keyboard.render_all(&mut keyboard_view);
        let mut gamepad_view = TableView::default();
        gamepad.render_all(&mut gamepad_view);

        Self {
            config,
            log_level: profile.log_level,
            tab: DeviceTab::Keyboard,
            keyboard,
            keyboard_view,
            gamepad,
            gamepad_view,
            capture_attached: false,
            monitoring: false,
            monitor_epoch: 0,
            scan: PadScan::default(),
            source,
            live_direction: StickDirection::Center,
            live_button: None,
            notice: None,
            focused: true,
            saved: false,
        }
    }

    /// Select a row on the active tab. `None` clears the selection,
    /// which on the gamepad tab means back to live display.
    pub fn select_row(&mut self, row: Option<usize>) {
        match self.tab {
            DeviceTab::Keyboard => self.keyboard.select_row(row, &mut self.keyboard_view),
            DeviceTab::Gamepad => self.gamepad.select_row(row, &mut self.gamepad_view),
        }
    }

    /// Forward a captured key to the keyboard table. Dropped when the
    /// capture is detached or the key is on the denylist.
    pub fn forward_key(&mut self, identifier: &str) {
        if !self.capture_attached || identifier.is_empty() {
            return;
        }
        if self
            .config
            .internal
            .denied_keys
            .iter()
            .any(|k| k == identifier)
        {
            return;
        }
        self.keyboard.assign(identifier, &mut self.keyboard_view);
    }

    /// One gamepad poll tick: refresh pressed/direction state, update
    /// the live readout, and in table-row mode forward the pressed
    /// button to the table. Stick motion is never assignable.
    pub fn gamepad_tick(&mut self) {
        let pads = self.source.poll();
        let outcome = self.scan.tick(&pads);

        self.live_button = outcome.button.clone();
        if let Some(direction) = outcome.direction_change {
            self.live_direction = direction;
        }

        if self.gamepad.selection().is_some()
            && let Some(button) = outcome.button
        {
            self.gamepad.assign(&button, &mut self.gamepad_view);
        }
    }

    /// Flip to the other device tab and suspend the hidden tab's input
    /// source. The caller resumes the newly visible one (the gamepad
    /// monitor needs a task spawn, which the state cannot do itself).
    pub fn switch_tab(&mut self) {
        self.tab = self.tab.next();
        match self.tab {
            DeviceTab::Keyboard => {
                self.monitoring = false;
                if self.focused {
                    self.capture_attached = true;
                }
            }
            DeviceTab::Gamepad => {
                self.capture_attached = false;
            }
        }
    }

    /// Window focus change: both input sources suspend on focus loss;
    /// the caller resumes the active tab's source on focus gain.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.capture_attached = false;
            self.monitoring = false;
        } else if self.tab == DeviceTab::Keyboard {
            self.capture_attached = true;
        }
    }

    fn active_parts(&mut self) -> (&mut TableSelector, &mut TableView) {
        match self.tab {
            DeviceTab::Keyboard => (&mut self.keyboard, &mut self.keyboard_view),
            DeviceTab::Gamepad => (&mut self.gamepad, &mut self.gamepad_view),
        }
    }

    /// Empty the selected row of the active tab.
    pub fn clear_selected_row(&mut self) {
        let (table, view) = self.active_parts();
        if let Some(row) = table.selection() {
            table.clear_row(row, view);
        }
    }

    /// Remove the most recently added entry of the selected row.
    pub fn remove_last_entry(&mut self) {
        let (table, view) = self.active_parts();
        if let Some(row) = table.selection()
            && let Some(key) = table.key_map().row(row).last().cloned()
        {
            table.remove_key(row, &key, view);
        }
    }

    /// Restore both tables to the built-in defaults.
    pub fn reset_tables(&mut self) {
        self.keyboard.reset_to_default(&mut self.keyboard_view);
        self.gamepad.reset_to_default(&mut self.gamepad_view);
    }

    /// Persist both tables. On failure a blocking notice is raised and
    /// the in-memory maps stay untouched so the user can retry.
    /// Returns whether the save succeeded.
    pub fn save(&mut self) -> bool {
        let profile = InputProfile {
            log_level: self.log_level,
            keyboard: self.keyboard.snapshot(),
            game_pad: self.gamepad.snapshot(),
        };
        match profile.save(&self.config.profile_path()) {
            Ok(()) => {
                self.saved = true;
                true
            }
            Err(e) => {
                warn!("Failed to save profile: {:#}", e);
                self.notice = Some(Notice {
                    title: "Save failed".to_string(),
                    body: format!("{e:#}"),
                });
                false
            }
        }
    }
}

/// Snapshot of UI state for rendering
#[derive(Clone, Default)]
pub struct RenderSnapshot {
    pub tab_index: usize,
    pub keyboard_rows: Vec<Vec<String>>,
    pub keyboard_selected: Option<usize>,
    pub gamepad_rows: Vec<Vec<String>>,
    pub gamepad_selected: Option<usize>,
    pub direction_label: &'static str,
    pub live_button: Option<String>,
    pub monitoring: bool,
    pub notice: Option<Notice>,
}

/// Shared application state
pub struct AppState {
    pub editor: Arc<Mutex<EditorState>>,
    pub config: Arc<AppConfig>,
    pub colors: ColorScheme,
}

impl AppState {
    pub fn new(config: AppConfig, profile: InputProfile) -> Self {
        let colors = config.ui.theme.colors();
        let config = Arc::new(config);
        Self {
            editor: Arc::new(Mutex::new(EditorState::new(config.clone(), profile))),
            config,
            colors,
        }
    }

    /// Get a snapshot of state for rendering (using try_lock for sync context)
    /// Returns default values if the lock is unavailable
    pub fn get_render_snapshot(&self) -> RenderSnapshot {
        self.editor
            .try_lock()
            .map(|ed| RenderSnapshot {
                tab_index: ed.tab.index(),
                keyboard_rows: ed.keyboard_view.rows().to_vec(),
                keyboard_selected: ed.keyboard_view.selected(),
                gamepad_rows: ed.gamepad_view.rows().to_vec(),
                gamepad_selected: ed.gamepad_view.selected(),
                direction_label: ed.live_direction.label(),
                live_button: ed.live_button.clone(),
                monitoring: ed.monitoring,
                notice: ed.notice.clone(),
            })
            .unwrap_or_default()
    }
}
