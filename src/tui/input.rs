use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use crossterm::terminal;
use ratatui::layout::Rect;
use std::io;
use std::time::Duration;

use crate::tui::state::{AppState, DeviceTab};
use crate::tui::task;
use crate::tui::ui::layout::{self, RowHit};

/// Handle input events with polling, returns true if should exit
pub async fn handle_input_events(state: &AppState) -> io::Result<bool> {
    // Poll for input events with refresh interval timeout
    if event::poll(Duration::from_millis(
        state.config.internal.refresh_interval,
    ))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                return handle_key_event(key.code, state).await;
            }
            Event::Mouse(mouse) => handle_mouse_event(mouse, state).await?,
            Event::FocusGained => handle_focus_change(true, state).await,
            Event::FocusLost => handle_focus_change(false, state).await,
            _ => {}
        }
    }
    Ok(false) // continue running
}

/// Convert a key code to its stable web-style identifier; keys with no
/// identifier map to an empty string and are never forwarded.
fn keycode_to_identifier(key: KeyCode) -> String {
    match key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            format!("Key{}", c.to_ascii_uppercase())
        }
        KeyCode::Char(c) if c.is_ascii_digit() => format!("Digit{c}"),
        KeyCode::Char(c) => match c {
            '-' => "Minus".to_string(),
            '=' => "Equal".to_string(),
            ',' => "Comma".to_string(),
            '.' => "Period".to_string(),
            '/' => "Slash".to_string(),
            ';' => "Semicolon".to_string(),
            '\'' => "Quote".to_string(),
            '[' => "BracketLeft".to_string(),
            ']' => "BracketRight".to_string(),
            '\\' => "Backslash".to_string(),
            '`' => "Backquote".to_string(),
            _ => String::new(),
        },
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => String::new(),
    }
}

/// Handle keyboard input events, returns true if should exit
async fn handle_key_event(key_code: KeyCode, state: &AppState) -> io::Result<bool> {
    let key_str = keycode_to_identifier(key_code);
    if key_str.is_empty() {
        return Ok(false);
    }

    // An open notice is modal: it swallows every key until dismissed.
    {
        let mut ed = state.editor.lock().await;
        if ed.notice.is_some() {
            if matches!(key_str.as_str(), "Enter" | "Escape") {
                ed.notice = None;
            }
            return Ok(false);
        }
    }

    let kb = &state.config.ui.keybindings;

    if kb.matches("quit", &key_str) {
        return Ok(true); // discard edits
    }

    if kb.matches("save", &key_str) {
        return Ok(handle_save(state).await);
    }

    if kb.matches("next_tab", &key_str) {
        handle_tab_switch(state).await;
    } else if kb.matches("clear_row", &key_str) {
        state.editor.lock().await.clear_selected_row();
    } else if kb.matches("remove_entry", &key_str) {
        state.editor.lock().await.remove_last_entry();
    } else if kb.matches("reset", &key_str) {
        state.editor.lock().await.reset_tables();
    } else {
        state.editor.lock().await.forward_key(&key_str);
    }

    Ok(false)
}

/// Persist both tables; the editor closes on success and raises a
/// blocking notice on failure. Returns true when the app should exit.
async fn handle_save(state: &AppState) -> bool {
    let mut ed = state.editor.lock().await;
    ed.save()
}

/// Flip tabs and resume the input source of the now-visible tab
async fn handle_tab_switch(state: &AppState) {
    let resume_monitor = {
        let mut ed = state.editor.lock().await;
        ed.switch_tab();
        ed.tab == DeviceTab::Gamepad && ed.focused
    };
    if resume_monitor {
        task::start_gamepad_monitor(state).await;
    }
}

/// Suspend both input sources on focus loss, resume the active tab's
/// source on focus gain
async fn handle_focus_change(focused: bool, state: &AppState) {
    let resume_monitor = {
        let mut ed = state.editor.lock().await;
        ed.set_focused(focused);
        focused && ed.tab == DeviceTab::Gamepad
    };
    if resume_monitor {
        task::start_gamepad_monitor(state).await;
    }
}

/// Left click on a table row selects it as the assignment target;
/// clicking the gamepad live-display row returns to live mode.
async fn handle_mouse_event(mouse: MouseEvent, state: &AppState) -> io::Result<()> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Ok(());
    }
    let (width, height) = terminal::size()?;
    let area = Rect::new(0, 0, width, height);

    let mut ed = state.editor.lock().await;
    if ed.notice.is_some() {
        return Ok(());
    }
    match layout::hit_test_row(area, ed.tab.index(), mouse.column, mouse.row) {
        Some(RowHit::Action(row)) => ed.select_row(Some(row)),
        Some(RowHit::LiveDisplay) => ed.select_row(None),
        None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, InputProfile};

    #[test]
    fn keycodes_map_to_web_style_identifiers() {
        assert_eq!(keycode_to_identifier(KeyCode::Char('c')), "KeyC");
        assert_eq!(keycode_to_identifier(KeyCode::Char('C')), "KeyC");
        assert_eq!(keycode_to_identifier(KeyCode::Char('3')), "Digit3");
        assert_eq!(keycode_to_identifier(KeyCode::Char(' ')), "Space");
        assert_eq!(keycode_to_identifier(KeyCode::Char('-')), "Minus");
        assert_eq!(keycode_to_identifier(KeyCode::Enter), "Enter");
        assert_eq!(keycode_to_identifier(KeyCode::Esc), "Escape");
        assert_eq!(keycode_to_identifier(KeyCode::Up), "ArrowUp");
        assert_eq!(keycode_to_identifier(KeyCode::F(4)), "F4");
        assert_eq!(keycode_to_identifier(KeyCode::Char('ä')), "");
        assert_eq!(keycode_to_identifier(KeyCode::CapsLock), "");
    }

    fn test_state() -> AppState {
        AppState::new(AppConfig::default(), InputProfile::default())
    }

    #[tokio::test]
    async fn quit_binding_requests_exit() {
        let state = test_state();
        assert!(handle_key_event(KeyCode::F(10), &state).await.unwrap());
    }

    #[tokio::test]
    async fn captured_key_is_assigned_to_selected_row() {
        let state = test_state();
        state.editor.lock().await.capture_attached = true;

        handle_key_event(KeyCode::Char('q'), &state).await.unwrap();

        let ed = state.editor.lock().await;
        assert_eq!(ed.keyboard.key_map().row(0), ["KeyC", "Enter", "KeyQ"]);
    }

    #[tokio::test]
    async fn chrome_keys_are_not_assigned() {
        let state = test_state();
        state.editor.lock().await.capture_attached = true;
        let before = state.editor.lock().await.keyboard.snapshot();

        handle_key_event(KeyCode::F(4), &state).await.unwrap();
        handle_key_event(KeyCode::Backspace, &state).await.unwrap();

        // F4 cleared row 0 and Backspace had nothing left to remove;
        // neither ended up assigned anywhere.
        let ed = state.editor.lock().await;
        assert!(ed.keyboard.key_map().position("F4").is_none());
        assert!(ed.keyboard.key_map().position("Backspace").is_none());
        assert_ne!(ed.keyboard.snapshot(), before);
    }

    #[tokio::test]
    async fn notice_swallows_keys_until_dismissed() {
        let state = test_state();
        {
            let mut ed = state.editor.lock().await;
            ed.capture_attached = true;
            ed.notice = Some(crate::tui::state::Notice {
                title: "Save failed".to_string(),
                body: "disk full".to_string(),
            });
        }

        // Even the quit binding is swallowed while the notice is open.
        assert!(!handle_key_event(KeyCode::F(10), &state).await.unwrap());
        handle_key_event(KeyCode::Char('z'), &state).await.unwrap();
        {
            let ed = state.editor.lock().await;
            assert!(ed.keyboard.key_map().position("KeyZ").is_none());
            assert!(ed.notice.is_some());
        }

        handle_key_event(KeyCode::Enter, &state).await.unwrap();
        assert!(state.editor.lock().await.notice.is_none());
    }

    #[tokio::test]
    async fn tab_switch_detaches_keyboard_capture() {
        let state = test_state();
        state.editor.lock().await.capture_attached = true;

        handle_key_event(KeyCode::Tab, &state).await.unwrap();

        let ed = state.editor.lock().await;
        assert_eq!(ed.tab, DeviceTab::Gamepad);
        assert!(!ed.capture_attached);
        // Monitor resumed for the gamepad tab.
        assert!(ed.monitoring);
    }
}
