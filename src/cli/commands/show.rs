use anyhow::{Context, Result};
use crossterm::style::{Color, Stylize};
use serde_json::json;
use tracing::debug;

use crate::config::{AppConfig, InputProfile};
use crate::core::Action;

/// Print the stored input profile
pub fn show_profile(config: AppConfig, json: bool) -> Result<()> {
    let path = config.profile_path();
    debug!("Reading profile from {:?}", path);
    let profile = InputProfile::load(&path);

    if json {
        print_profile_json(&profile)?;
    } else {
        print_profile_table(&profile);
    }

    Ok(())
}

/// Print the profile in the host's JSON format
fn print_profile_json(profile: &InputProfile) -> Result<()> {
    let value = json!({
        "logLevel": profile.log_level,
        "keyboard": profile.keyboard.to_rows(),
        "gamePad": profile.game_pad.to_rows(),
    });
    let text =
        serde_json::to_string_pretty(&value).context("Failed to serialize profile to JSON")?;
    println!("{}", text);
    Ok(())
}

/// Print the profile as an aligned table, one action per line
fn print_profile_table(profile: &InputProfile) {
    let rows: Vec<ProfileRowView> = Action::ALL
        .iter()
        .enumerate()
        .map(|(index, action)| ProfileRowView {
            action: action.label(),
            keyboard: profile.keyboard.row(index).join(", "),
            gamepad: profile.game_pad.row(index).join(", "),
        })
        .collect();

    // Calculate column widths, headers included
    let action_width = rows
        .iter()
        .map(|r| r.action.len())
        .chain(["Action".len()])
        .max()
        .unwrap_or(0);
    let keyboard_width = rows
        .iter()
        .map(|r| r.keyboard.len())
        .chain(["Keyboard".len()])
        .max()
        .unwrap_or(0);

    println!(
        "{}{}  {}{}  {}",
        "Action".bold(),
        " ".repeat(action_width - "Action".len()),
        "Keyboard".bold(),
        " ".repeat(keyboard_width - "Keyboard".len()),
        "Gamepad".bold()
    );

    for row in &rows {
        println!(
            "{}{}  {}{}  {}",
            row.action.with(Color::Cyan).bold(),
            " ".repeat(action_width - row.action.len()),
            row.keyboard.as_str().with(Color::White),
            " ".repeat(keyboard_width - row.keyboard.len()),
            row.gamepad.as_str().with(Color::DarkGrey)
        );
    }
}

/// Display data for one action row
struct ProfileRowView {
    action: &'static str,
    keyboard: String,
    gamepad: String,
}
