use anyhow::{Context, Result};
use crossterm::style::{Color, Stylize};
use tracing::info;

use crate::config::{AppConfig, InputProfile};

/// Rewrite the profile file with the built-in default assignments
pub fn reset_profile(config: AppConfig) -> Result<()> {
    let path = config.profile_path();

    // Carry the host's log level through; only the key maps reset.
    let log_level = InputProfile::load(&path).log_level;
    let profile = InputProfile {
        log_level,
        ..InputProfile::default()
    };

    profile
        .save(&path)
        .with_context(|| format!("Failed to write default profile to {path:?}"))?;

    info!("Profile reset to defaults at {:?}", path);
    println!(
        "Wrote default profile to {}",
        path.display().to_string().with(Color::Cyan)
    );
    Ok(())
}
