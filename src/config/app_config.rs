//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::cli::CliArgs;
use crate::config::profile::default_profile_path;

use super::{KeyBindings, Theme};

/// Keys that can never be assigned to an action: navigation and
/// function keys, which double as the editor's own controls.
pub(crate) const DENIED_KEYS: &[&str] = &[
    "Backspace",
    "Tab",
    "F1",
    "F2",
    "F3",
    "F4",
    "F5",
    "F6",
    "F7",
    "F8",
    "F9",
    "F10",
    "F11",
    "F12",
];

/// Application configuration (all settings needed at runtime)
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub main: MainConfig,
    pub ui: UIConfig,
    pub internal: InternalConfig,
}

/// Main section of the configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainConfig {
    /// Path of the profile file read and written by the editor
    pub profile_path: String,
}

/// UI section of the configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UIConfig {
    /// TUI theme
    pub theme: Theme,
    /// Key bindings for the editor's own controls
    #[serde(default)]
    pub keybindings: KeyBindings,
}

/// Internal configuration (not user-configurable)
#[derive(Debug, Clone)]
pub struct InternalConfig {
    /// Event poll / gamepad poll interval in milliseconds
    pub refresh_interval: u64,
    /// Keys excluded from assignment
    pub denied_keys: Vec<String>,
}

impl Default for MainConfig {
    fn default() -> Self {
        Self {
            profile_path: default_profile_path().to_string_lossy().to_string(),
        }
    }
}

impl Default for InternalConfig {
    fn default() -> Self {
        Self {
            refresh_interval: 100,
            denied_keys: DENIED_KEYS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
struct AppConfigUserFields {
    main: MainConfig,
    ui: UIConfig,
}

impl AppConfig {
    /// Create app configuration with layered priority system:
    /// CLI args (highest) -> Config file -> Default values (lowest)
    pub fn from_layers(cli_args: &CliArgs) -> Self {
        let mut config = Self::default();
        if let Some(file_config) = Self::load_from_file(cli_args.config.as_deref()) {
            config.merge_file_config(file_config);
        }
        config.apply_cli_overrides(cli_args);

        debug!("Final profile path: {:?}", config.main.profile_path);

        config
    }

    /// Get list of paths to search for configuration file (in priority order)
    ///
    /// Search order:
    /// 1. CLI --config argument (highest priority)
    /// 2. $REBIND_CONFIG (environment variable)
    /// - Linux:
    ///   3. $XDG_CONFIG_HOME/rebind/config.toml
    ///   4. ~/.config/rebind/config.toml
    /// - macOS:
    ///   3. ~/Library/Application Support/rebind/config.toml
    ///   4. ~/.config/rebind/config.toml
    /// - Windows:
    ///   3. %APPDATA%\rebind\config.toml
    ///   4. ~/.config/rebind/config.toml
    fn get_search_paths(cli_config_path: Option<&str>) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Check for CLI --config argument first (highest priority)
        if let Some(config_path) = cli_config_path {
            let expanded_path = PathBuf::from(expand_tilde_in_path(config_path));
            debug!("Using config path from CLI argument: {:?}", expanded_path);
            paths.push(expanded_path);
        }

        // Check for REBIND_CONFIG environment variable
        if let Ok(config_path) = std::env::var("REBIND_CONFIG") {
            let expanded_path = PathBuf::from(expand_tilde_in_path(&config_path));
            debug!("Using config path from REBIND_CONFIG: {:?}", expanded_path);
            paths.push(expanded_path);
        }

        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("rebind").join("config.toml"));
        }

        if let Some(dir) = dirs::home_dir() {
            let fallback = dir.join(".config").join("rebind").join("config.toml");
            if !paths.contains(&fallback) {
                paths.push(fallback);
            }
        }

        paths
    }

    /// Load user configuration from file, return None if file does not exist
    fn load_from_file(cli_config_path: Option<&str>) -> Option<AppConfigUserFields> {
        let config_paths = Self::get_search_paths(cli_config_path);
        debug!("Searching for config file in paths: {:?}", config_paths);

        for config_path in &config_paths {
            if config_path.exists() {
                debug!("Loading config from: {:?}", config_path);
                match fs::read_to_string(config_path) {
                    Ok(content) => match toml::from_str::<AppConfigUserFields>(&content) {
                        Ok(config) => {
                            debug!("Successfully loaded config from file");
                            return Some(config);
                        }
                        Err(e) => {
                            warn!(
                                "Failed to parse config file at {:?}: {}. Using defaults",
                                config_path, e
                            );
                            return None;
                        }
                    },
                    Err(e) => {
                        warn!(
                            "Failed to read config file at {:?}: {}. Using defaults",
                            config_path, e
                        );
                        return None;
                    }
                }
            }
        }

        debug!("No config file found in search paths: {:?}", config_paths);
        None
    }

    /// Merge user configuration loaded from file
    fn merge_file_config(&mut self, mut file_config: AppConfigUserFields) {
        file_config.main.profile_path = expand_tilde_in_path(&file_config.main.profile_path);
        self.main = file_config.main;
        self.ui = file_config.ui;
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref path) = args.profile {
            debug!("CLI override: profile_path = {}", path);
            self.main.profile_path = expand_tilde_in_path(path);
        }

        if let Some(ref theme_str) = args.theme {
            match theme_str.parse::<Theme>() {
                Ok(theme) => {
                    debug!("CLI override: theme = {}", theme);
                    self.ui.theme = theme;
                }
                Err(e) => {
                    warn!("Invalid theme '{}': {}. Using default theme.", theme_str, e);
                }
            }
        }
    }

    /// Resolved profile path as a filesystem path
    pub fn profile_path(&self) -> PathBuf {
        PathBuf::from(&self.main.profile_path)
    }

    /// Print user-configurable fields in JSON format
    pub fn print(&self) {
        let user_fields = AppConfigUserFields {
            main: self.main.clone(),
            ui: self.ui.clone(),
        };
        match serde_json::to_string_pretty(&user_fields) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize configuration: {}", e),
        }
    }
}

/// Expand ~ in path to home directory
fn expand_tilde_in_path(path: &str) -> String {
    if path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home.to_string_lossy().to_string();
    }
    path.to_string()
}
