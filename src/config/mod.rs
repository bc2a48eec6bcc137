mod app_config;
mod keybindings;
pub mod profile;
mod theme;

pub use app_config::AppConfig;
pub use keybindings::KeyBindings;
pub use profile::InputProfile;
pub use theme::{ColorScheme, Theme};
