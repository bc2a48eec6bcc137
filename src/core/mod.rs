pub mod gamepad;
pub mod keymap;
pub mod reconcile;
pub mod table;

pub use gamepad::{GamepadSource, NullSource, PadScan, PadState, StickDirection};
pub use keymap::{Action, KeyMap};
pub use table::{RowView, TableSelector};
