//! TUI application state: scenes, the betting round lifecycle and menu edits.

mod menu;
mod state;

pub use menu::LimitsPreset;
pub use state::{AppState, InputAction, RoundPhase, RoundRecord, Scene};
