pub mod app;
pub mod components;
pub mod event_handler;
pub mod layout;
pub mod state;
pub mod theme;
mod turn_handling;

pub use app::{App, CompletionOutcome, run};
pub use event_handler::{EventHandler, KeyAction};
pub use state::{AppState, ChatPhase, InputState};
pub use theme::{Theme, ThemePalette};
