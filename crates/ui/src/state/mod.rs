mod app_state;
mod input;
mod ui;
mod welcome;

pub use app_state::AppState;
pub use input::InputState;
pub use ui::{SCROLL_STEP, ThemeMenuState, UIState};
pub use welcome::{GREETINGS, SUGGESTION_CATEGORIES, SuggestionCategory, WELCOME_CREDIT, WELCOME_TEXT, WelcomeState};

/// Whether a completion call is outstanding
///
/// At most one call is in flight; submissions are refused while `Awaiting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatPhase {
    #[default]
    Idle,
    Awaiting,
}

impl ChatPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatPhase::Idle => "idle",
            ChatPhase::Awaiting => "awaiting",
        }
    }
}

impl std::fmt::Display for ChatPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
