use xofa_core::ThemeVariant;

use super::{ChatPhase, InputState, UIState, WelcomeState};

/// Main application state
///
/// Everything the renderer and key handler need besides the transcript,
/// which the [`crate::App`] owns.
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: ChatPhase,
    /// Input composer state
    pub input: InputState,
    /// Welcome screen state
    pub welcome: WelcomeState,
    /// UI rendering state
    pub ui: UIState,
    /// Model shown in the footer
    pub model_name: String,
}

impl AppState {
    pub fn new(model_name: impl Into<String>, theme: ThemeVariant) -> Self {
        Self {
            phase: ChatPhase::Idle,
            input: InputState::new(),
            welcome: WelcomeState::new(),
            ui: UIState::new(theme),
            model_name: model_name.into(),
        }
    }

    pub fn theme_variant(&self) -> ThemeVariant {
        self.ui.theme_variant
    }

    pub fn set_theme_variant(&mut self, variant: ThemeVariant) {
        self.ui.set_theme_variant(variant);
    }

    pub fn is_theme_menu_open(&self) -> bool {
        self.ui.theme_menu.open
    }

    pub fn open_theme_menu(&mut self) {
        let current = self.theme_variant();
        self.ui.theme_menu.open(current);
    }

    pub fn close_theme_menu(&mut self) {
        self.ui.theme_menu.close();
    }

    pub fn start_generation(&mut self) {
        self.phase = ChatPhase::Awaiting;
        self.ui.animation_frame = 0;
    }

    pub fn stop_generation(&mut self) {
        self.phase = ChatPhase::Idle;
    }

    pub fn is_generating(&self) -> bool {
        self.phase == ChatPhase::Awaiting
    }

    pub fn advance_animation_frame(&mut self) {
        self.ui.advance_animation_frame();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("gemini-3-flash-preview", ThemeVariant::default())
    }
}
