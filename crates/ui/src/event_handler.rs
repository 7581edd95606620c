use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::state::AppState;

mod key_action;

pub use key_action::KeyAction;

/// Event handler for the TUI application
pub struct EventHandler;

impl EventHandler {
    /// Read a single event from the terminal if one is ready
    pub fn read() -> Option<Event> {
        match crossterm::event::poll(Duration::ZERO) {
            Ok(true) => crossterm::event::read().ok(),
            _ => None,
        }
    }

    /// Handle a keyboard event, editing the input in place
    ///
    /// Returns the action the app has to carry out, if any.
    pub fn handle_key_event(event: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        if event.modifiers.contains(KeyModifiers::CONTROL) && matches!(event.code, KeyCode::Char('c' | 'C')) {
            return Some(KeyAction::Exit);
        }

        if state.is_theme_menu_open() {
            return Self::handle_theme_menu_key(event, state);
        }

        Self::handle_normal_key(event, state)
    }

    /// Handle keys while the theme menu is open
    fn handle_theme_menu_key(event: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
        match event.code {
            KeyCode::Up | KeyCode::Char('k') => {
                state.ui.theme_menu.move_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                state.ui.theme_menu.move_down();
                None
            }
            KeyCode::Enter => {
                let variant = state.ui.theme_menu.highlighted_variant();
                state.close_theme_menu();
                Some(KeyAction::SelectTheme(variant))
            }
            KeyCode::Esc => {
                state.close_theme_menu();
                None
            }
            _ => None,
        }
    }

    fn handle_normal_key(event: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);

        match event.code {
            KeyCode::Esc => Some(KeyAction::Exit),
            KeyCode::Char('t' | 'T') if ctrl => {
                state.open_theme_menu();
                None
            }
            KeyCode::Char('s' | 'S') if ctrl => Some(KeyAction::SelectSuggestion),
            KeyCode::F(2) => Some(KeyAction::CycleTheme),
            KeyCode::Enter => {
                if event.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) {
                    state.input.insert_newline();
                    None
                } else {
                    Some(KeyAction::SendMessage)
                }
            }
            KeyCode::Tab => Some(KeyAction::NextSuggestion),
            KeyCode::BackTab => Some(KeyAction::PrevSuggestion),
            KeyCode::PageUp => Some(KeyAction::PageUp),
            KeyCode::PageDown => Some(KeyAction::PageDown),
            KeyCode::Backspace => {
                state.input.backspace();
                None
            }
            KeyCode::Delete => {
                state.input.delete();
                None
            }
            KeyCode::Left => {
                state.input.move_left();
                None
            }
            KeyCode::Right => {
                state.input.move_right();
                None
            }
            KeyCode::Home => {
                state.input.move_home();
                None
            }
            KeyCode::End => {
                state.input.move_end();
                None
            }
            KeyCode::Char(c) if !ctrl => {
                state.input.insert_char(c);
                None
            }
            _ => None,
        }
    }
}
