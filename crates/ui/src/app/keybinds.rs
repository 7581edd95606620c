use super::App;
use crate::event_handler::{EventHandler, KeyAction};

use crossterm::event::Event;

pub async fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => {
            if let Some(action) = EventHandler::handle_key_event(key, app.state_mut()) {
                handle_key_action(app, action);
            }
        }
        Event::Paste(text) if !app.state().is_theme_menu_open() => {
            for c in text.chars() {
                match c {
                    '\n' => app.state_mut().input.insert_newline(),
                    '\r' => {}
                    c => app.state_mut().input.insert_char(c),
                }
            }
        }
        _ => {}
    }
}

pub fn handle_key_action(app: &mut App, action: KeyAction) {
    match action {
        KeyAction::SendMessage => {
            app.submit_input();
        }
        KeyAction::SelectSuggestion => {
            app.select_suggestion();
        }
        KeyAction::NextSuggestion => {
            if app.transcript().is_empty() {
                app.state_mut().welcome.select_next();
            }
        }
        KeyAction::PrevSuggestion => {
            if app.transcript().is_empty() {
                app.state_mut().welcome.select_prev();
            }
        }
        KeyAction::SelectTheme(variant) => app.select_theme(variant),
        KeyAction::CycleTheme => {
            let next = app.state().theme_variant().next();
            app.select_theme(next);
        }
        KeyAction::PageUp => app.state_mut().ui.scroll_up(),
        KeyAction::PageDown => app.state_mut().ui.scroll_down(),
        KeyAction::Exit => app.should_exit = true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::Arc;
    use xofa_core::ThemeVariant;
    use xofa_providers::{CompletionClient, CompletionSettings, MockProvider, StaticCredential};

    fn test_app(provider: Arc<MockProvider>) -> App {
        let client = CompletionClient::new(provider, Arc::new(StaticCredential::new("k")), CompletionSettings::default());
        App::new(client, ThemeVariant::Classic)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn test_typed_message_is_sent_on_enter() {
        let provider = Arc::new(MockProvider::with_text("reply"));
        let mut app = test_app(provider.clone());

        for c in "Salam".chars() {
            handle_event(&mut app, key(KeyCode::Char(c))).await;
        }
        handle_event(&mut app, key(KeyCode::Enter)).await;
        assert_eq!(app.transcript().all()[0].text(), "Salam");

        app.wait_for_completion().await;
        assert_eq!(app.transcript().len(), 2);
    }

    #[tokio::test]
    async fn test_blank_enter_on_welcome_does_nothing() {
        let provider = Arc::new(MockProvider::with_text("reply"));
        let mut app = test_app(provider.clone());

        handle_event(&mut app, key(KeyCode::Enter)).await;
        for c in "   ".chars() {
            handle_event(&mut app, key(KeyCode::Char(c))).await;
        }
        handle_event(&mut app, key(KeyCode::Enter)).await;

        assert!(app.transcript().is_empty());
        assert!(!app.state().is_generating());
        assert_eq!(app.state().input.buffer, "   ");
        tokio::task::yield_now().await;
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_ctrl_s_sends_highlighted_suggestion() {
        let provider = Arc::new(MockProvider::with_text("reply"));
        let mut app = test_app(provider.clone());
        handle_event(&mut app, key(KeyCode::Tab)).await;
        handle_event(&mut app, key(KeyCode::Tab)).await;
        let expected = app.state().welcome.selected_suggestion().unwrap();

        handle_event(&mut app, Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))).await;
        assert_eq!(app.transcript().all()[0].text(), expected);
        assert!(app.wait_for_completion().await);
        assert_eq!(provider.calls(), 1);
    }

    #[test]
    fn test_suggestion_navigation_stops_after_first_turn() {
        let mut app = test_app(Arc::new(MockProvider::default()));
        app.transcript.append(xofa_core::Turn::user("hi"));
        handle_key_action(&mut app, KeyAction::NextSuggestion);
        assert_eq!(app.state().welcome.selected, 0);
    }

    #[test]
    fn test_cycle_theme_and_exit() {
        let mut app = test_app(Arc::new(MockProvider::default()));
        handle_key_action(&mut app, KeyAction::CycleTheme);
        assert_eq!(app.state().theme_variant(), ThemeVariant::Ocean);
        for _ in 1..ThemeVariant::VALUES.len() {
            handle_key_action(&mut app, KeyAction::CycleTheme);
        }
        assert_eq!(app.state().theme_variant(), ThemeVariant::Classic);
        assert!(app.transcript().is_empty());

        handle_key_action(&mut app, KeyAction::Exit);
        assert!(app.should_exit);
    }

    #[tokio::test]
    async fn test_paste_inserts_text() {
        let mut app = test_app(Arc::new(MockProvider::default()));
        handle_event(&mut app, Event::Paste("line one\r\nline two".to_string())).await;
        assert_eq!(app.state().input.buffer, "line one\nline two");
        assert!(app.transcript().is_empty());
    }
}
