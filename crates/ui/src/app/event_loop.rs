use super::App;
use crate::event_handler::EventHandler;

use crossterm::{
    event::{
        DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::Result;
use std::{panic, time::Duration};

/// Redraw interval; also drives the typing animation
const TICK: Duration = Duration::from_millis(80);

/// Run the interactive chat until the user quits
pub async fn run(app: &mut App) -> Result<()> {
    enable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;

    // Shift+Enter is only distinguishable from Enter with the kitty protocol
    let enhanced_keys = matches!(crossterm::terminal::supports_keyboard_enhancement(), Ok(true));
    if enhanced_keys {
        crossterm::execute!(
            std::io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }

    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal(enhanced_keys);
        original_hook(panic_info);
    }));

    terminal.clear()?;
    app.draw(&mut terminal)?;
    tracing::info!(model = %app.state.model_name, "chat session started");

    while !app.should_exit {
        let tui_poll = async {
            tokio::time::sleep(TICK).await;
            let mut events = Vec::new();
            while let Some(event) = EventHandler::read() {
                events.push(event);
            }
            events
        };

        tokio::select! {
            events = tui_poll => {
                for event in events {
                    app.handle_event(event).await;
                    if app.should_exit {
                        break;
                    }
                }
                app.draw(&mut terminal)?;
            }
            Some(outcome) = app.completion_rx.recv() => {
                app.handle_completion(outcome);
                app.draw(&mut terminal)?;
            }
        }
    }

    if app.state.is_generating() {
        tracing::info!("quitting with a reply pending");
    }
    tracing::info!(turns = app.transcript.len(), "chat session ended");

    terminal.show_cursor()?;
    restore_terminal(enhanced_keys);

    Ok(())
}

fn restore_terminal(enhanced_keys: bool) {
    if enhanced_keys {
        let _ = crossterm::execute!(std::io::stdout(), PopKeyboardEnhancementFlags);
    }
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(std::io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
}
