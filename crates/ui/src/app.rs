use crate::state::AppState;

use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io::{Result, Stdout};
use tokio::sync::mpsc;
use xofa_core::{CompletionError, ThemeVariant, Transcript};
use xofa_providers::CompletionClient;

mod event_loop;
mod keybinds;
mod rendering;

pub use event_loop::run;

/// Outcome of one completion request, delivered back to the UI task
pub type CompletionOutcome = std::result::Result<String, CompletionError>;

/// Main TUI application
///
/// Owns the conversation, the view state and the completion client. Completion
/// requests run on spawned tasks and report back over an unbounded channel so
/// the UI keeps redrawing while a reply is pending.
pub struct App {
    pub(crate) state: AppState,
    pub(crate) transcript: Transcript,
    pub(crate) client: CompletionClient,
    pub(crate) completion_tx: mpsc::UnboundedSender<CompletionOutcome>,
    pub(crate) completion_rx: mpsc::UnboundedReceiver<CompletionOutcome>,
    pub should_exit: bool,
}

impl App {
    /// Create a new application around a completion client
    pub fn new(client: CompletionClient, theme: ThemeVariant) -> Self {
        let state = AppState::new(client.settings().model.clone(), theme);
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self { state, transcript: Transcript::new(), client, completion_tx, completion_rx, should_exit: false }
    }

    /// Get a reference to the application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a mutable reference to the application state
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Conversation so far
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Handle a terminal event
    pub async fn handle_event(&mut self, event: crossterm::event::Event) {
        keybinds::handle_event(self, event).await
    }

    /// Render the whole screen into a frame
    pub fn render(&self, frame: &mut Frame<'_>) {
        rendering::render(self, frame)
    }

    /// Draw the next frame, advancing the typing animation while a reply is pending
    pub fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        rendering::draw(self, terminal)
    }
}
