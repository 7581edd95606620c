use super::App;
use crate::components::{Footer, Header, ThemeMenu, TranscriptView, WelcomeView};
use crate::layout::TuiLayout;
use crate::theme::Theme;

use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::Style,
    widgets::Block,
};
use std::io::{Result, Stdout};

pub fn draw(app: &mut App, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    if app.state.is_generating() {
        app.state.advance_animation_frame();
    }

    let size = terminal.size()?;
    clamp_scroll(app, Rect::new(0, 0, size.width, size.height));

    terminal.draw(|frame| render(app, frame))?;
    Ok(())
}

/// Drop scroll-back that would move past the first line of the conversation
pub fn clamp_scroll(app: &mut App, area: Rect) {
    let layout = TuiLayout::calculate(area, app.state.input.line_count());
    let max = TranscriptView::new(&app.transcript, &app.state, layout.mode).max_scroll_back(layout.transcript);
    app.state.ui.clamp_scroll_back(max);
}

pub fn render(app: &App, frame: &mut Frame<'_>) {
    let size = frame.area();
    let theme = Theme::palette(app.state.theme_variant());
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), size);

    let layout = TuiLayout::calculate(size, app.state.input.line_count());

    Header::new(&app.state, layout.mode).render(frame, layout.header);

    if app.transcript.is_empty() && !app.state.is_generating() {
        WelcomeView::new(&app.state, layout.mode).render(frame, layout.transcript);
    } else {
        TranscriptView::new(&app.transcript, &app.state, layout.mode).render(frame, layout.transcript);
    }

    Footer::new(&app.state, layout.mode).render(frame, &layout);

    if app.state.is_theme_menu_open() {
        ThemeMenu::new(&app.state).render(frame, size);
    }
}
