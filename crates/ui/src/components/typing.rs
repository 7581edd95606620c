use crate::{state::AppState, theme::Theme};

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

pub const TYPING_LABEL: &str = "Reflecting";
pub const TYPING_TEXT: &str = "Xofa is composing wisdom...";

/// Typing indicator shown as a pending model bubble while a reply is awaited
pub struct TypingIndicator<'a> {
    state: &'a AppState,
}

impl<'a> TypingIndicator<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Lines appended below the last turn
    pub fn lines(&self) -> Vec<Line<'static>> {
        let theme = Theme::palette(self.state.theme_variant());
        let frame = self.state.ui.animation_frame as usize;

        let label = Line::from(vec![
            Span::styled("Xofa", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
            Span::styled(" • ", theme.muted()),
            Span::styled(format!("{}{}", TYPING_LABEL, self.state.ui.typing_dots()), theme.muted()),
        ]);

        let mut body = vec![Span::styled("  ", theme.model_bubble())];
        for i in 0..3 {
            let color = if i == frame % 3 { theme.accent_alt } else { theme.muted };
            body.push(Span::styled("●", Style::default().fg(color).bg(theme.model_bubble_bg)));
        }
        body.push(Span::styled(
            format!("  {}  ", TYPING_TEXT),
            theme.model_bubble().add_modifier(Modifier::ITALIC),
        ));

        vec![label, Line::from(body)]
    }
}
