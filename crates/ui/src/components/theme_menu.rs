use crate::{layout::centered_rect, state::AppState, theme::Theme};

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use xofa_core::ThemeVariant;

const MENU_WIDTH: u16 = 30;

/// Popup listing the theme variants
///
/// The highlighted row moves with Up/Down; the active theme carries a check.
pub struct ThemeMenu<'a> {
    state: &'a AppState,
}

impl<'a> ThemeMenu<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        if !self.state.is_theme_menu_open() {
            return;
        }

        let theme = Theme::palette(self.state.theme_variant());
        let height = ThemeVariant::VALUES.len() as u16 + 2;
        let popup = centered_rect(MENU_WIDTH, height, area);

        let lines: Vec<Line> = ThemeVariant::VALUES
            .iter()
            .enumerate()
            .map(|(i, variant)| {
                let highlighted = i == self.state.ui.theme_menu.highlighted;
                let row_style = if highlighted { theme.active().add_modifier(Modifier::BOLD) } else { theme.panel() };
                let check = if *variant == self.state.theme_variant() { " ✓" } else { "" };
                Line::from(vec![
                    Span::styled(if highlighted { " › " } else { "   " }, row_style),
                    Span::styled("● ", row_style.fg(Theme::swatch(*variant))),
                    Span::styled(format!("{}{}", variant.label(), check), row_style),
                ])
            })
            .collect();

        let block = Block::default()
            .title(" Theme ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .style(theme.panel());

        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }
}
