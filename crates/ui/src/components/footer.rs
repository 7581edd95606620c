use crate::{
    layout::{LayoutMode, MAX_INPUT_LINES, TuiLayout},
    state::AppState,
    theme::{Theme, ThemePalette},
};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

pub const INPUT_PLACEHOLDER: &str = "Ask Xofa anything...";
pub const AWAITING_PLACEHOLDER: &str = "Xofa is reflecting...";

/// Footer component: input card and status line
///
/// - Input card with the composer text (or placeholder)
/// - Status line: brand, theme and model on the left, key hints on the right
pub struct Footer<'a> {
    state: &'a AppState,
    mode: LayoutMode,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState, mode: LayoutMode) -> Self {
        Self { state, mode }
    }

    /// Status line text, e.g. "XOFA INTELLIGENCE · CLASSIC MODE"
    pub fn status_label(&self) -> String {
        format!("XOFA INTELLIGENCE · {} MODE", self.state.theme_variant().as_str().to_uppercase())
    }

    /// Render footer to the given frame
    pub fn render(&self, frame: &mut Frame<'_>, layout: &TuiLayout) {
        let theme = Theme::palette(self.state.theme_variant());
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), layout.footer);

        self.render_input_card(frame, layout.footer_input(), theme);
        self.render_status(frame, layout.footer_status(), theme);
    }

    fn render_input_card(&self, frame: &mut Frame<'_>, area: Rect, theme: ThemePalette) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let border_color = if self.state.is_generating() { theme.muted } else { theme.accent };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.panel_bg));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let input = &self.state.input;
        if input.is_empty() {
            let placeholder = if self.state.is_generating() { AWAITING_PLACEHOLDER } else { INPUT_PLACEHOLDER };
            frame.render_widget(
                Paragraph::new(Span::styled(placeholder, theme.muted().add_modifier(Modifier::ITALIC))),
                inner,
            );
        } else {
            let (row, _) = input.cursor_position();
            let visible = MAX_INPUT_LINES.min(inner.height) as usize;
            let skip = (row + 1).saturating_sub(visible);
            let lines: Vec<Line> = input
                .buffer
                .split('\n')
                .skip(skip)
                .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(theme.fg))))
                .collect();
            frame.render_widget(Paragraph::new(lines), inner);
        }

        if !self.state.is_theme_menu_open() {
            let (row, col) = input.cursor_position();
            let visible = inner.height.max(1) as usize;
            let row = row.min(visible - 1) as u16;
            let col = (col as u16).min(inner.width.saturating_sub(1));
            frame.set_cursor_position((inner.x + col, inner.y + row));
        }
    }

    fn render_status(&self, frame: &mut Frame<'_>, area: Rect, theme: ThemePalette) {
        if area.height == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(self.status_label(), Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
            Span::styled("  Ethics First · Ad-Free", theme.muted()),
            Span::styled(format!("  {}", self.state.model_name), Style::default().fg(theme.border)),
        ]);
        let left_width = left.width();
        frame.render_widget(Paragraph::new(left), area);

        if self.mode.shows_hints() {
            let hints = Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(theme.accent_alt)),
                Span::styled(" send  ", theme.muted()),
                Span::styled("[Shift+Enter]", Style::default().fg(theme.accent_alt)),
                Span::styled(" newline  ", theme.muted()),
                Span::styled("[Ctrl+T]", Style::default().fg(theme.accent_alt)),
                Span::styled(" theme  ", theme.muted()),
                Span::styled("[Esc]", Style::default().fg(theme.accent_alt)),
                Span::styled(" quit ", theme.muted()),
            ]);
            if left_width + hints.width() + 2 <= area.width as usize {
                frame.render_widget(Paragraph::new(hints).alignment(Alignment::Right), area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xofa_core::ThemeVariant;

    #[test]
    fn test_status_label_names_theme() {
        let state = AppState::new("m", ThemeVariant::Midnight);
        assert_eq!(Footer::new(&state, LayoutMode::Full).status_label(), "XOFA INTELLIGENCE · MIDNIGHT MODE");
    }
}
