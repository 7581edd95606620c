use crate::{layout::LayoutMode, state::AppState, theme::Theme};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use xofa_core::ThemeVariant;

pub const APP_NAME: &str = "Xofa";
pub const VERSION_BADGE: &str = "v2.1";
pub const SUBTITLE: &str = "Islamic AI Assistant";
pub const CREATOR_NAME: &str = "MUKIT SARKER";
pub const CREATOR_ROLE: &str = "Chief Architect";

/// Header component
///
/// Left: name, version badge, subtitle and theme swatches.
/// Right: creator credit, hidden on narrow terminals.
pub struct Header<'a> {
    state: &'a AppState,
    mode: LayoutMode,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState, mode: LayoutMode) -> Self {
        Self { state, mode }
    }

    /// Render the header to the given frame
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.height == 0 {
            return;
        }

        let theme = Theme::palette(self.state.theme_variant());
        frame.render_widget(Block::default().style(Style::default().bg(theme.panel_bg)), area);

        let title_row = Rect { height: 1, ..area };
        let current = self.state.theme_variant();

        let mut left_spans = vec![
            Span::styled(" ◆ ", Style::default().fg(theme.accent)),
            Span::styled(APP_NAME, theme.accent()),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", VERSION_BADGE),
                Style::default().fg(theme.bg).bg(theme.accent_alt).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", SUBTITLE), theme.muted()),
            Span::raw("   "),
        ];

        for variant in ThemeVariant::VALUES {
            let marker = if *variant == current { "◉" } else { "●" };
            left_spans.push(Span::styled(marker, Style::default().fg(Theme::swatch(*variant))));
            left_spans.push(Span::raw(" "));
        }

        frame.render_widget(
            Paragraph::new(Line::from(left_spans)).style(Style::default().bg(theme.panel_bg)),
            title_row,
        );

        if self.mode.shows_credit() {
            let credit = Line::from(vec![
                Span::styled(CREATOR_NAME, Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)),
                Span::styled(format!(" · {} ", CREATOR_ROLE), theme.muted()),
            ]);
            frame.render_widget(Paragraph::new(credit).alignment(Alignment::Right), title_row);
        }

        if area.height > 1 {
            let rule_row = Rect { y: area.y + 1, height: 1, ..area };
            frame.render_widget(
                Paragraph::new(Span::styled("─".repeat(area.width as usize), theme.border()))
                    .style(Style::default().bg(theme.bg)),
                rule_row,
            );
        }
    }
}
