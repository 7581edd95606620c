use crate::{
    layout::LayoutMode,
    state::{AppState, SUGGESTION_CATEGORIES, SuggestionCategory, WELCOME_CREDIT, WELCOME_TEXT},
    theme::{Theme, ThemePalette},
};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};

const MAX_TEXT_WIDTH: u16 = 72;

/// Empty-conversation screen: greeting, introduction and suggestion cards
///
/// Cards sit side by side on wide terminals and stack otherwise. The
/// highlighted suggestion is the one Ctrl+S submits.
pub struct WelcomeView<'a> {
    state: &'a AppState,
    mode: LayoutMode,
}

impl<'a> WelcomeView<'a> {
    pub fn new(state: &'a AppState, mode: LayoutMode) -> Self {
        Self { state, mode }
    }

    /// Render the complete welcome screen
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let theme = Theme::palette(self.state.theme_variant());
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);

        let cards_height = match self.mode {
            LayoutMode::Full => 5,
            _ => (SUGGESTION_CATEGORIES.len() * 5) as u16,
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Length(cards_height),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        self.render_intro(frame, rows[1], rows[2], theme);
        self.render_cards(frame, rows[3], theme);

        let credit = vec![
            Line::from(vec![
                Span::styled("[Tab]", Style::default().fg(theme.accent_alt)),
                Span::styled(" browse  ", theme.muted()),
                Span::styled("[Ctrl+S]", Style::default().fg(theme.accent_alt)),
                Span::styled(" ask highlighted", theme.muted()),
            ]),
            Line::from(Span::styled(WELCOME_CREDIT, theme.muted().add_modifier(Modifier::ITALIC))),
        ];
        frame.render_widget(Paragraph::new(credit).alignment(Alignment::Center), rows[4]);
    }

    fn render_intro(&self, frame: &mut Frame<'_>, greeting_area: Rect, text_area: Rect, theme: ThemePalette) {
        frame.render_widget(
            Paragraph::new(Span::styled(self.state.welcome.greeting(), theme.accent())).alignment(Alignment::Center),
            Rect { height: greeting_area.height.min(1), ..greeting_area },
        );

        let width = text_area.width.min(MAX_TEXT_WIDTH);
        let centered = Rect { x: text_area.x + (text_area.width - width) / 2, width, ..text_area };
        frame.render_widget(
            Paragraph::new(Span::styled(WELCOME_TEXT, theme.muted()))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            centered,
        );
    }

    fn render_cards(&self, frame: &mut Frame<'_>, area: Rect, theme: ThemePalette) {
        let count = SUGGESTION_CATEGORIES.len() as u32;
        let areas = match self.mode {
            LayoutMode::Full => Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, count); count as usize])
                .split(area),
            _ => Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Length(5); count as usize])
                .split(area),
        };

        let mut offset = 0;
        for (category, card_area) in SUGGESTION_CATEGORIES.iter().zip(areas.iter()) {
            self.render_card(frame, *card_area, category, offset, theme);
            offset += category.suggestions.len();
        }
    }

    fn render_card(
        &self, frame: &mut Frame<'_>, area: Rect, category: &SuggestionCategory, offset: usize, theme: ThemePalette,
    ) {
        let inner = Rect { x: area.x + 2, width: area.width.saturating_sub(4), ..area };
        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{} ", category.icon), Style::default().fg(theme.accent_alt)),
            Span::styled(category.title, Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)),
        ])];

        for (i, suggestion) in category.suggestions.iter().enumerate() {
            let selected = self.state.welcome.selected == offset + i;
            let (marker, style) = if selected {
                ("› ", theme.active().add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default().fg(theme.fg))
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent)),
                Span::styled(suggestion.to_string(), style),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).style(Style::default().bg(theme.bg)), inner);
    }
}
