use crate::{components::TypingIndicator, layout::LayoutMode, state::AppState, theme::Theme};

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;
use xofa_core::{Speaker, Transcript, Turn};

/// Horizontal padding inside a bubble, per side
const BUBBLE_PADDING: usize = 2;

/// Conversation rendered as speaker-aligned bubbles
///
/// User turns sit on the right, model turns on the left. The view follows
/// the newest line unless the user has scrolled back.
pub struct TranscriptView<'a> {
    transcript: &'a Transcript,
    state: &'a AppState,
    mode: LayoutMode,
}

impl<'a> TranscriptView<'a> {
    pub fn new(transcript: &'a Transcript, state: &'a AppState, mode: LayoutMode) -> Self {
        Self { transcript, state, mode }
    }

    /// Render transcript to the given frame
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let theme = Theme::palette(self.state.theme_variant());
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);

        let content = Self::content_area(area);
        let lines = self.lines(content.width as usize);
        let visible = Self::visible_lines(lines, content.height as usize, self.state.ui.scroll_back as usize);

        frame.render_widget(Paragraph::new(visible).style(theme.base()), content);
    }

    /// Largest useful scroll-back distance for the given area
    pub fn max_scroll_back(&self, area: Rect) -> u16 {
        let content = Self::content_area(area);
        let total = self.lines(content.width as usize).len();
        u16::try_from(total.saturating_sub(content.height as usize)).unwrap_or(u16::MAX)
    }

    /// Lines inside the viewport, cut from the full list
    pub fn visible_lines(lines: Vec<Line<'static>>, height: usize, scroll_back: usize) -> Vec<Line<'static>> {
        let top = Self::scroll_top(lines.len(), height, scroll_back);
        lines.into_iter().skip(top).take(height).collect()
    }

    fn content_area(area: Rect) -> Rect {
        Rect { x: area.x + 1, width: area.width.saturating_sub(2), ..area }
    }

    /// First visible line given the total, the viewport and the scroll-back distance
    pub fn scroll_top(total: usize, height: usize, scroll_back: usize) -> usize {
        let bottom = total.saturating_sub(height);
        bottom.saturating_sub(scroll_back)
    }

    /// All lines of the conversation for a given width
    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for turn in self.transcript {
            lines.push(Line::default());
            self.render_turn(turn, width, &mut lines);
        }

        if self.state.is_generating() {
            lines.push(Line::default());
            lines.extend(TypingIndicator::new(self.state).lines());
        }

        lines
    }

    fn render_turn(&self, turn: &Turn, width: usize, lines: &mut Vec<Line<'static>>) {
        let theme = Theme::palette(self.state.theme_variant());
        let max_bubble = (width * self.mode.bubble_width_percent() as usize / 100).max(BUBBLE_PADDING * 2 + 8);
        let text_width = max_bubble.saturating_sub(BUBBLE_PADDING * 2).max(1);
        let wrapped = wrap_turn_text(turn.text(), text_width);
        let body_width = wrapped.iter().map(|l| l.width()).max().unwrap_or(0);
        let bubble_width = (body_width + BUBBLE_PADDING * 2).min(width);

        let time = turn.created_at().format("%H:%M").to_string();
        let (name, name_color, bubble_style) = match turn.speaker() {
            Speaker::User => ("You", theme.user_bubble_bg, theme.user_bubble()),
            Speaker::Model => ("Xofa", theme.accent, theme.model_bubble()),
        };

        let label_spans = vec![
            Span::styled(name, Style::default().fg(name_color).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" • {}", time), theme.muted()),
        ];
        let label_width = name.width() + 3 + time.width();

        let is_user = turn.speaker() == Speaker::User;
        let indent = |used: usize| if is_user { width.saturating_sub(used) } else { 0 };

        let mut label = vec![Span::raw(" ".repeat(indent(label_width)))];
        label.extend(label_spans);
        lines.push(Line::from(label));

        let pad = " ".repeat(BUBBLE_PADDING);
        for text_line in wrapped {
            let fill = " ".repeat(body_width.saturating_sub(text_line.width()));
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(indent(bubble_width))),
                Span::styled(format!("{}{}{}{}", pad, text_line, fill, pad), bubble_style),
            ]));
        }
    }
}

/// Wrap each source line separately so explicit newlines are kept
fn wrap_turn_text(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for source_line in text.split('\n') {
        if source_line.trim().is_empty() {
            out.push(String::new());
        } else {
            out.extend(textwrap::wrap(source_line, width).into_iter().map(|cow| cow.into_owned()));
        }
    }
    out
}
