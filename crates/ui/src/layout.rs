use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Most input lines the composer grows to before it scrolls
pub const MAX_INPUT_LINES: u16 = 5;

/// Layout breakpoints for responsive TUI
///
/// - >= 100 cols: Full layout
/// - 80-99 cols: Medium layout
/// - < 80 cols: Compact layout, creator credit and key hints hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Full,
    Medium,
    Compact,
}

impl From<u16> for LayoutMode {
    fn from(width: u16) -> Self {
        match width {
            w if w >= 100 => Self::Full,
            w if w >= 80 => Self::Medium,
            _ => Self::Compact,
        }
    }
}

impl LayoutMode {
    /// Whether the header shows the creator credit
    pub fn shows_credit(&self) -> bool {
        !matches!(self, Self::Compact)
    }

    /// Whether the footer shows key hints
    pub fn shows_hints(&self) -> bool {
        !matches!(self, Self::Compact)
    }

    /// Share of the transcript width a bubble may take, in percent
    pub fn bubble_width_percent(&self) -> u16 {
        match self {
            Self::Full => 70,
            Self::Medium => 80,
            Self::Compact => 90,
        }
    }
}

/// Calculated layout for the chat window
#[derive(Debug, Clone)]
pub struct TuiLayout {
    /// Layout mode based on terminal width
    pub mode: LayoutMode,
    /// Header area (2 lines: title row and rule)
    pub header: Rect,
    /// Transcript or welcome area
    pub transcript: Rect,
    /// Input card plus status line
    pub footer: Rect,
}

impl TuiLayout {
    /// Calculate layout for the terminal size and the number of lines in the input
    pub fn calculate(area: Rect, input_lines: usize) -> Self {
        let mode = LayoutMode::from(area.width);
        let input_height = (input_lines as u16).clamp(1, MAX_INPUT_LINES);
        let footer_height = input_height + 3;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0), Constraint::Length(footer_height)])
            .split(area);

        Self { mode, header: chunks[0], transcript: chunks[1], footer: chunks[2] }
    }

    /// Bordered input card inside the footer
    pub fn footer_input(&self) -> Rect {
        Rect { height: self.footer.height.saturating_sub(1), ..self.footer }
    }

    /// Status line under the input card
    pub fn footer_status(&self) -> Rect {
        Rect {
            y: self.footer.y + self.footer.height.saturating_sub(1),
            height: self.footer.height.min(1),
            ..self.footer
        }
    }
}

/// Rect of the given size centered in `area`, clipped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
