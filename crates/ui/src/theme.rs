use ratatui::style::{Color, Modifier, Style};
use xofa_core::ThemeVariant;

/// Colors for one theme variant
///
/// Every component takes its colors from a palette so a theme switch is a
/// single state change followed by a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    /// Primary background (fills terminal)
    pub bg: Color,
    /// Primary text
    pub fg: Color,
    /// Secondary background: header, input card, model bubbles
    pub panel_bg: Color,
    /// Highlighted rows (selected suggestion, menu cursor)
    pub active: Color,
    /// Secondary text, timestamps, hints
    pub muted: Color,
    pub border: Color,
    /// Brand color of the variant, used for the name and the swatch
    pub accent: Color,
    /// Second accent for badges and the typing dots
    pub accent_alt: Color,
    pub user_bubble_bg: Color,
    pub user_bubble_fg: Color,
    pub model_bubble_bg: Color,
    pub model_bubble_fg: Color,
}

/// Theme lookup for the chat window
#[derive(Debug, Clone, Copy)]
pub struct Theme;

impl Theme {
    /// Palette for a variant
    pub fn palette(variant: ThemeVariant) -> ThemePalette {
        match variant {
            ThemeVariant::Classic => ThemePalette {
                bg: Color::Rgb(15, 23, 42),
                fg: Color::Rgb(226, 232, 240),
                panel_bg: Color::Rgb(30, 41, 59),
                active: Color::Rgb(37, 56, 96),
                muted: Color::Rgb(100, 116, 139),
                border: Color::Rgb(51, 65, 85),
                accent: Color::Rgb(37, 99, 235),
                accent_alt: Color::Rgb(96, 165, 250),
                user_bubble_bg: Color::Rgb(37, 99, 235),
                user_bubble_fg: Color::Rgb(255, 255, 255),
                model_bubble_bg: Color::Rgb(30, 41, 59),
                model_bubble_fg: Color::Rgb(226, 232, 240),
            },
            ThemeVariant::Ocean => ThemePalette {
                bg: Color::Rgb(8, 28, 38),
                fg: Color::Rgb(207, 250, 254),
                panel_bg: Color::Rgb(14, 48, 62),
                active: Color::Rgb(21, 78, 99),
                muted: Color::Rgb(94, 140, 156),
                border: Color::Rgb(22, 78, 99),
                accent: Color::Rgb(6, 182, 212),
                accent_alt: Color::Rgb(59, 130, 246),
                user_bubble_bg: Color::Rgb(8, 145, 178),
                user_bubble_fg: Color::Rgb(255, 255, 255),
                model_bubble_bg: Color::Rgb(14, 48, 62),
                model_bubble_fg: Color::Rgb(207, 250, 254),
            },
            ThemeVariant::Midnight => ThemePalette {
                bg: Color::Rgb(2, 6, 23),
                fg: Color::Rgb(203, 213, 225),
                panel_bg: Color::Rgb(15, 23, 42),
                active: Color::Rgb(30, 41, 59),
                muted: Color::Rgb(71, 85, 105),
                border: Color::Rgb(30, 41, 59),
                accent: Color::Rgb(148, 163, 184),
                accent_alt: Color::Rgb(129, 140, 248),
                user_bubble_bg: Color::Rgb(30, 41, 59),
                user_bubble_fg: Color::Rgb(241, 245, 249),
                model_bubble_bg: Color::Rgb(15, 23, 42),
                model_bubble_fg: Color::Rgb(203, 213, 225),
            },
            ThemeVariant::Sky => ThemePalette {
                bg: Color::Rgb(23, 37, 64),
                fg: Color::Rgb(239, 246, 255),
                panel_bg: Color::Rgb(30, 58, 95),
                active: Color::Rgb(45, 80, 130),
                muted: Color::Rgb(147, 170, 205),
                border: Color::Rgb(59, 94, 140),
                accent: Color::Rgb(96, 165, 250),
                accent_alt: Color::Rgb(186, 230, 253),
                user_bubble_bg: Color::Rgb(96, 165, 250),
                user_bubble_fg: Color::Rgb(15, 23, 42),
                model_bubble_bg: Color::Rgb(30, 58, 95),
                model_bubble_fg: Color::Rgb(239, 246, 255),
            },
        }
    }

    /// Swatch color shown in the header and theme menu
    pub fn swatch(variant: ThemeVariant) -> Color {
        Self::palette(variant).accent
    }
}

impl ThemePalette {
    /// Base style for all text
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn panel(&self) -> Style {
        Style::default().fg(self.fg).bg(self.panel_bg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Selected row style
    pub fn active(&self) -> Style {
        Style::default().fg(self.fg).bg(self.active)
    }

    pub fn user_bubble(&self) -> Style {
        Style::default().fg(self.user_bubble_fg).bg(self.user_bubble_bg)
    }

    pub fn model_bubble(&self) -> Style {
        Style::default().fg(self.model_bubble_fg).bg(self.model_bubble_bg)
    }
}
