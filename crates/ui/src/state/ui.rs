use xofa_core::ThemeVariant;

/// Lines moved by one PageUp / PageDown
pub const SCROLL_STEP: u16 = 5;

/// Theme picker opened with Ctrl+T
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeMenuState {
    pub open: bool,
    /// Index into [`ThemeVariant::VALUES`]
    pub highlighted: usize,
}

impl ThemeMenuState {
    /// Open with the current theme highlighted
    pub fn open(&mut self, current: ThemeVariant) {
        self.open = true;
        self.highlighted = current.index();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn move_up(&mut self) {
        let count = ThemeVariant::VALUES.len();
        self.highlighted = (self.highlighted + count - 1) % count;
    }

    pub fn move_down(&mut self) {
        self.highlighted = (self.highlighted + 1) % ThemeVariant::VALUES.len();
    }

    pub fn highlighted_variant(&self) -> ThemeVariant {
        ThemeVariant::VALUES[self.highlighted % ThemeVariant::VALUES.len()]
    }
}

/// UI rendering state
#[derive(Debug, Clone, Default)]
pub struct UIState {
    /// Active UI theme variant
    pub theme_variant: ThemeVariant,
    pub theme_menu: ThemeMenuState,
    /// Animation frame for the typing dots (cycles 0-3)
    pub animation_frame: u8,
    /// Lines scrolled back from the newest turn; 0 follows the conversation
    pub scroll_back: u16,
}

impl UIState {
    pub fn new(theme_variant: ThemeVariant) -> Self {
        Self { theme_variant, ..Default::default() }
    }

    pub fn set_theme_variant(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
    }

    /// Keep the scroll-back distance within the content above the viewport
    pub fn clamp_scroll_back(&mut self, max: u16) {
        self.scroll_back = self.scroll_back.min(max);
    }

    pub fn advance_animation_frame(&mut self) {
        self.animation_frame = (self.animation_frame + 1) % 4;
    }

    /// Dots for the typing indicator based on animation frame
    pub fn typing_dots(&self) -> &'static str {
        match self.animation_frame {
            0 => "",
            1 => ".",
            2 => "..",
            _ => "...",
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_back = self.scroll_back.saturating_add(SCROLL_STEP);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_back = self.scroll_back.saturating_sub(SCROLL_STEP);
    }

    pub fn follow_newest(&mut self) {
        self.scroll_back = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_menu_open_highlights_current() {
        let mut menu = ThemeMenuState::default();
        menu.open(ThemeVariant::Midnight);
        assert!(menu.open);
        assert_eq!(menu.highlighted_variant(), ThemeVariant::Midnight);
    }

    #[test]
    fn test_theme_menu_wraps() {
        let mut menu = ThemeMenuState::default();
        menu.open(ThemeVariant::Classic);
        menu.move_up();
        assert_eq!(menu.highlighted_variant(), ThemeVariant::Sky);
        menu.move_down();
        menu.move_down();
        assert_eq!(menu.highlighted_variant(), ThemeVariant::Ocean);
        menu.close();
        assert!(!menu.open);
    }

    #[test]
    fn test_clamp_scroll_back() {
        let mut ui = UIState::new(ThemeVariant::Sky);
        for _ in 0..20 {
            ui.scroll_up();
        }
        ui.clamp_scroll_back(12);
        assert_eq!(ui.scroll_back, 12);

        ui.scroll_down();
        assert_eq!(ui.scroll_back, 12 - SCROLL_STEP);
        ui.clamp_scroll_back(100);
        assert_eq!(ui.scroll_back, 12 - SCROLL_STEP);
    }

    #[test]
    fn test_typing_dots_cycle() {
        let mut ui = UIState::default();
        let dots: Vec<&str> = (0..5)
            .map(|_| {
                let d = ui.typing_dots();
                ui.advance_animation_frame();
                d
            })
            .collect();
        assert_eq!(dots, vec!["", ".", "..", "...", ""]);
    }

    #[test]
    fn test_scroll_saturates() {
        let mut ui = UIState::default();
        ui.scroll_down();
        assert_eq!(ui.scroll_back, 0);
        ui.scroll_up();
        ui.scroll_up();
        assert_eq!(ui.scroll_back, 2 * SCROLL_STEP);
        ui.follow_newest();
        assert_eq!(ui.scroll_back, 0);
    }
}
