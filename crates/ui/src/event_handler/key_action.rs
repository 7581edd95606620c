use xofa_core::ThemeVariant;

/// Actions that can be triggered by key events
///
/// Editing keys are applied to the input directly and produce no action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Send the composer text
    SendMessage,
    /// Send the highlighted welcome suggestion
    SelectSuggestion,
    /// Move the suggestion highlight forward
    NextSuggestion,
    /// Move the suggestion highlight backward
    PrevSuggestion,
    /// Theme picked from the menu
    SelectTheme(ThemeVariant),
    /// Cycle to the next theme directly
    CycleTheme,
    /// Page up in transcript
    PageUp,
    /// Page down in transcript
    PageDown,
    /// Exit the TUI application
    Exit,
}
