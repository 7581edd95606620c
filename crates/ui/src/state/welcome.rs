use rand::Rng;

/// Greetings shown on the empty conversation, one picked per session
pub const GREETINGS: &[&str] = &[
    "Assalamu Alaikum wa Rahmatullahi wa Barakatuh",
    "Welcome to Xofa, your journey of knowledge starts here",
    "Peace be upon you, how can I assist your faith today?",
    "Blessed day! I am Xofa, ready to explore Islamic wisdom with you",
];

pub const WELCOME_TEXT: &str = "I am Xofa. Think of me as your digital companion for clarifying doubts, \
exploring Islamic history, and strengthening your faith.";

pub const WELCOME_CREDIT: &str = "Created with respect for your journey by MUKIT SARKER";

/// A titled group of canned prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub suggestions: &'static [&'static str],
}

pub const SUGGESTION_CATEGORIES: &[SuggestionCategory] = &[
    SuggestionCategory {
        title: "Spiritual Growth",
        icon: "♥",
        suggestions: &["How to improve focus in Salah?", "Dua for patience and strength", "Morning Adhkar benefits"],
    },
    SuggestionCategory {
        title: "Knowledge & History",
        icon: "❖",
        suggestions: &["Stories of the Sahaba", "Explain the concept of Tawheed", "The Islamic Golden Age"],
    },
    SuggestionCategory {
        title: "Life & Character",
        icon: "⚡",
        suggestions: &["Who made you?", "Sunnah for productivity", "Suggest a good deed for today"],
    },
];

/// State for the welcome screen
#[derive(Debug, Clone)]
pub struct WelcomeState {
    /// Index into [`GREETINGS`], fixed for the session
    pub greeting_index: usize,
    /// Flat index of the highlighted suggestion
    pub selected: usize,
}

impl WelcomeState {
    /// Pick a random greeting
    pub fn new() -> Self {
        Self::with_greeting(rand::thread_rng().gen_range(0..GREETINGS.len()))
    }

    pub fn with_greeting(greeting_index: usize) -> Self {
        Self { greeting_index: greeting_index % GREETINGS.len(), selected: 0 }
    }

    pub fn greeting(&self) -> &'static str {
        GREETINGS[self.greeting_index]
    }

    /// Every suggestion in display order
    pub fn all_suggestions() -> impl Iterator<Item = &'static str> {
        SUGGESTION_CATEGORIES.iter().flat_map(|c| c.suggestions.iter().copied())
    }

    pub fn suggestion_count() -> usize {
        SUGGESTION_CATEGORIES.iter().map(|c| c.suggestions.len()).sum()
    }

    pub fn selected_suggestion(&self) -> Option<&'static str> {
        Self::all_suggestions().nth(self.selected)
    }

    /// Move the highlight forward, wrapping around
    pub fn select_next(&mut self) {
        let count = Self::suggestion_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    /// Move the highlight backward, wrapping around
    pub fn select_prev(&mut self) {
        let count = Self::suggestion_count();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }
}

impl Default for WelcomeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_state_new() {
        let state = WelcomeState::new();
        assert!(state.greeting_index < GREETINGS.len());
        assert!(GREETINGS.contains(&state.greeting()));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_with_greeting_wraps() {
        let state = WelcomeState::with_greeting(GREETINGS.len() + 1);
        assert_eq!(state.greeting(), GREETINGS[1]);
    }

    #[test]
    fn test_suggestion_catalogue() {
        assert_eq!(SUGGESTION_CATEGORIES.len(), 3);
        assert_eq!(WelcomeState::suggestion_count(), 9);
        assert_eq!(WelcomeState::all_suggestions().next(), Some("How to improve focus in Salah?"));
        assert!(WelcomeState::all_suggestions().any(|s| s == "Who made you?"));
    }

    #[test]
    fn test_select_next_and_prev_wrap() {
        let mut state = WelcomeState::with_greeting(0);
        assert_eq!(state.selected_suggestion(), Some("How to improve focus in Salah?"));

        state.select_prev();
        assert_eq!(state.selected_suggestion(), Some("Suggest a good deed for today"));

        state.select_next();
        state.select_next();
        assert_eq!(state.selected_suggestion(), Some("Dua for patience and strength"));
    }

    #[test]
    fn test_selection_crosses_categories() {
        let mut state = WelcomeState::with_greeting(0);
        for _ in 0..3 {
            state.select_next();
        }
        assert_eq!(state.selected_suggestion(), Some("Stories of the Sahaba"));
    }
}
