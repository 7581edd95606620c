pub mod footer;
pub mod header;
pub mod theme_menu;
pub mod transcript;
pub mod typing;
pub mod welcome;

pub use footer::Footer;
pub use header::Header;
pub use theme_menu::ThemeMenu;
pub use transcript::TranscriptView;
pub use typing::TypingIndicator;
pub use welcome::WelcomeView;
