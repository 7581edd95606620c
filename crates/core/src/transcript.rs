use chrono::{DateTime, Local};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnId(Uuid);

impl TurnId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TurnId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Speaker {
    User,
    Model,
}

impl Speaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Model => "model",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One message of the conversation.
///
/// Turns are immutable: the fields are private and only readable.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    id: TurnId,
    speaker: Speaker,
    text: String,
    created_at: DateTime<Local>,
}

impl Turn {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self { id: TurnId::new(), speaker, text: text.into(), created_at: Local::now() }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Speaker::Model, text)
    }

    pub fn id(&self) -> TurnId {
        self.id
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn is_user(&self) -> bool {
        self.speaker == Speaker::User
    }
}

/// Ordered, append-only history of the current session.
///
/// Insertion order is both display order and the order resent to the
/// provider. There is no way to remove, edit or reorder turns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a turn at the end
    pub fn append(&mut self, turn: Turn) {
        tracing::trace!(id = %turn.id(), speaker = %turn.speaker(), "transcript append");
        self.turns.push(turn);
    }

    /// All turns in insertion order
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_transcript_new_is_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
        assert!(transcript.last().is_none());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.append(Turn::user("Who made you?"));
        transcript.append(Turn::model("I was created by MUKIT SARKER."));
        transcript.append(Turn::user("Thank you"));

        let texts: Vec<&str> = transcript.all().iter().map(Turn::text).collect();
        assert_eq!(texts, vec!["Who made you?", "I was created by MUKIT SARKER.", "Thank you"]);

        let speakers: Vec<Speaker> = transcript.iter().map(Turn::speaker).collect();
        assert_eq!(speakers, vec![Speaker::User, Speaker::Model, Speaker::User]);
    }

    #[test]
    fn test_turn_ids_are_unique() {
        let mut transcript = Transcript::new();
        for i in 0..50 {
            transcript.append(Turn::user(format!("message {}", i)));
        }

        let ids: HashSet<TurnId> = transcript.iter().map(Turn::id).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_turn_accessors() {
        let turn = Turn::model("Wa Alaikum Assalam");
        assert_eq!(turn.speaker(), Speaker::Model);
        assert_eq!(turn.text(), "Wa Alaikum Assalam");
        assert!(!turn.is_user());
        assert!(turn.created_at() <= Local::now());
    }

    #[test]
    fn test_timestamps_do_not_go_backwards() {
        let mut transcript = Transcript::new();
        transcript.append(Turn::user("first"));
        transcript.append(Turn::model("second"));

        let turns = transcript.all();
        assert!(turns[0].created_at() <= turns[1].created_at());
    }

    #[test]
    fn test_speaker_display() {
        assert_eq!(Speaker::User.to_string(), "user");
        assert_eq!(Speaker::Model.to_string(), "model");
    }

    #[test]
    fn test_last_returns_newest() {
        let mut transcript = Transcript::new();
        transcript.append(Turn::user("one"));
        transcript.append(Turn::model("two"));
        assert_eq!(transcript.last().map(Turn::text), Some("two"));
    }
}
