//! Core data model types for flashdeck.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

/// A single question/answer pair with its accumulated score.
///
/// Field names match the persisted JSON shape:
/// `{"question": "...", "answer": "...", "points": 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Text shown on the front of the card.
    pub question: String,
    /// Text revealed when the card is flipped.
    pub answer: String,
    /// Self-assessment accumulator. Unbounded in both directions.
    pub points: i64,
}

impl Card {
    pub fn new(question: impl Into<String>, answer: impl Into<String>, points: i64) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            points,
        }
    }
}

// ---------------------------------------------------------------------------
// Deck
// ---------------------------------------------------------------------------

/// An ordered, non-empty sequence of cards.
///
/// The length is fixed once constructed; only card scores change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck, rejecting an empty card list.
    pub fn new(cards: Vec<Card>) -> Result<Self, SessionError> {
        if cards.is_empty() {
            return Err(SessionError::EmptyDeck);
        }
        Ok(Self { cards })
    }

    /// Wrap a card list already known to be non-empty.
    pub(crate) fn from_nonempty(cards: Vec<Card>) -> Self {
        debug_assert!(!cards.is_empty());
        Self { cards }
    }

    /// Decode a deck from its JSON form.
    ///
    /// Returns `None` for anything that is not a non-empty array of
    /// card-shaped records.
    pub fn from_json(raw: &str) -> Option<Self> {
        let cards: Vec<Card> = serde_json::from_str(raw).ok()?;
        Self::new(cards).ok()
    }

    /// Encode the deck as a compact JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.cards)
    }

    /// Number of cards. Always at least 1.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

// ---------------------------------------------------------------------------
// Judgment
// ---------------------------------------------------------------------------

/// The user's self-assessment of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Judgment {
    /// Answered correctly: `+1`.
    Known,
    /// Answered incorrectly: `-1`.
    Unknown,
}

impl Judgment {
    /// Score change applied to the judged card.
    pub fn delta(self) -> i64 {
        match self {
            Judgment::Known => 1,
            Judgment::Unknown => -1,
        }
    }
}

// ---------------------------------------------------------------------------
// DeckOrigin
// ---------------------------------------------------------------------------

/// Which step of the loader chain produced the active deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckOrigin {
    /// Previously persisted deck.
    Storage,
    /// Deck fetched from the remote source.
    Remote,
    /// Bundled default deck.
    Builtin,
}

impl fmt::Display for DeckOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckOrigin::Storage => write!(f, "storage"),
            DeckOrigin::Remote => write!(f, "remote"),
            DeckOrigin::Builtin => write!(f, "builtin"),
        }
    }
}
