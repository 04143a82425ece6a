//! The study session state machine.
//!
//! A [`SessionState`] starts out `Loading` and becomes `Ready` once, when the
//! loader hands over a deck. Only a `Ready` session accepts actions.
//!
//! Judging a card is the only action that changes the deck, and every judgment
//! writes the whole deck back to the store.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{SessionError, StoreError};
use crate::model::{Card, Deck, Judgment};
use crate::store::DeckStore;

/// What is currently on screen. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Position in the deck, always `< deck.len()`.
    pub index: usize,
    /// Whether the answer side is showing.
    pub flipped: bool,
}

/// A user input the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Flip,
    Next,
    Prev,
    Judge(Judgment),
    Restart,
}

/// Read-only position indicator: card `position` of `total`, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
}

impl Progress {
    /// Share of the deck reached, in `(0.0, 1.0]`.
    pub fn fraction(&self) -> f64 {
        self.position as f64 / self.total as f64
    }

    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.position, self.total)
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// A running study session: the deck, the cursor, and where to persist.
pub struct Session {
    deck: Deck,
    cursor: Cursor,
    store: Arc<dyn DeckStore>,
    key: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("deck", &self.deck)
            .field("cursor", &self.cursor)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Start at the first card, answer hidden.
    pub fn new(deck: Deck, store: Arc<dyn DeckStore>, key: impl Into<String>) -> Self {
        Self {
            deck,
            cursor: Cursor::default(),
            store,
            key: key.into(),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn index(&self) -> usize {
        self.cursor.index
    }

    pub fn is_flipped(&self) -> bool {
        self.cursor.flipped
    }

    /// The card under the cursor.
    pub fn current(&self) -> &Card {
        &self.deck.cards()[self.cursor.index]
    }

    pub fn progress(&self) -> Progress {
        Progress {
            position: self.cursor.index + 1,
            total: self.deck.len(),
        }
    }

    /// Toggle between question and answer.
    pub fn flip(&mut self) {
        self.cursor.flipped = !self.cursor.flipped;
    }

    /// Advance one card, wrapping past the last card to the first.
    pub fn next(&mut self) {
        self.cursor.index = (self.cursor.index + 1) % self.deck.len();
        self.cursor.flipped = false;
    }

    /// Go back one card, wrapping past the first card to the last.
    pub fn prev(&mut self) {
        let len = self.deck.len();
        self.cursor.index = (self.cursor.index + len - 1) % len;
        self.cursor.flipped = false;
    }

    /// Return to the first card. Scores are kept.
    pub fn restart(&mut self) {
        self.cursor = Cursor::default();
    }

    /// Adjust the current card's score and persist the deck.
    ///
    /// The score change is kept in memory even if the write fails; the error
    /// is returned as [`SessionError::Persist`].
    pub fn judge(&mut self, judgment: Judgment) -> Result<(), SessionError> {
        let index = self.cursor.index;
        if let Some(card) = self.deck.get_mut(index) {
            card.points = card.points.saturating_add(judgment.delta());
            debug!(index, points = card.points, ?judgment, "card judged");
        }
        self.cursor.flipped = false;
        self.persist()
    }

    /// Apply one action.
    pub fn apply(&mut self, action: Action) -> Result<(), SessionError> {
        match action {
            Action::Flip => self.flip(),
            Action::Next => self.next(),
            Action::Prev => self.prev(),
            Action::Restart => self.restart(),
            Action::Judge(judgment) => return self.judge(judgment),
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), SessionError> {
        let json = self.deck.to_json().map_err(StoreError::from)?;
        self.store.set(&self.key, &json).map_err(|e| {
            warn!(key = %self.key, error = %e, "failed to persist deck");
            SessionError::from(e)
        })
    }
}

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// `Loading` until a deck is resolved, then `Ready` for good.
#[derive(Debug, Default)]
pub enum SessionState {
    #[default]
    Loading,
    Ready(Session),
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, SessionState::Ready(_))
    }

    /// Move from `Loading` to `Ready`.
    pub fn resolve(&mut self, session: Session) -> Result<(), SessionError> {
        match self {
            SessionState::Loading => {
                *self = SessionState::Ready(session);
                Ok(())
            }
            SessionState::Ready(_) => Err(SessionError::AlreadyReady),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Ready(session) => Some(session),
            SessionState::Loading => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        match self {
            SessionState::Ready(session) => Some(session),
            SessionState::Loading => None,
        }
    }

    /// Apply an action to the running session.
    pub fn dispatch(&mut self, action: Action) -> Result<(), SessionError> {
        self.session_mut()
            .ok_or(SessionError::NotReady)?
            .apply(action)
    }
}
