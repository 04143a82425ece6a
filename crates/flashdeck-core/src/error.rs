//! Error types for deck storage and the study session.
//!
//! The loader never returns these to its caller: every failure along the
//! fallback chain is absorbed. They surface only from direct store access and
//! from session operations that write through to the store.

use thiserror::Error;

/// Errors raised by a [`DeckStore`](crate::store::DeckStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The deck could not be serialized to JSON.
    #[error("failed to encode deck: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors raised by the study session state machine.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An action was dispatched while the deck is still loading.
    #[error("session is still loading")]
    NotReady,

    /// A resolved deck was handed to a session that is already running.
    #[error("session is already ready")]
    AlreadyReady,

    /// A deck must contain at least one card.
    #[error("deck contains no cards")]
    EmptyDeck,

    /// The score change was applied but could not be written to storage.
    #[error("failed to persist deck: {0}")]
    Persist(#[from] StoreError),
}

impl SessionError {
    /// Returns `true` if the in-memory state was updated despite the error.
    pub fn state_was_applied(&self) -> bool {
        matches!(self, SessionError::Persist(_))
    }
}
