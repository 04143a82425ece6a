//! flashdeck-core — Deck model, loader fallback chain, and study session.
//!
//! This crate defines the card data model, the key-value store the deck is
//! persisted to, the ordered loader that resolves the active deck, and the
//! session state machine every front-end drives.

pub mod builtin;
pub mod error;
pub mod loader;
pub mod model;
pub mod session;
pub mod store;
pub mod traits;

pub use error::{SessionError, StoreError};
pub use loader::{DeckLoader, ResolvedDeck};
pub use model::{Card, Deck, DeckOrigin, Judgment};
pub use session::{Action, Cursor, Progress, Session, SessionState};
pub use store::{DeckStore, FileStore, MemoryStore, STORAGE_KEY};
pub use traits::DeckSource;
