//! Deck resolution: persisted store → remote source → built-in default.
//!
//! Each step either yields a deck or hands over to the next one. Failures are
//! logged and absorbed; [`DeckLoader::resolve`] always produces a deck.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::builtin::default_deck;
use crate::error::StoreError;
use crate::model::{Deck, DeckOrigin};
use crate::store::{DeckStore, STORAGE_KEY};
use crate::traits::DeckSource;

/// A deck together with the step that produced it.
#[derive(Debug, Clone)]
pub struct ResolvedDeck {
    pub deck: Deck,
    pub origin: DeckOrigin,
}

/// Resolves the active deck at startup.
pub struct DeckLoader {
    store: Arc<dyn DeckStore>,
    key: String,
    remote: Option<Box<dyn DeckSource>>,
}

impl DeckLoader {
    /// Create a loader reading from `store` under the default key, with no
    /// remote source.
    pub fn new(store: Arc<dyn DeckStore>) -> Self {
        Self {
            store,
            key: STORAGE_KEY.to_string(),
            remote: None,
        }
    }

    /// Use a different storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Consult `source` when nothing usable is persisted.
    pub fn with_remote(mut self, source: Box<dyn DeckSource>) -> Self {
        self.remote = Some(source);
        self
    }

    pub fn store(&self) -> Arc<dyn DeckStore> {
        Arc::clone(&self.store)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Run the fallback chain. The first step that yields a deck wins.
    ///
    /// A deck that did not come from storage is written back under the key,
    /// so the next start resolves from storage.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn resolve(&self) -> ResolvedDeck {
        let resolved = if let Some(deck) = self.from_store() {
            ResolvedDeck {
                deck,
                origin: DeckOrigin::Storage,
            }
        } else if let Some(deck) = self.from_remote().await {
            ResolvedDeck {
                deck,
                origin: DeckOrigin::Remote,
            }
        } else {
            ResolvedDeck {
                deck: default_deck(),
                origin: DeckOrigin::Builtin,
            }
        };

        info!(
            origin = %resolved.origin,
            cards = resolved.deck.len(),
            "deck resolved"
        );

        if resolved.origin != DeckOrigin::Storage {
            self.write_back(&resolved.deck);
        }

        resolved
    }

    fn from_store(&self) -> Option<Deck> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no persisted deck");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "failed to read persisted deck");
                return None;
            }
        };

        let deck = Deck::from_json(&raw);
        if deck.is_none() {
            warn!("persisted deck is malformed or empty, ignoring it");
        }
        deck
    }

    async fn from_remote(&self) -> Option<Deck> {
        let Some(source) = &self.remote else {
            debug!("no remote source configured");
            return None;
        };

        match source.fetch_deck().await {
            Ok(cards) => match Deck::new(cards) {
                Ok(deck) => Some(deck),
                Err(_) => {
                    warn!(source = source.name(), "remote deck is empty");
                    None
                }
            },
            Err(e) => {
                warn!(source = source.name(), error = %e, "remote deck unavailable");
                None
            }
        }
    }

    fn write_back(&self, deck: &Deck) {
        let result = deck
            .to_json()
            .map_err(StoreError::from)
            .and_then(|json| self.store.set(&self.key, &json));
        if let Err(e) = result {
            warn!(error = %e, "failed to persist resolved deck");
        }
    }
}
