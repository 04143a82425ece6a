//! Trait for remote deck sources.
//!
//! Implemented by `flashdeck-remote` over HTTP; tests supply their own.

use std::sync::Arc;

use async_trait::async_trait;

use crate::model::Card;

/// A best-effort source of a deck, consulted when nothing is persisted.
#[async_trait]
pub trait DeckSource: Send + Sync {
    /// Human-readable source name (e.g. "http").
    fn name(&self) -> &str;

    /// Fetch the card list. Any error means "no remote deck".
    async fn fetch_deck(&self) -> anyhow::Result<Vec<Card>>;
}

/// Lets a caller keep a handle on a source it hands to the loader.
#[async_trait]
impl<T: DeckSource + ?Sized> DeckSource for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn fetch_deck(&self) -> anyhow::Result<Vec<Card>> {
        (**self).fetch_deck().await
    }
}
