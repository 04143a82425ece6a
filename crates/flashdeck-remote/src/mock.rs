//! Mock deck source for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use flashdeck_core::model::Card;
use flashdeck_core::traits::DeckSource;

use crate::error::FetchError;

/// A deck source that returns a fixed outcome without touching the network.
pub struct MockSource {
    /// Cards to return, or `None` to fail every fetch.
    cards: Option<Vec<Card>>,
    /// Number of fetches made.
    call_count: AtomicU32,
}

impl MockSource {
    /// A source that always returns `cards`.
    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: Some(cards),
            call_count: AtomicU32::new(0),
        }
    }

    /// A source whose every fetch fails with a network error.
    pub fn failing() -> Self {
        Self {
            cards: None,
            call_count: AtomicU32::new(0),
        }
    }

    /// Get the number of fetches made to this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DeckSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_deck(&self) -> anyhow::Result<Vec<Card>> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        match &self.cards {
            Some(cards) => Ok(cards.clone()),
            None => Err(FetchError::NetworkError("mock source is offline".into()).into()),
        }
    }
}
