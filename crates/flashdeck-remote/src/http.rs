//! HTTP deck source: `GET <base_url>/cards.json`.

use std::time::Duration;

use async_trait::async_trait;
use tracing::instrument;

use flashdeck_core::model::Card;
use flashdeck_core::traits::DeckSource;

use crate::error::FetchError;

/// Path of the deck resource relative to the base URL.
pub const DECK_PATH: &str = "/cards.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fetches the deck from a static JSON resource.
pub struct HttpDeckSource {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpDeckSource {
    pub fn new(base_url: &str, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
            client,
        })
    }

    /// Full URL of the deck resource.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, DECK_PATH)
    }
}

#[async_trait]
impl DeckSource for HttpDeckSource {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self), fields(url = %self.url()))]
    async fn fetch_deck(&self) -> anyhow::Result<Vec<Card>> {
        let url = self.url();

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout_secs)
            } else {
                FetchError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::ApiError {
                status: status.as_u16(),
                url,
            }
            .into());
        }

        let cards: Vec<Card> = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        if cards.is_empty() {
            return Err(FetchError::EmptyDeck.into());
        }

        Ok(cards)
    }
}
