//! flashdeck-remote — Remote deck source and configuration.
//!
//! Implements the `DeckSource` trait over HTTP and loads the settings that
//! decide where the deck is stored and fetched from.

pub mod config;
pub mod error;
pub mod http;
pub mod mock;

pub use config::{create_source, load_config, load_config_from, FlashdeckConfig};
pub use error::FetchError;
pub use http::HttpDeckSource;
pub use mock::MockSource;
