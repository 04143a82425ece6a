//! Subcommand implementations.

pub mod init;
pub mod list;
pub mod reset;
pub mod study;

use std::sync::Arc;

use anyhow::Result;

use flashdeck_core::{DeckLoader, FileStore};
use flashdeck_remote::config::{create_source, load_config_from, FlashdeckConfig};

use crate::GlobalOpts;

/// Load the config file and apply command-line overrides.
pub fn settings(opts: &GlobalOpts) -> Result<FlashdeckConfig> {
    let mut config = load_config_from(opts.config.as_deref())?;

    if let Some(dir) = &opts.storage {
        config.storage_dir = dir.clone();
    }
    if let Some(url) = &opts.remote {
        config.remote_url = Some(url.clone());
    }
    if opts.no_remote {
        config.remote_url = None;
    }

    Ok(config)
}

/// Build the file store the deck is persisted in.
pub fn file_store(config: &FlashdeckConfig) -> FileStore {
    FileStore::new(config.storage_dir.clone())
}

/// Build a loader wired to the configured store and remote source.
pub fn loader(config: &FlashdeckConfig) -> Result<DeckLoader> {
    let mut loader =
        DeckLoader::new(Arc::new(file_store(config))).with_key(config.storage_key.clone());
    if let Some(source) = create_source(config)? {
        loader = loader.with_remote(source);
    }
    Ok(loader)
}
