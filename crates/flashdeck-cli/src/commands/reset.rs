//! The `flashdeck reset` command.

use anyhow::{Context, Result};

use flashdeck_core::DeckStore;

use crate::GlobalOpts;

pub fn execute(opts: &GlobalOpts) -> Result<()> {
    let config = super::settings(opts)?;
    let store = super::file_store(&config);
    let path = store.path_for(&config.storage_key);

    let removed = store
        .remove(&config.storage_key)
        .with_context(|| format!("failed to remove {}", path.display()))?;

    if removed {
        println!("Removed persisted deck {}", path.display());
    } else {
        println!("No persisted deck at {}", path.display());
    }

    Ok(())
}
