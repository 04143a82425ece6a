//! The `flashdeck init` command.

use anyhow::Result;

use flashdeck_core::builtin::default_deck;

pub fn execute() -> Result<()> {
    // Create flashdeck.toml
    if std::path::Path::new("flashdeck.toml").exists() {
        println!("flashdeck.toml already exists, skipping.");
    } else {
        std::fs::write("flashdeck.toml", SAMPLE_CONFIG)?;
        println!("Created flashdeck.toml");
    }

    // Create a sample deck to serve as /cards.json
    let deck_path = std::path::Path::new("cards.json");
    if deck_path.exists() {
        println!("cards.json already exists, skipping.");
    } else {
        let body = serde_json::to_string_pretty(default_deck().cards())?;
        std::fs::write(deck_path, body + "\n")?;
        println!("Created cards.json");
    }

    println!("\nNext steps:");
    println!("  1. Edit cards.json with your own questions");
    println!("  2. Serve it, e.g.: python3 -m http.server 3000");
    println!("  3. Run: flashdeck study --remote http://localhost:3000");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# flashdeck configuration

# Where the deck and its scores are kept between runs.
# storage_dir = "${HOME}/.local/share/flashdeck"
storage_key = "flashcards_v1"

# Base URL serving /cards.json, consulted when nothing is stored yet.
# remote_url = "http://localhost:3000"
fetch_timeout_secs = 10
"#;
