//! The `flashdeck list` command.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::GlobalOpts;

pub async fn execute(opts: &GlobalOpts) -> Result<()> {
    let config = super::settings(opts)?;
    let loader = super::loader(&config)?;
    let resolved = loader.resolve().await;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Question", "Answer", "Points"]);

    for (i, card) in resolved.deck.cards().iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            card.question.clone(),
            card.answer.clone(),
            card.points.to_string(),
        ]);
    }

    println!("{table}");

    let total: i64 = resolved.deck.cards().iter().map(|c| c.points).sum();
    println!(
        "{} cards from {} (total points: {total})",
        resolved.deck.len(),
        resolved.origin
    );

    Ok(())
}
