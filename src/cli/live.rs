//! Live-only refresh command

use colored::Colorize;

use crate::cache::{ScoreStore, is_live_status, live_refresh};
use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::models::{date_key, today};

/// Refresh today's in-progress games, keeping everything else in the store
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let today = today();

    println!("--- Fetching live games for {} ---", date_key(today));

    let path = ctx.scores_path();
    let store = ScoreStore::load(&path);
    let result = live_refresh(&ctx.client, &ctx.config.leagues, store, today, is_live_status).await;

    result.store.save(&path)?;

    println!(
        "Found {} live games out of {} total ({} cached games kept)",
        result.live, result.candidates, result.preserved
    );

    if result.live > 0 {
        println!("{} Games are live! Scores updated.", "●".red());
    } else {
        println!("{} No live games currently.", "○".dimmed());
    }

    Ok(())
}
