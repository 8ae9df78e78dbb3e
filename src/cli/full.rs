//! Full-window refresh command

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cache::{ScoreStore, TeamHistoryCache, collect_team_identities, full_refresh};
use crate::cli::{CommandContext, FullArgs, GlobalOptions};
use crate::client::Throttle;
use crate::error::Result;
use crate::models::{date_key, date_window, today};

/// Refresh every day in the window, save the store, then refresh team schedules
pub async fn run(opts: &GlobalOptions, args: &FullArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let config = &ctx.config;

    let days_back = args.days_back.unwrap_or(config.days_back);
    let days_forward = args.days_forward.unwrap_or(config.days_forward);
    let dates = date_window(today(), days_back, days_forward);

    if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
        println!(
            "--- Fetching {} to {} ({} leagues) ---",
            date_key(*first),
            date_key(*last),
            config.leagues.len()
        );
    }

    let path = ctx.scores_path();
    let store = ScoreStore::load(&path);
    let result = full_refresh(&ctx.client, &config.leagues, store, &dates).await;

    let teams = collect_team_identities(result.games());
    let game_count = result.games().count();

    result.store.save(&path)?;
    println!(
        "{} Saved {} games across {} days to {}",
        "✓".green(),
        game_count,
        result.refreshed.len(),
        path.display()
    );

    if args.no_teams {
        return Ok(());
    }

    println!("--- Refreshing {} team schedules ---", teams.len());

    let progress = ProgressBar::new(teams.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}") {
        progress.set_style(style);
    }

    let history = TeamHistoryCache::new(config.teams_dir());
    let throttle = Throttle::new(config.team_delay());
    let stats = history
        .refresh_all(&ctx.client, &teams, &throttle, &progress)
        .await;
    progress.finish_and_clear();

    if stats.failed > 0 {
        println!(
            "{} Refreshed {} team schedules, {} failed",
            "⚠".yellow(),
            stats.refreshed,
            stats.failed
        );
    } else {
        println!(
            "{} Refreshed {} team schedules in {}",
            "✓".green(),
            stats.refreshed,
            history.dir().display()
        );
    }

    Ok(())
}
