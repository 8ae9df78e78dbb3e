//! Status command implementation

use colored::Colorize;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::cache::{ScoreStore, is_live_status};
use crate::cli::{GlobalOptions, OutputFormat, context::resolve_config};
use crate::error::Result;

/// One stored day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct DaySummary {
    #[tabled(rename = "DATE")]
    pub date: String,
    #[tabled(rename = "LABEL")]
    pub label: String,
    #[tabled(rename = "GAMES")]
    pub games: usize,
    #[tabled(rename = "LIVE")]
    pub live: usize,
    #[tabled(rename = "FINAL")]
    pub completed: usize,
    #[tabled(rename = "LEAGUES")]
    pub leagues: String,
}

/// Summarize each day in key order
pub fn summarize(store: &ScoreStore) -> Vec<DaySummary> {
    store
        .iter()
        .map(|(key, games)| {
            let mut leagues: Vec<&str> = Vec::new();
            for game in games {
                let league = game.league_key();
                if !league.is_empty() && !leagues.contains(&league) {
                    leagues.push(league);
                }
            }

            DaySummary {
                date: key.clone(),
                label: games
                    .first()
                    .map(|g| g.date_label().to_string())
                    .unwrap_or_default(),
                games: games.len(),
                live: games.iter().filter(|g| is_live_status(g.status())).count(),
                completed: games.iter().filter(|g| g.completed()).count(),
                leagues: leagues.join(", "),
            }
        })
        .collect()
}

/// Format summaries as a table
pub fn format_table(rows: &[DaySummary]) -> String {
    if rows.is_empty() {
        return "Score store is empty.".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Print what the score store holds
pub fn run(opts: &GlobalOptions, format: OutputFormat) -> Result<()> {
    let config = resolve_config(opts)?;
    let path = config.scores_path();
    let rows = summarize(&ScoreStore::load(&path));

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Table => {
            println!("Score store: {}", path.display().to_string().cyan());
            println!("{}", format_table(&rows));
        }
    }

    Ok(())
}
