//! Full-window and live-only refresh of the score store
//!
//! Fetching and merging are split: the async functions gather fresh games
//! from a [`ScoresApi`], the `merge_*` functions apply the merge policy and are
//! pure. Data-source calls are awaited one at a time.

use chrono::NaiveDate;
use log::{debug, info, warn};

use super::storage::{ScoreStore, StoredGame};
use crate::client::ScoresApi;
use crate::config::League;
use crate::models::{DateKey, GameRecord, date_key};

/// Result of a full-window refresh
#[derive(Debug, Clone)]
pub struct FullRefresh {
    pub store: ScoreStore,
    /// Keys recomputed by this run, oldest first
    pub refreshed: Vec<DateKey>,
}

impl FullRefresh {
    /// Games produced by this run (refreshed keys only)
    pub fn games(&self) -> impl Iterator<Item = &GameRecord> {
        self.refreshed
            .iter()
            .flat_map(|key| self.store.games(key))
            .filter_map(StoredGame::as_fetched)
    }
}

/// Result of a live-only refresh
#[derive(Debug, Clone)]
pub struct LiveRefresh {
    pub store: ScoreStore,
    /// Candidates fetched for today
    pub candidates: usize,
    /// Live games written
    pub live: usize,
    /// Non-live games kept from the previous entry
    pub preserved: usize,
}

/// All games of one day, league by league in declaration order.
///
/// A league that fails contributes nothing; the error is logged.
pub async fn fetch_day<C>(client: &C, leagues: &[League], date: NaiveDate) -> Vec<GameRecord>
where
    C: ScoresApi + ?Sized,
{
    let mut games = Vec::new();

    for league in leagues {
        match client.fetch_scoreboard(league, date).await {
            Ok(mut league_games) => {
                debug!(
                    "{} {}: {} games",
                    league.name,
                    date_key(date),
                    league_games.len()
                );
                games.append(&mut league_games);
            }
            Err(e) => warn!(
                "Skipping {} for {}: {}",
                league.name,
                date_key(date),
                e
            ),
        }
    }

    games
}

/// Recompute every day in `dates` and replace those keys in the store.
///
/// Keys outside `dates` are carried over untouched.
pub async fn full_refresh<C>(
    client: &C,
    leagues: &[League],
    store: ScoreStore,
    dates: &[NaiveDate],
) -> FullRefresh
where
    C: ScoresApi + ?Sized,
{
    let mut fresh = Vec::with_capacity(dates.len());

    for &date in dates {
        info!("Fetching games for {}", date_key(date));
        let games = fetch_day(client, leagues, date).await;
        fresh.push((date_key(date), games));
    }

    let refreshed = fresh.iter().map(|(key, _)| key.clone()).collect();
    FullRefresh {
        store: merge_full(store, fresh),
        refreshed,
    }
}

/// Replace each given key with exactly its fresh sequence.
///
/// Entries for other keys are not touched and serialize as they were loaded.
pub fn merge_full(mut store: ScoreStore, fresh: Vec<(DateKey, Vec<GameRecord>)>) -> ScoreStore {
    for (key, games) in fresh {
        store.insert(key, games);
    }
    store
}

/// Refresh only the in-progress games of `today`.
///
/// Candidates the predicate does not call live are dropped; the stored
/// entry keeps its non-live games and loses its live ones.
pub async fn live_refresh<C, F>(
    client: &C,
    leagues: &[League],
    store: ScoreStore,
    today: NaiveDate,
    is_live: F,
) -> LiveRefresh
where
    C: ScoresApi + ?Sized,
    F: Fn(&str) -> bool,
{
    let candidates = fetch_day(client, leagues, today).await;
    let candidate_count = candidates.len();

    for game in &candidates {
        if is_live(&game.status) {
            info!(
                "LIVE: {} @ {} - {}",
                game.away.name, game.home.name, game.status
            );
        } else {
            debug!(
                "Not live: {} @ {} - {}",
                game.away.name, game.home.name, game.status
            );
        }
    }

    let key = date_key(today);
    let preserved = store
        .games(&key)
        .iter()
        .filter(|g| !is_live(g.status()))
        .count();

    let merged = merge_live(store, &key, candidates, &is_live);
    let live = merged.games(&key).len() - preserved;

    LiveRefresh {
        store: merged,
        candidates: candidate_count,
        live,
        preserved,
    }
}

/// New entry for `key` = stored non-live games, then fresh live games.
///
/// No dedup by game ID: the fresh fetch is the only source for anything
/// the predicate currently calls live.
pub fn merge_live<F>(
    mut store: ScoreStore,
    key: &str,
    fresh: Vec<GameRecord>,
    is_live: F,
) -> ScoreStore
where
    F: Fn(&str) -> bool,
{
    let mut merged: Vec<StoredGame> = store
        .take(key)
        .into_iter()
        .filter(|g| !is_live(g.status()))
        .collect();
    merged.extend(
        fresh
            .into_iter()
            .filter(|g| is_live(&g.status))
            .map(StoredGame::from),
    );

    store.insert_stored(key, merged);
    store
}
