//! Mock scores client for testing
//!
//! Provides a mock implementation of [`ScoresApi`] for unit testing the
//! refresh logic without making real API calls.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::ScoresApi;
use crate::config::League;
use crate::error::{ApiError, Result};
use crate::models::{GameRecord, TeamIdentity, date_key};

/// Mock data source for testing.
///
/// Configure responses via builder methods, then pass it to the refresh
/// functions. Unconfigured scoreboards are empty.
///
/// # Example
/// ```ignore
/// let mock = MockScoresClient::new()
///     .with_games("nba", "20261018", vec![GameBuilder::new("1").build()])
///     .await;
/// ```
#[derive(Default)]
pub struct MockScoresClient {
    /// (league key, date key) -> games
    games: Arc<Mutex<HashMap<(String, String), Vec<GameRecord>>>>,
    /// (league key, date key) pairs that fail
    failing_boards: Arc<Mutex<HashSet<(String, String)>>>,
    /// team id -> schedule document
    schedules: Arc<Mutex<HashMap<String, serde_json::Value>>>,
    /// team ids that fail
    failing_teams: Arc<Mutex<HashSet<String>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests in call order
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub fetch_scoreboard: usize,
    pub fetch_team_schedule: usize,
}

/// A captured request for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturedRequest {
    Scoreboard { league: String, date: String },
    TeamSchedule { team_id: String },
}

impl MockScoresClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the games returned for one league and day.
    pub async fn with_games(self, league: &str, date: &str, games: Vec<GameRecord>) -> Self {
        self.games
            .lock()
            .await
            .insert((league.to_string(), date.to_string()), games);
        self
    }

    /// Make one league's scoreboard fail for one day.
    pub async fn with_failing_board(self, league: &str, date: &str) -> Self {
        self.failing_boards
            .lock()
            .await
            .insert((league.to_string(), date.to_string()));
        self
    }

    /// Configure a team's schedule document.
    pub async fn with_schedule(self, team_id: &str, doc: serde_json::Value) -> Self {
        self.schedules.lock().await.insert(team_id.to_string(), doc);
        self
    }

    /// Make a team's schedule fetch fail.
    pub async fn with_failing_team(self, team_id: &str) -> Self {
        self.failing_teams.lock().await.insert(team_id.to_string());
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }
}

#[async_trait]
impl ScoresApi for MockScoresClient {
    async fn fetch_scoreboard(&self, league: &League, date: NaiveDate) -> Result<Vec<GameRecord>> {
        let key = (league.key.clone(), date_key(date));

        self.call_count.lock().await.fetch_scoreboard += 1;
        self.captured_requests
            .lock()
            .await
            .push(CapturedRequest::Scoreboard {
                league: key.0.clone(),
                date: key.1.clone(),
            });

        if self.failing_boards.lock().await.contains(&key) {
            return Err(ApiError::Network(format!("mock failure for {}", key.0)).into());
        }

        Ok(self
            .games
            .lock()
            .await
            .get(&key)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_team_schedule(&self, team: &TeamIdentity) -> Result<serde_json::Value> {
        self.call_count.lock().await.fetch_team_schedule += 1;
        self.captured_requests
            .lock()
            .await
            .push(CapturedRequest::TeamSchedule {
                team_id: team.team_id.clone(),
            });

        if self.failing_teams.lock().await.contains(&team.team_id) {
            return Err(ApiError::ServerError(format!("mock failure for team {}", team.team_id)).into());
        }

        self.schedules
            .lock()
            .await
            .get(&team.team_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("team {}", team.team_id)).into())
    }
}
