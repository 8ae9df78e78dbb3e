//! Test fixtures and builders for game records
//!
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use crate::config::League;
use crate::models::{GameRecord, RawTeamSide, TeamSide};

/// League used by most tests
pub fn nba() -> League {
    League::new("nba", "NBA", "basketball", "nba")
}

pub fn nfl() -> League {
    League::new("nfl", "NFL", "football", "nfl")
}

// ============================================================================
// GameBuilder
// ============================================================================

/// Builder for creating test GameRecord instances.
///
/// # Example
/// ```ignore
/// let game = GameBuilder::new("401").status("Q3").teams("18", "2").build();
/// ```
#[derive(Debug, Clone)]
pub struct GameBuilder {
    id: String,
    league: League,
    status: String,
    completed: bool,
    home_id: String,
    away_id: String,
    home_score: String,
    away_score: String,
}

impl GameBuilder {
    /// Create a new scheduled game with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            league: nba(),
            status: "7:30 PM".to_string(),
            completed: false,
            home_id: "1".to_string(),
            away_id: "2".to_string(),
            home_score: "0".to_string(),
            away_score: "0".to_string(),
        }
    }

    pub fn league(mut self, league: League) -> Self {
        self.league = league;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Mark as final.
    pub fn final_score(mut self, home: &str, away: &str) -> Self {
        self.status = "Final".to_string();
        self.completed = true;
        self.home_score = home.to_string();
        self.away_score = away.to_string();
        self
    }

    pub fn score(mut self, home: &str, away: &str) -> Self {
        self.home_score = home.to_string();
        self.away_score = away.to_string();
        self
    }

    /// Set home and away team IDs.
    pub fn teams(mut self, home: &str, away: &str) -> Self {
        self.home_id = home.to_string();
        self.away_id = away.to_string();
        self
    }

    /// Build the GameRecord.
    pub fn build(self) -> GameRecord {
        let side = |id: String, score: String| {
            TeamSide::normalize(RawTeamSide {
                name: format!("Team {}", id),
                id,
                score: Some(score),
                ..Default::default()
            })
        };

        GameRecord {
            id: self.id,
            league: self.league.name.clone(),
            league_key: self.league.key.clone(),
            sport: self.league.sport.clone(),
            league_slug: self.league.league_slug.clone(),
            date_label: "Sunday, Oct 18".to_string(),
            status: self.status,
            completed: self.completed,
            home: side(self.home_id, self.home_score),
            away: side(self.away_id, self.away_score),
        }
    }
}
