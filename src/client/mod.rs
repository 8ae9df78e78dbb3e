//! Data-source client
//!
//! The refresh code only sees the [`ScoresApi`] trait, so tests swap in
//! [`MockScoresClient`] instead of talking to the network.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::config::League;
use crate::error::Result;
use crate::models::{GameRecord, TeamIdentity};

pub mod espn;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod rate_limit;
pub mod scoreboard;

pub use espn::EspnClient;
#[cfg(test)]
pub use mock::MockScoresClient;
pub use rate_limit::Throttle;

/// Scores data source
#[async_trait]
pub trait ScoresApi: Send + Sync {
    /// Games of one league on one day, in data-source event order.
    ///
    /// A malformed payload is an error for the whole league.
    async fn fetch_scoreboard(&self, league: &League, date: NaiveDate) -> Result<Vec<GameRecord>>;

    /// One team's full schedule document, returned as received
    async fn fetch_team_schedule(&self, team: &TeamIdentity) -> Result<serde_json::Value>;
}
