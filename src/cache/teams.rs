//! Per-team schedule snapshots
//!
//! One JSON document per team identifier, overwritten on every refresh.

use indicatif::ProgressBar;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::client::{ScoresApi, Throttle};
use crate::error::{Error, Result};
use crate::models::{GameRecord, TeamIdentity};

/// Outcome of a batch of team refreshes
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TeamRefreshStats {
    pub refreshed: usize,
    pub failed: usize,
}

/// Every team referenced by `games`, each at most once
pub fn collect_team_identities<'a, I>(games: I) -> BTreeSet<TeamIdentity>
where
    I: IntoIterator<Item = &'a GameRecord>,
{
    games
        .into_iter()
        .flat_map(GameRecord::team_identities)
        .filter(|team| !team.team_id.is_empty())
        .collect()
}

/// Directory of `<teamId>.json` schedule documents
pub struct TeamHistoryCache {
    dir: PathBuf,
}

impl TeamHistoryCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding a team's schedule
    pub fn path_for(&self, team: &TeamIdentity) -> Result<PathBuf> {
        let id = &team.team_id;
        let safe = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !safe {
            return Err(Error::Other(format!("unusable team id '{}'", id)));
        }

        Ok(self.dir.join(format!("{}.json", id)))
    }

    /// Fetch one team's schedule and overwrite its file
    pub async fn refresh_team<C>(&self, client: &C, team: &TeamIdentity) -> Result<PathBuf>
    where
        C: ScoresApi + ?Sized,
    {
        let path = self.path_for(team)?;
        let doc = client.fetch_team_schedule(team).await?;

        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&path, serde_json::to_vec(&doc)?)?;

        log::debug!("Saved {} to {}", team, path.display());
        Ok(path)
    }

    /// Refresh every team in order, spacing fetches with `throttle`.
    ///
    /// A team that fails is logged and skipped.
    pub async fn refresh_all<C>(
        &self,
        client: &C,
        teams: &BTreeSet<TeamIdentity>,
        throttle: &Throttle,
        progress: &ProgressBar,
    ) -> TeamRefreshStats
    where
        C: ScoresApi + ?Sized,
    {
        let mut stats = TeamRefreshStats::default();

        for team in teams {
            throttle.wait().await;
            progress.set_message(team.to_string());

            match self.refresh_team(client, team).await {
                Ok(_) => stats.refreshed += 1,
                Err(e) => {
                    log::warn!("Failed to refresh {}: {}", team, e);
                    stats.failed += 1;
                }
            }

            progress.inc(1);
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockScoresClient;
    use crate::client::fixtures::{GameBuilder, nba, nfl};
    use serde_json::json;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_collect_dedups_shared_home_team() {
        let games = vec![
            GameBuilder::new("1").teams("13", "2").build(),
            GameBuilder::new("2").teams("13", "5").build(),
        ];

        let teams = collect_team_identities(&games);

        assert_eq!(teams.len(), 3);
        assert_eq!(
            teams
                .iter()
                .filter(|t| **t == TeamIdentity::new("13", "basketball", "nba"))
                .count(),
            1
        );
    }

    #[test]
    fn test_collect_keeps_same_id_in_different_leagues() {
        let games = vec![
            GameBuilder::new("1").teams("1", "2").league(nba()).build(),
            GameBuilder::new("2").teams("1", "2").league(nfl()).build(),
        ];

        assert_eq!(collect_team_identities(&games).len(), 4);
    }

    #[test]
    fn test_collect_skips_blank_ids() {
        let games = vec![GameBuilder::new("1").teams("", "2").build()];
        let teams = collect_team_identities(&games);

        assert_eq!(teams.len(), 1);
        assert_eq!(teams.iter().next().unwrap().team_id, "2");
    }

    #[test]
    fn test_path_for_rejects_traversal() {
        let cache = TeamHistoryCache::new("/data/teams");
        let bad = TeamIdentity::new("../scores", "basketball", "nba");
        assert!(cache.path_for(&bad).is_err());

        let good = TeamIdentity::new("13", "basketball", "nba");
        assert_eq!(
            cache.path_for(&good).unwrap(),
            PathBuf::from("/data/teams/13.json")
        );
    }

    #[tokio::test]
    async fn test_refresh_team_overwrites() {
        let dir = TempDir::new().unwrap();
        let cache = TeamHistoryCache::new(dir.path().join("teams"));
        let team = TeamIdentity::new("13", "basketball", "nba");

        let mock = MockScoresClient::new()
            .with_schedule("13", json!({"events": [1, 2, 3]}))
            .await;

        std::fs::create_dir_all(cache.dir()).unwrap();
        std::fs::write(cache.dir().join("13.json"), "old contents that are longer").unwrap();

        let path = cache.refresh_team(&mock, &team).await.unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(written, json!({"events": [1, 2, 3]}));
    }

    #[tokio::test]
    async fn test_refresh_all_continues_after_failure() {
        let dir = TempDir::new().unwrap();
        let cache = TeamHistoryCache::new(dir.path());

        let mock = MockScoresClient::new()
            .with_schedule("1", json!({"id": "1"}))
            .await
            .with_failing_team("2")
            .await
            .with_schedule("3", json!({"id": "3"}))
            .await;

        let teams: BTreeSet<_> = ["1", "2", "3"]
            .into_iter()
            .map(|id| TeamIdentity::new(id, "basketball", "nba"))
            .collect();

        let stats = cache
            .refresh_all(
                &mock,
                &teams,
                &Throttle::new(Duration::from_millis(1)),
                &ProgressBar::hidden(),
            )
            .await;

        assert_eq!(stats, TeamRefreshStats { refreshed: 2, failed: 1 });
        assert!(dir.path().join("1.json").exists());
        assert!(!dir.path().join("2.json").exists());
        assert!(dir.path().join("3.json").exists());
        assert_eq!(mock.call_counts().await.fetch_team_schedule, 3);
    }
}
