//! Configuration management for scorecache
//!
//! The config file is optional. Without one the built-in league list and a
//! three-days-each-way window are used.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Default data-source base URL
pub const DEFAULT_API_BASE: &str = "http://site.api.espn.com/apis/site/v2/sports";

/// Environment override for the data-source base URL (used by tests)
pub const API_HOST_ENV: &str = "SCORECACHE_API_HOST";

const SCORES_FILE: &str = "scores.json";
const TEAMS_DIR: &str = "teams";

/// One configured league
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    /// Short code stored on every game, e.g. "ncaa_mb"
    pub key: String,

    /// Display label, e.g. "Men's College Hoops"
    pub name: String,

    /// Sport path segment, e.g. "basketball"
    pub sport: String,

    /// League path segment, e.g. "mens-college-basketball"
    pub league_slug: String,
}

impl League {
    pub fn new(key: &str, name: &str, sport: &str, league_slug: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            sport: sport.to_string(),
            league_slug: league_slug.to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `scores.json` and `teams/`
    pub data_dir: PathBuf,

    /// Days before today covered by a full refresh
    pub days_back: u32,

    /// Days after today covered by a full refresh
    pub days_forward: u32,

    /// Minimum delay between consecutive team schedule fetches
    pub team_delay_ms: u64,

    /// Data-source base URL
    pub api_base: String,

    /// Leagues in declaration order; games are stored in this order
    pub leagues: Vec<League>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            days_back: 3,
            days_forward: 3,
            team_delay_ms: 100,
            api_base: DEFAULT_API_BASE.to_string(),
            leagues: default_leagues(),
        }
    }
}

fn default_leagues() -> Vec<League> {
    vec![
        League::new("nfl", "NFL", "football", "nfl"),
        League::new("ncaa_fb", "College Football", "football", "college-football"),
        League::new("nba", "NBA", "basketball", "nba"),
        League::new("wnba", "WNBA", "basketball", "wnba"),
        League::new(
            "ncaa_mb",
            "Men's College Hoops",
            "basketball",
            "mens-college-basketball",
        ),
        League::new(
            "ncaa_wb",
            "Women's College Hoops",
            "basketball",
            "womens-college-basketball",
        ),
    ]
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(ConfigError::Invalid(
            "Could not determine config directory".to_string(),
        ))?;

        Ok(base.join("scorecache").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default path.
    ///
    /// An explicit path must exist. A missing default file means built-in
    /// defaults.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let config = match path {
            Some(p) => Self::load_from(Path::new(p))?,
            None => match Self::default_path() {
                Ok(p) if p.exists() => Self::load_from(&p)?,
                _ => {
                    log::debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check invariants the refresh code relies on
    pub fn validate(&self) -> Result<()> {
        if self.leagues.is_empty() {
            return Err(ConfigError::Invalid("no leagues configured".to_string()).into());
        }

        let mut seen = HashSet::new();
        for league in &self.leagues {
            if !seen.insert(league.key.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate league key '{}'",
                    league.key
                ))
                .into());
            }
        }

        if self.team_delay_ms == 0 {
            return Err(
                ConfigError::Invalid("team_delay_ms must be greater than 0".to_string()).into(),
            );
        }

        Ok(())
    }

    /// Data-source base URL, honouring the environment override
    pub fn resolved_api_base(&self) -> String {
        std::env::var(API_HOST_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| self.api_base.clone())
    }

    /// Path of the persisted score store
    pub fn scores_path(&self) -> PathBuf {
        self.data_dir.join(SCORES_FILE)
    }

    /// Directory of per-team schedule documents
    pub fn teams_dir(&self) -> PathBuf {
        self.data_dir.join(TEAMS_DIR)
    }

    pub fn team_delay(&self) -> Duration {
        Duration::from_millis(self.team_delay_ms)
    }
}
