//! Game records and team sides

use serde::Serialize;

/// Color used when the data source gives a team none
pub const DEFAULT_COLOR: &str = "#333333";

/// Win-loss summary used when the data source gives a team none
pub const DEFAULT_RECORD: &str = "0-0";

/// One freshly fetched game, as written under a date key.
///
/// Records already on disk are never read back into this type; the store
/// keeps them as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    /// Event ID from the data source
    pub id: String,

    /// League label, e.g. "NFL"
    pub league: String,

    /// League code, e.g. "ncaa_fb"
    pub league_key: String,

    /// Sport path segment, e.g. "football"
    pub sport: String,

    /// League path segment, e.g. "college-football"
    pub league_slug: String,

    /// Human readable day, e.g. "Sunday, Oct 18"
    pub date_label: String,

    /// Short status text ("Final", "Q3", "7:30 PM", ...)
    pub status: String,

    /// Whether the data source marks the game as completed
    pub completed: bool,

    pub home: TeamSide,

    pub away: TeamSide,
}

impl GameRecord {
    /// Both team identities referenced by this game
    pub fn team_identities(&self) -> [TeamIdentity; 2] {
        [
            TeamIdentity::new(&self.home.id, &self.sport, &self.league_slug),
            TeamIdentity::new(&self.away.id, &self.sport, &self.league_slug),
        ]
    }
}

/// One side of a game, with display defaults already applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSide {
    pub id: String,
    pub name: String,
    pub score: String,
    pub logo: String,
    pub color: String,
    pub record: String,
}

impl Default for TeamSide {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            score: String::new(),
            logo: String::new(),
            color: DEFAULT_COLOR.to_string(),
            record: DEFAULT_RECORD.to_string(),
        }
    }
}

/// Team side as extracted from the data source, before defaults
#[derive(Debug, Clone, Default)]
pub struct RawTeamSide {
    pub id: String,
    pub name: String,
    pub score: Option<String>,
    pub logo: Option<String>,
    /// Hex color without or with a leading `#`
    pub color: Option<String>,
    /// First record summary, e.g. "10-4"
    pub record: Option<String>,
}

impl TeamSide {
    /// Apply the display defaults to a raw side.
    ///
    /// This is the only place the color/record/logo fallbacks are decided;
    /// every fetch path goes through it.
    pub fn normalize(raw: RawTeamSide) -> Self {
        let color = match non_empty(raw.color) {
            Some(c) if c.starts_with('#') => c,
            Some(c) => format!("#{}", c),
            None => DEFAULT_COLOR.to_string(),
        };

        Self {
            id: raw.id,
            name: raw.name,
            score: non_empty(raw.score).unwrap_or_else(|| "0".to_string()),
            logo: raw.logo.unwrap_or_default(),
            color,
            record: non_empty(raw.record).unwrap_or_else(|| DEFAULT_RECORD.to_string()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Key for fetching one team's schedule
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TeamIdentity {
    pub team_id: String,
    pub sport: String,
    pub league_slug: String,
}

impl TeamIdentity {
    pub fn new(team_id: &str, sport: &str, league_slug: &str) -> Self {
        Self {
            team_id: team_id.to_string(),
            sport: sport.to_string(),
            league_slug: league_slug.to_string(),
        }
    }
}

impl std::fmt::Display for TeamIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} team {}", self.sport, self.league_slug, self.team_id)
    }
}
