//! Scoreboard response schema and projection into game records
//!
//! Only the fields the store needs are modelled; everything else in the
//! payload is ignored.

use serde::Deserialize;

use crate::config::League;
use crate::error::{ApiError, Result};
use crate::models::{GameRecord, RawTeamSide, TeamSide};

/// Scoreboard for one league and one day
#[derive(Debug, Clone, Deserialize)]
pub struct Scoreboard {
    #[serde(default)]
    pub events: Vec<Event>,
}

/// One event (game)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,

    #[serde(default)]
    pub status: Option<Status>,

    #[serde(default)]
    pub competitions: Vec<Competition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Competition {
    #[serde(default)]
    pub status: Option<Status>,

    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Status {
    #[serde(rename = "type", default)]
    pub kind: StatusType,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusType {
    /// Short status text, e.g. "Final", "Q3 5:12", "10/18 - 7:30 PM EDT"
    #[serde(default)]
    pub short_detail: String,

    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    /// "home" or "away"
    #[serde(default)]
    pub home_away: Option<String>,

    pub team: Team,

    #[serde(default, deserialize_with = "deserialize_score")]
    pub score: Option<String>,

    #[serde(default)]
    pub records: Vec<RecordSummary>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,

    #[serde(default)]
    pub short_display_name: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub logo: Option<String>,

    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordSummary {
    #[serde(default)]
    pub summary: Option<String>,
}

/// Scores arrive as strings on the scoreboard but as numbers elsewhere
fn deserialize_score<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::de::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ScoreValue {
        Integer(i64),
        Float(f64),
        String(String),
    }

    Ok(match Option::<ScoreValue>::deserialize(deserializer)? {
        Some(ScoreValue::Integer(i)) => Some(i.to_string()),
        Some(ScoreValue::Float(f)) => Some(f.to_string()),
        Some(ScoreValue::String(s)) => Some(s),
        None => None,
    })
}

impl Scoreboard {
    /// Project every event into a game record, in event order.
    ///
    /// A single malformed event fails the whole scoreboard.
    pub fn into_games(self, league: &League, date_label: &str) -> Result<Vec<GameRecord>> {
        self.events
            .into_iter()
            .map(|event| event.into_game(league, date_label))
            .collect()
    }
}

impl Event {
    /// Status text, preferring the event-level status
    pub fn status_type(&self) -> StatusType {
        self.status
            .as_ref()
            .or_else(|| self.competitions.first().and_then(|c| c.status.as_ref()))
            .map(|s| s.kind.clone())
            .unwrap_or_default()
    }

    pub fn into_game(self, league: &League, date_label: &str) -> Result<GameRecord> {
        let status = self.status_type();

        let competition = self.competitions.into_iter().next().ok_or_else(|| {
            ApiError::InvalidResponse(format!("event {} has no competitions", self.id))
        })?;

        let (home, away) = split_sides(competition.competitors).ok_or_else(|| {
            ApiError::InvalidResponse(format!("event {} has fewer than two competitors", self.id))
        })?;

        Ok(GameRecord {
            id: self.id,
            league: league.name.clone(),
            league_key: league.key.clone(),
            sport: league.sport.clone(),
            league_slug: league.league_slug.clone(),
            date_label: date_label.to_string(),
            status: status.short_detail,
            completed: status.completed,
            home: TeamSide::normalize(home.into_raw()),
            away: TeamSide::normalize(away.into_raw()),
        })
    }
}

/// Pick home and away by the `homeAway` marker, else by position (home first)
fn split_sides(competitors: Vec<Competitor>) -> Option<(Competitor, Competitor)> {
    if competitors.len() < 2 {
        return None;
    }

    let marked = |side: &str| {
        competitors
            .iter()
            .position(|c| c.home_away.as_deref() == Some(side))
    };

    let (home_idx, away_idx) = match (marked("home"), marked("away")) {
        (Some(h), Some(a)) if h != a => (h, a),
        _ => (0, 1),
    };

    let mut slots: Vec<Option<Competitor>> = competitors.into_iter().map(Some).collect();
    let home = slots[home_idx].take()?;
    let away = slots[away_idx].take()?;
    Some((home, away))
}

impl Competitor {
    fn into_raw(self) -> RawTeamSide {
        let name = self
            .team
            .short_display_name
            .or(self.team.display_name)
            .unwrap_or_default();

        RawTeamSide {
            id: self.team.id,
            name,
            score: self.score,
            logo: self.team.logo,
            color: self.team.color,
            record: self.records.into_iter().next().and_then(|r| r.summary),
        }
    }
}
