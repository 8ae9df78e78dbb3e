//! ESPN site API client implementation

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use super::ScoresApi;
use super::scoreboard::Scoreboard;
use crate::config::League;
use crate::error::{ApiError, Result};
use crate::models::{GameRecord, TeamIdentity, date_key, date_label};

/// ESPN site API client
pub struct EspnClient {
    http: HttpClient,
    base_url: String,
}

impl EspnClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("scorecache/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {} {:?}", url, query);

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(path.to_string()).into()),
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

#[async_trait]
impl ScoresApi for EspnClient {
    async fn fetch_scoreboard(&self, league: &League, date: NaiveDate) -> Result<Vec<GameRecord>> {
        let path = format!("/{}/{}/scoreboard", league.sport, league.league_slug);
        let key = date_key(date);

        let board: Scoreboard = self.get_json(&path, &[("dates", key.as_str())]).await?;
        board.into_games(league, &date_label(date))
    }

    async fn fetch_team_schedule(&self, team: &TeamIdentity) -> Result<serde_json::Value> {
        let path = format!(
            "/{}/{}/teams/{}/schedule",
            team.sport, team.league_slug, team.team_id
        );
        self.get_json(&path, &[]).await
    }
}
