use reqwest::Client;
use tracing::debug;

use crate::core::stats_header_map;
use crate::nba::types::StatsEnvelope;
use crate::{PlayerId, Result, Season};


/// NBA league identifier on every stats endpoint.
pub const NBA_LEAGUE_ID: &str = "00";

/// Thin client over the stats.nba.com endpoints this tool reads.
///
/// Each call returns the raw result-set envelope; turning rows into domain
/// records happens in [`crate::nba::player`].
#[derive(Debug, Clone)]
pub struct StatsClient {
    http: Client,
    base_url: String,
}

impl StatsClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .default_headers(stats_header_map())
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full player directory, retired players included.
    pub async fn get_all_players(&self, season: Season) -> Result<StatsEnvelope> {
        let params = [
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
            ("Season", season.to_string()),
            ("IsOnlyCurrentSeason", "0".to_string()),
        ];
        self.get_endpoint("commonallplayers", &params).await
    }

    /// Roster status and biographical fields for one player.
    pub async fn get_player_info(&self, player_id: PlayerId) -> Result<StatsEnvelope> {
        let params = [
            ("PlayerID", player_id.to_string()),
            ("LeagueID", String::new()),
        ];
        self.get_endpoint("commonplayerinfo", &params).await
    }

    /// Season and career totals; `PerMode=Totals` so averages are derived here.
    pub async fn get_career_stats(&self, player_id: PlayerId) -> Result<StatsEnvelope> {
        let params = [
            ("PlayerID", player_id.to_string()),
            ("PerMode", "Totals".to_string()),
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
        ];
        self.get_endpoint("playercareerstats", &params).await
    }

    /// Regular-season game log for one season.
    pub async fn get_game_log(&self, player_id: PlayerId, season: Season) -> Result<StatsEnvelope> {
        let params = [
            ("PlayerID", player_id.to_string()),
            ("Season", season.to_string()),
            ("SeasonType", "Regular Season".to_string()),
        ];
        self.get_endpoint("playergamelog", &params).await
    }

    async fn get_endpoint(&self, endpoint: &str, params: &[(&str, String)]) -> Result<StatsEnvelope> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, ?params, "requesting stats endpoint");

        let body = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let envelope: StatsEnvelope = serde_json::from_str(&body)?;
        debug!(
            endpoint,
            result_sets = envelope.result_sets().len(),
            "stats endpoint responded"
        );
        Ok(envelope)
    }
}
