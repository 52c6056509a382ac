//! Game browsing endpoints. All read-only.

use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Game, GameFilters, GameListItem, SeasonInfo};

#[derive(Deserialize)]
struct GameCount {
    count: u64,
}

impl ApiClient {
    pub async fn list_games(&self, filters: &GameFilters) -> Result<Vec<GameListItem>, ApiError> {
        self.get_json("/games/", &filters.query_pairs()).await
    }

    pub async fn get_game(&self, id: i64) -> Result<Game, ApiError> {
        self.get_json(&format!("/games/{id}"), &[]).await
    }

    /// Free-text search by team name.
    pub async fn search_games(&self, query: &str) -> Result<Vec<GameListItem>, ApiError> {
        self.get_json("/games/search/", &[("q", query.to_string())])
            .await
    }

    /// Seasons with data, each with its game count.
    pub async fn seasons(&self) -> Result<Vec<SeasonInfo>, ApiError> {
        self.get_json("/games/seasons", &[]).await
    }

    pub async fn count_games(&self, filters: &GameFilters) -> Result<u64, ApiError> {
        let counted: GameCount = self
            .get_json("/games/count", &filters.count_query_pairs())
            .await?;
        Ok(counted.count)
    }

    /// All games for one team, optionally restricted to a season.
    pub async fn team_games(
        &self,
        team_id: i64,
        season: Option<i32>,
    ) -> Result<Vec<GameListItem>, ApiError> {
        let mut query = Vec::new();
        if let Some(season) = season {
            query.push(("season", season.to_string()));
        }
        self.get_json(&format!("/games/team/{team_id}"), &query).await
    }
}
