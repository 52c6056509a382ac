//! Team reference data, used for the game filters.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Team, TeamFilters};

impl ApiClient {
    pub async fn list_teams(&self, filters: &TeamFilters) -> Result<Vec<Team>, ApiError> {
        self.get_json("/teams/", &filters.query_pairs()).await
    }
}
