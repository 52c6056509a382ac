//! Admin-only endpoints: user role management and the data-import trigger.
//! The server enforces the admin requirement; these are plain passthroughs.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{RefreshResult, User};

impl ApiClient {
    /// Trigger an import of one season's games from the external data
    /// provider. Long-running on the server side.
    pub async fn refresh_data(&self, season: i32) -> Result<RefreshResult, ApiError> {
        self.post_empty("/admin/refresh-data", &[("season", season.to_string())])
            .await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/admin/users", &[]).await
    }

    /// Grant the admin flag; returns the updated user record.
    pub async fn promote_user(&self, user_id: i64) -> Result<User, ApiError> {
        self.post_empty(&format!("/admin/users/{user_id}/promote"), &[])
            .await
    }

    /// Revoke the admin flag; returns the updated user record.
    pub async fn demote_user(&self, user_id: i64) -> Result<User, ApiError> {
        self.post_empty(&format!("/admin/users/{user_id}/demote"), &[])
            .await
    }
}
