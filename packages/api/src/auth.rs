//! Authentication endpoints.

use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Token, User};

impl ApiClient {
    /// Create a new account. Fails with a 400 carrying a detail message for
    /// duplicate emails.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<User, ApiError> {
        self.post_json(
            "/auth/register",
            &json!({
                "email": email,
                "password": password,
                "full_name": full_name,
            }),
        )
        .await
    }

    /// Exchange credentials for a bearer token. The backend expects an
    /// OAuth2 password form with `username`/`password` fields.
    pub async fn login(&self, email: &str, password: &str) -> Result<Token, ApiError> {
        self.post_form("/auth/login", &[("username", email), ("password", password)])
            .await
    }

    /// Fetch the user the current bearer token belongs to.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get_json("/auth/me", &[]).await
    }
}
