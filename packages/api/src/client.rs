//! # Shared HTTP transport
//!
//! [`ApiClient`] owns the pieces every wrapper module needs: the backend
//! base URL, a `reqwest` client, and the current bearer token. The token is
//! attached as an `Authorization` header here, once, rather than at each
//! call site; the session container is the only writer of the token slot.
//!
//! The base URL defaults to `http://localhost:8000` and can be overridden at
//! compile time with the `API_BASE_URL` environment variable or at runtime
//! via [`ApiClient::with_base_url`].

use std::sync::{Arc, RwLock};

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Shared REST transport. Cheap to clone; clones share the token slot.
#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Install or clear the bearer token used for subsequent requests.
    pub fn set_token(&self, token: Option<&str>) {
        *self.token.write().unwrap() = token.map(str::to_string);
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token (when present), send, and map non-success
    /// statuses to [`ApiError::Status`] with the parsed detail message.
    async fn execute(&self, builder: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let builder = match self.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "request rejected");
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.execute(self.http.get(self.url(path)).query(query)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.execute(self.http.post(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }

    /// POST with no request body, e.g. promote/demote and refresh-data.
    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.execute(self.http.post(self.url(path)).query(query)).await?;
        Self::decode(response).await
    }

    /// POST an `application/x-www-form-urlencoded` body (the login endpoint).
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self.execute(self.http.post(self.url(path)).form(fields)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .execute(self.http.patch(self.url(path)).json(body))
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.http.delete(self.url(path))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = ApiClient::with_base_url("https://tracker.example.com/");
        assert_eq!(client.base_url(), "https://tracker.example.com");
        assert_eq!(
            client.url("/games/seasons"),
            "https://tracker.example.com/games/seasons"
        );
    }

    #[test]
    fn test_token_slot_shared_between_clones() {
        let client = ApiClient::with_base_url("http://localhost:8000");
        let clone = client.clone();
        assert!(clone.token().is_none());

        client.set_token(Some("tok-1"));
        assert_eq!(clone.token().as_deref(), Some("tok-1"));

        clone.set_token(None);
        assert!(client.token().is_none());
    }
}
