use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the REST client, grouped by origin.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connection, CORS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status. `detail` carries the
    /// backend's `{"detail": "..."}` message when one was present.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// The response body did not match the declared type.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error, extracting the backend's detail message from
    /// the response body when it is a plain string.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("detail").cloned())
            .and_then(|d| d.as_str().map(str::to_string));
        ApiError::Status { status, detail }
    }

    /// The display policy for page-level alerts: prefer the server-provided
    /// detail, fall back to a generic message.
    pub fn detail_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }

    /// True for 401 responses, which force a logout on background calls.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_extracted_from_body() {
        let err = ApiError::from_status(400, r#"{"detail":"Email already registered"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                detail: Some("Email already registered".to_string()),
            }
        );
        assert_eq!(err.detail_or("fallback"), "Email already registered");
    }

    #[test]
    fn test_non_string_detail_falls_back() {
        // FastAPI validation errors carry a list under "detail".
        let err = ApiError::from_status(422, r#"{"detail":[{"msg":"field required"}]}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 422,
                detail: None,
            }
        );
        assert_eq!(err.detail_or("Failed to save"), "Failed to save");
    }

    #[test]
    fn test_unparseable_body_falls_back() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(
            err,
            ApiError::Status {
                status: 502,
                detail: None,
            }
        );
    }

    #[test]
    fn test_network_errors_use_fallback_message() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.detail_or("Failed to load games"), "Failed to load games");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(ApiError::from_status(401, r#"{"detail":"Could not validate credentials"}"#)
            .is_unauthorized());
        assert!(!ApiError::from_status(403, "{}").is_unauthorized());
    }
}
