//! Client error types.

use thiserror::Error;

use crate::types::StatsResponse;

/// Client error type.
///
/// `NoToken` and `InvalidStats` are the two domain errors. Everything else
/// is a transport or parse failure surfaced as-is from the underlying call.
#[derive(Debug, Error)]
pub enum Error {
    /// A stats post was attempted without a configured token.
    #[error("The token is missing.")]
    NoToken,

    /// The service answered a stats post with a truthy `error` field.
    #[error("Failed to post stats! Result: {response}")]
    InvalidStats {
        /// Raw response body returned by the service.
        response: StatsResponse,
    },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The client was closed and its transport released.
    #[error("Client is closed")]
    Closed,
}

impl Error {
    /// Check if this is a missing-token error.
    pub fn is_no_token(&self) -> bool {
        matches!(self, Error::NoToken)
    }

    /// Check if this is a transport-level failure (connection, timeout, bad body).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Json(_) | Error::InvalidUrl(_)
        )
    }

    /// The raw service response, if this is a rejected stats post.
    pub fn invalid_stats_response(&self) -> Option<&StatsResponse> {
        match self {
            Error::InvalidStats { response } => Some(response),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_token_message() {
        assert_eq!(Error::NoToken.to_string(), "The token is missing.");
        assert!(Error::NoToken.is_no_token());
        assert!(!Error::NoToken.is_transport());
    }

    #[test]
    fn test_invalid_stats_carries_response() {
        let body = json!({"error": true, "message": "bad"});
        let err = Error::InvalidStats {
            response: body.clone(),
        };

        assert_eq!(err.invalid_stats_response(), Some(&body));
        assert!(err.to_string().contains("\"message\":\"bad\""));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_json_error_is_transport() {
        let parse_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = Error::from(parse_err);

        assert!(err.is_transport());
        assert!(err.invalid_stats_response().is_none());
    }
}
