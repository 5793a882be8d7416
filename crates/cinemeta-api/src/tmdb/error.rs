//! `TmdbError` - error type for all client operations.

use std::time::Duration;

use reqwest::StatusCode;

use super::types::TmdbStatus;

/// Result alias used across the TMDB client.
pub type Result<T> = std::result::Result<T, TmdbError>;

/// Errors returned by `TmdbClient`.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum TmdbError {
    /// Request parameters failed validation. No request was sent.
    #[error("invalid request parameters: {0}")]
    InvalidParams(String),

    /// Client could not be configured.
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// HTTP 429. The caller decides whether and when to retry.
    #[error("TMDB API rate limit exceeded (HTTP 429){}", fmt_retry_after(.retry_after.as_ref()))]
    Throttled {
        /// Delay suggested by the `Retry-After` header, if present and valid.
        retry_after: Option<Duration>,
        /// Status object from the response body, if any.
        tmdb_status: Option<TmdbStatus>,
    },

    /// HTTP 4xx other than 429.
    #[error("TMDB API client error (HTTP {status}): {}", fmt_detail(.tmdb_status.as_ref(), .body))]
    Client {
        /// HTTP status code.
        status: StatusCode,
        /// Status object from the response body, if any.
        tmdb_status: Option<TmdbStatus>,
        /// Raw response body.
        body: String,
    },

    /// HTTP 5xx.
    #[error("TMDB API server error (HTTP {status}): {}", fmt_detail(.tmdb_status.as_ref(), .body))]
    Server {
        /// HTTP status code.
        status: StatusCode,
        /// Status object from the response body, if any.
        tmdb_status: Option<TmdbStatus>,
        /// Raw response body.
        body: String,
    },

    /// Status outside the 2xx/4xx/5xx ranges (e.g. an unfollowed redirect).
    #[error("unexpected HTTP status from TMDB API: {status}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: StatusCode,
    },

    /// Transport failure (connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint path could not be joined onto the base URL.
    #[error("failed to build request URL: {0}")]
    Url(#[from] url::ParseError),

    /// Success body did not match the expected shape.
    #[error("failed to decode JSON response: {path}")]
    Decode {
        /// Endpoint path.
        path: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

fn fmt_retry_after(retry_after: Option<&Duration>) -> String {
    retry_after.map_or_else(String::new, |d| format!(", retry after {}s", d.as_secs()))
}

fn fmt_detail(tmdb_status: Option<&TmdbStatus>, body: &str) -> String {
    tmdb_status.map_or_else(
        || String::from(body),
        |s| format!("code={}, message={}", s.status_code, s.status_message),
    )
}

impl TmdbError {
    /// Returns `true` for HTTP 429.
    #[must_use]
    pub const fn is_throttled(&self) -> bool {
        matches!(self, Self::Throttled { .. })
    }

    /// Retry hint carried by a throttled response.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Throttled { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Throttled { .. } => Some(StatusCode::TOO_MANY_REQUESTS),
            Self::Client { status, .. }
            | Self::Server { status, .. }
            | Self::UnexpectedStatus { status } => Some(*status),
            _ => None,
        }
    }

    /// TMDB status object from the error body, if one was sent.
    #[must_use]
    pub const fn tmdb_status(&self) -> Option<&TmdbStatus> {
        match self {
            Self::Throttled { tmdb_status, .. }
            | Self::Client { tmdb_status, .. }
            | Self::Server { tmdb_status, .. } => tmdb_status.as_ref(),
            _ => None,
        }
    }

    /// Returns `true` for HTTP 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Returns `true` for HTTP 401.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// Shorthand for an `InvalidParams` error.
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParams(message.into())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn invalid_key_status() -> TmdbStatus {
        TmdbStatus {
            status_code: 7,
            status_message: String::from("Invalid API key: You must be granted a valid key."),
            success: false,
        }
    }

    #[test]
    fn test_throttled_display_includes_retry_after() {
        // Arrange
        let err = TmdbError::Throttled {
            retry_after: Some(Duration::from_secs(10)),
            tmdb_status: None,
        };

        // Act
        let message = err.to_string();

        // Assert
        assert!(message.contains("HTTP 429"));
        assert!(message.contains("retry after 10s"));
    }

    #[test]
    fn test_throttled_display_without_hint() {
        // Arrange
        let err = TmdbError::Throttled {
            retry_after: None,
            tmdb_status: None,
        };

        // Act & Assert
        assert_eq!(err.to_string(), "TMDB API rate limit exceeded (HTTP 429)");
    }

    #[test]
    fn test_client_error_display_prefers_tmdb_status() {
        // Arrange
        let err = TmdbError::Client {
            status: StatusCode::UNAUTHORIZED,
            tmdb_status: Some(invalid_key_status()),
            body: String::from("{}"),
        };

        // Act
        let message = err.to_string();

        // Assert
        assert!(message.contains("401"));
        assert!(message.contains("code=7"));
        assert!(message.contains("Invalid API key"));
    }

    #[test]
    fn test_server_error_display_falls_back_to_body() {
        // Arrange
        let err = TmdbError::Server {
            status: StatusCode::BAD_GATEWAY,
            tmdb_status: None,
            body: String::from("<html>bad gateway</html>"),
        };

        // Act & Assert
        assert!(err.to_string().contains("<html>bad gateway</html>"));
    }

    #[test]
    fn test_predicates() {
        // Arrange
        let not_found = TmdbError::Client {
            status: StatusCode::NOT_FOUND,
            tmdb_status: None,
            body: String::new(),
        };
        let unauthorized = TmdbError::Client {
            status: StatusCode::UNAUTHORIZED,
            tmdb_status: Some(invalid_key_status()),
            body: String::new(),
        };
        let throttled = TmdbError::Throttled {
            retry_after: Some(Duration::from_secs(3)),
            tmdb_status: None,
        };

        // Act & Assert
        assert!(not_found.is_not_found());
        assert!(!not_found.is_unauthorized());
        assert!(unauthorized.is_unauthorized());
        assert_eq!(unauthorized.tmdb_status().unwrap().status_code, 7);
        assert!(throttled.is_throttled());
        assert_eq!(throttled.retry_after(), Some(Duration::from_secs(3)));
        assert_eq!(throttled.status(), Some(StatusCode::TOO_MANY_REQUESTS));
        assert_eq!(TmdbError::invalid("x").status(), None);
    }
}
