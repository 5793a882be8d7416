//! HTTP response classification.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};

use super::error::TmdbError;
use super::types::TmdbStatus;

/// Outcome category of an HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    /// 2xx.
    Success,
    /// 429.
    Throttled,
    /// 4xx other than 429.
    ClientError,
    /// 5xx.
    ServerError,
    /// Anything else (1xx, 3xx).
    Unexpected,
}

/// Classifies a status code.
#[must_use]
pub fn classify(status: StatusCode) -> ResponseClass {
    if status.is_success() {
        ResponseClass::Success
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        ResponseClass::Throttled
    } else if status.is_client_error() {
        ResponseClass::ClientError
    } else if status.is_server_error() {
        ResponseClass::ServerError
    } else {
        ResponseClass::Unexpected
    }
}

/// Reads `Retry-After` as delta-seconds or an HTTP-date relative to `now`.
///
/// Dates in the past yield zero. Missing or malformed values yield `None`.
#[must_use]
pub fn parse_retry_after(headers: &HeaderMap, now: DateTime<Utc>) -> Option<Duration> {
    let raw = headers.get(RETRY_AFTER)?.to_str().ok()?.trim();

    if let Ok(secs) = raw.parse::<u64>() {
        return Some(Duration::from_secs(secs));
    }

    let at = DateTime::parse_from_rfc2822(raw).ok()?.with_timezone(&Utc);
    Some((at - now).to_std().unwrap_or(Duration::ZERO))
}

/// Parses a TMDB status object from an error body.
pub(crate) fn parse_status(body: &str) -> Option<TmdbStatus> {
    serde_json::from_str::<TmdbStatus>(body).ok()
}

/// Builds the error for a non-success response.
pub(crate) fn error_for(
    class: ResponseClass,
    status: StatusCode,
    headers: &HeaderMap,
    body: String,
) -> TmdbError {
    let tmdb_status = parse_status(&body);
    match class {
        ResponseClass::Throttled => TmdbError::Throttled {
            retry_after: parse_retry_after(headers, Utc::now()),
            tmdb_status,
        },
        ResponseClass::ClientError => TmdbError::Client {
            status,
            tmdb_status,
            body,
        },
        ResponseClass::ServerError => TmdbError::Server {
            status,
            tmdb_status,
            body,
        },
        ResponseClass::Success | ResponseClass::Unexpected => {
            TmdbError::UnexpectedStatus { status }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::TimeZone;
    use reqwest::header::HeaderValue;

    use super::*;

    fn headers_with_retry_after(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_str(value).unwrap());
        headers
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 10, 21, 7, 27, 30).unwrap()
    }

    #[test]
    fn test_classify_status_ranges() {
        // Arrange & Act & Assert
        assert_eq!(classify(StatusCode::OK), ResponseClass::Success);
        assert_eq!(classify(StatusCode::CREATED), ResponseClass::Success);
        assert_eq!(
            classify(StatusCode::TOO_MANY_REQUESTS),
            ResponseClass::Throttled
        );
        assert_eq!(classify(StatusCode::NOT_FOUND), ResponseClass::ClientError);
        assert_eq!(
            classify(StatusCode::UNAUTHORIZED),
            ResponseClass::ClientError
        );
        assert_eq!(
            classify(StatusCode::SERVICE_UNAVAILABLE),
            ResponseClass::ServerError
        );
        assert_eq!(
            classify(StatusCode::MOVED_PERMANENTLY),
            ResponseClass::Unexpected
        );
    }

    #[test]
    fn test_retry_after_seconds() {
        // Arrange
        let headers = headers_with_retry_after("10");

        // Act
        let retry_after = parse_retry_after(&headers, fixed_now());

        // Assert
        assert_eq!(retry_after, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_retry_after_http_date() {
        // Arrange
        let headers = headers_with_retry_after("Wed, 21 Oct 2015 07:28:00 GMT");

        // Act
        let retry_after = parse_retry_after(&headers, fixed_now());

        // Assert
        assert_eq!(retry_after, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_retry_after_past_date_is_zero() {
        // Arrange
        let headers = headers_with_retry_after("Wed, 21 Oct 2015 07:00:00 GMT");

        // Act
        let retry_after = parse_retry_after(&headers, fixed_now());

        // Assert
        assert_eq!(retry_after, Some(Duration::ZERO));
    }

    #[test]
    fn test_retry_after_missing_or_malformed() {
        // Arrange
        let malformed = headers_with_retry_after("soon");

        // Act & Assert
        assert_eq!(parse_retry_after(&HeaderMap::new(), fixed_now()), None);
        assert_eq!(parse_retry_after(&malformed, fixed_now()), None);
    }

    #[test]
    fn test_error_for_keeps_raw_body_when_not_status_object() {
        // Arrange
        let body = String::from("<html>Bad Gateway</html>");

        // Act
        let err = error_for(
            ResponseClass::ServerError,
            StatusCode::BAD_GATEWAY,
            &HeaderMap::new(),
            body,
        );

        // Assert
        assert!(matches!(
            err,
            TmdbError::Server { tmdb_status: None, ref body, .. } if body.contains("Bad Gateway")
        ));
    }

    #[test]
    fn test_error_for_parses_status_object() {
        // Arrange
        let body = String::from(
            r#"{"status_code":34,"status_message":"The resource you requested could not be found.","success":false}"#,
        );

        // Act
        let err = error_for(
            ResponseClass::ClientError,
            StatusCode::NOT_FOUND,
            &HeaderMap::new(),
            body,
        );

        // Assert
        assert!(err.is_not_found());
        assert_eq!(err.tmdb_status().unwrap().status_code, 34);
    }
}
