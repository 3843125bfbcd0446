use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Person with ID {id} not found")]
    NotFound { id: i64 },
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// True when the request never reached the server (refused connection,
    /// DNS failure, timeout). Used to swap in a troubleshooting hint for the
    /// connectivity check.
    pub fn is_network(&self) -> bool {
        match self {
            ApiError::Transport(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }
}

/// Error payload some endpoints return on rejection
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Build a `Status` error from a non-2xx response body, with a fixed
/// precedence: JSON `{"error": ...}` field, then the raw body text, then the
/// canonical reason for the status code.
pub(crate) fn status_error(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .or_else(|| {
            let text = body.trim();
            (!text.is_empty()).then(|| text.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_field_takes_precedence() {
        let err = status_error(
            StatusCode::CONFLICT,
            r#"{"error": "Email already exists", "detail": "ignored"}"#,
        );
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "Email already exists");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[test]
    fn test_raw_body_used_when_not_json() {
        let err = status_error(StatusCode::BAD_REQUEST, "age must be positive");
        assert_eq!(err.to_string(), "HTTP 400: age must be positive");
    }

    #[test]
    fn test_json_body_without_error_field_falls_back_to_raw_text() {
        let err = status_error(StatusCode::BAD_REQUEST, r#"{"detail": "nope"}"#);
        assert_eq!(err.to_string(), r#"HTTP 400: {"detail": "nope"}"#);
    }

    #[test]
    fn test_empty_body_falls_back_to_status_reason() {
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, "   ");
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn test_status_errors_are_never_empty_and_carry_the_status() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::FORBIDDEN,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let message = status_error(status, "").to_string();
            assert!(!message.is_empty());
            assert!(message.contains(&status.as_u16().to_string()));
        }
    }

    #[test]
    fn test_not_found_is_not_classified_as_network_failure() {
        assert!(!ApiError::NotFound { id: 7 }.is_network());
        assert!(!ApiError::Status {
            status: 500,
            message: "boom".to_string()
        }
        .is_network());
    }
}
