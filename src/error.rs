use http::StatusCode;
use thiserror::Error;

use crate::types::{ApiErrorBody, RawResponse};

/// pixiv SDK error types
#[derive(Debug, Error)]
pub enum PixivError {
    /// Network-level failure before a response was received.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A local precondition failed; the request never reached the network.
    #[error("Invalid client state: {0}")]
    InvalidState(String),

    /// HTTP 401
    #[error("Authentication failed (HTTP 401): {}", .0.summary())]
    AuthenticationFailed(Box<RawResponse>),

    /// HTTP 400
    #[error("Malformed request (HTTP 400): {}", .0.summary())]
    MalformedRequest(Box<RawResponse>),

    /// Any other non-2xx status.
    #[error("HTTP request failed with status {status}: {}", .response.summary())]
    HttpFailure {
        status: StatusCode,
        response: Box<RawResponse>,
    },

    /// The final page was already reached.
    #[error("No more results: the current page has no next_url")]
    NoMoreResults,

    /// The body is not valid JSON or does not match the expected shape.
    #[error("Failed to parse response body: {source}")]
    ParseFailure {
        #[source]
        source: serde_json::Error,
        response: Option<Box<RawResponse>>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),
}

impl PixivError {
    /// Pass a 2xx response through, or map it to its typed failure.
    pub fn check(response: RawResponse) -> Result<RawResponse, Self> {
        let status = response.status;
        if status.is_success() {
            return Ok(response);
        }

        let error = match status {
            StatusCode::UNAUTHORIZED => Self::AuthenticationFailed(Box::new(response)),
            StatusCode::BAD_REQUEST => Self::MalformedRequest(Box::new(response)),
            _ => Self::HttpFailure {
                status,
                response: Box::new(response),
            },
        };
        Err(error)
    }

    /// The raw HTTP response this failure originated from, if any.
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Self::AuthenticationFailed(response) | Self::MalformedRequest(response) => {
                Some(response)
            }
            Self::HttpFailure { response, .. } => Some(response),
            Self::ParseFailure { response, .. } => response.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of the originating response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(e) => e.status(),
            _ => self.response().map(|r| r.status),
        }
    }

    /// Decode the upstream `{"error": {...}}` payload, if present.
    pub fn error_body(&self) -> Option<ApiErrorBody> {
        self.response().and_then(RawResponse::error_body)
    }

    pub(crate) fn parse(source: serde_json::Error, response: Option<RawResponse>) -> Self {
        Self::ParseFailure {
            source,
            response: response.map(Box::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderMap;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse::new(
            StatusCode::from_u16(status).unwrap(),
            HeaderMap::new(),
            body.to_string(),
        )
    }

    #[test]
    fn test_success_is_not_an_error() {
        assert!(PixivError::check(raw(200, "{}")).is_ok());
        assert_eq!(PixivError::check(raw(204, "")).unwrap().status, StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_classification() {
        assert!(matches!(
            PixivError::check(raw(401, "")),
            Err(PixivError::AuthenticationFailed(_))
        ));
        assert!(matches!(
            PixivError::check(raw(400, "")),
            Err(PixivError::MalformedRequest(_))
        ));
        assert!(matches!(
            PixivError::check(raw(500, "")),
            Err(PixivError::HttpFailure { status, .. }) if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
        assert!(matches!(
            PixivError::check(raw(404, "")),
            Err(PixivError::HttpFailure { status, .. }) if status == StatusCode::NOT_FOUND
        ));
    }

    #[test]
    fn test_failure_keeps_raw_response() {
        let body = r#"{"error":{"user_message":"","message":"Rate Limit","reason":"","user_message_details":{}}}"#;
        let error = PixivError::check(raw(403, body)).unwrap_err();

        assert_eq!(error.status(), Some(StatusCode::FORBIDDEN));
        assert_eq!(error.response().unwrap().body, body);
        assert_eq!(error.error_body().unwrap().message, "Rate Limit");
    }

    #[test]
    fn test_local_errors_carry_no_response() {
        assert!(PixivError::NoMoreResults.response().is_none());
        assert!(PixivError::InvalidState("x".into()).status().is_none());
    }
}
