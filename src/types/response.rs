use http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

const SUMMARY_MAX_CHARS: usize = 200;

/// JSON object returned by every endpoint.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// A fully read HTTP response, kept for diagnostics.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: String) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Read status, headers and body out of a [`reqwest::Response`].
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(Self::new(status, headers, body))
    }

    /// Parse the body as arbitrary JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Decode the upstream error envelope.
    pub fn error_body(&self) -> Option<ApiErrorBody> {
        serde_json::from_str::<ApiErrorEnvelope>(&self.body)
            .ok()
            .map(|envelope| envelope.error)
    }

    /// Short one-line description used in error messages.
    pub(crate) fn summary(&self) -> String {
        if let Some(error) = self.error_body() {
            let text = [&error.user_message, &error.message, &error.reason]
                .into_iter()
                .find(|s| !s.is_empty());
            if let Some(text) = text {
                return text.clone();
            }
        }

        let mut body: String = self.body.chars().take(SUMMARY_MAX_CHARS).collect();
        if self.body.chars().count() > SUMMARY_MAX_CHARS {
            body.push_str("...");
        }
        body
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

/// Error payload returned by the API alongside 4xx statuses.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub user_message: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub user_message_details: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(body: &str) -> RawResponse {
        RawResponse::new(StatusCode::BAD_REQUEST, HeaderMap::new(), body.to_string())
    }

    #[test]
    fn test_error_body_parsing() {
        let response = raw(
            r#"{"error":{"user_message":"Invalid illust id","message":"","reason":"","user_message_details":{}}}"#,
        );
        let error = response.error_body().unwrap();
        assert_eq!(error.user_message, "Invalid illust id");
        assert_eq!(response.summary(), "Invalid illust id");
    }

    #[test]
    fn test_summary_falls_back_to_body() {
        assert_eq!(raw("gateway down").summary(), "gateway down");
        assert!(raw("not json").error_body().is_none());
    }

    #[test]
    fn test_summary_truncates_long_bodies() {
        let body = "x".repeat(500);
        let summary = raw(&body).summary();
        assert_eq!(summary.len(), SUMMARY_MAX_CHARS + 3);
        assert!(summary.ends_with("..."));
    }
}
