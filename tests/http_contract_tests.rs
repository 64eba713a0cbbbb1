//! HTTP Contract Tests for PixivClient
//!
//! These tests verify how the transport classifies responses:
//! - 401 / 400 / other non-2xx statuses
//! - 2xx with a malformed or non-object body
//! - local precondition failures that never reach the network

use std::sync::Arc;

use http::StatusCode;
use pixiv_app_sdk::client::PixivClient;
use pixiv_app_sdk::error::PixivError;
use pixiv_app_sdk::session::{Session, SessionTokens};
use pixiv_app_sdk::types::{AccessToken, ClientId, ClientSecret, Parameters};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Create an authenticated test client pointing to the mock server
fn create_test_client(mock_server: &MockServer) -> PixivClient {
    let session = Session::with_tokens(SessionTokens::new(
        AccessToken::new("test_access_token").unwrap(),
        None,
    ));

    PixivClient::builder()
        .client_id(ClientId::new("test_client_id").unwrap())
        .client_secret(ClientSecret::new("test_client_secret").unwrap())
        .api_base_url(mock_server.uri())
        .session(Arc::new(session))
        .build()
        .unwrap()
}

async fn mount_status(mock_server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/illust/detail"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(mock_server)
        .await;
}

async fn get_detail(client: &PixivClient) -> Result<pixiv_app_sdk::types::JsonObject, PixivError> {
    client
        .get(
            &client.api_url("/v1/illust/detail"),
            true,
            Parameters::new().with("illust_id", 1u64),
        )
        .await
}

/// 401 maps to AuthenticationFailed and keeps the error payload
#[tokio::test]
async fn test_http_401_is_authentication_failed() {
    let mock_server = MockServer::start().await;
    mount_status(
        &mock_server,
        401,
        serde_json::json!({
            "error": {
                "user_message": "",
                "message": "Error occurred at the OAuth process.",
                "reason": "",
                "user_message_details": {}
            }
        }),
    )
    .await;

    let client = create_test_client(&mock_server);
    let error = get_detail(&client).await.unwrap_err();

    assert!(
        matches!(error, PixivError::AuthenticationFailed(_)),
        "got: {error:?}"
    );
    assert_eq!(error.status(), Some(StatusCode::UNAUTHORIZED));
    assert_eq!(
        error.error_body().unwrap().message,
        "Error occurred at the OAuth process."
    );
    assert!(error.to_string().contains("Error occurred at the OAuth process."));
}

/// 400 maps to MalformedRequest
#[tokio::test]
async fn test_http_400_is_malformed_request() {
    let mock_server = MockServer::start().await;
    mount_status(
        &mock_server,
        400,
        serde_json::json!({
            "error": {"user_message": "Invalid illust_id", "message": "", "reason": ""}
        }),
    )
    .await;

    let client = create_test_client(&mock_server);
    let error = get_detail(&client).await.unwrap_err();

    assert!(matches!(error, PixivError::MalformedRequest(_)), "got: {error:?}");
    assert_eq!(error.error_body().unwrap().user_message, "Invalid illust_id");
}

/// Any other non-2xx maps to HttpFailure with the status
#[tokio::test]
async fn test_http_5xx_is_http_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/illust/detail"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let error = get_detail(&client).await.unwrap_err();

    match error {
        PixivError::HttpFailure { status, response } => {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(response.body, "upstream unavailable");
        }
        other => panic!("expected HttpFailure, got {other:?}"),
    }
}

/// 404 is not special-cased
#[tokio::test]
async fn test_http_404_is_http_failure() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, 404, serde_json::json!({})).await;

    let client = create_test_client(&mock_server);
    let error = get_detail(&client).await.unwrap_err();

    assert!(
        matches!(error, PixivError::HttpFailure { status, .. } if status == StatusCode::NOT_FOUND)
    );
}

/// A 2xx response whose body is not JSON is a ParseFailure carrying the body
#[tokio::test]
async fn test_malformed_json_is_parse_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/illust/detail"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let error = get_detail(&client).await.unwrap_err();

    match error {
        PixivError::ParseFailure { response, .. } => {
            assert_eq!(response.unwrap().body, "<html>maintenance</html>");
        }
        other => panic!("expected ParseFailure, got {other:?}"),
    }
}

/// A JSON array is valid JSON but not an object
#[tokio::test]
async fn test_non_object_json_is_parse_failure() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, 200, serde_json::json!([1, 2, 3])).await;

    let client = create_test_client(&mock_server);
    let result = get_detail(&client).await;

    assert!(matches!(result, Err(PixivError::ParseFailure { .. })));
}

/// An empty 200 body is a ParseFailure, not an empty object
#[tokio::test]
async fn test_empty_body_is_parse_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/illust/detail"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = get_detail(&client).await;

    assert!(matches!(result, Err(PixivError::ParseFailure { .. })));
}

/// Requiring authentication with an empty session fails before sending
#[tokio::test]
async fn test_missing_token_never_reaches_network() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/illust/detail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = PixivClient::builder()
        .client_id(ClientId::new("test_client_id").unwrap())
        .client_secret(ClientSecret::new("test_client_secret").unwrap())
        .api_base_url(mock_server.uri())
        .build()
        .unwrap();

    let result = get_detail(&client).await;

    assert!(matches!(result, Err(PixivError::InvalidState(_))));
    mock_server.verify().await;
}

/// A refused connection surfaces as Transport
#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = PixivClient::builder()
        .client_id(ClientId::new("test_client_id").unwrap())
        .client_secret(ClientSecret::new("test_client_secret").unwrap())
        .api_base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let result = client
        .get(&client.api_url("/v1/spotlight/articles"), false, Parameters::new())
        .await;

    assert!(matches!(result, Err(PixivError::Transport(_))));
}
