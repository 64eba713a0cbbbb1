//! next_url pagination tests
//!
//! Pages are served by wiremock with absolute `next_url`s pointing back at
//! the mock server.

use pixiv_app_sdk::error::PixivError;
use pixiv_app_sdk::session::SessionTokens;
use pixiv_app_sdk::types::{AccessToken, ClientId, ClientSecret};
use pixiv_app_sdk::Pixiv;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HISTORY_PATH: &str = "/v1/user/browsing-history/novels";

fn create_test_client(mock_server: &MockServer) -> Pixiv {
    Pixiv::builder()
        .client_id(ClientId::new("test_client_id").unwrap())
        .client_secret(ClientSecret::new("test_client_secret").unwrap())
        .api_base_url(mock_server.uri())
        .tokens(SessionTokens::new(
            AccessToken::new("page_token").unwrap(),
            None,
        ))
        .build()
        .unwrap()
}

fn novels_page(ids: &[u64], next_url: Option<String>) -> serde_json::Value {
    let novels: Vec<_> = ids
        .iter()
        .map(|id| serde_json::json!({"id": id, "title": format!("novel {id}")}))
        .collect();
    serde_json::json!({"novels": novels, "next_url": next_url})
}

/// Mount three pages: no cursor, cursor=2, cursor=3 (final).
async fn mount_three_pages(mock_server: &MockServer) {
    let base = format!("{}{}", mock_server.uri(), HISTORY_PATH);

    Mock::given(method("GET"))
        .and(path(HISTORY_PATH))
        .and(query_param("cursor", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(novels_page(&[5], None)))
        .mount(mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(HISTORY_PATH))
        .and(query_param("cursor", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(novels_page(&[3, 4], Some(format!("{base}?cursor=3")))),
        )
        .mount(mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(HISTORY_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(novels_page(&[1, 2], Some(format!("{base}?cursor=2")))),
        )
        .mount(mock_server)
        .await;
}

/// fetch_next follows next_url verbatim until the final page
#[tokio::test]
async fn test_fetch_next_until_final_page() {
    let mock_server = MockServer::start().await;
    mount_three_pages(&mock_server).await;

    let pixiv = create_test_client(&mock_server);
    let first = pixiv.browsing_history().novels().await.unwrap();
    assert_eq!(first.items().len(), 2);
    assert!(first
        .next_url()
        .unwrap()
        .as_str()
        .ends_with("/v1/user/browsing-history/novels?cursor=2"));

    let second = first.fetch_next().await.unwrap();
    assert_eq!(second.items()[0].id, 3);

    let third = second.fetch_next().await.unwrap();
    assert_eq!(third.items()[0].id, 5);
    assert!(!third.has_next());

    assert!(matches!(
        third.fetch_next().await,
        Err(PixivError::NoMoreResults)
    ));
}

/// Follow-up pages are authenticated like the first one
#[tokio::test]
async fn test_fetch_next_sends_bearer() {
    let mock_server = MockServer::start().await;
    mount_three_pages(&mock_server).await;

    let pixiv = create_test_client(&mock_server);
    let first = pixiv.browsing_history().novels().await.unwrap();
    first.fetch_next().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].url.query(), Some("cursor=2"));
    assert_eq!(requests[1].headers["authorization"], "Bearer page_token");
}

/// collect_items gathers every page in order
#[tokio::test]
async fn test_collect_all_items() {
    let mock_server = MockServer::start().await;
    mount_three_pages(&mock_server).await;

    let pixiv = create_test_client(&mock_server);
    let novels = pixiv
        .browsing_history()
        .novels()
        .await
        .unwrap()
        .collect_items(10)
        .await
        .unwrap();

    let ids: Vec<u64> = novels.iter().map(|novel| novel.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

/// collect_items stops at the page limit
#[tokio::test]
async fn test_collect_items_respects_page_limit() {
    let mock_server = MockServer::start().await;
    mount_three_pages(&mock_server).await;

    let pixiv = create_test_client(&mock_server);
    let novels = pixiv
        .browsing_history()
        .novels()
        .await
        .unwrap()
        .collect_items(2)
        .await
        .unwrap();

    assert_eq!(novels.len(), 4);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

/// A failing follow-up page surfaces its error
#[tokio::test]
async fn test_fetch_next_error_is_classified() {
    let mock_server = MockServer::start().await;
    let base = format!("{}{}", mock_server.uri(), HISTORY_PATH);

    Mock::given(method("GET"))
        .and(path(HISTORY_PATH))
        .and(query_param("cursor", "2"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {"message": "Error occurred at the OAuth process."}
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(HISTORY_PATH))
        .and(header("authorization", "Bearer page_token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(novels_page(&[1], Some(format!("{base}?cursor=2")))),
        )
        .mount(&mock_server)
        .await;

    let pixiv = create_test_client(&mock_server);
    let first = pixiv.browsing_history().novels().await.unwrap();

    assert!(matches!(
        first.fetch_next().await,
        Err(PixivError::AuthenticationFailed(_))
    ));
}

/// Dropping every client handle invalidates fetch_next
#[tokio::test]
async fn test_fetch_next_after_client_dropped() {
    let mock_server = MockServer::start().await;
    mount_three_pages(&mock_server).await;

    let pixiv = create_test_client(&mock_server);
    let first = pixiv.browsing_history().novels().await.unwrap();
    drop(pixiv);

    assert!(matches!(
        first.fetch_next().await,
        Err(PixivError::InvalidState(_))
    ));
}
