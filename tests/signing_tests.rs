//! Request header and signature tests
//!
//! Verify the headers that reach the server: device identity, the
//! `X-Client-Time` / `X-Client-Hash` pair and the bearer token.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, FixedOffset};
use pixiv_app_sdk::clock::{Clock, FixedClock};
use pixiv_app_sdk::crypto::sign;
use pixiv_app_sdk::session::SessionTokens;
use pixiv_app_sdk::types::{AccessToken, ClientHash, ClientId, ClientSecret};
use pixiv_app_sdk::Pixiv;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NEW_YEAR: &str = "2024-01-01T00:00:00+00:00";

fn articles_body() -> serde_json::Value {
    serde_json::json!({"spotlight_articles": [], "next_url": null})
}

fn create_test_client(mock_server: &MockServer, hash: &str, clock: Arc<dyn Clock>) -> Pixiv {
    Pixiv::builder()
        .client_id(ClientId::new("x").unwrap())
        .client_secret(ClientSecret::new("y").unwrap())
        .client_hash(ClientHash::new(hash))
        .clock(clock)
        .api_base_url(mock_server.uri())
        .build()
        .unwrap()
}

/// Signature over a fixed clock matches md5(client_time + hash)
#[tokio::test]
async fn test_signed_request_headers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/spotlight/articles"))
        .and(header("x-client-time", NEW_YEAR))
        .and(header("x-client-hash", "3b830d4b0393962bfc1a193e29798ead"))
        .and(header("app-os", "ios"))
        .and(header("app-os-version", "13.1.3"))
        .and(header("app-version", "7.7.7"))
        .and(header("user-agent", "PixivIOSApp/7.7.7 (iOS 13.1.3; iPhone11,2)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let clock = Arc::new(FixedClock::parse(NEW_YEAR).unwrap());
    let pixiv = create_test_client(&mock_server, "z", clock);

    pixiv
        .spotlight()
        .articles(Default::default(), None)
        .await
        .unwrap();

    mock_server.verify().await;
}

/// The digest helper agrees with the value sent on the wire
#[test]
fn test_sign_vector() {
    assert_eq!(sign(NEW_YEAR, "z"), "3b830d4b0393962bfc1a193e29798ead");
}

/// The offset of the local clock is kept in X-Client-Time
#[tokio::test]
async fn test_signature_keeps_clock_offset() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/spotlight/articles"))
        .and(header("x-client-time", "2024-01-01T09:00:00+09:00"))
        .and(header("x-client-hash", "d0878354377886a3c8956a10d863437c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let clock = Arc::new(FixedClock::parse("2024-01-01T09:00:00+09:00").unwrap());
    let pixiv = create_test_client(&mock_server, "secret-hash", clock);

    pixiv
        .spotlight()
        .articles(Default::default(), None)
        .await
        .unwrap();

    mock_server.verify().await;
}

/// A blank client hash disables the signature headers entirely
#[tokio::test]
async fn test_blank_hash_sends_no_signature() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/spotlight/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body()))
        .mount(&mock_server)
        .await;

    let clock = Arc::new(FixedClock::parse(NEW_YEAR).unwrap());
    let pixiv = create_test_client(&mock_server, "   ", clock);

    pixiv
        .spotlight()
        .articles(Default::default(), None)
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("x-client-time"));
    assert!(!requests[0].headers.contains_key("x-client-hash"));
    assert!(!requests[0].headers.contains_key("authorization"));
    assert_eq!(requests[0].headers["app-os"], "ios");
}

/// Clock that advances one second per reading
struct TickingClock {
    start: DateTime<FixedOffset>,
    ticks: AtomicI64,
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::seconds(tick)
    }
}

/// Headers are composed for every request, not cached
#[tokio::test]
async fn test_signature_recomputed_per_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/spotlight/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let clock = Arc::new(TickingClock {
        start: DateTime::parse_from_rfc3339(NEW_YEAR).unwrap(),
        ticks: AtomicI64::new(0),
    });
    let pixiv = create_test_client(&mock_server, "z", clock);

    for _ in 0..2 {
        pixiv
            .spotlight()
            .articles(Default::default(), None)
            .await
            .unwrap();
    }

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].headers["x-client-time"], NEW_YEAR);
    assert_eq!(
        requests[1].headers["x-client-time"],
        "2024-01-01T00:00:01+00:00"
    );
    assert_eq!(
        requests[1].headers["x-client-hash"],
        sign("2024-01-01T00:00:01+00:00", "z").as_str()
    );
}

/// A session token is attached even where authentication is optional
#[tokio::test]
async fn test_bearer_sent_when_session_exists() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/spotlight/articles"))
        .and(header("authorization", "Bearer stored_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pixiv = Pixiv::builder()
        .client_id(ClientId::new("x").unwrap())
        .client_secret(ClientSecret::new("y").unwrap())
        .tokens(SessionTokens::new(
            AccessToken::new("stored_token").unwrap(),
            None,
        ))
        .api_base_url(mock_server.uri())
        .build()
        .unwrap();

    pixiv
        .spotlight()
        .articles(Default::default(), None)
        .await
        .unwrap();

    mock_server.verify().await;
}
