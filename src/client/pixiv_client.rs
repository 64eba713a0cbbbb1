//! pixiv HTTP transport
//!
//! Signs and authenticates each request, sends it through the optional
//! middleware stack, classifies the status and parses the JSON body.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tower::Service;

use super::headers::{compose_headers, DeviceInfo};
use crate::clock::{Clock, SystemClock};
use crate::error::PixivError;
use crate::session::{Session, SessionTokens};
use crate::types::{
    ClientCredentials, ClientHash, ClientId, ClientSecret, JsonObject, OutgoingRequest,
    Parameters, RawResponse,
};

pub(crate) const DEFAULT_API_BASE_URL: &str = "https://app-api.pixiv.net";
pub(crate) const DEFAULT_OAUTH_BASE_URL: &str = "https://oauth.secure.pixiv.net";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub(crate) const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

type MiddlewareFuture =
    Pin<Box<dyn Future<Output = Result<reqwest::Response, reqwest::Error>> + Send>>;
pub(crate) type MiddlewareExecutor =
    Arc<dyn Fn(reqwest::Request) -> MiddlewareFuture + Send + Sync>;

/// pixiv API transport
///
/// One pooled [`reqwest::Client`] is reused for every call made through this
/// instance. Do not share it between different credentials.
#[derive(Clone)]
pub struct PixivClient {
    http: Client,
    credentials: ClientCredentials,
    session: Arc<Session>,
    clock: Arc<dyn Clock>,
    device: DeviceInfo,
    api_base_url: String,
    oauth_base_url: String,
    middleware_executor: Option<MiddlewareExecutor>,
}

impl std::fmt::Debug for PixivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixivClient")
            .field("client_id", &self.credentials.client_id)
            .field("device", &self.device)
            .field("api_base_url", &self.api_base_url)
            .field("oauth_base_url", &self.oauth_base_url)
            .field(
                "middleware_executor",
                &self.middleware_executor.as_ref().map(|_| ".."),
            )
            .finish_non_exhaustive()
    }
}

impl PixivClient {
    /// Create a new client builder
    pub fn builder() -> PixivClientBuilder {
        PixivClientBuilder::default()
    }

    pub fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }

    /// The session read by every request.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn device(&self) -> &DeviceInfo {
        &self.device
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn oauth_base_url(&self) -> &str {
        &self.oauth_base_url
    }

    /// Absolute URL of an app API path such as `/v1/illust/detail`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    /// Returns the underlying [`reqwest::Client`] for raw HTTP requests.
    ///
    /// Note: requests made through this client bypass signing, authentication
    /// and the middleware pipeline.
    pub fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn with_middleware_executor(mut self, executor: MiddlewareExecutor) -> Self {
        self.middleware_executor = Some(executor);
        self
    }

    pub(crate) async fn send_request(
        &self,
        request: reqwest::Request,
    ) -> Result<reqwest::Response, reqwest::Error> {
        if let Some(executor) = &self.middleware_executor {
            (executor)(request).await
        } else {
            self.http.execute(request).await
        }
    }

    fn build_request(
        &self,
        request: &OutgoingRequest,
        session: Option<&SessionTokens>,
    ) -> Result<reqwest::Request, PixivError> {
        let headers = compose_headers(
            request,
            session,
            &self.credentials,
            &self.device,
            &self.clock.now(),
        )?;

        let builder = if request.method == Method::GET {
            self.http.get(request.parameters.append_to_url(&request.url))
        } else {
            self.http
                .request(request.method.clone(), &request.url)
                .form(&request.parameters.to_form_pairs())
        };

        Ok(builder.headers(headers).build()?)
    }

    async fn execute_raw(&self, request: &OutgoingRequest) -> Result<RawResponse, PixivError> {
        let session = self.session.snapshot().await;
        let http_request = self.build_request(request, session.as_ref())?;

        log::debug!("[Pixiv] {} {}", request.method, request.url);
        let start = Instant::now();

        let response = self.send_request(http_request).await?;
        let raw = RawResponse::read(response).await?;

        log::debug!(
            "[Pixiv] {} {} -> {} ({:?})",
            request.method,
            request.url,
            raw.status.as_u16(),
            start.elapsed()
        );

        match PixivError::check(raw) {
            Ok(raw) => Ok(raw),
            Err(error) => {
                log::warn!("[Pixiv] {} {} failed: {}", request.method, request.url, error);
                Err(error)
            }
        }
    }

    fn decode<T: DeserializeOwned>(raw: RawResponse) -> Result<T, PixivError> {
        match serde_json::from_str(&raw.body) {
            Ok(value) => Ok(value),
            Err(e) => Err(PixivError::parse(e, Some(raw))),
        }
    }

    /// Send a request and return the parsed JSON object.
    ///
    /// # Errors
    /// - `PixivError::InvalidState` if authentication is required but absent
    /// - `PixivError::AuthenticationFailed` / `MalformedRequest` / `HttpFailure`
    ///   for non-2xx statuses
    /// - `PixivError::ParseFailure` when the body is not a JSON object
    pub async fn send(&self, request: &OutgoingRequest) -> Result<JsonObject, PixivError> {
        let raw = self.execute_raw(request).await?;
        Self::decode(raw)
    }

    /// Send a request and deserialize the body into `T`.
    pub async fn send_as<T: DeserializeOwned>(
        &self,
        request: &OutgoingRequest,
    ) -> Result<T, PixivError> {
        let raw = self.execute_raw(request).await?;
        Self::decode(raw)
    }

    /// GET `url`, appending `parameters` as a query string.
    pub async fn get(
        &self,
        url: &str,
        requires_authentication: bool,
        parameters: Parameters,
    ) -> Result<JsonObject, PixivError> {
        self.send(&OutgoingRequest::get(url, parameters, requires_authentication))
            .await
    }

    /// POST `parameters` to `url` as a form-encoded body.
    pub async fn post(
        &self,
        url: &str,
        requires_authentication: bool,
        parameters: Parameters,
    ) -> Result<JsonObject, PixivError> {
        self.send(&OutgoingRequest::post(url, parameters, requires_authentication))
            .await
    }
}

impl Service<reqwest::Request> for PixivClient {
    type Response = reqwest::Response;
    type Error = reqwest::Error;
    type Future = MiddlewareFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: reqwest::Request) -> Self::Future {
        let client = self.http.clone();
        Box::pin(async move { client.execute(req).await })
    }
}

/// Builder for PixivClient
///
/// # Example
///
/// ```rust
/// use pixiv_app_sdk::client::PixivClient;
/// use pixiv_app_sdk::types::{ClientHash, ClientId, ClientSecret};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PixivClient::builder()
///         .client_id(ClientId::new("client_id")?)
///         .client_secret(ClientSecret::new("client_secret")?)
///         .client_hash(ClientHash::new("client_hash"))
///         .build()?;
///
///     assert_eq!(client.api_base_url(), "https://app-api.pixiv.net");
///     Ok(())
/// }
/// ```
#[derive(Default)]
pub struct PixivClientBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    client_hash: Option<ClientHash>,
    session: Option<Arc<Session>>,
    clock: Option<Arc<dyn Clock>>,
    device: Option<DeviceInfo>,
    api_base_url: Option<String>,
    oauth_base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl std::fmt::Debug for PixivClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixivClientBuilder")
            .field("client_id", &self.client_id)
            .field("device", &self.device)
            .field("api_base_url", &self.api_base_url)
            .field("oauth_base_url", &self.oauth_base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish_non_exhaustive()
    }
}

impl PixivClientBuilder {
    pub fn client_id(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    pub fn client_secret(mut self, client_secret: ClientSecret) -> Self {
        self.client_secret = Some(client_secret);
        self
    }

    /// Signing salt. Leave unset (or empty) to disable `X-Client-Hash`.
    pub fn client_hash(mut self, client_hash: ClientHash) -> Self {
        self.client_hash = Some(client_hash);
        self
    }

    /// Share an existing session instead of starting unauthenticated.
    pub fn session(mut self, session: Arc<Session>) -> Self {
        self.session = Some(session);
        self
    }

    /// Time source for `X-Client-Time`.
    ///
    /// Default: [`SystemClock`]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Default: app `7.7.7` on iOS `13.1.3`
    pub fn device(mut self, device: DeviceInfo) -> Self {
        self.device = Some(device);
        self
    }

    /// Default: `<https://app-api.pixiv.net>`
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Default: `<https://oauth.secure.pixiv.net>`
    pub fn oauth_base_url(mut self, url: impl Into<String>) -> Self {
        self.oauth_base_url = Some(url.into());
        self
    }

    /// Set the total timeout for requests
    ///
    /// Default: 30 seconds
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout
    ///
    /// Default: 10 seconds
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Build the PixivClient
    ///
    /// # Errors
    /// Returns an error if the client id or secret is not set, or a base URL
    /// is not an http(s) URL
    pub fn build(self) -> Result<PixivClient, PixivError> {
        let client_id = self
            .client_id
            .ok_or_else(|| PixivError::Config("client_id is required".to_string()))?;
        let client_secret = self
            .client_secret
            .ok_or_else(|| PixivError::Config("client_secret is required".to_string()))?;
        let client_hash = self.client_hash.unwrap_or_default();

        let api_base_url = validate_base_url(
            "api_base_url",
            self.api_base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        )?;
        let oauth_base_url = validate_base_url(
            "oauth_base_url",
            self.oauth_base_url
                .unwrap_or_else(|| DEFAULT_OAUTH_BASE_URL.to_string()),
        )?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let connect_timeout = self
            .connect_timeout
            .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));

        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(PixivClient {
            http,
            credentials: ClientCredentials::new(client_id, client_secret, client_hash),
            session: self.session.unwrap_or_default(),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            device: self.device.unwrap_or_default(),
            api_base_url,
            oauth_base_url,
            middleware_executor: None,
        })
    }
}

fn validate_base_url(name: &str, url: String) -> Result<String, PixivError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(PixivError::Config(format!(
            "{name} must start with http:// or https://, got: {url}"
        )));
    }
    Ok(url.trim_end_matches('/').to_string())
}
