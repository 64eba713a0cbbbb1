use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Request as ReqwestRequest, Response as ReqwestResponse};
use tower::{Layer, Service};

use crate::api::PixivContext;
use crate::clock::Clock;
use crate::error::PixivError;
use crate::session::{Session, SessionTokens};
use crate::types::{ClientHash, ClientId, ClientSecret};

use super::headers::DeviceInfo;
use super::pixiv_client::{MiddlewareExecutor, PixivClient};
use super::Pixiv;

type MiddlewareFuture =
    Pin<Box<dyn Future<Output = Result<ReqwestResponse, reqwest::Error>> + Send>>;

/// Builder for [`Pixiv`]
///
/// `client_id` and `client_secret` are required. Everything else has a
/// default matching the iOS app.
#[must_use]
#[derive(Default)]
pub struct PixivBuilder<M = ()> {
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
    middleware: Option<M>,
}

impl<M> std::fmt::Debug for PixivBuilder<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixivBuilder")
            .field("client_id", &self.client_id)
            .field("device", &self.device)
            .field("api_base_url", &self.api_base_url)
            .field("oauth_base_url", &self.oauth_base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("middleware", &self.middleware.as_ref().map(|_| ".."))
            .finish_non_exhaustive()
    }
}

impl<M> PixivBuilder<M> {
    pub fn client_id(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    pub fn client_secret(mut self, client_secret: ClientSecret) -> Self {
        self.client_secret = Some(client_secret);
        self
    }

    pub fn client_hash(mut self, client_hash: ClientHash) -> Self {
        self.client_hash = Some(client_hash);
        self
    }

    /// Start with tokens persisted from an earlier run.
    pub fn tokens(mut self, tokens: SessionTokens) -> Self {
        self.session = Some(Arc::new(Session::with_tokens(tokens)));
        self
    }

    /// Share a session with another client.
    pub fn session(mut self, session: Arc<Session>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn device(mut self, device: DeviceInfo) -> Self {
        self.device = Some(device);
        self
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    pub fn oauth_base_url(mut self, url: impl Into<String>) -> Self {
        self.oauth_base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_middleware<M2>(self, middleware: M2) -> PixivBuilder<M2>
    where
        M2: Layer<PixivClient> + Clone + Send + Sync + 'static,
    {
        PixivBuilder {
            client_id: self.client_id,
            client_secret: self.client_secret,
            client_hash: self.client_hash,
            session: self.session,
            clock: self.clock,
            device: self.device,
            api_base_url: self.api_base_url,
            oauth_base_url: self.oauth_base_url,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            middleware: Some(middleware),
        }
    }

    pub fn build(self) -> Result<Pixiv, PixivError>
    where
        M: Layer<PixivClient> + Clone + Send + Sync + 'static,
        M::Service: Service<ReqwestRequest, Response = ReqwestResponse, Error = reqwest::Error>
            + Clone
            + Send
            + Sync
            + 'static,
        <M::Service as Service<ReqwestRequest>>::Future: Send + 'static,
    {
        let client_id = self
            .client_id
            .ok_or_else(|| PixivError::Config("client_id is required".to_string()))?;
        let client_secret = self
            .client_secret
            .ok_or_else(|| PixivError::Config("client_secret is required".to_string()))?;

        let mut builder = PixivClient::builder()
            .client_id(client_id)
            .client_secret(client_secret);
        if let Some(client_hash) = self.client_hash {
            builder = builder.client_hash(client_hash);
        }
        if let Some(session) = self.session {
            builder = builder.session(session);
        }
        if let Some(clock) = self.clock {
            builder = builder.clock(clock);
        }
        if let Some(device) = self.device {
            builder = builder.device(device);
        }
        if let Some(url) = self.api_base_url {
            builder = builder.api_base_url(url);
        }
        if let Some(url) = self.oauth_base_url {
            builder = builder.oauth_base_url(url);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let mut client = builder.build()?;

        if let Some(middleware) = self.middleware {
            let service = middleware.layer(client.clone());
            let executor = make_middleware_executor(service);
            client = client.with_middleware_executor(executor);
        }

        let context = Arc::new(PixivContext::new(Arc::new(client)));
        Ok(Pixiv::from(context))
    }
}

fn make_middleware_executor<S>(service: S) -> MiddlewareExecutor
where
    S: Service<ReqwestRequest, Response = ReqwestResponse, Error = reqwest::Error>
        + Clone
        + Send
        + Sync
        + 'static,
    S::Future: Send + 'static,
{
    let service = Arc::new(service);

    Arc::new(move |request: ReqwestRequest| -> MiddlewareFuture {
        let mut service = (*service).clone();
        Box::pin(async move { service.call(request).await })
    })
}
