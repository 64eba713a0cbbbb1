//! pixiv API trait and context
//!
//! Provides the base trait and context for all resource API implementations.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::api::endpoint_inventory::Endpoint;
use crate::client::PixivClient;
use crate::error::PixivError;
use crate::pagination::{PageCollection, Paginated};
use crate::session::Session;
use crate::types::{JsonObject, Parameters};

/// Context holding shared resources for resource API implementations.
///
/// Every call goes through the one shared [`PixivClient`], so signing,
/// authentication and error classification are applied uniformly.
#[derive(Clone)]
pub struct PixivContext {
    /// The pixiv HTTP client for making API requests
    pub(crate) client: Arc<PixivClient>,
}

impl std::fmt::Debug for PixivContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixivContext")
            .field("client", &"PixivClient { .. }")
            .finish()
    }
}

impl PixivContext {
    /// Create a new PixivContext
    pub fn new(client: Arc<PixivClient>) -> Self {
        Self { client }
    }

    /// Get a reference to the pixiv HTTP client.
    pub fn client(&self) -> &PixivClient {
        &self.client
    }

    /// Get the session shared with the client.
    pub fn session(&self) -> &Arc<Session> {
        self.client.session()
    }

    /// Call `endpoint` and return the raw JSON object.
    pub async fn call_json(
        &self,
        endpoint: &Endpoint,
        parameters: Parameters,
    ) -> Result<JsonObject, PixivError> {
        let request = endpoint.request(&self.client, parameters);
        self.client.send(&request).await
    }

    /// Call `endpoint` and deserialize the response into `T`.
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        parameters: Parameters,
    ) -> Result<T, PixivError> {
        let request = endpoint.request(&self.client, parameters);
        self.client.send_as(&request).await
    }

    /// Call a list `endpoint` and bind the page to the client for
    /// [`Paginated::fetch_next`].
    pub async fn call_paginated<C: PageCollection>(
        &self,
        endpoint: &Endpoint,
        parameters: Parameters,
    ) -> Result<Paginated<C>, PixivError> {
        let page: C = self.call(endpoint, parameters).await?;
        Ok(Paginated::bind(page, &self.client, endpoint.requires_auth))
    }
}

/// Trait for resource API implementations.
///
/// All API modules implement this trait to provide access to the shared
/// context.
pub trait PixivApi: Send + Sync {
    /// Get a reference to the pixiv context
    fn context(&self) -> &PixivContext;

    /// Get the name of this API for logging and error context.
    fn api_name(&self) -> &'static str {
        "unknown"
    }
}
