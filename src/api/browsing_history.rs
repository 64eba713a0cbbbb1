//! Browsing history API
//!
//! Records and lists the works the account has viewed. The `add` calls send
//! the supplied ids as repeated `novel_ids[]` / `illust_ids[]` form fields.

use std::sync::Arc;

use crate::api::endpoint_inventory::{
    BROWSING_HISTORY_ILLUSTS, BROWSING_HISTORY_ILLUST_ADD, BROWSING_HISTORY_NOVELS,
    BROWSING_HISTORY_NOVEL_ADD,
};
use crate::api::illust::IllustCollection;
use crate::api::novel::NovelCollection;
use crate::api::r#trait::{PixivApi, PixivContext};
use crate::error::PixivError;
use crate::pagination::Paginated;
use crate::types::Parameters;

fn id_parameters(key: &str, ids: &[u64]) -> Result<Parameters, PixivError> {
    if ids.is_empty() {
        return Err(PixivError::InvalidState(format!(
            "{key} must contain at least one id"
        )));
    }
    Ok(Parameters::new().with_repeated(key, ids.iter().copied()))
}

/// Browsing history API
pub struct BrowsingHistoryApi {
    context: Arc<PixivContext>,
}

impl BrowsingHistoryApi {
    /// Create a new BrowsingHistoryApi instance
    pub fn new(context: Arc<PixivContext>) -> Self {
        Self { context }
    }

    /// Record novels as viewed.
    ///
    /// POST /v2/user/browsing-history/novel/add
    ///
    /// # Errors
    /// `PixivError::InvalidState` for an empty id list, before any request
    /// is sent.
    pub async fn add_novels(&self, novel_ids: &[u64]) -> Result<(), PixivError> {
        let parameters = id_parameters("novel_ids[]", novel_ids)?;
        self.context
            .call_json(&BROWSING_HISTORY_NOVEL_ADD, parameters)
            .await?;
        Ok(())
    }

    /// GET /v1/user/browsing-history/novels
    pub async fn novels(&self) -> Result<Paginated<NovelCollection>, PixivError> {
        self.context
            .call_paginated(&BROWSING_HISTORY_NOVELS, Parameters::new())
            .await
    }

    /// Record illustrations as viewed.
    ///
    /// POST /v2/user/browsing-history/illust/add
    pub async fn add_illusts(&self, illust_ids: &[u64]) -> Result<(), PixivError> {
        let parameters = id_parameters("illust_ids[]", illust_ids)?;
        self.context
            .call_json(&BROWSING_HISTORY_ILLUST_ADD, parameters)
            .await?;
        Ok(())
    }

    /// GET /v1/user/browsing-history/illusts
    pub async fn illusts(&self) -> Result<Paginated<IllustCollection>, PixivError> {
        self.context
            .call_paginated(&BROWSING_HISTORY_ILLUSTS, Parameters::new())
            .await
    }
}

impl PixivApi for BrowsingHistoryApi {
    fn context(&self) -> &PixivContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "browsing_history"
    }
}
