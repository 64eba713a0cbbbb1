use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::common::{ContentType, Filter, RankingMode, Restrict};
use crate::api::endpoint_inventory::{
    ILLUST_BOOKMARK_ADD, ILLUST_BOOKMARK_DELETE, ILLUST_BOOKMARK_DETAIL, ILLUST_BOOKMARK_USERS,
    ILLUST_DETAIL, ILLUST_RANKING, ILLUST_RECOMMENDED, ILLUST_RELATED,
};
use crate::api::r#trait::{PixivApi, PixivContext};
use crate::api::user::UserCollection;
use crate::error::PixivError;
use crate::pagination::{page_collection, NextUrl, Paginated};
use crate::types::{Illust, Parameters};

/// A page of illustrations
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IllustCollection {
    #[serde(default)]
    pub illusts: Vec<Illust>,
    #[serde(default)]
    pub next_url: Option<NextUrl>,
    #[serde(default)]
    pub search_span_limit: Option<u64>,
}

page_collection!(IllustCollection, illusts, Illust);

/// Response from `GET /v1/illust/detail`
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IllustDetail {
    pub illust: Illust,
}

/// One tag in the bookmark editor
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BookmarkDetailTag {
    #[serde(default)]
    pub is_registered: bool,
    #[serde(default)]
    pub name: String,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BookmarkDetailBody {
    #[serde(default)]
    pub is_bookmarked: bool,
    #[serde(default)]
    pub tags: Vec<BookmarkDetailTag>,
    #[serde(default)]
    pub restrict: String,
}

/// Response from `GET /v2/illust/bookmark/detail`
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookmarkDetail {
    pub bookmark_detail: BookmarkDetailBody,
}

/// Illustration API
pub struct IllustApi {
    context: Arc<PixivContext>,
}

impl IllustApi {
    /// Create a new IllustApi instance
    pub fn new(context: Arc<PixivContext>) -> Self {
        Self { context }
    }

    /// GET /v1/illust/detail
    pub async fn detail(&self, illust_id: u64) -> Result<IllustDetail, PixivError> {
        let parameters = Parameters::new().with("illust_id", illust_id);
        self.context.call(&ILLUST_DETAIL, parameters).await
    }

    /// GET /v1/illust/recommended
    pub async fn recommended(
        &self,
        content_type: ContentType,
        offset: Option<u32>,
    ) -> Result<Paginated<IllustCollection>, PixivError> {
        let parameters = Parameters::new()
            .with("content_type", content_type)
            .with("include_ranking_label", true)
            .with("filter", Filter::ForIos)
            .with_opt("offset", offset);
        self.context
            .call_paginated(&ILLUST_RECOMMENDED, parameters)
            .await
    }

    /// GET /v1/illust/ranking
    ///
    /// `date` defaults to the latest published ranking.
    pub async fn ranking(
        &self,
        mode: RankingMode,
        date: Option<NaiveDate>,
        offset: Option<u32>,
    ) -> Result<Paginated<IllustCollection>, PixivError> {
        let parameters = Parameters::new()
            .with("mode", mode)
            .with("filter", Filter::ForIos)
            .with_opt("date", date)
            .with_opt("offset", offset);
        self.context.call_paginated(&ILLUST_RANKING, parameters).await
    }

    /// GET /v2/illust/related
    pub async fn related(&self, illust_id: u64) -> Result<Paginated<IllustCollection>, PixivError> {
        let parameters = Parameters::new()
            .with("illust_id", illust_id)
            .with("filter", Filter::ForIos);
        self.context.call_paginated(&ILLUST_RELATED, parameters).await
    }

    /// Users who bookmarked an illustration.
    ///
    /// GET /v1/illust/bookmark/users
    pub async fn bookmark_users(
        &self,
        illust_id: u64,
        offset: Option<u64>,
    ) -> Result<Paginated<UserCollection>, PixivError> {
        let parameters = Parameters::new()
            .with("illust_id", illust_id)
            .with_opt("offset", offset);
        self.context
            .call_paginated(&ILLUST_BOOKMARK_USERS, parameters)
            .await
    }

    /// GET /v2/illust/bookmark/detail
    pub async fn bookmark_detail(&self, illust_id: u64) -> Result<BookmarkDetail, PixivError> {
        let parameters = Parameters::new().with("illust_id", illust_id);
        self.context.call(&ILLUST_BOOKMARK_DETAIL, parameters).await
    }

    /// POST /v2/illust/bookmark/add
    pub async fn add_bookmark(
        &self,
        illust_id: u64,
        restrict: Restrict,
        tags: &[&str],
    ) -> Result<(), PixivError> {
        let parameters = Parameters::new()
            .with("illust_id", illust_id)
            .with("restrict", restrict)
            .with_repeated("tags[]", tags.iter().copied());
        self.context
            .call_json(&ILLUST_BOOKMARK_ADD, parameters)
            .await?;
        Ok(())
    }

    /// POST /v1/illust/bookmark/delete
    pub async fn delete_bookmark(&self, illust_id: u64) -> Result<(), PixivError> {
        let parameters = Parameters::new().with("illust_id", illust_id);
        self.context
            .call_json(&ILLUST_BOOKMARK_DELETE, parameters)
            .await?;
        Ok(())
    }
}

impl PixivApi for IllustApi {
    fn context(&self) -> &PixivContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "illust"
    }
}
