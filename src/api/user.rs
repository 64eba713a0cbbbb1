use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::common::{ContentType, Filter, Restrict};
use crate::api::endpoint_inventory::{
    USER_BOOKMARKS_ILLUST, USER_DETAIL, USER_FOLLOWING, USER_ILLUSTS, USER_NOVELS,
};
use crate::api::illust::IllustCollection;
use crate::api::novel::NovelCollection;
use crate::api::r#trait::{PixivApi, PixivContext};
use crate::error::PixivError;
use crate::pagination::{page_collection, NextUrl, Paginated};
use crate::types::{JsonObject, Parameters, User, UserPreview};

/// A page of user previews (following lists, user search)
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserPreviews {
    #[serde(default)]
    pub user_previews: Vec<UserPreview>,
    #[serde(default)]
    pub next_url: Option<NextUrl>,
}

page_collection!(UserPreviews, user_previews, UserPreview);

/// A page of plain users (bookmark users)
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserCollection {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub next_url: Option<NextUrl>,
}

page_collection!(UserCollection, users, User);

/// Profile counters shown on the user page
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserProfile {
    #[serde(default)]
    pub webpage: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub total_follow_users: u64,
    #[serde(default)]
    pub total_illusts: u64,
    #[serde(default)]
    pub total_manga: u64,
    #[serde(default)]
    pub total_novels: u64,
    #[serde(default)]
    pub total_illust_bookmarks_public: u64,
    #[serde(default)]
    pub is_premium: bool,
}

/// Response from `GET /v1/user/detail`
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserDetail {
    pub user: User,
    #[serde(default)]
    pub profile: UserProfile,
    /// Remaining sections (`profile_publicity`, `workspace`) as sent
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// User API
pub struct UserApi {
    context: Arc<PixivContext>,
}

impl UserApi {
    /// Create a new UserApi instance
    pub fn new(context: Arc<PixivContext>) -> Self {
        Self { context }
    }

    /// GET /v1/user/detail
    pub async fn detail(&self, user_id: u64) -> Result<UserDetail, PixivError> {
        let parameters = Parameters::new()
            .with("user_id", user_id)
            .with("filter", Filter::ForIos);
        self.context.call(&USER_DETAIL, parameters).await
    }

    /// Works posted by a user. `content_type` narrows to illustrations or
    /// manga.
    ///
    /// GET /v1/user/illusts
    pub async fn illusts(
        &self,
        user_id: u64,
        content_type: Option<ContentType>,
        offset: Option<u32>,
    ) -> Result<Paginated<IllustCollection>, PixivError> {
        let parameters = Parameters::new()
            .with("user_id", user_id)
            .with_opt("type", content_type)
            .with("filter", Filter::ForIos)
            .with_opt("offset", offset);
        self.context.call_paginated(&USER_ILLUSTS, parameters).await
    }

    /// GET /v1/user/novels
    pub async fn novels(
        &self,
        user_id: u64,
        offset: Option<u32>,
    ) -> Result<Paginated<NovelCollection>, PixivError> {
        let parameters = Parameters::new()
            .with("user_id", user_id)
            .with_opt("offset", offset);
        self.context.call_paginated(&USER_NOVELS, parameters).await
    }

    /// Illustrations a user bookmarked, optionally under one bookmark tag.
    ///
    /// GET /v1/user/bookmarks/illust
    pub async fn bookmarked_illusts(
        &self,
        user_id: u64,
        restrict: Restrict,
        tag: Option<&str>,
    ) -> Result<Paginated<IllustCollection>, PixivError> {
        let parameters = Parameters::new()
            .with("user_id", user_id)
            .with("restrict", restrict)
            .with_opt("tag", tag);
        self.context
            .call_paginated(&USER_BOOKMARKS_ILLUST, parameters)
            .await
    }

    /// GET /v1/user/following
    pub async fn following(
        &self,
        user_id: u64,
        restrict: Restrict,
        offset: Option<u32>,
    ) -> Result<Paginated<UserPreviews>, PixivError> {
        let parameters = Parameters::new()
            .with("user_id", user_id)
            .with("restrict", restrict)
            .with_opt("offset", offset);
        self.context.call_paginated(&USER_FOLLOWING, parameters).await
    }
}

impl PixivApi for UserApi {
    fn context(&self) -> &PixivContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "user"
    }
}
