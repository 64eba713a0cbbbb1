use std::sync::Arc;

use crate::api::common::{Filter, SearchDuration, SearchSort, SearchTarget};
use crate::api::endpoint_inventory::{SEARCH_ILLUST, SEARCH_NOVEL, SEARCH_USER};
use crate::api::illust::IllustCollection;
use crate::api::novel::NovelCollection;
use crate::api::r#trait::{PixivApi, PixivContext};
use crate::api::user::UserPreviews;
use crate::error::PixivError;
use crate::pagination::Paginated;
use crate::types::Parameters;

/// Options shared by illustration and novel search.
///
/// Unset fields fall back to partial tag matching, newest first, no
/// duration limit.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub search_target: Option<SearchTarget>,
    pub sort: Option<SearchSort>,
    pub duration: Option<SearchDuration>,
    pub include_translated_tag_results: Option<bool>,
    /// Novel search only
    pub merge_plain_keyword_results: Option<bool>,
    pub offset: Option<u32>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_target(mut self, search_target: SearchTarget) -> Self {
        self.search_target = Some(search_target);
        self
    }

    pub fn sort(mut self, sort: SearchSort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn duration(mut self, duration: SearchDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn include_translated_tag_results(mut self, include: bool) -> Self {
        self.include_translated_tag_results = Some(include);
        self
    }

    pub fn merge_plain_keyword_results(mut self, merge: bool) -> Self {
        self.merge_plain_keyword_results = Some(merge);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    fn to_parameters(&self, word: &str) -> Parameters {
        Parameters::new()
            .with("word", word)
            .with(
                "search_target",
                self.search_target
                    .unwrap_or(SearchTarget::PartialMatchForTags),
            )
            .with("sort", self.sort.unwrap_or(SearchSort::DateDesc))
            .with_opt("duration", self.duration)
            .with_opt(
                "include_translated_tag_results",
                self.include_translated_tag_results,
            )
            .with_opt(
                "merge_plain_keyword_results",
                self.merge_plain_keyword_results,
            )
            .with("filter", Filter::ForIos)
            .with_opt("offset", self.offset)
    }
}

/// Search API
pub struct SearchApi {
    context: Arc<PixivContext>,
}

impl SearchApi {
    /// Create a new SearchApi instance
    pub fn new(context: Arc<PixivContext>) -> Self {
        Self { context }
    }

    /// GET /v1/search/illust
    pub async fn illust(
        &self,
        word: &str,
        options: &SearchOptions,
    ) -> Result<Paginated<IllustCollection>, PixivError> {
        self.context
            .call_paginated(&SEARCH_ILLUST, options.to_parameters(word))
            .await
    }

    /// GET /v1/search/novel
    pub async fn novel(
        &self,
        word: &str,
        options: &SearchOptions,
    ) -> Result<Paginated<NovelCollection>, PixivError> {
        self.context
            .call_paginated(&SEARCH_NOVEL, options.to_parameters(word))
            .await
    }

    /// GET /v1/search/user
    pub async fn user(
        &self,
        word: &str,
        offset: Option<u32>,
    ) -> Result<Paginated<UserPreviews>, PixivError> {
        let parameters = Parameters::new()
            .with("word", word)
            .with("filter", Filter::ForIos)
            .with_opt("offset", offset);
        self.context.call_paginated(&SEARCH_USER, parameters).await
    }
}

impl PixivApi for SearchApi {
    fn context(&self) -> &PixivContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "search"
    }
}
