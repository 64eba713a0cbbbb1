use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::common::{Filter, RankingMode};
use crate::api::endpoint_inventory::{NOVEL_DETAIL, NOVEL_RANKING, NOVEL_RECOMMENDED, NOVEL_TEXT};
use crate::api::r#trait::{PixivApi, PixivContext};
use crate::error::PixivError;
use crate::pagination::{page_collection, NextUrl, Paginated};
use crate::types::{Novel, Parameters, PrivacyPolicy};

/// A page of novels
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NovelCollection {
    #[serde(default)]
    pub novels: Vec<Novel>,
    #[serde(default)]
    pub next_url: Option<NextUrl>,
    #[serde(default)]
    pub privacy_policy: Option<PrivacyPolicy>,
    /// Only on the first page of recommendations
    #[serde(default)]
    pub ranking_novels: Option<Vec<Novel>>,
    #[serde(default)]
    pub search_span_limit: Option<u64>,
}

page_collection!(NovelCollection, novels, Novel);

/// Response from `GET /v2/novel/detail`
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NovelDetail {
    pub novel: Novel,
}

/// Response from `GET /v1/novel/text`
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NovelText {
    #[serde(default)]
    pub novel_text: String,
    #[serde(default)]
    pub series_prev: Option<Novel>,
    #[serde(default)]
    pub series_next: Option<Novel>,
}

/// Novel API
pub struct NovelApi {
    context: Arc<PixivContext>,
}

impl NovelApi {
    /// Create a new NovelApi instance
    pub fn new(context: Arc<PixivContext>) -> Self {
        Self { context }
    }

    /// GET /v2/novel/detail
    pub async fn detail(&self, novel_id: u64) -> Result<NovelDetail, PixivError> {
        let parameters = Parameters::new().with("novel_id", novel_id);
        self.context.call(&NOVEL_DETAIL, parameters).await
    }

    /// GET /v1/novel/text
    pub async fn text(&self, novel_id: u64) -> Result<NovelText, PixivError> {
        let parameters = Parameters::new().with("novel_id", novel_id);
        self.context.call(&NOVEL_TEXT, parameters).await
    }

    /// GET /v1/novel/ranking
    pub async fn ranking(
        &self,
        mode: RankingMode,
        date: Option<NaiveDate>,
        offset: Option<u32>,
    ) -> Result<Paginated<NovelCollection>, PixivError> {
        let parameters = Parameters::new()
            .with("mode", mode)
            .with("filter", Filter::ForIos)
            .with_opt("date", date)
            .with_opt("offset", offset);
        self.context.call_paginated(&NOVEL_RANKING, parameters).await
    }

    /// GET /v1/novel/recommended
    pub async fn recommended(
        &self,
        include_ranking_novels: bool,
        offset: Option<u32>,
    ) -> Result<Paginated<NovelCollection>, PixivError> {
        let parameters = Parameters::new()
            .with("include_ranking_novels", include_ranking_novels)
            .with("filter", Filter::ForIos)
            .with_opt("offset", offset);
        self.context
            .call_paginated(&NOVEL_RECOMMENDED, parameters)
            .await
    }
}

impl PixivApi for NovelApi {
    fn context(&self) -> &PixivContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "novel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_novel_collection_parsing() {
        let json = r#"{
            "novels": [{"id": 10, "title": "first", "text_length": 1200}],
            "ranking_novels": [{"id": 11}],
            "privacy_policy": {"version": "1-ja", "message": "", "url": "https://www.pixiv.net/"},
            "next_url": "https://app-api.pixiv.net/v1/novel/recommended?offset=30"
        }"#;

        let collection: NovelCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.novels[0].text_length, 1200);
        assert_eq!(collection.ranking_novels.as_ref().unwrap()[0].id, 11);
        assert_eq!(
            collection.privacy_policy.unwrap().version.as_deref(),
            Some("1-ja")
        );
        assert!(collection.next_url.is_some());
    }

    #[test]
    fn test_novel_text_parsing() {
        let json = r#"{"novel_text": "本文", "series_prev": {"id": 1}, "series_next": null}"#;
        let text: NovelText = serde_json::from_str(json).unwrap();
        assert_eq!(text.novel_text, "本文");
        assert_eq!(text.series_prev.unwrap().id, 1);
        assert!(text.series_next.is_none());
    }
}
