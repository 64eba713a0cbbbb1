use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::common::Filter;
use crate::api::endpoint_inventory::SPOTLIGHT_ARTICLES;
use crate::api::r#trait::{PixivApi, PixivContext};
use crate::error::PixivError;
use crate::pagination::{page_collection, NextUrl, Paginated};
use crate::types::{ParamValue, Parameters};

/// pixivision article category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpotlightCategory {
    #[default]
    All,
    Illust,
    Manga,
    Cosplay,
}

impl SpotlightCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Illust => "illust",
            Self::Manga => "manga",
            Self::Cosplay => "cosplay",
        }
    }
}

impl From<SpotlightCategory> for ParamValue {
    fn from(value: SpotlightCategory) -> Self {
        ParamValue::Text(value.as_str().to_string())
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SpotlightArticle {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub pure_title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub article_url: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory_label: Option<String>,
}

/// A page of pixivision articles
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpotlightArticles {
    #[serde(default)]
    pub spotlight_articles: Vec<SpotlightArticle>,
    #[serde(default)]
    pub next_url: Option<NextUrl>,
}

page_collection!(SpotlightArticles, spotlight_articles, SpotlightArticle);

/// pixivision (spotlight) API
///
/// The only listing that works without logging in; the bearer token is still
/// sent when the session has one.
pub struct SpotlightApi {
    context: Arc<PixivContext>,
}

impl SpotlightApi {
    /// Create a new SpotlightApi instance
    pub fn new(context: Arc<PixivContext>) -> Self {
        Self { context }
    }

    /// GET /v1/spotlight/articles
    pub async fn articles(
        &self,
        category: SpotlightCategory,
        offset: Option<u32>,
    ) -> Result<Paginated<SpotlightArticles>, PixivError> {
        let parameters = Parameters::new()
            .with("filter", Filter::ForIos)
            .with("category", category)
            .with_opt("offset", offset);
        self.context
            .call_paginated(&SPOTLIGHT_ARTICLES, parameters)
            .await
    }
}

impl PixivApi for SpotlightApi {
    fn context(&self) -> &PixivContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "spotlight"
    }
}
