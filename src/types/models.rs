//! Data carriers shared across resource APIs.

use serde::{Deserialize, Serialize};

/// Image URLs in the sizes the app API serves
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ImageUrls {
    #[serde(default)]
    pub square_medium: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProfileImageUrls {
    #[serde(default)]
    pub medium: Option<String>,
}

/// Account summary embedded in works and previews
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub profile_image_urls: ProfileImageUrls,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub is_followed: Option<bool>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub translated_name: Option<String>,
    #[serde(default)]
    pub added_by_uploaded_user: Option<bool>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Series {
    pub id: u64,
    #[serde(default)]
    pub title: String,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MetaSinglePage {
    #[serde(default)]
    pub original_image_url: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MetaPage {
    #[serde(default)]
    pub image_urls: ImageUrls,
}

/// Illustration or manga work
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Illust {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    /// `illust`, `manga` or `ugoira`
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub image_urls: ImageUrls,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub restrict: i32,
    #[serde(default)]
    pub user: User,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub create_date: Option<String>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub sanity_level: i32,
    #[serde(default)]
    pub x_restrict: i32,
    #[serde(default)]
    pub series: Option<Series>,
    #[serde(default)]
    pub meta_single_page: MetaSinglePage,
    #[serde(default)]
    pub meta_pages: Vec<MetaPage>,
    #[serde(default)]
    pub total_view: u64,
    #[serde(default)]
    pub total_bookmarks: u64,
    #[serde(default)]
    pub is_bookmarked: bool,
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub is_muted: bool,
}

/// Novel work
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Novel {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub restrict: i32,
    #[serde(default)]
    pub x_restrict: i32,
    #[serde(default)]
    pub is_original: bool,
    #[serde(default)]
    pub image_urls: ImageUrls,
    #[serde(default)]
    pub create_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub text_length: u64,
    #[serde(default)]
    pub user: User,
    #[serde(default)]
    pub series: Option<Series>,
    #[serde(default)]
    pub is_bookmarked: bool,
    #[serde(default)]
    pub total_bookmarks: u64,
    #[serde(default)]
    pub total_view: u64,
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub is_muted: bool,
}

/// A user with a few of their recent works
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UserPreview {
    pub user: User,
    #[serde(default)]
    pub illusts: Vec<Illust>,
    #[serde(default)]
    pub novels: Vec<Novel>,
    #[serde(default)]
    pub is_muted: bool,
}

/// Privacy policy notice attached to some listings
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PrivacyPolicy {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illust_parsing() {
        let json = r#"{
            "id": 59580629,
            "title": "Sample",
            "type": "illust",
            "image_urls": {"square_medium": "https://i.pximg.net/a.jpg"},
            "user": {"id": 11, "name": "pixiv事務局", "account": "pixiv"},
            "tags": [{"name": "オリジナル", "translated_name": "original"}],
            "page_count": 1,
            "total_bookmarks": 120,
            "is_bookmarked": false
        }"#;

        let illust: Illust = serde_json::from_str(json).unwrap();
        assert_eq!(illust.id, 59580629);
        assert_eq!(illust.kind, "illust");
        assert_eq!(illust.user.name, "pixiv事務局");
        assert_eq!(illust.tags[0].translated_name.as_deref(), Some("original"));
        assert!(illust.meta_pages.is_empty());
    }

    #[test]
    fn test_user_preview_minimal() {
        let json = r#"{"user": {"id": 1}}"#;
        let preview: UserPreview = serde_json::from_str(json).unwrap();
        assert_eq!(preview.user.id, 1);
        assert!(preview.illusts.is_empty());
        assert!(!preview.is_muted);
    }
}
