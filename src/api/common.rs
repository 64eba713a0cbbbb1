//! Common request parameter values
//!
//! Typed values for the enumerated query / form parameters shared by several
//! resource APIs. Each converts into a [`ParamValue`] with the exact wire
//! spelling. [`LossesCollection`] is the untyped list page some list
//! responses come back as.
//!
//! ## Usage
//!
//! ```rust
//! use pixiv_app_sdk::api::common::{Restrict, SearchSort};
//! use pixiv_app_sdk::types::Parameters;
//!
//! let params = Parameters::new()
//!     .with("restrict", Restrict::Private)
//!     .with("sort", SearchSort::PopularDesc);
//! assert_eq!(params.to_query_string(), "restrict=private&sort=popular_desc");
//! ```

use serde::{Deserialize, Serialize};

use crate::pagination::{page_collection, NextUrl};
use crate::types::{JsonObject, ParamValue};

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for ParamValue {
            fn from(value: $name) -> Self {
                ParamValue::Text(value.as_str().to_string())
            }
        }
    };
}

wire_enum! {
    /// Bookmark / follow visibility
    pub enum Restrict {
        Public => "public",
        Private => "private",
    }
}

wire_enum! {
    /// Content filter the iOS app sends on listing endpoints
    pub enum Filter {
        ForIos => "for_ios",
    }
}

wire_enum! {
    pub enum ContentType {
        Illust => "illust",
        Manga => "manga",
    }
}

wire_enum! {
    /// How a search keyword is matched
    pub enum SearchTarget {
        PartialMatchForTags => "partial_match_for_tags",
        ExactMatchForTags => "exact_match_for_tags",
        TitleAndCaption => "title_and_caption",
        Text => "text",
        Keyword => "keyword",
    }
}

wire_enum! {
    pub enum SearchSort {
        DateDesc => "date_desc",
        DateAsc => "date_asc",
        PopularDesc => "popular_desc",
    }
}

wire_enum! {
    pub enum SearchDuration {
        WithinLastDay => "within_last_day",
        WithinLastWeek => "within_last_week",
        WithinLastMonth => "within_last_month",
    }
}

wire_enum! {
    pub enum RankingMode {
        Day => "day",
        Week => "week",
        Month => "month",
        DayMale => "day_male",
        DayFemale => "day_female",
        WeekOriginal => "week_original",
        WeekRookie => "week_rookie",
        DayManga => "day_manga",
        DayR18 => "day_r18",
        WeekR18 => "week_r18",
    }
}

/// A page of `losses` entries, kept as raw JSON objects
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LossesCollection {
    #[serde(default)]
    pub losses: Vec<JsonObject>,
    #[serde(default)]
    pub next_url: Option<NextUrl>,
}

page_collection!(LossesCollection, losses, JsonObject);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_spelling() {
        assert_eq!(Restrict::Public.as_str(), "public");
        assert_eq!(Filter::ForIos.to_string(), "for_ios");
        assert_eq!(
            SearchTarget::PartialMatchForTags.as_str(),
            "partial_match_for_tags"
        );
        assert_eq!(SearchDuration::WithinLastWeek.as_str(), "within_last_week");
        assert_eq!(RankingMode::DayR18.as_str(), "day_r18");
        assert_eq!(ContentType::Manga.as_str(), "manga");
    }

    #[test]
    fn test_into_param_value() {
        assert_eq!(
            ParamValue::from(SearchSort::DateAsc),
            ParamValue::Text("date_asc".to_string())
        );
    }

    #[test]
    fn test_losses_collection_page() {
        use crate::pagination::PageCollection;

        let page: LossesCollection = serde_json::from_str(
            r#"{"losses": [{"id": 1}, {"id": 2}], "next_url": "https://app-api.pixiv.net/v1/x?offset=30"}"#,
        )
        .unwrap();
        assert_eq!(page.items().len(), 2);
        assert_eq!(page.items()[1]["id"], 2);
        assert!(page.next_url().unwrap().as_str().ends_with("offset=30"));

        let last: LossesCollection = serde_json::from_str(r#"{"losses": []}"#).unwrap();
        assert!(last.next_url().is_none());
    }
}
