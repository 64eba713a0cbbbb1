//! pixiv app API modules
//!
//! - [`auth`] - OAuth password, refresh token and PKCE logins
//! - [`illust`] - Illustration detail, rankings, recommendations and bookmarks
//! - [`novel`] - Novel detail, text, rankings and recommendations
//! - [`search`] - Illustration, novel and user search
//! - [`user`] - User detail, works, bookmarks and following
//! - [`browsing_history`] - Viewed works
//! - [`notification`] - Unread notification flag
//! - [`spotlight`] - pixivision articles
//! - [`common`] - Enumerated parameter values shared by the modules above
//! - [`endpoint_inventory`] - Static descriptors for every endpoint
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pixiv_app_sdk::api::common::RankingMode;
//!
//! let ranking = pixiv.illust().ranking(RankingMode::Day, None, None).await?;
//! for illust in ranking.items() {
//!     println!("{} {}", illust.id, illust.title);
//! }
//! ```

pub mod auth;
pub mod browsing_history;
pub mod common;
pub mod endpoint_inventory;
pub mod illust;
pub mod notification;
pub mod novel;
pub mod search;
pub mod spotlight;
pub mod r#trait;
pub mod user;

pub use auth::{AuthApi, AuthResponse, AuthUser};
pub use browsing_history::BrowsingHistoryApi;
pub use common::{
    ContentType, Filter, LossesCollection, RankingMode, Restrict, SearchDuration, SearchSort,
    SearchTarget,
};
pub use endpoint_inventory::{ApiHost, Endpoint, HttpMethod};
pub use illust::{BookmarkDetail, BookmarkDetailTag, IllustApi, IllustCollection, IllustDetail};
pub use notification::NotificationApi;
pub use novel::{NovelApi, NovelCollection, NovelDetail, NovelText};
pub use r#trait::{PixivApi, PixivContext};
pub use search::{SearchApi, SearchOptions};
pub use spotlight::{SpotlightApi, SpotlightArticle, SpotlightArticles, SpotlightCategory};
pub use user::{UserApi, UserCollection, UserDetail, UserPreviews, UserProfile};
