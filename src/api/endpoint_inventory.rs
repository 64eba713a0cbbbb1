//! Endpoint descriptor table
//!
//! Each resource API method maps to one [`Endpoint`]. The descriptor carries
//! everything that differs between calls apart from the parameters: host,
//! HTTP method, path and whether a bearer token is mandatory.

use crate::client::PixivClient;
use crate::types::{OutgoingRequest, Parameters};

/// Which base URL an endpoint path is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiHost {
    /// `https://app-api.pixiv.net`
    App,
    /// `https://oauth.secure.pixiv.net`
    OAuth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Static description of one API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub id: &'static str,
    pub category: &'static str,
    pub host: ApiHost,
    pub method: HttpMethod,
    pub path: &'static str,
    pub requires_auth: bool,
}

impl Endpoint {
    const fn app(
        id: &'static str,
        category: &'static str,
        method: HttpMethod,
        path: &'static str,
        requires_auth: bool,
    ) -> Self {
        Self {
            id,
            category,
            host: ApiHost::App,
            method,
            path,
            requires_auth,
        }
    }

    /// Absolute URL of this endpoint for `client`.
    pub fn url(&self, client: &PixivClient) -> String {
        let base = match self.host {
            ApiHost::App => client.api_base_url(),
            ApiHost::OAuth => client.oauth_base_url(),
        };
        format!("{base}{}", self.path)
    }

    /// Build the outgoing request for one call.
    pub fn request(&self, client: &PixivClient, parameters: Parameters) -> OutgoingRequest {
        let url = self.url(client);
        match self.method {
            HttpMethod::Get => OutgoingRequest::get(url, parameters, self.requires_auth),
            HttpMethod::Post => OutgoingRequest::post(url, parameters, self.requires_auth),
        }
    }
}

use HttpMethod::{Get, Post};

pub const AUTH_TOKEN: Endpoint = Endpoint {
    id: "auth.token",
    category: "auth",
    host: ApiHost::OAuth,
    method: Post,
    path: "/auth/token",
    requires_auth: false,
};

pub const ILLUST_DETAIL: Endpoint =
    Endpoint::app("illust.detail", "illust", Get, "/v1/illust/detail", true);
pub const ILLUST_RECOMMENDED: Endpoint =
    Endpoint::app("illust.recommended", "illust", Get, "/v1/illust/recommended", true);
pub const ILLUST_RANKING: Endpoint =
    Endpoint::app("illust.ranking", "illust", Get, "/v1/illust/ranking", true);
pub const ILLUST_RELATED: Endpoint =
    Endpoint::app("illust.related", "illust", Get, "/v2/illust/related", true);
pub const ILLUST_BOOKMARK_USERS: Endpoint = Endpoint::app(
    "illust.bookmark.users",
    "illust",
    Get,
    "/v1/illust/bookmark/users",
    true,
);
pub const ILLUST_BOOKMARK_DETAIL: Endpoint = Endpoint::app(
    "illust.bookmark.detail",
    "illust",
    Get,
    "/v2/illust/bookmark/detail",
    true,
);
pub const ILLUST_BOOKMARK_ADD: Endpoint = Endpoint::app(
    "illust.bookmark.add",
    "illust",
    Post,
    "/v2/illust/bookmark/add",
    true,
);
pub const ILLUST_BOOKMARK_DELETE: Endpoint = Endpoint::app(
    "illust.bookmark.delete",
    "illust",
    Post,
    "/v1/illust/bookmark/delete",
    true,
);

pub const NOVEL_DETAIL: Endpoint =
    Endpoint::app("novel.detail", "novel", Get, "/v2/novel/detail", true);
pub const NOVEL_TEXT: Endpoint = Endpoint::app("novel.text", "novel", Get, "/v1/novel/text", true);
pub const NOVEL_RANKING: Endpoint =
    Endpoint::app("novel.ranking", "novel", Get, "/v1/novel/ranking", true);
pub const NOVEL_RECOMMENDED: Endpoint =
    Endpoint::app("novel.recommended", "novel", Get, "/v1/novel/recommended", true);

pub const SEARCH_ILLUST: Endpoint =
    Endpoint::app("search.illust", "search", Get, "/v1/search/illust", true);
pub const SEARCH_NOVEL: Endpoint =
    Endpoint::app("search.novel", "search", Get, "/v1/search/novel", true);
pub const SEARCH_USER: Endpoint =
    Endpoint::app("search.user", "search", Get, "/v1/search/user", true);

pub const USER_DETAIL: Endpoint = Endpoint::app("user.detail", "user", Get, "/v1/user/detail", true);
pub const USER_ILLUSTS: Endpoint =
    Endpoint::app("user.illusts", "user", Get, "/v1/user/illusts", true);
pub const USER_NOVELS: Endpoint = Endpoint::app("user.novels", "user", Get, "/v1/user/novels", true);
pub const USER_BOOKMARKS_ILLUST: Endpoint = Endpoint::app(
    "user.bookmarks.illust",
    "user",
    Get,
    "/v1/user/bookmarks/illust",
    true,
);
pub const USER_FOLLOWING: Endpoint =
    Endpoint::app("user.following", "user", Get, "/v1/user/following", true);

pub const BROWSING_HISTORY_NOVEL_ADD: Endpoint = Endpoint::app(
    "browsing_history.novel.add",
    "browsing_history",
    Post,
    "/v2/user/browsing-history/novel/add",
    true,
);
pub const BROWSING_HISTORY_NOVELS: Endpoint = Endpoint::app(
    "browsing_history.novels",
    "browsing_history",
    Get,
    "/v1/user/browsing-history/novels",
    true,
);
pub const BROWSING_HISTORY_ILLUST_ADD: Endpoint = Endpoint::app(
    "browsing_history.illust.add",
    "browsing_history",
    Post,
    "/v2/user/browsing-history/illust/add",
    true,
);
pub const BROWSING_HISTORY_ILLUSTS: Endpoint = Endpoint::app(
    "browsing_history.illusts",
    "browsing_history",
    Get,
    "/v1/user/browsing-history/illusts",
    true,
);

pub const NOTIFICATION_HAS_UNREAD: Endpoint = Endpoint::app(
    "notification.has_unread",
    "notification",
    Get,
    "/v1/notification/has-unread-notifications",
    true,
);

pub const SPOTLIGHT_ARTICLES: Endpoint = Endpoint::app(
    "spotlight.articles",
    "spotlight",
    Get,
    "/v1/spotlight/articles",
    false,
);

static ENDPOINT_INVENTORY: [Endpoint; 27] = [
    AUTH_TOKEN,
    ILLUST_DETAIL,
    ILLUST_RECOMMENDED,
    ILLUST_RANKING,
    ILLUST_RELATED,
    ILLUST_BOOKMARK_USERS,
    ILLUST_BOOKMARK_DETAIL,
    ILLUST_BOOKMARK_ADD,
    ILLUST_BOOKMARK_DELETE,
    NOVEL_DETAIL,
    NOVEL_TEXT,
    NOVEL_RANKING,
    NOVEL_RECOMMENDED,
    SEARCH_ILLUST,
    SEARCH_NOVEL,
    SEARCH_USER,
    USER_DETAIL,
    USER_ILLUSTS,
    USER_NOVELS,
    USER_BOOKMARKS_ILLUST,
    USER_FOLLOWING,
    BROWSING_HISTORY_NOVEL_ADD,
    BROWSING_HISTORY_NOVELS,
    BROWSING_HISTORY_ILLUST_ADD,
    BROWSING_HISTORY_ILLUSTS,
    NOTIFICATION_HAS_UNREAD,
    SPOTLIGHT_ARTICLES,
];

/// Every endpoint this crate calls.
pub fn get_endpoint_inventory() -> &'static [Endpoint] {
    &ENDPOINT_INVENTORY
}

/// Look an endpoint up by its id, e.g. `"illust.detail"`.
pub fn find_endpoint(id: &str) -> Option<&'static Endpoint> {
    ENDPOINT_INVENTORY.iter().find(|endpoint| endpoint.id == id)
}
