//! Cursor-following for list endpoints
//!
//! List responses carry a fully qualified `next_url`. A [`Paginated`] page
//! keeps a weak reference to the client that fetched it, so the next page can
//! be requested from the page alone. The reference never keeps the client
//! alive.

use std::fmt;
use std::sync::{Arc, Weak};

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

use crate::client::PixivClient;
use crate::error::PixivError;
use crate::types::{OutgoingRequest, Parameters};

/// Absolute `next_url` as sent by the server.
///
/// The original string is what the next request goes to; [`Url`] parsing
/// normalizes some inputs (default ports, unencoded spaces), so the parsed
/// form is kept only for inspection.
#[derive(Clone, PartialEq, Eq)]
pub struct NextUrl {
    raw: String,
    url: Url,
}

impl NextUrl {
    /// Parse an absolute URL, keeping `raw` as given.
    pub fn parse(raw: impl Into<String>) -> Result<Self, url::ParseError> {
        let raw = raw.into();
        let url = Url::parse(&raw)?;
        Ok(Self { raw, url })
    }

    /// The URL exactly as the server sent it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Debug for NextUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NextUrl").field(&self.raw).finish()
    }
}

impl fmt::Display for NextUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for NextUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(de::Error::custom)
    }
}

impl Serialize for NextUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// A deserialized list response that can be continued through `next_url`.
pub trait PageCollection: DeserializeOwned + Send {
    type Item;

    /// Items of this page.
    fn items(&self) -> &[Self::Item];

    /// Consume the page, keeping only its items.
    fn into_items(self) -> Vec<Self::Item>;

    /// Absolute URL of the next page, `None` on the final page.
    fn next_url(&self) -> Option<&NextUrl>;
}

/// Implements [`PageCollection`] for a struct with `next_url: Option<NextUrl>`
/// and a `Vec<Item>` field.
macro_rules! page_collection {
    ($collection:ty, $field:ident, $item:ty) => {
        impl $crate::pagination::PageCollection for $collection {
            type Item = $item;

            fn items(&self) -> &[Self::Item] {
                &self.$field
            }

            fn into_items(self) -> Vec<Self::Item> {
                self.$field
            }

            fn next_url(&self) -> Option<&$crate::pagination::NextUrl> {
                self.next_url.as_ref()
            }
        }
    };
}
pub(crate) use page_collection;

/// One page of a list endpoint, bound to the client that fetched it.
pub struct Paginated<C> {
    page: C,
    requires_authentication: bool,
    client: Weak<PixivClient>,
}

impl<C: fmt::Debug> fmt::Debug for Paginated<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginated")
            .field("page", &self.page)
            .field("requires_authentication", &self.requires_authentication)
            .field("client_alive", &(self.client.strong_count() > 0))
            .finish()
    }
}

impl<C: PageCollection> Paginated<C> {
    /// Bind `page` to `client` without taking ownership of it.
    pub fn bind(page: C, client: &Arc<PixivClient>, requires_authentication: bool) -> Self {
        Self {
            page,
            requires_authentication,
            client: Arc::downgrade(client),
        }
    }

    pub fn items(&self) -> &[C::Item] {
        self.page.items()
    }

    pub fn next_url(&self) -> Option<&NextUrl> {
        self.page.next_url()
    }

    pub fn has_next(&self) -> bool {
        self.page.next_url().is_some()
    }

    /// The full deserialized response, including fields beyond the items.
    pub fn page(&self) -> &C {
        &self.page
    }

    pub fn into_inner(self) -> C {
        self.page
    }

    pub fn into_items(self) -> Vec<C::Item> {
        self.page.into_items()
    }

    /// GET `next_url` verbatim and bind the result to the same client.
    ///
    /// # Errors
    /// - `PixivError::NoMoreResults` on the final page
    /// - `PixivError::InvalidState` if the owning client has been dropped
    /// - any transport, status or parse failure of the request itself
    pub async fn fetch_next(&self) -> Result<Paginated<C>, PixivError> {
        let next_url = self.next_url().ok_or(PixivError::NoMoreResults)?;
        let client = self.client.upgrade().ok_or_else(|| {
            PixivError::InvalidState("the client that fetched this page was dropped".to_string())
        })?;

        let request = OutgoingRequest::get(
            next_url.as_str(),
            Parameters::new(),
            self.requires_authentication,
        );
        let page: C = client.send_as(&request).await?;

        Ok(Self::bind(page, &client, self.requires_authentication))
    }

    /// Follow `next_url` until the final page or `max_pages` pages in total,
    /// collecting every item.
    pub async fn collect_items(self, max_pages: usize) -> Result<Vec<C::Item>, PixivError> {
        let mut pages_read = 1;
        let mut current = self;
        let mut items = Vec::new();

        loop {
            let next = if current.has_next() && pages_read < max_pages {
                Some(current.fetch_next().await?)
            } else {
                None
            };
            items.extend(current.into_items());

            match next {
                Some(page) => {
                    pages_read += 1;
                    current = page;
                }
                None => return Ok(items),
            }
        }
    }
}
