//! pixiv app API SDK for Rust
//!
//! A typed async client for the API used by the pixiv mobile apps
//! (`app-api.pixiv.net`) and its OAuth server (`oauth.secure.pixiv.net`).
//!
//! ## API Coverage
//!
//! | Category | Endpoints |
//! |----------|-----------|
//! | Auth (password, refresh token, PKCE) | 1 |
//! | Illustrations and bookmarks | 8 |
//! | Novels | 4 |
//! | Search | 3 |
//! | Users | 5 |
//! | Browsing history | 4 |
//! | Notifications | 1 |
//! | Spotlight (pixivision) | 1 |
//!
//! Every request carries the iOS app identity headers. When a client hash
//! is configured it is also signed with `X-Client-Time` / `X-Client-Hash`,
//! and it carries `Authorization: Bearer` whenever the session holds a token.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pixiv_app_sdk::{Pixiv, types::{ClientHash, ClientId, ClientSecret}};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pixiv = Pixiv::builder()
//!         .client_id(ClientId::new("client_id")?)
//!         .client_secret(ClientSecret::new("client_secret")?)
//!         .client_hash(ClientHash::new("client_hash"))
//!         .build()?;
//!
//!     pixiv.login_with_password("user", "password").await?;
//!
//!     let detail = pixiv.illust().detail(59580629).await?;
//!     println!("{}", detail.illust.title);
//!
//!     let page = pixiv.browsing_history().novels().await?;
//!     let everything = page.collect_items(5).await?;
//!     println!("{} novels", everything.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Resource APIs (auth, illust, novel, search, user, ...)
//! - [`client`] - Transport, header composition and the [`Pixiv`] facade
//! - [`clock`] - Injectable time source for request signing
//! - [`crypto`] - Request signature and PKCE
//! - [`error`] - Error types
//! - [`middleware`] - Tower layers around the HTTP round trip
//! - [`pagination`] - `next_url` cursor following
//! - [`session`] - Shared OAuth token state
//! - [`types`] - Identifiers, parameters, responses and data models
//!
//! ## Error Handling
//!
//! Every fallible call returns [`PixivError`]:
//!
//! ```rust,ignore
//! use pixiv_app_sdk::PixivError;
//!
//! match pixiv.novel().text(1).await {
//!     Ok(text) => println!("{}", text.novel_text),
//!     Err(PixivError::AuthenticationFailed(response)) => {
//!         eprintln!("login again: {:?}", response.error_body());
//!     }
//!     Err(PixivError::HttpFailure { status, .. }) => eprintln!("HTTP {status}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod api;
pub mod client;
pub mod clock;
pub mod crypto;
pub mod error;
pub mod middleware;
pub mod pagination;
pub mod session;
pub mod types;

pub use client::{Pixiv, PixivBuilder, PixivClient, PixivClientBuilder};
pub use error::PixivError;
pub use pagination::{NextUrl, PageCollection, Paginated};
pub use session::{Session, SessionTokens};
