//! Unified pixiv app API client

use std::sync::Arc;

use crate::api::auth::{AuthApi, AuthResponse};
use crate::api::browsing_history::BrowsingHistoryApi;
use crate::api::illust::IllustApi;
use crate::api::notification::NotificationApi;
use crate::api::novel::NovelApi;
use crate::api::search::SearchApi;
use crate::api::spotlight::SpotlightApi;
use crate::api::user::UserApi;
use crate::api::PixivContext;
use crate::crypto::PkceChallenge;
use crate::error::PixivError;
use crate::session::{Session, SessionTokens};

use super::builder::PixivBuilder;
use super::PixivClient;

/// Unified pixiv client
///
/// This is the main entry point for the SDK. Every resource API handle it
/// hands out shares one transport and one [`Session`], so a login through
/// [`auth`](Self::auth) is visible to all of them.
///
/// # Example
///
/// ```rust,ignore
/// use pixiv_app_sdk::Pixiv;
/// use pixiv_app_sdk::api::common::RankingMode;
/// use pixiv_app_sdk::types::{ClientHash, ClientId, ClientSecret, RefreshToken};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pixiv = Pixiv::builder()
///         .client_id(ClientId::new("client_id")?)
///         .client_secret(ClientSecret::new("client_secret")?)
///         .client_hash(ClientHash::new("client_hash"))
///         .build()?;
///
///     pixiv.auth().refresh_with(&RefreshToken::new("refresh_token")?).await?;
///
///     let ranking = pixiv.illust().ranking(RankingMode::Day, None, None).await?;
///     for illust in ranking.items() {
///         println!("{} {}", illust.id, illust.title);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Pixiv {
    context: Arc<PixivContext>,
}

impl std::fmt::Debug for Pixiv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pixiv")
            .field("client", self.context.client())
            .finish()
    }
}

impl Pixiv {
    pub fn builder() -> PixivBuilder {
        PixivBuilder::default()
    }

    pub fn client(&self) -> &PixivClient {
        self.context.client()
    }

    pub fn context(&self) -> &Arc<PixivContext> {
        &self.context
    }

    pub fn session(&self) -> &Arc<Session> {
        self.context.session()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session().is_authenticated().await
    }

    /// Current tokens, e.g. to persist the refresh token.
    pub async fn tokens(&self) -> Option<SessionTokens> {
        self.session().snapshot().await
    }

    // Resource APIs

    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.context.clone())
    }

    pub fn illust(&self) -> IllustApi {
        IllustApi::new(self.context.clone())
    }

    pub fn novel(&self) -> NovelApi {
        NovelApi::new(self.context.clone())
    }

    pub fn search(&self) -> SearchApi {
        SearchApi::new(self.context.clone())
    }

    pub fn user(&self) -> UserApi {
        UserApi::new(self.context.clone())
    }

    pub fn browsing_history(&self) -> BrowsingHistoryApi {
        BrowsingHistoryApi::new(self.context.clone())
    }

    pub fn notification(&self) -> NotificationApi {
        NotificationApi::new(self.context.clone())
    }

    pub fn spotlight(&self) -> SpotlightApi {
        SpotlightApi::new(self.context.clone())
    }

    // Auth shortcuts

    pub async fn login_with_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthResponse, PixivError> {
        self.auth().login_with_password(username, password).await
    }

    pub async fn refresh(&self) -> Result<AuthResponse, PixivError> {
        self.auth().refresh().await
    }

    pub fn login_url(&self, challenge: &PkceChallenge) -> String {
        self.auth().login_url(challenge)
    }

    pub async fn login_with_code(
        &self,
        code: &str,
        code_verifier: &str,
    ) -> Result<AuthResponse, PixivError> {
        self.auth().login_with_code(code, code_verifier).await
    }

    pub async fn logout(&self) {
        self.auth().logout().await
    }
}

impl From<Arc<PixivContext>> for Pixiv {
    fn from(context: Arc<PixivContext>) -> Self {
        Self { context }
    }
}
