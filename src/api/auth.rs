//! pixiv OAuth API
//!
//! Exchanges credentials for tokens and writes them into the client's
//! [`Session`](crate::session::Session). This is the only component that
//! updates the session.

use std::sync::Arc;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::api::endpoint_inventory::AUTH_TOKEN;
use crate::api::r#trait::{PixivApi, PixivContext};
use crate::crypto::PkceChallenge;
use crate::error::PixivError;
use crate::session::SessionTokens;
use crate::types::{AccessToken, Parameters, RefreshToken};

/// Redirect target registered for the app's authorization code flow.
pub const REDIRECT_URI: &str = "https://app-api.pixiv.net/web/v1/users/auth/pixiv/callback";
const LOGIN_PATH: &str = "/web/v1/login";

#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthProfileImageUrls {
    #[serde(default)]
    pub px_16x16: Option<String>,
    #[serde(default)]
    pub px_50x50: Option<String>,
    #[serde(default)]
    pub px_170x170: Option<String>,
}

/// Account returned alongside the tokens
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub mail_address: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub x_restrict: i32,
    #[serde(default)]
    pub is_mail_authorized: bool,
    #[serde(default)]
    pub profile_image_urls: AuthProfileImageUrls,
}

/// Response from `POST /auth/token`
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthResponse {
    pub access_token: AccessToken,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

impl AuthResponse {
    fn session_tokens(&self) -> SessionTokens {
        let refresh_token = self
            .refresh_token
            .as_deref()
            .and_then(|t| RefreshToken::new(t).ok());
        SessionTokens::new(self.access_token.clone(), refresh_token)
    }
}

/// Token endpoint body, flat or nested under `response` as older
/// deployments send it.
struct AuthPayload(AuthResponse);

impl<'de> Deserialize<'de> for AuthPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = serde_json::Value::deserialize(deserializer)?;
        if matches!(value.get("response"), Some(serde_json::Value::Object(_))) {
            value = value["response"].take();
        }
        AuthResponse::deserialize(value)
            .map(Self)
            .map_err(de::Error::custom)
    }
}

/// pixiv authentication API
pub struct AuthApi {
    context: Arc<PixivContext>,
}

impl AuthApi {
    /// Create a new AuthApi instance
    pub fn new(context: Arc<PixivContext>) -> Self {
        Self { context }
    }

    fn client_parameters(&self, grant_type: &str) -> Parameters {
        let credentials = self.context.client().credentials();
        Parameters::new()
            .with("client_id", credentials.client_id.as_str())
            .with("client_secret", credentials.client_secret.as_str())
            .with("grant_type", grant_type)
    }

    async fn request_token(
        &self,
        grant_type: &str,
        parameters: Parameters,
    ) -> Result<AuthResponse, PixivError> {
        let AuthPayload(response) = self.context.call(&AUTH_TOKEN, parameters).await?;

        self.context.session().store(response.session_tokens()).await;

        log::info!(
            "[Pixiv] authenticated via {} (expires_in={}s)",
            grant_type,
            response.expires_in
        );
        Ok(response)
    }

    /// Log in with account name and password.
    ///
    /// POST /auth/token `grant_type=password`
    pub async fn login_with_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthResponse, PixivError> {
        let parameters = self
            .client_parameters("password")
            .with("username", username)
            .with("password", password)
            .with("get_secure_url", true);
        self.request_token("password", parameters).await
    }

    /// Exchange the session's refresh token for a new token pair.
    ///
    /// # Errors
    /// `PixivError::InvalidState` when the session has no refresh token.
    pub async fn refresh(&self) -> Result<AuthResponse, PixivError> {
        let refresh_token = self.context.session().refresh_token().await.ok_or_else(|| {
            PixivError::InvalidState("no refresh token in the current session".to_string())
        })?;
        self.refresh_with(&refresh_token).await
    }

    /// Exchange an explicit refresh token, e.g. one persisted from an
    /// earlier run.
    ///
    /// POST /auth/token `grant_type=refresh_token`
    pub async fn refresh_with(
        &self,
        refresh_token: &RefreshToken,
    ) -> Result<AuthResponse, PixivError> {
        let parameters = self
            .client_parameters("refresh_token")
            .with("refresh_token", refresh_token.as_str())
            .with("get_secure_url", true);
        self.request_token("refresh_token", parameters).await
    }

    /// Browser URL that starts the authorization code login.
    pub fn login_url(&self, challenge: &PkceChallenge) -> String {
        let parameters = Parameters::new()
            .with("code_challenge", challenge.code_challenge.as_str())
            .with("code_challenge_method", "S256")
            .with("client", "pixiv-android");
        parameters.append_to_url(&self.context.client().api_url(LOGIN_PATH))
    }

    /// Finish the authorization code login with the `code` from the
    /// callback and the verifier of the challenge used in
    /// [`login_url`](Self::login_url).
    ///
    /// POST /auth/token `grant_type=authorization_code`
    pub async fn login_with_code(
        &self,
        code: &str,
        code_verifier: &str,
    ) -> Result<AuthResponse, PixivError> {
        let parameters = self
            .client_parameters("authorization_code")
            .with("code", code)
            .with("code_verifier", code_verifier)
            .with("redirect_uri", REDIRECT_URI)
            .with("include_policy", true);
        self.request_token("authorization_code", parameters).await
    }

    /// Forget the current tokens.
    pub async fn logout(&self) {
        self.context.session().clear().await;
    }
}

impl PixivApi for AuthApi {
    fn context(&self) -> &PixivContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "auth"
    }
}
