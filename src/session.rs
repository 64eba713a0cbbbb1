//! OAuth session state shared by every request
//!
//! The Authentication API is the only writer in normal operation; the header
//! composer reads a snapshot per request. The lock only makes individual reads
//! and writes atomic: a refresh racing an in-flight request may still send the
//! previous token.

use tokio::sync::RwLock;

use crate::types::{AccessToken, RefreshToken};

/// Tokens held by an authenticated session.
///
/// A refresh token never exists without an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: AccessToken,
    pub refresh_token: Option<RefreshToken>,
}

impl SessionTokens {
    pub fn new(access_token: AccessToken, refresh_token: Option<RefreshToken>) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

/// Mutable token pair owned by the top-level client
#[derive(Debug, Default)]
pub struct Session {
    tokens: RwLock<Option<SessionTokens>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(tokens: SessionTokens) -> Self {
        Self {
            tokens: RwLock::new(Some(tokens)),
        }
    }

    /// Copy of the current tokens, if authenticated.
    pub async fn snapshot(&self) -> Option<SessionTokens> {
        self.tokens.read().await.clone()
    }

    pub async fn access_token(&self) -> Option<AccessToken> {
        self.tokens
            .read()
            .await
            .as_ref()
            .map(|t| t.access_token.clone())
    }

    pub async fn refresh_token(&self) -> Option<RefreshToken> {
        self.tokens
            .read()
            .await
            .as_ref()
            .and_then(|t| t.refresh_token.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.tokens.read().await.is_some()
    }

    /// Replace both tokens at once.
    pub async fn store(&self, tokens: SessionTokens) {
        *self.tokens.write().await = Some(tokens);
    }

    pub async fn clear(&self) {
        *self.tokens.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(access: &str, refresh: Option<&str>) -> SessionTokens {
        SessionTokens::new(
            AccessToken::new(access).unwrap(),
            refresh.map(|r| RefreshToken::new(r).unwrap()),
        )
    }

    #[tokio::test]
    async fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(!session.is_authenticated().await);
        assert!(session.access_token().await.is_none());
        assert!(session.refresh_token().await.is_none());
    }

    #[tokio::test]
    async fn test_store_and_clear() {
        let session = Session::new();
        session.store(tokens("access", Some("refresh"))).await;

        assert_eq!(session.access_token().await.unwrap().as_str(), "access");
        assert_eq!(session.refresh_token().await.unwrap().as_str(), "refresh");

        session.clear().await;
        assert!(session.snapshot().await.is_none());
    }

    #[tokio::test]
    async fn test_store_replaces_both_tokens() {
        let session = Session::with_tokens(tokens("old", Some("old_refresh")));
        session.store(tokens("new", None)).await;

        let snapshot = session.snapshot().await.unwrap();
        assert_eq!(snapshot.access_token.as_str(), "new");
        assert!(snapshot.refresh_token.is_none());
    }
}
