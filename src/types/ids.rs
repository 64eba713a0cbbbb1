use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! redacted_debug {
    ($name:ident) => {
        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&"[REDACTED]").finish()
            }
        }
    };
}

/// OAuth client id of the mobile app
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("ClientId must not be empty".to_string());
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// OAuth client secret of the mobile app
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientSecret(String);

redacted_debug!(ClientSecret);

impl ClientSecret {
    pub fn new(secret: impl Into<String>) -> Result<Self, String> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err("ClientSecret must not be empty".to_string());
        }
        Ok(Self(secret))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Salt for the `X-Client-Hash` request signature.
///
/// An empty or whitespace-only hash disables request signing.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientHash(String);

redacted_debug!(ClientHash);

impl ClientHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// A hash that disables signing.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        !self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// OAuth bearer token
///
/// Deserialization applies the same non-empty check as [`AccessToken::new`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccessToken(String);

redacted_debug!(AccessToken);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Result<Self, String> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err("AccessToken must not be empty".to_string());
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccessToken {
    type Error = String;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::new(token)
    }
}

impl From<AccessToken> for String {
    fn from(token: AccessToken) -> Self {
        token.0
    }
}

/// OAuth refresh token
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RefreshToken(String);

redacted_debug!(RefreshToken);

impl RefreshToken {
    pub fn new(token: impl Into<String>) -> Result<Self, String> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err("RefreshToken must not be empty".to_string());
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Immutable app credentials supplied at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub client_hash: ClientHash,
}

impl ClientCredentials {
    pub fn new(client_id: ClientId, client_secret: ClientSecret, client_hash: ClientHash) -> Self {
        Self {
            client_id,
            client_secret,
            client_hash,
        }
    }
}
