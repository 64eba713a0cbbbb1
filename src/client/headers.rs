//! Per-request header composition
//!
//! Fixed device headers, the optional client signature and the bearer token
//! are assembled fresh for each call; nothing is cached between requests.

use chrono::{DateTime, FixedOffset};
use http::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, USER_AGENT};

use crate::crypto::ClientSignature;
use crate::error::PixivError;
use crate::session::SessionTokens;
use crate::types::{ClientCredentials, OutgoingRequest};

pub(crate) const DEFAULT_APP_VERSION: &str = "7.7.7";
pub(crate) const DEFAULT_OS_VERSION: &str = "13.1.3";
const APP_OS: &str = "ios";
const DEVICE_MODEL: &str = "iPhone11,2";

pub const APP_OS_HEADER: HeaderName = HeaderName::from_static("app-os");
pub const APP_OS_VERSION_HEADER: HeaderName = HeaderName::from_static("app-os-version");
pub const APP_VERSION_HEADER: HeaderName = HeaderName::from_static("app-version");
pub const CLIENT_TIME_HEADER: HeaderName = HeaderName::from_static("x-client-time");
pub const CLIENT_HASH_HEADER: HeaderName = HeaderName::from_static("x-client-hash");

/// App and OS versions the client identifies itself with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub app_version: String,
    pub os_version: String,
}

impl DeviceInfo {
    pub fn new(app_version: impl Into<String>, os_version: impl Into<String>) -> Self {
        Self {
            app_version: app_version.into(),
            os_version: os_version.into(),
        }
    }

    pub fn user_agent(&self) -> String {
        format!(
            "PixivIOSApp/{} (iOS {}; {})",
            self.app_version, self.os_version, DEVICE_MODEL
        )
    }
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self::new(DEFAULT_APP_VERSION, DEFAULT_OS_VERSION)
    }
}

/// Build the header set for one outgoing request.
///
/// # Errors
/// - `PixivError::InvalidState` when the request requires authentication and
///   the session holds no access token
/// - `PixivError::InvalidHeader` when a version string or token is not a
///   valid header value
pub fn compose_headers(
    request: &OutgoingRequest,
    session: Option<&SessionTokens>,
    credentials: &ClientCredentials,
    device: &DeviceInfo,
    now: &DateTime<FixedOffset>,
) -> Result<HeaderMap, PixivError> {
    let mut headers = HeaderMap::new();
    headers.insert(APP_OS_HEADER, HeaderValue::from_static(APP_OS));
    headers.insert(
        APP_OS_VERSION_HEADER,
        HeaderValue::from_str(&device.os_version)?,
    );
    headers.insert(
        APP_VERSION_HEADER,
        HeaderValue::from_str(&device.app_version)?,
    );
    headers.insert(USER_AGENT, HeaderValue::from_str(&device.user_agent())?);

    if let Some(signature) = ClientSignature::generate(now, &credentials.client_hash) {
        headers.insert(
            CLIENT_TIME_HEADER,
            HeaderValue::from_str(&signature.client_time)?,
        );
        headers.insert(
            CLIENT_HASH_HEADER,
            HeaderValue::from_str(&signature.client_hash)?,
        );
    }

    if request.requires_authentication && session.is_none() {
        return Err(PixivError::InvalidState(format!(
            "{} {} requires authentication but no access token is set",
            request.method, request.url
        )));
    }

    if let Some(tokens) = session {
        let mut value =
            HeaderValue::from_str(&format!("Bearer {}", tokens.access_token.as_str()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}
