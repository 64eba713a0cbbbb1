//! `X-Client-Time` / `X-Client-Hash` computation

use chrono::{DateTime, FixedOffset};

use crate::types::ClientHash;

/// `yyyy-MM-ddTHH:mm:ss±hh:mm`
const CLIENT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Digest of `timestamp` followed by `secret`, as 32 lowercase hex characters.
///
/// MD5 is mandated by the upstream API for this header.
pub fn sign(timestamp: &str, secret: &str) -> String {
    let mut input = String::with_capacity(timestamp.len() + secret.len());
    input.push_str(timestamp);
    input.push_str(secret);
    format!("{:x}", md5::compute(input.as_bytes()))
}

/// Render `now` in the format expected by `X-Client-Time`.
pub fn format_client_time(now: &DateTime<FixedOffset>) -> String {
    now.format(CLIENT_TIME_FORMAT).to_string()
}

/// A computed signature header pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSignature {
    pub client_time: String,
    pub client_hash: String,
}

impl ClientSignature {
    /// Sign `now` with `hash`. Returns `None` when signing is disabled.
    pub fn generate(now: &DateTime<FixedOffset>, hash: &ClientHash) -> Option<Self> {
        if !hash.is_enabled() {
            return None;
        }

        let client_time = format_client_time(now);
        let client_hash = sign(&client_time, hash.as_str());
        Some(Self {
            client_time,
            client_hash,
        })
    }
}
