//! Request signing and OAuth PKCE helpers
//!
//! The app API authenticates each call with an `X-Client-Time` /
//! `X-Client-Hash` pair derived from the client hash salt. The digest is fixed
//! by the upstream service and must not be changed.
//!
//! ## Usage
//!
//! ```rust
//! use pixiv_app_sdk::crypto::sign;
//!
//! let digest = sign("2024-01-01T00:00:00+00:00", "z");
//! assert_eq!(digest.len(), 32);
//! ```

pub mod pkce;
pub mod signature;

pub use pkce::PkceChallenge;
pub use signature::{format_client_time, sign, ClientSignature};
