//! Middleware components for the pixiv client.
//!
//! Layers wrap the raw `reqwest` round trip, after headers have been
//! composed and before the status is classified. They are installed with
//! [`PixivBuilder::with_middleware`](crate::client::PixivBuilder::with_middleware).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pixiv_app_sdk::middleware::LoggingMiddleware;
//! use pixiv_app_sdk::Pixiv;
//!
//! let pixiv = Pixiv::builder()
//!     .client_id(client_id)
//!     .client_secret(client_secret)
//!     .with_middleware(LoggingMiddleware::new().verbose())
//!     .build()?;
//! ```

// Re-export tower types for convenience
pub use tower::{Layer, Service, ServiceBuilder};

mod logging;

pub use logging::{redact_url, LoggingMiddleware, LoggingMiddlewareService, SENSITIVE_FIELDS};
