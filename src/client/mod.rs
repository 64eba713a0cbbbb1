//! pixiv HTTP client module
//!
//! This module contains the transport ([`PixivClient`]), per-request header
//! composition, the [`Pixiv`] facade and its builder.

mod pixiv_client;
pub use pixiv_client::{PixivClient, PixivClientBuilder};

pub mod headers;
pub use headers::{compose_headers, DeviceInfo};

mod pixiv;
pub use pixiv::Pixiv;

mod builder;
pub use builder::PixivBuilder;
