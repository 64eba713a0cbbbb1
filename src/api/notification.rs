use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::endpoint_inventory::NOTIFICATION_HAS_UNREAD;
use crate::api::r#trait::{PixivApi, PixivContext};
use crate::error::PixivError;
use crate::types::Parameters;

#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UnreadNotifications {
    #[serde(default)]
    pub has_unread_notifications: bool,
}

/// Notification API
pub struct NotificationApi {
    context: Arc<PixivContext>,
}

impl NotificationApi {
    /// Create a new NotificationApi instance
    pub fn new(context: Arc<PixivContext>) -> Self {
        Self { context }
    }

    /// GET /v1/notification/has-unread-notifications
    pub async fn has_unread(&self) -> Result<bool, PixivError> {
        let response: UnreadNotifications = self
            .context
            .call(&NOTIFICATION_HAS_UNREAD, Parameters::new())
            .await?;
        Ok(response.has_unread_notifications)
    }
}

impl PixivApi for NotificationApi {
    fn context(&self) -> &PixivContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "notification"
    }
}
