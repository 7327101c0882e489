// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::domain::contacts::models::ContactAddress;

/// The typing state of a conversation partner (XEP-0085 style).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum ChatState {
    #[default]
    Active,
    Composing,
    Paused,
    Inactive,
    Gone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatStateNotificationEvent {
    pub contact: ContactAddress,
    pub chat_state: ChatState,
    /// Set when sending the notification failed.
    pub error: Option<String>,
}

pub trait ChatStateNotificationsListener: Send + Sync {
    fn chat_state_notification_received(&self, event: &ChatStateNotificationEvent);
    fn chat_state_notification_delivery_failed(&self, event: &ChatStateNotificationEvent);
}
