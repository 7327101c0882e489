// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::contacts::models::ContactAddress;

use super::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageEventType {
    Received,
    Delivered,
    DeliveryFailed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEvent {
    /// The sender of a received message or the recipient of a sent one.
    pub peer: ContactAddress,
    pub message: Message,
    pub timestamp: DateTime<Utc>,
    pub r#type: MessageEventType,
}

pub trait MessageListener: Send + Sync {
    fn message_received(&self, event: &MessageEvent);
    fn message_delivered(&self, event: &MessageEvent);
    fn message_delivery_failed(&self, event: &MessageEvent);
}
