// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use tracing::warn;

use crate::domain::connection::services::{assert_connected, ProtocolProvider};
use crate::domain::contacts::models::ContactAddress;
use crate::domain::messaging::models::{
    ChatState, ChatStateNotificationEvent, ChatStateNotificationsListener,
};
use crate::domain::shared::models::OperationError;
use crate::util::ListenerRegistry;

use super::ChatStateTransport;

pub struct ChatStateNotifications {
    provider: Arc<dyn ProtocolProvider>,
    transport: Arc<dyn ChatStateTransport>,
    listeners: ListenerRegistry<dyn ChatStateNotificationsListener>,
}

impl ChatStateNotifications {
    pub fn new(provider: Arc<dyn ProtocolProvider>, transport: Arc<dyn ChatStateTransport>) -> Self {
        Self {
            provider,
            transport,
            listeners: ListenerRegistry::new("chat_states"),
        }
    }

    pub fn add_chat_state_notifications_listener(
        &self,
        listener: Arc<dyn ChatStateNotificationsListener>,
    ) {
        self.listeners.add(listener);
    }

    pub fn remove_chat_state_notifications_listener(
        &self,
        listener: &Arc<dyn ChatStateNotificationsListener>,
    ) {
        self.listeners.remove(listener);
    }

    pub async fn send_chat_state_notification(
        &self,
        to: &ContactAddress,
        chat_state: ChatState,
    ) -> Result<(), OperationError> {
        assert_connected(self.provider.as_ref())?;

        if let Err(err) = self.transport.send_chat_state(to, chat_state).await {
            warn!(to = %to, %chat_state, "Failed to send chat state. {}", err);
            self.fire_chat_state_notification_delivery_failed(
                to.clone(),
                chat_state,
                err.to_string(),
            );
            return Err(err.into());
        }

        Ok(())
    }

    pub fn fire_chat_state_notification_received(
        &self,
        from: ContactAddress,
        chat_state: ChatState,
    ) {
        let event = ChatStateNotificationEvent {
            contact: from,
            chat_state,
            error: None,
        };
        self.listeners
            .dispatch(|listener| listener.chat_state_notification_received(&event));
    }

    pub fn fire_chat_state_notification_delivery_failed(
        &self,
        to: ContactAddress,
        chat_state: ChatState,
        error: String,
    ) {
        let event = ChatStateNotificationEvent {
            contact: to,
            chat_state,
            error: Some(error),
        };
        self.listeners
            .dispatch(|listener| listener.chat_state_notification_delivery_failed(&event));
    }
}
