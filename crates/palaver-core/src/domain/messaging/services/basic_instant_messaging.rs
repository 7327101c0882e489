// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::deps::{Clock, MessageUidProvider};
use crate::domain::connection::services::{assert_connected, ProtocolProvider};
use crate::domain::contacts::models::ContactAddress;
use crate::domain::messaging::models::{
    ContentEncoding, Message, MessageEvent, MessageEventType, MessageListener, MessageUid,
};
use crate::domain::shared::models::OperationError;
use crate::util::ListenerRegistry;

use super::MessageTransport;

/// One-to-one messaging of an account.
pub struct BasicInstantMessaging {
    provider: Arc<dyn ProtocolProvider>,
    transport: Arc<dyn MessageTransport>,
    uid_provider: Arc<dyn MessageUidProvider>,
    clock: Arc<dyn Clock>,
    listeners: ListenerRegistry<dyn MessageListener>,
}

impl BasicInstantMessaging {
    pub fn new(
        provider: Arc<dyn ProtocolProvider>,
        transport: Arc<dyn MessageTransport>,
        uid_provider: Arc<dyn MessageUidProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            provider,
            transport,
            uid_provider,
            clock,
            listeners: ListenerRegistry::new("messages"),
        }
    }

    pub fn add_message_listener(&self, listener: Arc<dyn MessageListener>) {
        self.listeners.add(listener);
    }

    pub fn remove_message_listener(&self, listener: &Arc<dyn MessageListener>) {
        self.listeners.remove(listener);
    }

    /// Creates a message with a freshly generated uid.
    pub fn create_message(
        &self,
        content: impl Into<String>,
        encoding: ContentEncoding,
        subject: Option<String>,
    ) -> Message {
        self.create_message_with_uid(content, encoding, subject, self.uid_provider.next_uid())
    }

    /// Creates a message with a known uid, e.g. when correcting a previously sent message.
    pub fn create_message_with_uid(
        &self,
        content: impl Into<String>,
        encoding: ContentEncoding,
        subject: Option<String>,
        uid: MessageUid,
    ) -> Message {
        Message::new(uid, content, encoding, subject)
    }

    /// Sends `message` to `to`. Listeners receive `Delivered` or `DeliveryFailed` depending on
    /// the outcome. Nothing is sent and nothing fired if the provider is not registered.
    pub async fn send_instant_message(
        &self,
        to: &ContactAddress,
        message: Message,
    ) -> Result<(), OperationError> {
        assert_connected(self.provider.as_ref())?;

        debug!(to = %to, uid = %message.uid(), "Sending message.");

        match self.transport.send_message(to, &message).await {
            Ok(()) => {
                self.fire_message_event(to.clone(), message, MessageEventType::Delivered);
                Ok(())
            }
            Err(err) => {
                warn!(to = %to, uid = %message.uid(), "Failed to send message. {}", err);
                self.fire_message_event(
                    to.clone(),
                    message,
                    MessageEventType::DeliveryFailed {
                        reason: err.to_string(),
                    },
                );
                Err(err.into())
            }
        }
    }

    /// Called by the protocol stack for incoming messages.
    pub fn handle_received_message(&self, from: ContactAddress, message: Message) {
        info!(from = %from, uid = %message.uid(), "Received message.");
        self.fire_message_event(from, message, MessageEventType::Received)
    }

    pub fn fire_message_event(
        &self,
        peer: ContactAddress,
        message: Message,
        event_type: MessageEventType,
    ) {
        let event = MessageEvent {
            peer,
            message,
            timestamp: self.clock.now(),
            r#type: event_type,
        };

        self.listeners.dispatch(|listener| match event.r#type {
            MessageEventType::Received => listener.message_received(&event),
            MessageEventType::Delivered => listener.message_delivered(&event),
            MessageEventType::DeliveryFailed { .. } => listener.message_delivery_failed(&event),
        });
    }
}
