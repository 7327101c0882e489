// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::{format_err, Result};
use chrono::Duration;
use mockall::predicate;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use palaver_core::domain::contacts::models::ContactAddress;
use palaver_core::domain::messaging::models::{
    ChatState, ChatStateNotificationEvent, ChatStateNotificationsListener, ContentEncoding,
    MessageEvent, MessageEventType, MessageListener,
};
use palaver_core::domain::messaging::services::{BasicInstantMessaging, ChatStateNotifications};
use palaver_core::domain::shared::models::RegistrationState;
use palaver_core::test::{
    mock_data, FixedClock, MockChatStateTransport, MockMessageTransport, MockProtocolProvider,
    SequentialMessageUidProvider,
};

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<(&'static str, MessageEvent)>>,
    chat_states: Mutex<Vec<ChatStateNotificationEvent>>,
}

impl MessageListener for Recorder {
    fn message_received(&self, event: &MessageEvent) {
        self.events.lock().push(("received", event.clone()))
    }

    fn message_delivered(&self, event: &MessageEvent) {
        self.events.lock().push(("delivered", event.clone()))
    }

    fn message_delivery_failed(&self, event: &MessageEvent) {
        self.events.lock().push(("delivery_failed", event.clone()))
    }
}

impl ChatStateNotificationsListener for Recorder {
    fn chat_state_notification_received(&self, event: &ChatStateNotificationEvent) {
        self.chat_states.lock().push(event.clone())
    }

    fn chat_state_notification_delivery_failed(&self, event: &ChatStateNotificationEvent) {
        self.chat_states.lock().push(event.clone())
    }
}

fn provider(state: RegistrationState) -> Arc<MockProtocolProvider> {
    let mut provider = MockProtocolProvider::new();
    provider
        .expect_account_id()
        .return_const(mock_data::account_id());
    provider.expect_registration_state().return_const(state);
    provider
        .expect_is_registered()
        .return_const(state.is_registered());
    Arc::new(provider)
}

fn messaging(
    state: RegistrationState,
    transport: MockMessageTransport,
) -> (BasicInstantMessaging, Arc<Recorder>) {
    let messaging = BasicInstantMessaging::new(
        provider(state),
        Arc::new(transport),
        Arc::new(SequentialMessageUidProvider::new("msg")),
        Arc::new(FixedClock::new(mock_data::reference_date())),
    );
    let recorder = Arc::new(Recorder::default());
    messaging.add_message_listener(recorder.clone());
    (messaging, recorder)
}

#[tokio::test]
async fn test_send_requires_registration() -> Result<()> {
    let mut transport = MockMessageTransport::new();
    transport.expect_send_message().never();

    let (messaging, recorder) = messaging(RegistrationState::Registering, transport);
    let message = messaging.create_message("Hello", ContentEncoding::Plain, None);

    let err = messaging
        .send_instant_message(&"a@prose.org".into(), message)
        .await
        .unwrap_err();

    assert!(err.is_not_connected_err());
    assert!(recorder.events.lock().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_send_fires_delivered() -> Result<()> {
    let mut transport = MockMessageTransport::new();
    transport
        .expect_send_message()
        .once()
        .with(
            predicate::eq(ContactAddress::from("a@prose.org")),
            predicate::always(),
        )
        .return_once(|_, _| Box::pin(async { Ok(()) }));

    let (messaging, recorder) = messaging(RegistrationState::Registered, transport);
    let message = messaging.create_message("Hello", ContentEncoding::Plain, None);
    assert_eq!(message.uid().as_str(), "msg-1");

    messaging
        .send_instant_message(&"a@prose.org".into(), message.clone())
        .await?;

    assert_eq!(
        *recorder.events.lock(),
        vec![(
            "delivered",
            MessageEvent {
                peer: "a@prose.org".into(),
                message,
                timestamp: mock_data::reference_date(),
                r#type: MessageEventType::Delivered,
            }
        )]
    );

    Ok(())
}

#[tokio::test]
async fn test_send_failure_fires_delivery_failed() -> Result<()> {
    let mut transport = MockMessageTransport::new();
    transport
        .expect_send_message()
        .once()
        .return_once(|_, _| Box::pin(async { Err(format_err!("Stream closed")) }));

    let (messaging, recorder) = messaging(RegistrationState::Registered, transport);
    let message = messaging.create_message("<b>Hi</b>", ContentEncoding::Html, None);

    assert!(messaging
        .send_instant_message(&"a@prose.org".into(), message)
        .await
        .is_err());

    let events = recorder.events.lock();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, "delivery_failed");
    assert_eq!(
        events[0].1.r#type,
        MessageEventType::DeliveryFailed {
            reason: "Stream closed".to_string()
        }
    );

    Ok(())
}

#[tokio::test]
async fn test_created_messages_get_fresh_uids_and_events_follow_clock() -> Result<()> {
    let clock = Arc::new(FixedClock::new(mock_data::reference_date()));
    let messaging = BasicInstantMessaging::new(
        provider(RegistrationState::Registered),
        Arc::new(MockMessageTransport::new()),
        Arc::new(SequentialMessageUidProvider::new("out")),
        clock.clone(),
    );
    let recorder = Arc::new(Recorder::default());
    messaging.add_message_listener(recorder.clone());

    let first = messaging.create_message("One", ContentEncoding::Plain, None);
    let second = messaging.create_message("Two", ContentEncoding::Plain, None);
    assert_eq!(first.uid().as_str(), "out-1");
    assert_eq!(second.uid().as_str(), "out-2");

    messaging.handle_received_message("b@prose.org".into(), first);
    clock.advance(Duration::seconds(30));
    messaging.handle_received_message("b@prose.org".into(), second);

    let timestamps = recorder
        .events
        .lock()
        .iter()
        .map(|(_, event)| event.timestamp)
        .collect::<Vec<_>>();
    assert_eq!(
        timestamps,
        vec![
            mock_data::reference_date(),
            mock_data::reference_date() + Duration::seconds(30)
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_received_messages_are_dispatched() -> Result<()> {
    let (messaging, recorder) = messaging(
        RegistrationState::Registered,
        MockMessageTransport::new(),
    );

    let message = messaging.create_message_with_uid(
        "Hey",
        ContentEncoding::Plain,
        Some("Lunch".to_string()),
        "remote-id".into(),
    );
    messaging.handle_received_message("b@prose.org".into(), message);

    let events = recorder.events.lock();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, "received");
    assert_eq!(events[0].1.message.subject(), Some("Lunch"));
    assert_eq!(events[0].1.message.uid().as_str(), "remote-id");

    Ok(())
}

#[tokio::test]
async fn test_chat_state_requires_registration() -> Result<()> {
    let mut transport = MockChatStateTransport::new();
    transport.expect_send_chat_state().never();

    let notifications = ChatStateNotifications::new(
        provider(RegistrationState::Unregistered),
        Arc::new(transport),
    );
    let recorder = Arc::new(Recorder::default());
    notifications.add_chat_state_notifications_listener(recorder.clone());

    let err = notifications
        .send_chat_state_notification(&"a@prose.org".into(), ChatState::Composing)
        .await
        .unwrap_err();
    assert!(err.is_not_connected_err());

    notifications.fire_chat_state_notification_received("a@prose.org".into(), ChatState::Paused);
    assert_eq!(
        *recorder.chat_states.lock(),
        vec![ChatStateNotificationEvent {
            contact: "a@prose.org".into(),
            chat_state: ChatState::Paused,
            error: None,
        }]
    );

    Ok(())
}
