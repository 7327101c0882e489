// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use basic_instant_messaging::BasicInstantMessaging;
pub use chat_state_notifications::ChatStateNotifications;
pub use transports::{ChatStateTransport, MessageTransport};
#[cfg(feature = "test")]
pub use transports::{MockChatStateTransport, MockMessageTransport};

mod basic_instant_messaging;
mod chat_state_notifications;
mod transports;
