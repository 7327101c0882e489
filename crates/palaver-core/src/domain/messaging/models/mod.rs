// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chat_state::{ChatState, ChatStateNotificationEvent, ChatStateNotificationsListener};
pub use message::{ContentEncoding, Message, MessageUid};
pub use message_event::{MessageEvent, MessageEventType, MessageListener};

mod chat_state;
mod message;
mod message_event;
