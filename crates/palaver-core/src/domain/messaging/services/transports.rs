// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::contacts::models::ContactAddress;
use crate::domain::messaging::models::{ChatState, Message};

/// Puts messages on the wire. Implemented by the protocol stacks.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessageTransport: Send + Sync {
    async fn send_message(&self, to: &ContactAddress, message: &Message) -> Result<()>;
}

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ChatStateTransport: Send + Sync {
    async fn send_chat_state(&self, to: &ContactAddress, chat_state: ChatState) -> Result<()>;
}
