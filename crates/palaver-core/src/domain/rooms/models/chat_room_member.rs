// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::domain::contacts::models::ContactAddress;
use crate::domain::shared::models::ParticipantId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ChatRoomMemberRole {
    Owner,
    Administrator,
    Moderator,
    Member,
    #[default]
    Guest,
    SilentMember,
    Outcast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRoomMember {
    pub nickname: ParticipantId,
    /// The real address of the member, if the room discloses it.
    pub address: Option<ContactAddress>,
    pub role: ChatRoomMemberRole,
}

impl ChatRoomMember {
    pub fn new(nickname: impl Into<ParticipantId>, role: ChatRoomMemberRole) -> Self {
        Self {
            nickname: nickname.into(),
            address: None,
            role,
        }
    }
}
