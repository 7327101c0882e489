// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::Display;

use crate::domain::contacts::models::ContactAddress;

use super::{ChatRoomMember, ConferenceDescription, RoomId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MemberPresenceChangeType {
    Joined,
    Left,
    Kicked,
    /// The member left because its connection dropped.
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRoomMemberPresenceChangeEvent {
    pub room: RoomId,
    pub member: ChatRoomMember,
    pub r#type: MemberPresenceChangeType,
    pub reason: Option<String>,
}

pub trait ChatRoomMemberPresenceListener: Send + Sync {
    fn member_presence_changed(&self, event: &ChatRoomMemberPresenceChangeEvent);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LocalUserPresenceChangeType {
    Joined,
    JoinFailed,
    Left,
    Kicked,
    Dropped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalUserChatRoomPresenceChangeEvent {
    pub room: RoomId,
    pub r#type: LocalUserPresenceChangeType,
    pub reason: Option<String>,
}

pub trait LocalUserChatRoomPresenceListener: Send + Sync {
    fn local_user_presence_changed(&self, event: &LocalUserChatRoomPresenceChangeEvent);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRoomInvitation {
    pub room: RoomId,
    pub inviter: ContactAddress,
    pub reason: Option<String>,
    pub password: Option<String>,
}

pub trait ChatRoomInvitationListener: Send + Sync {
    fn invitation_received(&self, invitation: &ChatRoomInvitation);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRoomInvitationRejectedEvent {
    pub room: RoomId,
    pub invitee: ContactAddress,
    pub reason: Option<String>,
}

pub trait ChatRoomInvitationRejectionListener: Send + Sync {
    fn invitation_rejected(&self, event: &ChatRoomInvitationRejectedEvent);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConferencePublishedType {
    /// The local user published the conference.
    Sent,
    /// Another member published the conference.
    Received,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRoomConferencePublishedEvent {
    pub room: RoomId,
    pub member: ChatRoomMember,
    pub conference: ConferenceDescription,
    pub r#type: ConferencePublishedType,
}

pub trait ChatRoomConferencePublishedListener: Send + Sync {
    fn conference_published(&self, event: &ChatRoomConferencePublishedEvent);
}
