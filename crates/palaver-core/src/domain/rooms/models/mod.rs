// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chat_room::{ChatRoom, RoomId};
pub use chat_room_member::{ChatRoomMember, ChatRoomMemberRole};
pub use conference_description::ConferenceDescription;
pub use events::{
    ChatRoomConferencePublishedEvent, ChatRoomConferencePublishedListener, ChatRoomInvitation,
    ChatRoomInvitationListener, ChatRoomInvitationRejectedEvent,
    ChatRoomInvitationRejectionListener, ChatRoomMemberPresenceChangeEvent,
    ChatRoomMemberPresenceListener, ConferencePublishedType, LocalUserChatRoomPresenceChangeEvent,
    LocalUserChatRoomPresenceListener, LocalUserPresenceChangeType, MemberPresenceChangeType,
};

mod chat_room;
mod chat_room_member;
mod conference_description;
mod events;
