// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::domain::connection::services::{assert_connected, ProtocolProvider};
use crate::domain::rooms::models::{
    ChatRoom, ChatRoomInvitation, ChatRoomInvitationListener, ChatRoomInvitationRejectedEvent,
    ChatRoomInvitationRejectionListener, ChatRoomMember, ChatRoomMemberRole,
    LocalUserChatRoomPresenceChangeEvent, LocalUserChatRoomPresenceListener,
    LocalUserPresenceChangeType, RoomId,
};
use crate::domain::shared::models::{OperationError, ParticipantId};
use crate::util::ListenerRegistry;

/// Keeps track of the chat rooms of an account.
pub struct MultiUserChat {
    provider: Arc<dyn ProtocolProvider>,
    rooms: RwLock<HashMap<RoomId, Arc<ChatRoom>>>,
    invitation_listeners: ListenerRegistry<dyn ChatRoomInvitationListener>,
    rejection_listeners: ListenerRegistry<dyn ChatRoomInvitationRejectionListener>,
    presence_listeners: ListenerRegistry<dyn LocalUserChatRoomPresenceListener>,
}

impl MultiUserChat {
    pub fn new(provider: Arc<dyn ProtocolProvider>) -> Self {
        Self {
            provider,
            rooms: Default::default(),
            invitation_listeners: ListenerRegistry::new("muc.invitations"),
            rejection_listeners: ListenerRegistry::new("muc.invitation_rejections"),
            presence_listeners: ListenerRegistry::new("muc.local_user_presence"),
        }
    }

    pub fn add_invitation_listener(&self, listener: Arc<dyn ChatRoomInvitationListener>) {
        self.invitation_listeners.add(listener);
    }

    pub fn remove_invitation_listener(&self, listener: &Arc<dyn ChatRoomInvitationListener>) {
        self.invitation_listeners.remove(listener);
    }

    pub fn add_invitation_rejection_listener(
        &self,
        listener: Arc<dyn ChatRoomInvitationRejectionListener>,
    ) {
        self.rejection_listeners.add(listener);
    }

    pub fn remove_invitation_rejection_listener(
        &self,
        listener: &Arc<dyn ChatRoomInvitationRejectionListener>,
    ) {
        self.rejection_listeners.remove(listener);
    }

    pub fn add_presence_listener(&self, listener: Arc<dyn LocalUserChatRoomPresenceListener>) {
        self.presence_listeners.add(listener);
    }

    pub fn remove_presence_listener(&self, listener: &Arc<dyn LocalUserChatRoomPresenceListener>) {
        self.presence_listeners.remove(listener);
    }

    pub fn room(&self, id: &RoomId) -> Option<Arc<ChatRoom>> {
        self.rooms.read().get(id).cloned()
    }

    pub fn joined_rooms(&self) -> Vec<Arc<ChatRoom>> {
        self.rooms
            .read()
            .values()
            .filter(|room| room.is_joined())
            .cloned()
            .collect()
    }

    /// Joins `id` as `nickname`, reusing a known room. Fails before touching any state if the
    /// provider is not registered.
    pub fn join_room(
        &self,
        id: &RoomId,
        nickname: impl Into<ParticipantId>,
    ) -> Result<Arc<ChatRoom>, OperationError> {
        if let Err(err) = assert_connected(self.provider.as_ref()) {
            self.fire_local_user_presence_event(
                id.clone(),
                LocalUserPresenceChangeType::JoinFailed,
                Some(err.to_string()),
            );
            return Err(err);
        }

        let room = self
            .rooms
            .write()
            .entry(id.clone())
            .or_insert_with(|| {
                Arc::new(ChatRoom::new(
                    id.clone(),
                    ChatRoomMember::new(nickname, ChatRoomMemberRole::Member),
                ))
            })
            .clone();

        if room.is_joined() {
            return Ok(room);
        }

        info!(room = %id, "Joined chat room.");
        room.set_joined();
        self.fire_local_user_presence_event(id.clone(), LocalUserPresenceChangeType::Joined, None);
        Ok(room)
    }

    /// Leaves and forgets `id`. Returns `false` if the room was not joined.
    pub fn leave_room(&self, id: &RoomId) -> bool {
        let Some(room) = self.rooms.write().remove(id) else {
            return false;
        };

        if !room.leave() {
            return false;
        }

        self.fire_local_user_presence_event(id.clone(), LocalUserPresenceChangeType::Left, None);
        true
    }

    /// Called by the protocol stack when the local user was removed from a room, e.g. kicked or
    /// after the connection dropped.
    pub fn handle_removed_from_room(
        &self,
        id: &RoomId,
        change_type: LocalUserPresenceChangeType,
        reason: Option<String>,
    ) {
        if let Some(room) = self.rooms.write().remove(id) {
            room.leave();
        }
        self.fire_local_user_presence_event(id.clone(), change_type, reason)
    }

    pub fn fire_invitation_received(&self, invitation: ChatRoomInvitation) {
        info!(room = %invitation.room, inviter = %invitation.inviter, "Received invitation.");
        self.invitation_listeners
            .dispatch(|listener| listener.invitation_received(&invitation));
    }

    pub fn fire_invitation_rejected(&self, event: ChatRoomInvitationRejectedEvent) {
        self.rejection_listeners
            .dispatch(|listener| listener.invitation_rejected(&event));
    }

    pub fn fire_local_user_presence_event(
        &self,
        room: RoomId,
        change_type: LocalUserPresenceChangeType,
        reason: Option<String>,
    ) {
        let event = LocalUserChatRoomPresenceChangeEvent {
            room,
            r#type: change_type,
            reason,
        };
        self.presence_listeners
            .dispatch(|listener| listener.local_user_presence_changed(&event));
    }
}
