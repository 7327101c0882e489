// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use palaver_utils::id_string;

use crate::domain::shared::models::ParticipantId;
use crate::util::ListenerRegistry;

use super::{
    ChatRoomConferencePublishedEvent, ChatRoomConferencePublishedListener, ChatRoomMember,
    ChatRoomMemberPresenceChangeEvent, ChatRoomMemberPresenceListener, ConferenceDescription,
    ConferencePublishedType, MemberPresenceChangeType,
};

id_string!(
    /// The address of a chat room, e.g. `lounge@conference.prose.org`.
    RoomId
);

/// A multi-user conversation the local user takes part in.
pub struct ChatRoom {
    id: RoomId,
    local_member: ChatRoomMember,
    joined: AtomicBool,
    members: RwLock<HashMap<ParticipantId, ChatRoomMember>>,
    /// The last conference description each participant announced.
    cached_conferences: Mutex<HashMap<ParticipantId, ConferenceDescription>>,
    published_conference: Mutex<Option<ConferenceDescription>>,
    member_presence_listeners: ListenerRegistry<dyn ChatRoomMemberPresenceListener>,
    conference_published_listeners: ListenerRegistry<dyn ChatRoomConferencePublishedListener>,
}

impl ChatRoom {
    pub fn new(id: impl Into<RoomId>, local_member: ChatRoomMember) -> Self {
        Self {
            id: id.into(),
            local_member,
            joined: AtomicBool::new(false),
            members: Default::default(),
            cached_conferences: Default::default(),
            published_conference: Default::default(),
            member_presence_listeners: ListenerRegistry::new("chat_room.member_presence"),
            conference_published_listeners: ListenerRegistry::new(
                "chat_room.conference_published",
            ),
        }
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn local_member(&self) -> &ChatRoomMember {
        &self.local_member
    }

    pub fn is_joined(&self) -> bool {
        self.joined.load(Ordering::SeqCst)
    }

    pub(crate) fn set_joined(&self) {
        self.joined.store(true, Ordering::SeqCst)
    }

    /// Forgets all room state that is only valid while joined. Returns `false` if the room was
    /// not joined.
    pub fn leave(&self) -> bool {
        if !self.joined.swap(false, Ordering::SeqCst) {
            return false;
        }

        info!(room = %self.id, "Leaving chat room.");
        self.clear_cached_conference_descriptions();
        self.members.write().clear();
        self.published_conference.lock().take();
        true
    }

    /// The members of the room sorted by nickname.
    pub fn members(&self) -> Vec<ChatRoomMember> {
        let mut members = self.members.read().values().cloned().collect::<Vec<_>>();
        members.sort_by(|lhs, rhs| lhs.nickname.cmp(&rhs.nickname));
        members
    }

    pub fn member(&self, nickname: &ParticipantId) -> Option<ChatRoomMember> {
        self.members.read().get(nickname).cloned()
    }

    pub fn add_member_presence_listener(&self, listener: Arc<dyn ChatRoomMemberPresenceListener>) {
        self.member_presence_listeners.add(listener);
    }

    pub fn remove_member_presence_listener(
        &self,
        listener: &Arc<dyn ChatRoomMemberPresenceListener>,
    ) {
        self.member_presence_listeners.remove(listener);
    }

    pub fn add_conference_published_listener(
        &self,
        listener: Arc<dyn ChatRoomConferencePublishedListener>,
    ) {
        self.conference_published_listeners.add(listener);
    }

    pub fn remove_conference_published_listener(
        &self,
        listener: &Arc<dyn ChatRoomConferencePublishedListener>,
    ) {
        self.conference_published_listeners.remove(listener);
    }

    /// Updates the member list and notifies listeners.
    pub fn handle_member_presence(
        &self,
        member: ChatRoomMember,
        change_type: MemberPresenceChangeType,
        reason: Option<String>,
    ) {
        {
            let mut members = self.members.write();
            match change_type {
                MemberPresenceChangeType::Joined => {
                    members.insert(member.nickname.clone(), member.clone());
                }
                MemberPresenceChangeType::Left
                | MemberPresenceChangeType::Kicked
                | MemberPresenceChangeType::Quit => {
                    members.remove(&member.nickname);
                }
            }
        }

        self.fire_member_presence_event(member, change_type, reason)
    }

    pub fn fire_member_presence_event(
        &self,
        member: ChatRoomMember,
        change_type: MemberPresenceChangeType,
        reason: Option<String>,
    ) {
        debug!(
            room = %self.id,
            member = %member.nickname,
            %change_type,
            "Chat room member presence changed."
        );

        let event = ChatRoomMemberPresenceChangeEvent {
            room: self.id.clone(),
            member,
            r#type: change_type,
            reason,
        };

        self.member_presence_listeners
            .dispatch(|listener| listener.member_presence_changed(&event));
    }

    /// Updates the conference cache with a description announced by `participant`.
    ///
    /// Returns `true` if the description was accepted, i.e. it announced a new conference or
    /// ended the cached one. Duplicate announcements and end notices that don't match the cached
    /// conference are rejected and must not be propagated.
    pub fn process_conference_description(
        &self,
        cd: &ConferenceDescription,
        participant: &ParticipantId,
    ) -> bool {
        let mut cache = self.cached_conferences.lock();

        if cd.is_available() {
            if cache.contains_key(participant) {
                return false;
            }
            cache.insert(participant.clone(), cd.clone());
            return true;
        }

        match cache.get(participant) {
            Some(cached) if cached.is_same_conference(cd) => {
                cache.remove(participant);
                true
            }
            _ => false,
        }
    }

    pub fn clear_cached_conference_descriptions(&self) {
        self.cached_conferences.lock().clear()
    }

    pub fn cached_conference_descriptions(&self) -> HashMap<ParticipantId, ConferenceDescription> {
        self.cached_conferences.lock().clone()
    }

    pub fn cached_conference_description_size(&self) -> usize {
        self.cached_conferences.lock().len()
    }

    /// Called by the protocol stack when `from` announced a conference. Notifies listeners if
    /// the description was accepted by the cache and the sender is a known member.
    pub fn handle_conference_description(
        &self,
        from: &ParticipantId,
        cd: ConferenceDescription,
    ) -> bool {
        if !self.process_conference_description(&cd, from) {
            debug!(room = %self.id, from = %from, "Ignoring conference description {}.", cd);
            return false;
        }

        let Some(member) = self.member(from) else {
            warn!(
                room = %self.id,
                from = %from,
                "Received a conference description from an unknown member."
            );
            return true;
        };

        self.fire_conference_published_event(member, cd, ConferencePublishedType::Received);
        true
    }

    /// Announces `cd` to the room. If a conference is published already it is ended instead and
    /// the ended description is returned.
    pub fn publish_conference(
        &self,
        cd: ConferenceDescription,
        name: Option<String>,
    ) -> ConferenceDescription {
        let cd = {
            let mut published = self.published_conference.lock();

            let cd = match published.take() {
                Some(mut previous) => {
                    previous.set_available(false);
                    previous
                }
                None => {
                    let mut cd = cd;
                    let display_name = name
                        .filter(|name| !name.is_empty())
                        .unwrap_or_else(|| format!("Conference by {}", self.local_member.nickname));
                    cd.set_display_name(Some(display_name));
                    cd
                }
            };

            *published = cd.is_available().then(|| cd.clone());
            cd
        };

        self.fire_conference_published_event(
            self.local_member.clone(),
            cd.clone(),
            ConferencePublishedType::Sent,
        );
        cd
    }

    /// The conference the local user currently announces.
    pub fn published_conference(&self) -> Option<ConferenceDescription> {
        self.published_conference.lock().clone()
    }

    pub fn fire_conference_published_event(
        &self,
        member: ChatRoomMember,
        conference: ConferenceDescription,
        published_type: ConferencePublishedType,
    ) {
        let event = ChatRoomConferencePublishedEvent {
            room: self.id.clone(),
            member,
            conference,
            r#type: published_type,
        };

        self.conference_published_listeners
            .dispatch(|listener| listener.conference_published(&event));
    }
}

impl Debug for ChatRoom {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatRoom")
            .field("id", &self.id)
            .field("local_member", &self.local_member)
            .field("joined", &self.is_joined())
            .finish()
    }
}
