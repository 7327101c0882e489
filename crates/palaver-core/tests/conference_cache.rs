// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use pretty_assertions::assert_eq;

use palaver_core::domain::rooms::models::{
    ChatRoom, ChatRoomMember, ChatRoomMemberRole, ConferenceDescription,
};
use palaver_core::domain::shared::models::ParticipantId;

fn room() -> ChatRoom {
    ChatRoom::new(
        "lounge@conference.prose.org",
        ChatRoomMember::new("me", ChatRoomMemberRole::Member),
    )
}

fn conference(available: bool, transport: &str) -> ConferenceDescription {
    let mut cd = ConferenceDescription::new(Some("u1".to_string()), Some("c1".to_string()), None);
    cd.add_transport(transport);
    cd.set_available(available);
    cd
}

#[test]
fn test_duplicate_announcement_is_rejected() {
    let room = room();
    let participant = ParticipantId::from("alice");

    assert!(room.process_conference_description(&conference(true, "ice"), &participant));
    assert!(!room.process_conference_description(&conference(true, "ice"), &participant));

    let cached = room.cached_conference_descriptions();
    assert_eq!(cached.len(), 1);
    assert_eq!(cached.get(&participant), Some(&conference(true, "ice")));
}

#[test]
fn test_matching_end_notice_removes_cached_conference() {
    let room = room();
    let participant = ParticipantId::from("alice");

    assert!(room.process_conference_description(&conference(true, "ice"), &participant));

    let mut end_notice = conference(false, "ice");
    end_notice.set_display_name(Some("Renamed".to_string()));
    end_notice.set_password(Some("secret".to_string()));

    assert!(room.process_conference_description(&end_notice, &participant));
    assert_eq!(room.cached_conference_description_size(), 0);
}

#[test]
fn test_mismatching_end_notice_is_rejected() {
    let room = room();
    let participant = ParticipantId::from("alice");

    assert!(room.process_conference_description(&conference(true, "ice"), &participant));
    assert!(!room.process_conference_description(&conference(false, "rtp"), &participant));
    assert_eq!(room.cached_conference_description_size(), 1);
    assert!(room
        .cached_conference_descriptions()
        .contains_key(&participant));
}

#[test]
fn test_end_notice_without_cached_conference_is_rejected() {
    let room = room();
    let participant = ParticipantId::from("alice");

    assert!(!room.process_conference_description(&conference(false, "ice"), &participant));
    assert_eq!(room.cached_conference_description_size(), 0);

    // A conference can be announced again after it ended.
    assert!(room.process_conference_description(&conference(true, "ice"), &participant));
    assert!(room.process_conference_description(&conference(false, "ice"), &participant));
    assert!(room.process_conference_description(&conference(true, "rtp"), &participant));
    assert_eq!(room.cached_conference_description_size(), 1);
}

#[test]
fn test_participants_are_cached_independently() {
    let room = room();

    assert!(room.process_conference_description(&conference(true, "ice"), &"alice".into()));
    assert!(room.process_conference_description(&conference(true, "ice"), &"bob".into()));
    assert!(room.process_conference_description(&conference(false, "ice"), &"alice".into()));

    let cached = room.cached_conference_descriptions();
    assert_eq!(
        cached.keys().cloned().collect::<Vec<_>>(),
        vec![ParticipantId::from("bob")]
    );

    room.clear_cached_conference_descriptions();
    assert_eq!(room.cached_conference_description_size(), 0);
}
