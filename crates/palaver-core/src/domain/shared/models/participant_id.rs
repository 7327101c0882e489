// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use palaver_utils::id_string;

id_string!(
    /// Identifies a participant of a chat room or call, typically the protocol address of the
    /// participant.
    ParticipantId
);
