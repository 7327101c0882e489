// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use uuid::Uuid;

use crate::domain::messaging::models::MessageUid;

/// Source of uids for messages created by `BasicInstantMessaging`.
///
/// Uids must not repeat for the lifetime of an account since delivery receipts and corrections
/// refer to a message by its uid.
pub trait MessageUidProvider: Send + Sync {
    fn next_uid(&self) -> MessageUid;
}

/// Hands out random (v4) uuids in their hyphenated lowercase form.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomMessageUidProvider;

impl MessageUidProvider for RandomMessageUidProvider {
    fn next_uid(&self) -> MessageUid {
        MessageUid::from(Uuid::new_v4().hyphenated().to_string())
    }
}
