// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::shared::models::AccountId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarEvent {
    pub account_id: AccountId,
    /// The image data of the new avatar or `None` if the avatar was removed.
    pub avatar: Option<Arc<[u8]>>,
}

pub trait AvatarListener: Send + Sync {
    fn avatar_changed(&self, event: &AvatarEvent);
}
