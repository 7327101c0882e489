// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::AccountId;

use super::{AccountPropertyKey, AccountPropertyStore, AccountPropertyStoreExt};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoAnswerConfig {
    /// Answer every incoming call without further conditions.
    pub answer_unconditional: bool,
    /// Answer video calls with video enabled.
    pub answer_with_video: bool,
}

impl AutoAnswerConfig {
    pub fn load(store: &dyn AccountPropertyStore, account: &AccountId) -> Self {
        Self {
            answer_unconditional: store.get_bool(
                account,
                AccountPropertyKey::AUTO_ANSWER_UNCONDITIONAL,
                false,
            ),
            answer_with_video: store.get_bool(
                account,
                AccountPropertyKey::AUTO_ANSWER_WITH_VIDEO,
                false,
            ),
        }
    }

    /// Writes the enabled flags and removes the disabled ones.
    pub fn save(&self, store: &dyn AccountPropertyStore, account: &AccountId) {
        for (key, enabled) in [
            (
                AccountPropertyKey::AUTO_ANSWER_UNCONDITIONAL,
                self.answer_unconditional,
            ),
            (
                AccountPropertyKey::AUTO_ANSWER_WITH_VIDEO,
                self.answer_with_video,
            ),
        ] {
            if enabled {
                store.set_bool(account, key, true)
            } else {
                store.remove(account, key)
            }
        }
    }
}
