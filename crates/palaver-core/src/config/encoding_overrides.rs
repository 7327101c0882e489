// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeMap;

use tracing::warn;

use crate::domain::shared::models::AccountId;

use super::{AccountPropertyKey, AccountPropertyStore, AccountPropertyStoreExt};

/// Account specific encoding (codec) priorities which replace the global configuration when
/// `enabled` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodingOverrides {
    pub enabled: bool,
    /// Encoding name (e.g. `opus/48000`) to priority. A priority of 0 disables the encoding.
    pub priorities: BTreeMap<String, u32>,
}

impl EncodingOverrides {
    pub fn load(store: &dyn AccountPropertyStore, account: &AccountId) -> Self {
        let enabled = store.get_bool(account, AccountPropertyKey::OVERRIDE_ENCODINGS, false);

        let priorities = store
            .get_with_prefix(account, AccountPropertyKey::ENCODING_PREFIX)
            .into_iter()
            .filter_map(|(key, value)| {
                let encoding = key.strip_prefix(AccountPropertyKey::ENCODING_PREFIX)?;
                match value.trim().parse::<u32>() {
                    Ok(priority) => Some((encoding.to_string(), priority)),
                    Err(err) => {
                        warn!(
                            account = %account,
                            key = %key,
                            "Ignoring invalid encoding priority. {}",
                            err
                        );
                        None
                    }
                }
            })
            .collect();

        Self {
            enabled,
            priorities,
        }
    }

    pub fn save(&self, store: &dyn AccountPropertyStore, account: &AccountId) {
        store.set_bool(account, AccountPropertyKey::OVERRIDE_ENCODINGS, self.enabled);

        for (key, _) in store.get_with_prefix(account, AccountPropertyKey::ENCODING_PREFIX) {
            store.remove(account, &key);
        }

        for (encoding, priority) in self.priorities.iter() {
            store.set(
                account,
                &format!("{}{}", AccountPropertyKey::ENCODING_PREFIX, encoding),
                priority.to_string(),
            );
        }
    }

    /// Returns the enabled encodings ordered by descending priority.
    pub fn enabled_encodings(&self) -> Vec<&str> {
        let mut encodings = self
            .priorities
            .iter()
            .filter(|(_, priority)| **priority > 0)
            .collect::<Vec<_>>();
        encodings.sort_by(|(name_a, a), (name_b, b)| b.cmp(a).then(name_a.cmp(name_b)));
        encodings
            .into_iter()
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::config::InMemoryAccountPropertyStore;

    use super::*;

    #[test]
    fn test_round_trip_through_store() {
        let store = InMemoryAccountPropertyStore::new();
        let account = AccountId::from("jabber:a@prose.org");
        store.set(&account, "Encodings.stale/8000", "1".to_string());

        let overrides = EncodingOverrides {
            enabled: true,
            priorities: BTreeMap::from([
                ("opus/48000".to_string(), 750),
                ("PCMU/8000".to_string(), 0),
                ("G722/8000".to_string(), 800),
            ]),
        };
        overrides.save(&store, &account);

        let loaded = EncodingOverrides::load(&store, &account);
        assert_eq!(loaded, overrides);
        assert_eq!(loaded.enabled_encodings(), vec!["G722/8000", "opus/48000"]);
    }

    #[test]
    fn test_invalid_priorities_are_skipped() {
        let store = InMemoryAccountPropertyStore::new();
        let account = AccountId::from("jabber:a@prose.org");
        store.set(&account, "Encodings.opus/48000", "high".to_string());
        store.set(&account, "Encodings.PCMA/8000", "600".to_string());

        let loaded = EncodingOverrides::load(&store, &account);
        assert!(!loaded.enabled);
        assert_eq!(
            loaded.priorities,
            BTreeMap::from([("PCMA/8000".to_string(), 600)])
        );
    }
}
