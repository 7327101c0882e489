// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::warn;

use crate::domain::shared::models::AccountId;

/// Keys of the account properties the operation sets read and write.
pub struct AccountPropertyKey;

impl AccountPropertyKey {
    pub const AUTO_ANSWER_UNCONDITIONAL: &'static str = "AUTO_ANSWER_UNCONDITIONAL";
    pub const AUTO_ANSWER_WITH_VIDEO: &'static str = "AUTO_ANSWER_WITH_VIDEO";
    pub const OVERRIDE_ENCODINGS: &'static str = "OVERRIDE_ENCODINGS";
    /// Prefix of per-encoding priorities, e.g. `Encodings.opus/48000`.
    pub const ENCODING_PREFIX: &'static str = "Encodings.";
}

/// Per-account string key/value storage.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait AccountPropertyStore: Send + Sync {
    fn get(&self, account: &AccountId, key: &str) -> Option<String>;
    fn set(&self, account: &AccountId, key: &str, value: String);
    fn remove(&self, account: &AccountId, key: &str);
    /// Returns all properties of `account` whose key starts with `prefix`.
    fn get_with_prefix(&self, account: &AccountId, prefix: &str) -> Vec<(String, String)>;
}

pub trait AccountPropertyStoreExt {
    fn get_bool(&self, account: &AccountId, key: &str, default: bool) -> bool;
    fn set_bool(&self, account: &AccountId, key: &str, value: bool);
}

impl<T: AccountPropertyStore + ?Sized> AccountPropertyStoreExt for T {
    fn get_bool(&self, account: &AccountId, key: &str, default: bool) -> bool {
        let Some(value) = self.get(account, key) else {
            return default;
        };

        match value.trim().to_ascii_lowercase().as_str() {
            "true" => true,
            "false" => false,
            _ => {
                warn!(
                    account = %account,
                    key,
                    value = %value,
                    "Ignoring account property which is not a boolean."
                );
                default
            }
        }
    }

    fn set_bool(&self, account: &AccountId, key: &str, value: bool) {
        self.set(account, key, value.to_string())
    }
}

#[derive(Default)]
pub struct InMemoryAccountPropertyStore {
    properties: RwLock<HashMap<AccountId, HashMap<String, String>>>,
}

impl InMemoryAccountPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountPropertyStore for InMemoryAccountPropertyStore {
    fn get(&self, account: &AccountId, key: &str) -> Option<String> {
        self.properties
            .read()
            .get(account)
            .and_then(|properties| properties.get(key))
            .cloned()
    }

    fn set(&self, account: &AccountId, key: &str, value: String) {
        self.properties
            .write()
            .entry(account.clone())
            .or_default()
            .insert(key.to_string(), value);
    }

    fn remove(&self, account: &AccountId, key: &str) {
        let mut properties = self.properties.write();
        let Some(account_properties) = properties.get_mut(account) else {
            return;
        };
        account_properties.remove(key);
        if account_properties.is_empty() {
            properties.remove(account);
        }
    }

    fn get_with_prefix(&self, account: &AccountId, prefix: &str) -> Vec<(String, String)> {
        let properties = self.properties.read();
        let Some(account_properties) = properties.get(account) else {
            return vec![];
        };

        let mut result = account_properties
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect::<Vec<_>>();
        result.sort();
        result
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_properties_are_scoped_by_account() {
        let store = InMemoryAccountPropertyStore::new();
        let a = AccountId::from("jabber:a@prose.org");
        let b = AccountId::from("jabber:b@prose.org");

        store.set(&a, "key", "value-a".to_string());
        assert_eq!(store.get(&a, "key"), Some("value-a".to_string()));
        assert_eq!(store.get(&b, "key"), None);

        store.remove(&a, "key");
        assert_eq!(store.get(&a, "key"), None);
    }

    #[test]
    fn test_bool_properties() {
        let store = InMemoryAccountPropertyStore::new();
        let account = AccountId::from("jabber:a@prose.org");

        assert!(store.get_bool(&account, "flag", true));
        store.set_bool(&account, "flag", false);
        assert!(!store.get_bool(&account, "flag", true));
        assert_eq!(store.get(&account, "flag"), Some("false".to_string()));

        store.set(&account, "flag", " TRUE ".to_string());
        assert!(store.get_bool(&account, "flag", false));

        store.set(&account, "flag", "maybe".to_string());
        assert!(!store.get_bool(&account, "flag", false));
        assert!(store.get_bool(&account, "flag", true));
    }

    #[test]
    fn test_get_with_prefix() {
        let store = InMemoryAccountPropertyStore::new();
        let account = AccountId::from("jabber:a@prose.org");

        store.set(&account, "Encodings.opus/48000", "750".to_string());
        store.set(&account, "Encodings.PCMU/8000", "650".to_string());
        store.set(&account, "OVERRIDE_ENCODINGS", "true".to_string());

        assert_eq!(
            store.get_with_prefix(&account, AccountPropertyKey::ENCODING_PREFIX),
            vec![
                ("Encodings.PCMU/8000".to_string(), "650".to_string()),
                ("Encodings.opus/48000".to_string(), "750".to_string()),
            ]
        );
    }
}
