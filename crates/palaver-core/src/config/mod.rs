// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_property_store::{
    AccountPropertyKey, AccountPropertyStore, AccountPropertyStoreExt,
    InMemoryAccountPropertyStore,
};
#[cfg(feature = "test")]
pub use account_property_store::MockAccountPropertyStore;
pub use auto_answer_config::AutoAnswerConfig;
pub use encoding_overrides::EncodingOverrides;

mod account_property_store;
mod auto_answer_config;
mod encoding_overrides;
