// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[cfg(feature = "test")]
pub use protocol_provider::MockProtocolProvider;
pub use protocol_provider::{assert_connected, ProtocolProvider};
pub use registration_state_notifier::RegistrationStateNotifier;

mod protocol_provider;
mod registration_state_notifier;
