// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::calls::services::{BasicTelephony, VideoTelephony};
use crate::domain::shared::models::{AccountId, OperationError, RegistrationState};

/// The protocol specific side of an account. Implemented outside of this crate by the concrete
/// protocol stacks.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ProtocolProvider: Send + Sync {
    fn account_id(&self) -> AccountId;
    fn protocol_name(&self) -> String;
    fn registration_state(&self) -> RegistrationState;

    fn is_registered(&self) -> bool {
        self.registration_state().is_registered()
    }

    fn basic_telephony(&self) -> Option<Arc<dyn BasicTelephony>>;
    fn video_telephony(&self) -> Option<Arc<dyn VideoTelephony>>;
}

/// Fails with `OperationError::NotConnected` unless `provider` is registered.
pub fn assert_connected(provider: &dyn ProtocolProvider) -> Result<(), OperationError> {
    if provider.is_registered() {
        return Ok(());
    }

    Err(OperationError::NotConnected {
        state: provider.registration_state(),
    })
}
