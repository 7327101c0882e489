// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::AccountId;

/// The registration (login) state of a protocol provider.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum RegistrationState {
    #[default]
    #[strum(serialize = "Initial")]
    Init,
    #[strum(serialize = "Registering")]
    Registering,
    /// The server has challenged us to authenticate and we are waiting for the user to provide
    /// credentials.
    #[strum(serialize = "Challenged for authentication")]
    ChallengedForAuthentication,
    #[strum(serialize = "Registered")]
    Registered,
    #[strum(serialize = "Unregistering")]
    Unregistering,
    #[strum(serialize = "Unregistered")]
    Unregistered,
    /// The provider has been shut down and can't be registered again.
    #[strum(serialize = "Finalized")]
    Finalized,
    #[strum(serialize = "Connection Failed")]
    ConnectionFailed,
    #[strum(serialize = "Authentication Failed")]
    AuthenticationFailed,
    #[strum(serialize = "Updating Registration")]
    UpdatingRegistration,
    #[strum(serialize = "Expired")]
    Expired,
}

impl RegistrationState {
    pub fn is_registered(&self) -> bool {
        self == &Self::Registered
    }

    /// Returns true for states a provider ends up in after a failed registration attempt.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed | Self::AuthenticationFailed | Self::Expired
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum RegistrationStateChangeReason {
    #[default]
    NotSpecified,
    UserRequest,
    ServerNotFound,
    AuthenticationFailed,
    MultipleLoginsDetected,
    ClientLimitReached,
    NotAcceptedByServer,
    InvalidAddress,
    ConnectionBroken,
    RecoverableAuthentication,
    InternalError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationStateChangeEvent {
    pub account_id: AccountId,
    pub old_state: RegistrationState,
    pub new_state: RegistrationState,
    pub reason_code: RegistrationStateChangeReason,
    pub reason: Option<String>,
}

pub trait RegistrationStateChangeListener: Send + Sync {
    fn registration_state_changed(&self, event: &RegistrationStateChangeEvent);
}
