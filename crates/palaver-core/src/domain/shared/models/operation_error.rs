// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use super::RegistrationState;

#[derive(thiserror::Error, Debug)]
pub enum OperationError {
    #[error("The provider must be registered before it can be used (current state: {state}).")]
    NotConnected { state: RegistrationState },
    #[error("The operation is not supported by this provider ({0}).")]
    NotSupported(&'static str),
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

impl OperationError {
    pub fn is_not_connected_err(&self) -> bool {
        matches!(self, Self::NotConnected { .. })
    }
}
