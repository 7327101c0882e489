// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_id::AccountId;
pub use availability::Availability;
pub use operation_error::OperationError;
pub use operation_set_kind::OperationSetKind;
pub use participant_id::ParticipantId;
pub use registration_state::{
    RegistrationState, RegistrationStateChangeEvent, RegistrationStateChangeListener,
    RegistrationStateChangeReason,
};
pub use user_credentials::UserCredentials;

mod account_id;
mod availability;
mod operation_error;
mod operation_set_kind;
mod participant_id;
mod registration_state;
mod user_credentials;
