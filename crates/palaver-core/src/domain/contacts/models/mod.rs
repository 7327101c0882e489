// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use contact::{Contact, ContactAddress, ContactImplementation};
pub use contact_resource::{
    ContactResource, ContactResourceEvent, ContactResourceEventType, ContactResourceListener,
};

mod contact;
mod contact_resource;
