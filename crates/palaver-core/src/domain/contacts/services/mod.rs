// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use contact_capabilities::{
    ContactCapabilities, ContactCapabilitiesEvent, ContactCapabilitiesListener,
};

mod contact_capabilities;
