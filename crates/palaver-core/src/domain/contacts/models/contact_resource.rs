// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::Availability;

use super::ContactAddress;

/// A single endpoint (device, client instance) through which a contact is online.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResource {
    pub name: String,
    pub availability: Availability,
    pub priority: i8,
    pub is_mobile: bool,
}

impl ContactResource {
    pub fn new(name: impl Into<String>, availability: Availability, priority: i8) -> Self {
        Self {
            name: name.into(),
            availability,
            priority,
            is_mobile: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactResourceEventType {
    Added,
    Removed,
    Modified,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactResourceEvent {
    pub contact: ContactAddress,
    pub resource: ContactResource,
    pub r#type: ContactResourceEventType,
}

pub trait ContactResourceListener: Send + Sync {
    fn contact_resource_added(&self, event: &ContactResourceEvent);
    fn contact_resource_removed(&self, event: &ContactResourceEvent);
    fn contact_resource_modified(&self, event: &ContactResourceEvent);
}
