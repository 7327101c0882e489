// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use parking_lot::{ReentrantMutex, RwLock};
use tracing::debug;

use palaver_utils::id_string;

use crate::domain::shared::models::{AccountId, Availability};
use crate::util::ListenerRegistry;

use super::{
    ContactResource, ContactResourceEvent, ContactResourceEventType, ContactResourceListener,
};

id_string!(
    /// The protocol address of a contact, e.g. `a@prose.org` or `sip:1234@voip.example.org`.
    ContactAddress
);

/// Tags the protocol implementation that created a `Contact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactImplementation(&'static str);

impl ContactImplementation {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl Display for ContactImplementation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// A buddy in the contact list of an account.
///
/// Two contacts are equal if they were created by the same implementation for the same
/// account and have the same address. Contacts of different implementations are never equal,
/// even if their addresses match.
pub struct Contact {
    implementation: ContactImplementation,
    account_id: AccountId,
    address: ContactAddress,
    display_name: RwLock<Option<String>>,
    resources: RwLock<Vec<ContactResource>>,
    fire_lock: ReentrantMutex<()>,
    resource_listeners: ListenerRegistry<dyn ContactResourceListener>,
}

impl Contact {
    pub fn new(
        implementation: ContactImplementation,
        account_id: AccountId,
        address: impl Into<ContactAddress>,
    ) -> Self {
        Self {
            implementation,
            account_id,
            address: address.into(),
            display_name: Default::default(),
            resources: Default::default(),
            fire_lock: ReentrantMutex::new(()),
            resource_listeners: ListenerRegistry::new("contact.resources"),
        }
    }

    pub fn implementation(&self) -> ContactImplementation {
        self.implementation
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn address(&self) -> &ContactAddress {
        &self.address
    }

    /// The display name or the address if no display name is set.
    pub fn display_name(&self) -> String {
        self.display_name
            .read()
            .clone()
            .unwrap_or_else(|| self.address.to_string())
    }

    pub fn set_display_name(&self, name: Option<String>) {
        *self.display_name.write() = name
    }

    pub fn resources(&self) -> Vec<ContactResource> {
        self.resources.read().clone()
    }

    pub fn is_online(&self) -> bool {
        self.resources
            .read()
            .iter()
            .any(|resource| resource.availability.is_online())
    }

    /// The availability of the resource with the highest priority.
    pub fn availability(&self) -> Availability {
        self.resources
            .read()
            .iter()
            .max_by_key(|resource| resource.priority)
            .map(|resource| resource.availability)
            .unwrap_or_default()
    }

    pub fn add_resource_listener(&self, listener: Arc<dyn ContactResourceListener>) {
        self.resource_listeners.add(listener);
    }

    pub fn remove_resource_listener(&self, listener: &Arc<dyn ContactResourceListener>) {
        self.resource_listeners.remove(listener);
    }

    /// Inserts or replaces the resource with the same name and fires `Added` or `Modified`.
    /// Nothing is fired if an identical resource is known already.
    pub fn update_resource(&self, resource: ContactResource) {
        let _guard = self.fire_lock.lock();

        let event_type = {
            let mut resources = self.resources.write();
            match resources.iter_mut().find(|r| r.name == resource.name) {
                Some(existing) if *existing == resource => return,
                Some(existing) => {
                    *existing = resource.clone();
                    ContactResourceEventType::Modified
                }
                None => {
                    resources.push(resource.clone());
                    ContactResourceEventType::Added
                }
            }
        };

        self.fire_contact_resource_event(resource, event_type)
    }

    pub fn remove_resource(&self, name: &str) {
        let _guard = self.fire_lock.lock();

        let removed = {
            let mut resources = self.resources.write();
            let Some(idx) = resources.iter().position(|r| r.name == name) else {
                return;
            };
            resources.remove(idx)
        };

        self.fire_contact_resource_event(removed, ContactResourceEventType::Removed)
    }

    pub fn fire_contact_resource_event(
        &self,
        resource: ContactResource,
        event_type: ContactResourceEventType,
    ) {
        debug!(
            contact = %self.address,
            resource = %resource.name,
            ?event_type,
            "Contact resource changed."
        );

        let event = ContactResourceEvent {
            contact: self.address.clone(),
            resource,
            r#type: event_type,
        };

        self.resource_listeners
            .dispatch(|listener| match event.r#type {
                ContactResourceEventType::Added => listener.contact_resource_added(&event),
                ContactResourceEventType::Removed => listener.contact_resource_removed(&event),
                ContactResourceEventType::Modified => listener.contact_resource_modified(&event),
            });
    }
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.implementation == other.implementation
            && self.account_id == other.account_id
            && self.address == other.address
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.implementation.hash(state);
        self.account_id.hash(state);
        self.address.hash(state);
    }
}

impl Debug for Contact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Contact")
            .field("implementation", &self.implementation)
            .field("account_id", &self.account_id)
            .field("address", &self.address)
            .finish()
    }
}

impl Display for Contact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.address)
    }
}
