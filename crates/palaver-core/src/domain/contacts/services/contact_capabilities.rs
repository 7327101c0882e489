// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};
use tracing::debug;

use crate::domain::contacts::models::{Contact, ContactAddress};
use crate::domain::shared::models::OperationSetKind;
use crate::util::ListenerRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCapabilitiesEvent {
    pub contact: ContactAddress,
    /// The resource whose capabilities were discovered, if known.
    pub resource: Option<String>,
    pub operation_sets: BTreeSet<OperationSetKind>,
}

pub trait ContactCapabilitiesListener: Send + Sync {
    fn supported_operation_sets_changed(&self, event: &ContactCapabilitiesEvent);
}

/// Keeps track of the operation sets supported by the contacts of an account.
pub struct ContactCapabilities {
    capabilities: Mutex<HashMap<ContactAddress, BTreeSet<OperationSetKind>>>,
    fire_lock: ReentrantMutex<()>,
    listeners: ListenerRegistry<dyn ContactCapabilitiesListener>,
}

impl Default for ContactCapabilities {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactCapabilities {
    pub fn new() -> Self {
        Self {
            capabilities: Default::default(),
            fire_lock: ReentrantMutex::new(()),
            listeners: ListenerRegistry::new("contact_capabilities"),
        }
    }

    pub fn add_contact_capabilities_listener(
        &self,
        listener: Arc<dyn ContactCapabilitiesListener>,
    ) {
        self.listeners.add(listener);
    }

    pub fn remove_contact_capabilities_listener(
        &self,
        listener: &Arc<dyn ContactCapabilitiesListener>,
    ) {
        self.listeners.remove(listener);
    }

    /// Stores the discovered operation sets of `contact` and notifies listeners if they differ
    /// from what was known before.
    pub fn set_supported_operation_sets(
        &self,
        contact: &ContactAddress,
        resource: Option<String>,
        operation_sets: BTreeSet<OperationSetKind>,
    ) {
        let _guard = self.fire_lock.lock();

        {
            let mut capabilities = self.capabilities.lock();
            if capabilities.get(contact) == Some(&operation_sets) {
                return;
            }
            capabilities.insert(contact.clone(), operation_sets.clone());
        }

        self.fire_contact_capabilities_event(contact, resource, operation_sets)
    }

    /// Returns the operation sets `contact` supports. Offline contacts support none.
    pub fn supported_operation_sets(&self, contact: &Contact) -> BTreeSet<OperationSetKind> {
        if !contact.is_online() {
            return BTreeSet::new();
        }

        self.capabilities
            .lock()
            .get(contact.address())
            .cloned()
            .unwrap_or_default()
    }

    pub fn supports(&self, contact: &Contact, operation_set: OperationSetKind) -> bool {
        self.supported_operation_sets(contact)
            .contains(&operation_set)
    }

    /// Forgets everything known about `contact`, e.g. after it went offline.
    pub fn remove_contact(&self, contact: &ContactAddress) {
        self.capabilities.lock().remove(contact);
    }

    pub fn fire_contact_capabilities_event(
        &self,
        contact: &ContactAddress,
        resource: Option<String>,
        operation_sets: BTreeSet<OperationSetKind>,
    ) {
        debug!(
            contact = %contact,
            count = operation_sets.len(),
            "Supported operation sets of contact changed."
        );

        let event = ContactCapabilitiesEvent {
            contact: contact.clone(),
            resource,
            operation_sets,
        };

        self.listeners
            .dispatch(|listener| listener.supported_operation_sets_changed(&event));
    }
}
