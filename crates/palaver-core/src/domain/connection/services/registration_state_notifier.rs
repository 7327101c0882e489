// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};
use tracing::{debug, info};

use crate::domain::shared::models::{
    AccountId, RegistrationState, RegistrationStateChangeEvent, RegistrationStateChangeListener,
    RegistrationStateChangeReason,
};
use crate::util::ListenerRegistry;

/// Tracks the registration state of a provider and informs `RegistrationStateChangeListener`s
/// about changes.
pub struct RegistrationStateNotifier {
    account_id: AccountId,
    state: Mutex<RegistrationState>,
    fire_lock: ReentrantMutex<()>,
    listeners: ListenerRegistry<dyn RegistrationStateChangeListener>,
}

impl RegistrationStateNotifier {
    pub fn new(account_id: AccountId) -> Self {
        Self {
            account_id,
            state: Mutex::new(RegistrationState::Init),
            fire_lock: ReentrantMutex::new(()),
            listeners: ListenerRegistry::new("registration_state"),
        }
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn registration_state(&self) -> RegistrationState {
        *self.state.lock()
    }

    pub fn add_registration_state_change_listener(
        &self,
        listener: Arc<dyn RegistrationStateChangeListener>,
    ) {
        self.listeners.add(listener);
    }

    pub fn remove_registration_state_change_listener(
        &self,
        listener: &Arc<dyn RegistrationStateChangeListener>,
    ) {
        self.listeners.remove(listener);
    }

    /// Moves to `new_state` and notifies listeners. Does nothing if the provider is in
    /// `new_state` already.
    pub fn set_registration_state(
        &self,
        new_state: RegistrationState,
        reason_code: RegistrationStateChangeReason,
        reason: Option<String>,
    ) {
        let _guard = self.fire_lock.lock();

        let old_state = {
            let mut state = self.state.lock();
            if *state == new_state {
                return;
            }
            std::mem::replace(&mut *state, new_state)
        };

        self.fire_registration_state_changed(old_state, new_state, reason_code, reason)
    }

    /// Notifies listeners about a state change without touching the tracked state.
    pub fn fire_registration_state_changed(
        &self,
        old_state: RegistrationState,
        new_state: RegistrationState,
        reason_code: RegistrationStateChangeReason,
        reason: Option<String>,
    ) {
        info!(
            account = %self.account_id,
            %old_state,
            %new_state,
            %reason_code,
            "Registration state changed."
        );

        let event = RegistrationStateChangeEvent {
            account_id: self.account_id.clone(),
            old_state,
            new_state,
            reason_code,
            reason,
        };

        let delivered = self
            .listeners
            .dispatch(|listener| listener.registration_state_changed(&event));
        debug!(account = %self.account_id, delivered, "Dispatched registration state change.");
    }
}
