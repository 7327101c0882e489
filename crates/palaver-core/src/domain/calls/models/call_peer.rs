// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};
use tracing::debug;

use palaver_utils::id_string;

use crate::domain::shared::models::ParticipantId;
use crate::util::ListenerRegistry;

use super::{CallId, CallPeerState};

id_string!(CallPeerId);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallPeerChangeEvent {
    pub call_id: CallId,
    pub peer_id: CallPeerId,
    pub old_state: CallPeerState,
    pub new_state: CallPeerState,
    pub reason: Option<String>,
}

pub trait CallPeerListener: Send + Sync {
    fn peer_state_changed(&self, event: &CallPeerChangeEvent);
}

pub struct CallPeer {
    id: CallPeerId,
    call_id: CallId,
    address: ParticipantId,
    display_name: Option<String>,
    state: Mutex<CallPeerState>,
    fire_lock: ReentrantMutex<()>,
    listeners: ListenerRegistry<dyn CallPeerListener>,
}

impl CallPeer {
    pub fn new(
        id: impl Into<CallPeerId>,
        call_id: CallId,
        address: impl Into<ParticipantId>,
        display_name: Option<String>,
        state: CallPeerState,
    ) -> Self {
        Self {
            id: id.into(),
            call_id,
            address: address.into(),
            display_name,
            state: Mutex::new(state),
            fire_lock: ReentrantMutex::new(()),
            listeners: ListenerRegistry::new("call_peer"),
        }
    }

    pub fn id(&self) -> &CallPeerId {
        &self.id
    }

    pub fn call_id(&self) -> &CallId {
        &self.call_id
    }

    pub fn address(&self) -> &ParticipantId {
        &self.address
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn state(&self) -> CallPeerState {
        *self.state.lock()
    }

    pub fn add_call_peer_listener(&self, listener: Arc<dyn CallPeerListener>) {
        self.listeners.add(listener);
    }

    pub fn remove_call_peer_listener(&self, listener: &Arc<dyn CallPeerListener>) {
        self.listeners.remove(listener);
    }

    pub fn call_peer_listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Moves the peer to `new_state` and notifies listeners. The new state is visible through
    /// `state()` before the first listener is called.
    pub fn set_state(&self, new_state: CallPeerState, reason: Option<String>) {
        let _guard = self.fire_lock.lock();

        let old_state = {
            let mut state = self.state.lock();
            if *state == new_state {
                return;
            }
            std::mem::replace(&mut *state, new_state)
        };

        debug!(
            peer = %self.id,
            %old_state,
            %new_state,
            "Call peer changed state."
        );

        let event = CallPeerChangeEvent {
            call_id: self.call_id.clone(),
            peer_id: self.id.clone(),
            old_state,
            new_state,
            reason,
        };

        self.listeners
            .dispatch(|listener| listener.peer_state_changed(&event));
    }
}

impl Debug for CallPeer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallPeer")
            .field("id", &self.id)
            .field("call_id", &self.call_id)
            .field("address", &self.address)
            .field("state", &self.state())
            .finish()
    }
}
