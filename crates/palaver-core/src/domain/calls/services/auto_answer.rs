// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use tokio::runtime::Handle;
use tracing::{debug, error, info, warn};

use crate::config::{AccountPropertyStore, AutoAnswerConfig};
use crate::domain::calls::models::{
    Call, CallPeer, CallPeerChangeEvent, CallPeerId, CallPeerListener, CallPeerState,
};
use crate::domain::connection::services::ProtocolProvider;
use crate::domain::shared::models::AccountId;

/// The protocol specific part of auto-answering.
pub trait AutoAnswerStrategy: Send + Sync {
    /// Protocol specific conditions under which a call is answered automatically, e.g. a
    /// header in the incoming invite.
    fn satisfies_auto_answer_conditions(&self, call: &Call) -> bool;

    /// Persists protocol specific settings. Called after the generic settings were saved.
    fn save(&self, _store: &dyn AccountPropertyStore, _account: &AccountId) {}
}

/// Strategy for protocols without conditional auto-answer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAutoAnswerConditions;

impl AutoAnswerStrategy for NoAutoAnswerConditions {
    fn satisfies_auto_answer_conditions(&self, _call: &Call) -> bool {
        false
    }
}

/// Answers incoming calls automatically when the account is configured to do so.
pub struct BasicAutoAnswer {
    provider: Arc<dyn ProtocolProvider>,
    store: Arc<dyn AccountPropertyStore>,
    strategy: Arc<dyn AutoAnswerStrategy>,
    config: RwLock<AutoAnswerConfig>,
}

impl BasicAutoAnswer {
    /// Creates the operation set and loads the configuration of the provider's account.
    pub fn new(
        provider: Arc<dyn ProtocolProvider>,
        store: Arc<dyn AccountPropertyStore>,
        strategy: Arc<dyn AutoAnswerStrategy>,
    ) -> Self {
        let auto_answer = Self {
            provider,
            store,
            strategy,
            config: Default::default(),
        };
        auto_answer.load();
        auto_answer
    }

    pub fn load(&self) {
        let config = AutoAnswerConfig::load(self.store.as_ref(), &self.provider.account_id());
        *self.config.write() = config;
    }

    pub fn save(&self) {
        let account = self.provider.account_id();
        let config = *self.config.read();
        config.save(self.store.as_ref(), &account);
        self.strategy.save(self.store.as_ref(), &account);
    }

    /// Disables auto-answer and persists the change.
    pub fn clear(&self) {
        *self.config.write() = AutoAnswerConfig::default();
        self.save();
    }

    pub fn config(&self) -> AutoAnswerConfig {
        *self.config.read()
    }

    pub fn set_auto_answer_unconditional(&self) {
        *self.config.write() = AutoAnswerConfig {
            answer_unconditional: true,
            answer_with_video: false,
        };
        self.save();
    }

    pub fn is_auto_answer_unconditional_set(&self) -> bool {
        self.config.read().answer_unconditional
    }

    pub fn set_auto_answer_with_video(&self, answer_with_video: bool) {
        self.config.write().answer_with_video = answer_with_video;
        self.save();
    }

    pub fn is_auto_answer_with_video_set(&self) -> bool {
        self.config.read().answer_with_video
    }

    /// Decides whether `call` is answered automatically. If so, every peer of the call is
    /// answered as soon as it reaches `CallPeerState::IncomingCall`.
    ///
    /// Must be called from within a Tokio runtime since the answer actions run as separate
    /// tasks. Returns `true` if the call was accepted for auto-answering.
    pub fn auto_answer(&self, call: &Call, is_video_call: bool) -> bool {
        let config = *self.config.read();

        let accept = config.answer_unconditional
            || self.strategy.satisfies_auto_answer_conditions(call)
            || call.is_auto_answer();

        if !accept {
            return false;
        }

        let Ok(runtime) = Handle::try_current() else {
            error!(call = %call.id(), "Cannot auto-answer call outside of a Tokio runtime.");
            return false;
        };

        let answer_with_video =
            is_video_call && (call.is_auto_answer() || config.answer_with_video);

        info!(
            call = %call.id(),
            answer_with_video,
            "Auto-answering call."
        );

        for peer in call.peers() {
            let action = AnswerAction {
                provider: self.provider.clone(),
                peer_id: peer.id().clone(),
                peer: Arc::downgrade(&peer),
                answer_with_video,
                runtime: runtime.clone(),
            };

            if peer.state() == CallPeerState::IncomingCall {
                action.spawn();
                continue;
            }

            PeerAutoAnswerWatcher::watch(peer, action);
        }

        true
    }
}

/// The peer is held weakly so that a peer which is dropped while a watcher waits for it to ring
/// is freed together with the watcher.
struct AnswerAction {
    provider: Arc<dyn ProtocolProvider>,
    peer_id: CallPeerId,
    peer: Weak<CallPeer>,
    answer_with_video: bool,
    runtime: Handle,
}

impl AnswerAction {
    fn spawn(self) {
        let Some(peer) = self.peer.upgrade() else {
            debug!(peer = %self.peer_id, "Call peer is gone, not answering.");
            return;
        };
        let runtime = self.runtime.clone();
        runtime.spawn(async move { self.run(peer).await });
    }

    async fn run(self, peer: Arc<CallPeer>) {
        if self.answer_with_video {
            if let Some(video_telephony) = self.provider.video_telephony() {
                if let Err(err) = video_telephony.answer_video_call_peer(peer.clone()).await {
                    error!(
                        peer = %peer.id(),
                        "Failed to auto-answer call with video. {}",
                        err
                    );
                }
                return;
            }
            debug!(
                peer = %peer.id(),
                "Provider has no video telephony, answering with audio only."
            );
        }

        let Some(telephony) = self.provider.basic_telephony() else {
            warn!(
                peer = %peer.id(),
                "Cannot auto-answer call since the provider has no telephony support."
            );
            return;
        };

        if let Err(err) = telephony.answer_call_peer(peer.clone()).await {
            error!(peer = %peer.id(), "Failed to auto-answer call. {}", err);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WatchState {
    Waiting,
    Triggered,
    Abandoned,
}

/// Waits for a single peer to reach `IncomingCall`, answers it and unsubscribes. Unsubscribes
/// without answering if the peer disconnects or fails first.
struct PeerAutoAnswerWatcher {
    this: Weak<PeerAutoAnswerWatcher>,
    peer: Weak<CallPeer>,
    state: Mutex<WatchState>,
    action: Mutex<Option<AnswerAction>>,
}

impl PeerAutoAnswerWatcher {
    fn watch(peer: Arc<CallPeer>, action: AnswerAction) {
        let watcher = Arc::new_cyclic(|this| PeerAutoAnswerWatcher {
            this: this.clone(),
            peer: Arc::downgrade(&peer),
            state: Mutex::new(WatchState::Waiting),
            action: Mutex::new(Some(action)),
        });

        debug!(peer = %peer.id(), state = %peer.state(), "Waiting for call peer to ring.");
        peer.add_call_peer_listener(watcher.clone());

        // The peer might have changed its state before we were subscribed.
        watcher.handle_state(peer.state());
    }

    fn handle_state(&self, peer_state: CallPeerState) {
        let next_state = match peer_state {
            CallPeerState::IncomingCall => WatchState::Triggered,
            CallPeerState::Disconnected | CallPeerState::Failed => WatchState::Abandoned,
            _ => return,
        };

        {
            let mut state = self.state.lock();
            if *state != WatchState::Waiting {
                return;
            }
            *state = next_state;
        }

        self.unsubscribe();

        let Some(action) = self.action.lock().take() else {
            return;
        };

        match next_state {
            WatchState::Triggered => action.spawn(),
            WatchState::Abandoned => debug!(
                peer = %action.peer_id,
                %peer_state,
                "Call peer went away before it could be auto-answered."
            ),
            WatchState::Waiting => (),
        }
    }

    fn unsubscribe(&self) {
        let (Some(peer), Some(this)) = (self.peer.upgrade(), self.this.upgrade()) else {
            return;
        };
        let listener: Arc<dyn CallPeerListener> = this;
        peer.remove_call_peer_listener(&listener);
    }
}

impl CallPeerListener for PeerAutoAnswerWatcher {
    fn peer_state_changed(&self, event: &CallPeerChangeEvent) {
        self.handle_state(event.new_state)
    }
}
