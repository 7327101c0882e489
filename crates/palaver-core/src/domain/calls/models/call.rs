// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use palaver_utils::id_string;

use crate::domain::shared::models::AccountId;

use super::{CallPeer, CallPeerId};

id_string!(CallId);

#[derive(Debug)]
pub struct Call {
    id: CallId,
    account_id: AccountId,
    peers: RwLock<Vec<Arc<CallPeer>>>,
    /// Set when the call was already accepted out-of-band (e.g. through a message sent from
    /// another device) and must be answered without asking the user.
    is_auto_answer: AtomicBool,
    is_video_call: AtomicBool,
}

impl Call {
    pub fn new(id: impl Into<CallId>, account_id: AccountId) -> Self {
        Self {
            id: id.into(),
            account_id,
            peers: Default::default(),
            is_auto_answer: AtomicBool::new(false),
            is_video_call: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> &CallId {
        &self.id
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn add_peer(&self, peer: Arc<CallPeer>) {
        let mut peers = self.peers.write();
        if peers.iter().any(|p| p.id() == peer.id()) {
            return;
        }
        peers.push(peer)
    }

    pub fn remove_peer(&self, peer_id: &CallPeerId) -> Option<Arc<CallPeer>> {
        let mut peers = self.peers.write();
        let idx = peers.iter().position(|p| p.id() == peer_id)?;
        Some(peers.remove(idx))
    }

    pub fn peers(&self) -> Vec<Arc<CallPeer>> {
        self.peers.read().clone()
    }

    pub fn peer_count(&self) -> usize {
        self.peers.read().len()
    }

    pub fn is_auto_answer(&self) -> bool {
        self.is_auto_answer.load(Ordering::Acquire)
    }

    pub fn set_auto_answer(&self, auto_answer: bool) {
        self.is_auto_answer.store(auto_answer, Ordering::Release)
    }

    /// Whether the remote side offered video.
    pub fn is_video_call(&self) -> bool {
        self.is_video_call.load(Ordering::Acquire)
    }

    pub fn set_video_call(&self, is_video_call: bool) {
        self.is_video_call.store(is_video_call, Ordering::Release)
    }
}
