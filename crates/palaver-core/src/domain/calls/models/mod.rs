// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use call::{Call, CallId};
pub use call_peer::{CallPeer, CallPeerChangeEvent, CallPeerId, CallPeerListener};
pub use call_peer_state::CallPeerState;

mod call;
mod call_peer;
mod call_peer_state;
