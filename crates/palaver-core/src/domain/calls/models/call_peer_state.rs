// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// The signaling state of a single participant of a call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum CallPeerState {
    #[default]
    #[strum(serialize = "Unknown")]
    Unknown,
    #[strum(serialize = "Initiating Call")]
    InitiatingCall,
    #[strum(serialize = "Connecting")]
    Connecting,
    #[strum(serialize = "Connecting*")]
    ConnectingWithEarlyMedia,
    #[strum(serialize = "Connecting*")]
    ConnectingIncomingCall,
    #[strum(serialize = "Connecting*")]
    ConnectingIncomingCallWithMedia,
    #[strum(serialize = "Alerting Remote User (Ringing)")]
    AlertingRemoteSide,
    #[strum(serialize = "Incoming Call")]
    IncomingCall,
    #[strum(serialize = "Connected")]
    Connected,
    #[strum(serialize = "Disconnected")]
    Disconnected,
    #[strum(serialize = "Referred")]
    Referred,
    #[strum(serialize = "Busy")]
    Busy,
    #[strum(serialize = "Failed")]
    Failed,
    #[strum(serialize = "Locally On Hold")]
    OnHoldLocally,
    #[strum(serialize = "Mutually On Hold")]
    OnHoldMutually,
    #[strum(serialize = "Remotely On Hold")]
    OnHoldRemotely,
}

impl CallPeerState {
    /// The remote side is calling us and we haven't answered yet.
    pub fn is_incoming(&self) -> bool {
        matches!(
            self,
            Self::IncomingCall | Self::ConnectingIncomingCall | Self::ConnectingIncomingCallWithMedia
        )
    }

    pub fn is_on_hold(&self) -> bool {
        matches!(
            self,
            Self::OnHoldLocally | Self::OnHoldMutually | Self::OnHoldRemotely
        )
    }

    /// Whether the peer has left the call for good.
    pub fn is_terminated(&self) -> bool {
        matches!(self, Self::Disconnected | Self::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(CallPeerState::IncomingCall.to_string(), "Incoming Call");
        assert_eq!(CallPeerState::OnHoldMutually.to_string(), "Mutually On Hold");
    }

    #[test]
    fn test_predicates() {
        assert!(CallPeerState::ConnectingIncomingCall.is_incoming());
        assert!(!CallPeerState::AlertingRemoteSide.is_incoming());
        assert!(CallPeerState::Failed.is_terminated());
        assert!(!CallPeerState::Busy.is_terminated());
        assert!(CallPeerState::OnHoldRemotely.is_on_hold());
    }
}
