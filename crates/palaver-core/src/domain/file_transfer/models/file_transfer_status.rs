// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum FileTransferStatus {
    Preparing,
    #[default]
    Waiting,
    InProgress,
    Completed,
    Failed,
    Canceled,
    /// The remote side refused the transfer after it was accepted.
    Refused,
    /// The remote side declined the offer.
    Declined,
}

impl FileTransferStatus {
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Failed | Self::Canceled | Self::Refused | Self::Declined
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum FileTransferDirection {
    Incoming,
    Outgoing,
}

/// Why a transfer ended, as reported by the protocol stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    Decline,
    Cancel,
    Success,
    Other(String),
}

impl TerminationReason {
    /// The status a transfer ends up in and the reason shown to the user.
    pub fn into_status(self) -> (FileTransferStatus, Option<String>) {
        match self {
            Self::Decline => (FileTransferStatus::Declined, None),
            Self::Cancel => (FileTransferStatus::Canceled, None),
            Self::Success => (FileTransferStatus::Completed, None),
            Self::Other(message) => (
                FileTransferStatus::Failed,
                Some(format!("File transfer failed: {}", message)),
            ),
        }
    }
}
