// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use super::{FileTransferId, FileTransferStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTransferStatusChangeEvent {
    pub transfer_id: FileTransferId,
    pub old_status: FileTransferStatus,
    pub new_status: FileTransferStatus,
    pub reason: Option<String>,
}

pub trait FileTransferStatusListener: Send + Sync {
    fn status_changed(&self, event: &FileTransferStatusChangeEvent);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTransferProgressEvent {
    pub transfer_id: FileTransferId,
    pub timestamp: DateTime<Utc>,
    /// Number of bytes transferred so far.
    pub progress: u64,
}

pub trait FileTransferProgressListener: Send + Sync {
    fn progress_changed(&self, event: &FileTransferProgressEvent);
}
