// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, ReentrantMutex};
use tracing::{debug, info};

use palaver_utils::id_string;

use crate::domain::contacts::models::ContactAddress;
use crate::util::ListenerRegistry;

use super::{
    FileTransferDirection, FileTransferProgressEvent, FileTransferProgressListener,
    FileTransferStatus, FileTransferStatusChangeEvent, FileTransferStatusListener,
    TerminationReason,
};

id_string!(FileTransferId);

#[derive(Debug, Default)]
struct TransferState {
    status: FileTransferStatus,
    progress: u64,
}

/// A file sent to or received from a contact.
///
/// Status and progress changes are serialized per transfer. The new value is stored before
/// listeners are called so that they can read it back.
pub struct FileTransfer {
    id: FileTransferId,
    direction: FileTransferDirection,
    contact: ContactAddress,
    file_name: String,
    file_size: u64,
    state: Mutex<TransferState>,
    fire_lock: ReentrantMutex<()>,
    status_listeners: ListenerRegistry<dyn FileTransferStatusListener>,
    progress_listeners: ListenerRegistry<dyn FileTransferProgressListener>,
}

impl FileTransfer {
    pub fn new(
        id: impl Into<FileTransferId>,
        direction: FileTransferDirection,
        contact: ContactAddress,
        file_name: impl Into<String>,
        file_size: u64,
    ) -> Self {
        Self {
            id: id.into(),
            direction,
            contact,
            file_name: file_name.into(),
            file_size,
            state: Default::default(),
            fire_lock: ReentrantMutex::new(()),
            status_listeners: ListenerRegistry::new("file_transfer.status"),
            progress_listeners: ListenerRegistry::new("file_transfer.progress"),
        }
    }

    pub fn id(&self) -> &FileTransferId {
        &self.id
    }

    pub fn direction(&self) -> FileTransferDirection {
        self.direction
    }

    pub fn contact(&self) -> &ContactAddress {
        &self.contact
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    pub fn status(&self) -> FileTransferStatus {
        self.state.lock().status
    }

    /// Bytes transferred so far.
    pub fn progress(&self) -> u64 {
        self.state.lock().progress
    }

    /// `None` for empty files.
    pub fn percent_complete(&self) -> Option<u8> {
        if self.file_size == 0 {
            return None;
        }
        let percent = self.progress().saturating_mul(100) / self.file_size;
        Some(percent.min(100) as u8)
    }

    pub fn add_status_listener(&self, listener: Arc<dyn FileTransferStatusListener>) {
        self.status_listeners.add(listener);
    }

    pub fn remove_status_listener(&self, listener: &Arc<dyn FileTransferStatusListener>) {
        self.status_listeners.remove(listener);
    }

    pub fn add_progress_listener(&self, listener: Arc<dyn FileTransferProgressListener>) {
        self.progress_listeners.add(listener);
    }

    pub fn remove_progress_listener(&self, listener: &Arc<dyn FileTransferProgressListener>) {
        self.progress_listeners.remove(listener);
    }

    /// Moves the transfer to `new_status` and notifies listeners. Does nothing if the transfer
    /// already has that status.
    pub fn fire_status_change_event(&self, new_status: FileTransferStatus, reason: Option<String>) {
        let _guard = self.fire_lock.lock();

        let old_status = {
            let mut state = self.state.lock();
            if state.status == new_status {
                return;
            }
            std::mem::replace(&mut state.status, new_status)
        };

        info!(
            transfer = %self.id,
            %old_status,
            %new_status,
            "File transfer status changed."
        );

        let event = FileTransferStatusChangeEvent {
            transfer_id: self.id.clone(),
            old_status,
            new_status,
            reason,
        };

        self.status_listeners
            .dispatch(|listener| listener.status_changed(&event));
    }

    /// Ends the transfer with the status matching `reason`.
    pub fn fire_termination(&self, reason: TerminationReason) {
        let (status, reason) = reason.into_status();
        self.fire_status_change_event(status, reason)
    }

    /// Records `progress` bytes as transferred and notifies listeners, unless the value is
    /// unchanged.
    pub fn fire_progress_change_event(&self, timestamp: DateTime<Utc>, progress: u64) {
        let _guard = self.fire_lock.lock();

        {
            let mut state = self.state.lock();
            if state.progress == progress {
                return;
            }
            state.progress = progress;
        }

        debug!(transfer = %self.id, progress, "File transfer progressed.");

        let event = FileTransferProgressEvent {
            transfer_id: self.id.clone(),
            timestamp,
            progress,
        };

        self.progress_listeners
            .dispatch(|listener| listener.progress_changed(&event));
    }
}

impl Debug for FileTransfer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("FileTransfer")
            .field("id", &self.id)
            .field("direction", &self.direction)
            .field("contact", &self.contact)
            .field("file_name", &self.file_name)
            .field("file_size", &self.file_size)
            .field("status", &state.status)
            .field("progress", &state.progress)
            .finish()
    }
}
