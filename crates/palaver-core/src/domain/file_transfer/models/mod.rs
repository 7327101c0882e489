// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use file_transfer::{FileTransfer, FileTransferId};
pub use file_transfer_event::{
    FileTransferProgressEvent, FileTransferProgressListener, FileTransferStatusChangeEvent,
    FileTransferStatusListener,
};
pub use file_transfer_status::{FileTransferDirection, FileTransferStatus, TerminationReason};

mod file_transfer;
mod file_transfer_event;
mod file_transfer_status;
