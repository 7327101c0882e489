// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The capabilities ("operation sets") a protocol provider or contact may support.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum OperationSetKind {
    Avatar,
    BasicAutoAnswer,
    BasicInstantMessaging,
    BasicTelephony,
    ChatStateNotifications,
    ContactCapabilities,
    FileTransfer,
    MultiUserChat,
    VideoTelephony,
}
