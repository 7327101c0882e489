// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use clock::{Clock, SystemClock};
pub use message_uid_provider::{MessageUidProvider, RandomMessageUidProvider};

mod clock;
mod message_uid_provider;
