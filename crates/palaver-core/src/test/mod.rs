// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use fixed_clock::FixedClock;
pub use sequential_message_uid_provider::SequentialMessageUidProvider;

pub use crate::config::MockAccountPropertyStore;
pub use crate::domain::calls::services::{MockBasicTelephony, MockVideoTelephony};
pub use crate::domain::connection::services::MockProtocolProvider;
pub use crate::domain::messaging::services::{MockChatStateTransport, MockMessageTransport};

mod sequential_message_uid_provider;

pub mod mock_data {
    use chrono::{DateTime, TimeZone, Utc};

    use crate::domain::shared::models::AccountId;

    pub fn account_id() -> AccountId {
        AccountId::from("jabber:user@prose.org")
    }

    pub fn reference_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
    }
}

/// Routes `tracing` output through the test harness. Safe to call from every test.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
