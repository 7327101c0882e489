// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU64, Ordering};

use crate::deps::MessageUidProvider;
use crate::domain::messaging::models::MessageUid;

/// Hands out `{prefix}-1`, `{prefix}-2`, … so that tests can predict message uids.
pub struct SequentialMessageUidProvider {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialMessageUidProvider {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }

    pub fn reset(&self) {
        self.counter.store(0, Ordering::SeqCst)
    }
}

impl MessageUidProvider for SequentialMessageUidProvider {
    fn next_uid(&self) -> MessageUid {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        MessageUid::from(format!("{}-{}", self.prefix, n))
    }
}
