// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use deps::{Clock, MessageUidProvider, RandomMessageUidProvider, SystemClock};
pub use util::ListenerRegistry;

pub mod config;
mod deps;
pub mod domain;
pub(crate) mod util;

#[cfg(feature = "test")]
pub mod test;
