// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use auto_answer::{AutoAnswerStrategy, BasicAutoAnswer, NoAutoAnswerConditions};
pub use telephony::{BasicTelephony, VideoTelephony};
#[cfg(feature = "test")]
pub use telephony::{MockBasicTelephony, MockVideoTelephony};

mod auto_answer;
mod telephony;
