// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Display)]
pub enum Availability {
    Available,
    #[default]
    Unavailable,
    DoNotDisturb,
    Away,
}

impl Availability {
    pub fn is_online(&self) -> bool {
        self != &Self::Unavailable
    }
}
