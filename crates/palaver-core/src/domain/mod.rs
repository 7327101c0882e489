// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod avatars;
pub mod calls;
pub mod connection;
pub mod contacts;
pub mod file_transfer;
pub mod messaging;
pub mod rooms;
pub mod shared;
