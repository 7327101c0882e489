// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::calls::models::CallPeer;

/// Audio call control offered by a protocol provider.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait BasicTelephony: Send + Sync {
    async fn answer_call_peer(&self, peer: Arc<CallPeer>) -> Result<()>;
}

/// Video call control offered by a protocol provider.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait VideoTelephony: Send + Sync {
    async fn answer_video_call_peer(&self, peer: Arc<CallPeer>) -> Result<()>;
}
