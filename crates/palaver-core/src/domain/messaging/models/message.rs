// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use palaver_utils::id_string;

id_string!(
    /// Identifies a message locally. Generated by the sender, not guaranteed to be unique across
    /// clients.
    MessageUid
);

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum ContentEncoding {
    #[default]
    #[strum(serialize = "text/plain")]
    Plain,
    #[strum(serialize = "text/html")]
    Html,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    uid: MessageUid,
    content: String,
    encoding: ContentEncoding,
    subject: Option<String>,
}

impl Message {
    pub fn new(
        uid: impl Into<MessageUid>,
        content: impl Into<String>,
        encoding: ContentEncoding,
        subject: Option<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            content: content.into(),
            encoding,
            subject,
        }
    }

    pub fn uid(&self) -> &MessageUid {
        &self.uid
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn encoding(&self) -> ContentEncoding {
        self.encoding
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// The size of the content in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
