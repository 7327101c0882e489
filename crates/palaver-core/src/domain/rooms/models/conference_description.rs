// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Describes a dial-in conference which a member advertises inside a chat room.
///
/// Subject, display name, password and availability are informational. Equality only looks at
/// the call id, the uri and the transports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConferenceDescription {
    uri: Option<String>,
    call_id: Option<String>,
    password: Option<String>,
    subject: Option<String>,
    display_name: Option<String>,
    available: bool,
    transports: BTreeSet<String>,
}

impl Default for ConferenceDescription {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

impl ConferenceDescription {
    pub fn new(uri: Option<String>, call_id: Option<String>, password: Option<String>) -> Self {
        Self {
            uri,
            call_id,
            password,
            subject: None,
            display_name: None,
            available: true,
            transports: BTreeSet::new(),
        }
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn set_uri(&mut self, uri: Option<String>) {
        self.uri = uri
    }

    pub fn call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }

    pub fn set_call_id(&mut self, call_id: Option<String>) {
        self.call_id = call_id
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn set_password(&mut self, password: Option<String>) {
        self.password = password
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn set_subject(&mut self, subject: Option<String>) {
        self.subject = subject
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, display_name: Option<String>) {
        self.display_name = display_name
    }

    /// `false` if the conference has ended.
    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available
    }

    pub fn add_transport(&mut self, transport: impl Into<String>) {
        self.transports.insert(transport.into());
    }

    pub fn transports(&self) -> &BTreeSet<String> {
        &self.transports
    }

    /// A description without transports supports every transport.
    pub fn supports_transport(&self, transport: &str) -> bool {
        self.transports.is_empty() || self.transports.contains(transport)
    }

    /// Checks whether `other` describes the same conference.
    pub fn is_same_conference(&self, other: &ConferenceDescription) -> bool {
        self.call_id == other.call_id
            && self.uri == other.uri
            && self.transports == other.transports
    }
}

impl PartialEq for ConferenceDescription {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_conference(other)
    }
}

impl Eq for ConferenceDescription {}

impl Display for ConferenceDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ConferenceDescription(uri={}; callid={}; available={})",
            self.uri.as_deref().unwrap_or("<none>"),
            self.call_id.as_deref().unwrap_or("<none>"),
            self.available
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn description(transports: &[&str]) -> ConferenceDescription {
        let mut cd = ConferenceDescription::new(
            Some("xmpp:conf@prose.org".to_string()),
            Some("c1".to_string()),
            None,
        );
        for transport in transports {
            cd.add_transport(*transport);
        }
        cd
    }

    #[test]
    fn test_identity_ignores_informational_fields() {
        let a = description(&["ice"]);
        let mut b = description(&["ice"]);
        b.set_display_name(Some("Weekly".to_string()));
        b.set_password(Some("secret".to_string()));
        b.set_subject(Some("Planning".to_string()));
        b.set_available(false);

        assert!(a.is_same_conference(&b));
        assert!(!a.is_same_conference(&description(&["rtp"])));
        assert!(!a.is_same_conference(&description(&[])));

        let mut c = description(&["ice"]);
        c.set_call_id(Some("c2".to_string()));
        assert!(!a.is_same_conference(&c));
    }

    #[test]
    fn test_equality_matches_conference_identity() {
        let a = description(&["ice"]);
        let mut b = a.clone();
        b.set_display_name(Some("Other".to_string()));
        b.set_password(Some("pw".to_string()));
        b.set_subject(Some("Standup".to_string()));

        assert!(a.is_same_conference(&b));
        assert_eq!(a, b);
        assert_ne!(a, description(&["rtp"]));

        let mut c = a.clone();
        c.set_uri(Some("xmpp:other@prose.org".to_string()));
        assert_ne!(a, c);
    }

    #[test]
    fn test_supports_transport() {
        assert!(description(&[]).supports_transport("urn:xmpp:jingle:transports:ice-udp:1"));

        let cd = description(&["ice"]);
        assert!(cd.supports_transport("ice"));
        assert!(!cd.supports_transport("rtp"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            description(&[]).to_string(),
            "ConferenceDescription(uri=xmpp:conf@prose.org; callid=c1; available=true)"
        );
    }
}
