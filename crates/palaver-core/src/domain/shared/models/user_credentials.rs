// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};

use secrecy::{ExposeSecret, Secret, SecretVec};

/// Authentication details collected from the user (or the credentials storage) while a protocol
/// provider registers.
#[derive(Default)]
pub struct UserCredentials {
    user_name: Option<String>,
    password: Option<SecretVec<u8>>,
    server_address: Option<String>,
    server_port: Option<u16>,
    is_server_overridden: bool,
    store_password: bool,
    user_cancel: bool,
    login_reason: Option<String>,
}

impl UserCredentials {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: Some(user_name.into()),
            ..Default::default()
        }
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn set_user_name(&mut self, user_name: impl Into<String>) {
        self.user_name = Some(user_name.into())
    }

    pub fn password(&self) -> Option<&[u8]> {
        self.password
            .as_ref()
            .map(|password| password.expose_secret().as_slice())
    }

    /// Returns the password as UTF-8 string if it is set and valid UTF-8.
    pub fn password_as_string(&self) -> Option<String> {
        self.password()
            .and_then(|bytes| String::from_utf8(bytes.to_vec()).ok())
    }

    pub fn set_password(&mut self, password: impl Into<Vec<u8>>) {
        self.password = Some(Secret::new(password.into()))
    }

    pub fn clear_password(&mut self) {
        self.password = None
    }

    pub fn server_address(&self) -> Option<&str> {
        self.server_address.as_deref()
    }

    pub fn set_server_address(&mut self, address: impl Into<String>) {
        self.server_address = Some(address.into())
    }

    pub fn server_port(&self) -> Option<u16> {
        self.server_port
    }

    pub fn set_server_port(&mut self, port: u16) {
        self.server_port = Some(port)
    }

    pub fn is_server_overridden(&self) -> bool {
        self.is_server_overridden
    }

    pub fn set_server_overridden(&mut self, overridden: bool) {
        self.is_server_overridden = overridden
    }

    pub fn store_password(&self) -> bool {
        self.store_password
    }

    pub fn set_store_password(&mut self, store: bool) {
        self.store_password = store
    }

    /// Whether the user dismissed the credentials prompt.
    pub fn is_user_cancel(&self) -> bool {
        self.user_cancel
    }

    pub fn set_user_cancel(&mut self, cancel: bool) {
        self.user_cancel = cancel
    }

    /// The reason shown to the user when asking for credentials, e.g. after a failed attempt.
    pub fn login_reason(&self) -> Option<&str> {
        self.login_reason.as_deref()
    }

    pub fn set_login_reason(&mut self, reason: impl Into<String>) {
        self.login_reason = Some(reason.into())
    }
}

impl Debug for UserCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredentials")
            .field("user_name", &self.user_name)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("server_address", &self.server_address)
            .field("server_port", &self.server_port)
            .field("is_server_overridden", &self.is_server_overridden)
            .field("store_password", &self.store_password)
            .field("user_cancel", &self.user_cancel)
            .field("login_reason", &self.login_reason)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_not_printed() {
        let mut credentials = UserCredentials::new("a@prose.org");
        credentials.set_password("secret-password");

        assert_eq!(credentials.password(), Some("secret-password".as_bytes()));
        assert_eq!(
            credentials.password_as_string(),
            Some("secret-password".to_string())
        );

        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("secret-password"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_fields_are_independent() {
        let mut credentials = UserCredentials::default();
        assert_eq!(credentials.user_name(), None);

        credentials.set_server_overridden(true);
        credentials.set_server_port(5223);
        assert!(credentials.is_server_overridden());
        assert_eq!(credentials.server_address(), None);
        assert_eq!(credentials.server_port(), Some(5223));

        credentials.set_user_cancel(true);
        assert!(credentials.is_user_cancel());
        assert!(!credentials.store_password());

        credentials.set_password(vec![1u8, 2, 3]);
        credentials.clear_password();
        assert_eq!(credentials.password(), None);
    }
}
