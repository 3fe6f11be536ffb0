//! # Admin Session
//!
//! Login state for the admin panel. The credential check is a compiled-in
//! constant pair; this is a single-owner portfolio site, not an auth
//! system; there is no hashing, no server, and no session expiry. The
//! logged-in user is persisted so a reload stays signed in.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::{keys, KeyValueStore};

/// Username the admin panel accepts.
pub const ADMIN_USERNAME: &str = "Haziq Zaaran";

/// Password the admin panel accepts.
const ADMIN_PASSWORD: &str = "Notsowatermeloon5#";

/// The persisted login record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    /// Display name of the signed-in user
    pub username: String,
    /// Role label shown in the admin header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// RFC 3339 time of the last successful login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
}

/// Store for the admin login state.
pub struct AdminSession {
    kv: KeyValueStore,
    user: RwLock<Option<Option<AdminUser>>>,
}

impl AdminSession {
    /// Create a session over the given storage handle. The persisted login,
    /// if any, is restored lazily on first access.
    pub fn new(kv: KeyValueStore) -> Self {
        Self {
            kv,
            user: RwLock::new(None),
        }
    }

    /// The signed-in user, if any.
    pub fn current(&self) -> Option<AdminUser> {
        self.user
            .write()
            .get_or_insert_with(|| self.kv.get(keys::ADMIN_USER))
            .clone()
    }

    /// Whether an admin is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Check the credential pair and persist the login.
    pub fn login(&self, username: &str, password: &str) -> Result<AdminUser> {
        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            return Err(Error::InvalidCredentials);
        }

        let user = AdminUser {
            username: username.to_string(),
            role: Some("admin".to_string()),
            last_login: Some(crate::time::now_rfc3339()),
        };
        if let Err(e) = self.kv.set(keys::ADMIN_USER, &user) {
            tracing::warn!(error = %e, "unable to persist login; session is memory-only");
        }
        *self.user.write() = Some(Some(user.clone()));
        Ok(user)
    }

    /// Sign out and clear the persisted login.
    pub fn logout(&self) {
        self.kv.remove(keys::ADMIN_USER);
        *self.user.write() = Some(None);
    }

    /// Discard the in-memory state; the next access re-reads storage.
    pub fn reload(&self) {
        *self.user.write() = None;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageArea;

    fn session() -> AdminSession {
        AdminSession::new(KeyValueStore::attach(&StorageArea::in_memory()))
    }

    #[test]
    fn test_starts_signed_out() {
        let session = session();
        assert!(!session.is_authenticated());
        assert_eq!(session.current(), None);
    }

    #[test]
    fn test_login_with_valid_credentials() {
        let session = session();
        let user = session.login(ADMIN_USERNAME, "Notsowatermeloon5#").unwrap();

        assert_eq!(user.username, ADMIN_USERNAME);
        assert_eq!(user.role.as_deref(), Some("admin"));
        assert!(user.last_login.is_some());
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_login_rejects_bad_credentials() {
        let session = session();
        let err = session.login(ADMIN_USERNAME, "wrong").unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_survives_restart() {
        let area = StorageArea::in_memory();
        let first = AdminSession::new(KeyValueStore::attach(&area));
        first.login(ADMIN_USERNAME, "Notsowatermeloon5#").unwrap();

        let second = AdminSession::new(KeyValueStore::attach(&area));
        assert!(second.is_authenticated());
    }

    #[test]
    fn test_logout_clears_persisted_login() {
        let area = StorageArea::in_memory();
        let session = AdminSession::new(KeyValueStore::attach(&area));
        session.login(ADMIN_USERNAME, "Notsowatermeloon5#").unwrap();
        session.logout();

        assert!(!session.is_authenticated());
        let fresh = AdminSession::new(KeyValueStore::attach(&area));
        assert!(!fresh.is_authenticated());
    }
}
