//! Process-wide admin session store
//!
//! The store holds at most one signed-in admin session. Both operations are
//! whole-object replacements, so no partial-update races are possible under
//! the server's state lock.

use crate::auth::models::AdminUser;

/// A point-in-time view of the session, handed to the navigation guards.
///
/// Guards receive this explicitly rather than reading a global, so they stay
/// pure functions of session state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub user: Option<AdminUser>,
    pub access_token: Option<String>,
    pub is_authenticated: bool,
}

/// In-memory credential store for the admin session.
///
/// `is_authenticated` is true iff `user` and `access_token` are populated.
#[derive(Debug, Default)]
pub struct AuthStore {
    user: Option<AdminUser>,
    access_token: Option<String>,
    is_authenticated: bool,
}

impl AuthStore {
    /// Create an empty, unauthenticated store
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the session state with fresh credentials.
    ///
    /// No validation and no merging with prior state.
    pub fn set_credentials(&mut self, user: AdminUser, access_token: String) {
        self.user = Some(user);
        self.access_token = Some(access_token);
        self.is_authenticated = true;
    }

    /// Reset to the unauthenticated initial state
    pub fn clear(&mut self) {
        self.user = None;
        self.access_token = None;
        self.is_authenticated = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn user(&self) -> Option<&AdminUser> {
        self.user.as_ref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Clone the current state for guard evaluation
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user.clone(),
            access_token: self.access_token.clone(),
            is_authenticated: self.is_authenticated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::AdminRole;

    #[test]
    fn test_initial_state_unauthenticated() {
        let store = AuthStore::new();
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert!(store.access_token().is_none());
    }

    #[test]
    fn test_set_credentials() {
        let mut store = AuthStore::new();
        let user = AdminUser::new("admin@citizen.gov".to_string(), AdminRole::SuperAdmin);
        store.set_credentials(user.clone(), "token-123".to_string());

        assert!(store.is_authenticated());
        assert_eq!(store.user(), Some(&user));
        assert_eq!(store.access_token(), Some("token-123"));
    }

    #[test]
    fn test_set_credentials_overwrites() {
        let mut store = AuthStore::new();
        let first = AdminUser::new("a@citizen.gov".to_string(), AdminRole::SuperAdmin);
        let second = AdminUser::new("b@citizen.gov".to_string(), AdminRole::SupportAdmin);

        store.set_credentials(first, "token-a".to_string());
        store.set_credentials(second.clone(), "token-b".to_string());

        assert_eq!(store.user(), Some(&second));
        assert_eq!(store.access_token(), Some("token-b"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut store = AuthStore::new();
        let user = AdminUser::new("admin@citizen.gov".to_string(), AdminRole::SuperAdmin);
        store.set_credentials(user, "token-123".to_string());
        store.clear();

        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert!(store.access_token().is_none());
        assert_eq!(store.snapshot(), SessionSnapshot::default());
    }
}
