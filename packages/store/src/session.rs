//! # Session persistence
//!
//! [`SessionStore`] owns the two local-storage keys that make a login survive a
//! reload:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`USER_KEY`] (`rra_user`) | JSON-serialized [`SessionUser`] |
//! | [`TOKEN_KEY`] (`rra_token`) | Raw bearer token |
//!
//! The keys are always written and cleared together. A user entry that no
//! longer parses is treated as absent.

use crate::kv::KeyValueStore;
use crate::models::{Role, SessionUser};

pub const USER_KEY: &str = "rra_user";
pub const TOKEN_KEY: &str = "rra_token";

/// An authenticated identity plus the bearer token proving it.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: SessionUser,
    pub token: String,
}

impl Session {
    pub fn role(&self) -> Role {
        self.user.role
    }
}

/// Reads and writes the persisted session through a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn user(&self) -> Option<SessionUser> {
        let raw = self.store.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// The cached session, present only when both keys are.
    pub fn load(&self) -> Option<Session> {
        Some(Session {
            token: self.token()?,
            user: self.user()?,
        })
    }

    pub fn save(&self, session: &Session) {
        self.save_user(&session.user);
        self.store.set(TOKEN_KEY, &session.token);
    }

    pub fn save_user(&self, user: &SessionUser) {
        if let Ok(json) = serde_json::to_string(user) {
            self.store.set(USER_KEY, &json);
        }
    }

    pub fn clear(&self) {
        self.store.remove(USER_KEY);
        self.store.remove(TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn session() -> Session {
        Session {
            user: SessionUser {
                id: "42".to_string(),
                email: "admin@example.rw".to_string(),
                full_name: "Director Admin".to_string(),
                role: Role::Admin,
                department: Some("Administration".to_string()),
                phone: None,
            },
            token: "jwt-token".to_string(),
        }
    }

    #[test]
    fn test_save_and_load() {
        let kv = MemoryStore::new();
        let sessions = SessionStore::new(kv.clone());
        assert!(sessions.load().is_none());

        sessions.save(&session());

        assert_eq!(kv.get(TOKEN_KEY).as_deref(), Some("jwt-token"));
        assert!(kv.get(USER_KEY).unwrap().contains("\"role\":\"admin\""));
        assert_eq!(sessions.load(), Some(session()));
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let kv = MemoryStore::new();
        let sessions = SessionStore::new(kv.clone());
        sessions.save(&session());

        sessions.clear();
        assert!(kv.is_empty());

        // idempotent
        sessions.clear();
        assert!(sessions.load().is_none());
    }

    #[test]
    fn test_corrupt_user_is_absent() {
        let kv = MemoryStore::new();
        kv.set(USER_KEY, "{not json");
        kv.set(TOKEN_KEY, "t");
        let sessions = SessionStore::new(kv);
        assert!(sessions.user().is_none());
        assert!(sessions.load().is_none());
        assert_eq!(sessions.token().as_deref(), Some("t"));
    }

    #[test]
    fn test_empty_token_is_absent() {
        let kv = MemoryStore::new();
        kv.set(TOKEN_KEY, "");
        assert!(SessionStore::new(kv).token().is_none());
    }
}
