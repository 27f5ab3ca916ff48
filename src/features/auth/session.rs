use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::models::{Session, User};
use crate::modules::storage::KeyValueStore;
use crate::shared::constants::{SESSION_TOKEN_KEY, SESSION_USER_KEY};

/// Persists the session under the `token` / `user` keys of the durable
/// store. Both keys are always written and removed together.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        let user =
            serde_json::to_string(&session.user).map_err(|e| AppError::Storage(e.to_string()))?;
        self.store.set(SESSION_TOKEN_KEY, &session.token)?;
        self.store.set(SESSION_USER_KEY, &user)?;
        Ok(())
    }

    /// Restores the saved session, if any. A malformed or half-written entry
    /// clears both keys and reports no session.
    pub fn restore(&self) -> Result<Option<Session>> {
        let token = self.store.get(SESSION_TOKEN_KEY)?;
        let user = self.store.get(SESSION_USER_KEY)?;

        match (token, user) {
            (Some(token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Ok(Some(Session { user, token })),
                Err(e) => {
                    tracing::warn!("Discarding corrupt stored session: {}", e);
                    self.clear()?;
                    Ok(None)
                }
            },
            (None, None) => Ok(None),
            _ => {
                tracing::warn!("Discarding half-written stored session");
                self.clear()?;
                Ok(None)
            }
        }
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(SESSION_TOKEN_KEY)?;
        self.store.remove(SESSION_USER_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::models::Role;
    use crate::modules::storage::MemoryStore;

    fn store() -> (Arc<MemoryStore>, SessionStore) {
        let inner = Arc::new(MemoryStore::new());
        let sessions = SessionStore::new(inner.clone());
        (inner, sessions)
    }

    fn session() -> Session {
        Session {
            user: User {
                id: "1".to_string(),
                name: "Thabo Mokoena".to_string(),
                email: "thabo@luct.ac.ls".to_string(),
                role: Role::Lecturer,
            },
            token: "tok-abc".to_string(),
        }
    }

    #[test]
    fn save_then_restore_roundtrips() {
        let (inner, sessions) = store();
        sessions.save(&session()).unwrap();

        assert!(inner.get(SESSION_TOKEN_KEY).unwrap().is_some());
        assert!(inner.get(SESSION_USER_KEY).unwrap().is_some());

        let restored = sessions.restore().unwrap().expect("session should restore");
        assert_eq!(restored.token, "tok-abc");
        assert_eq!(restored.user.role, Role::Lecturer);
    }

    #[test]
    fn corrupt_user_clears_both_keys() {
        let (inner, sessions) = store();
        inner.set(SESSION_TOKEN_KEY, "tok-abc").unwrap();
        inner.set(SESSION_USER_KEY, "{not json").unwrap();

        assert!(sessions.restore().unwrap().is_none());
        assert_eq!(inner.get(SESSION_TOKEN_KEY).unwrap(), None);
        assert_eq!(inner.get(SESSION_USER_KEY).unwrap(), None);
    }

    #[test]
    fn half_written_session_clears_both_keys() {
        let (inner, sessions) = store();
        inner.set(SESSION_TOKEN_KEY, "tok-abc").unwrap();

        assert!(sessions.restore().unwrap().is_none());
        assert_eq!(inner.get(SESSION_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn clear_removes_both_keys() {
        let (inner, sessions) = store();
        sessions.save(&session()).unwrap();
        sessions.clear().unwrap();

        assert_eq!(inner.get(SESSION_TOKEN_KEY).unwrap(), None);
        assert_eq!(inner.get(SESSION_USER_KEY).unwrap(), None);
    }

    #[test]
    fn empty_store_restores_nothing() {
        let (_, sessions) = store();
        assert!(sessions.restore().unwrap().is_none());
    }
}
