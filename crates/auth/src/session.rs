use tracing::{info, warn};

use solidarity_store::KeyValueStore;

use crate::error::SessionError;
use crate::user::{ProfileUpdate, User};

pub const LOGGED_IN_KEY: &str = "isLoggedIn";
pub const USER_KEY: &str = "user";

/// Sign-in state kept in a [`KeyValueStore`].
#[derive(Debug)]
pub struct Session<S> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current user, if signed in.
    ///
    /// A corrupt user record signs the session out.
    pub fn load(&self) -> Result<Option<User>, SessionError> {
        if !self.is_logged_in()? {
            return Ok(None);
        }
        let Some(raw) = self.store.get(USER_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                warn!(error = %err, "stored user is unreadable; signing out");
                self.clear()?;
                Ok(None)
            }
        }
    }

    pub fn is_logged_in(&self) -> Result<bool, SessionError> {
        Ok(self.store.get(LOGGED_IN_KEY)?.as_deref() == Some("true"))
    }

    pub fn login(&self, email: &str, name: &str) -> Result<User, SessionError> {
        let email = email.trim();
        let name = name.trim();
        if email.is_empty() {
            return Err(SessionError::MissingField("email"));
        }
        if name.is_empty() {
            return Err(SessionError::MissingField("name"));
        }

        let user = User::new(email, name);
        self.save(&user)?;
        self.store.set(LOGGED_IN_KEY, "true".to_string())?;
        info!(user_id = %user.id, "signed in");
        Ok(user)
    }

    /// Registration is a sign-in; there is no account directory.
    pub fn register(&self, email: &str, name: &str) -> Result<User, SessionError> {
        self.login(email, name)
    }

    pub fn logout(&self) -> Result<(), SessionError> {
        self.clear()?;
        info!("signed out");
        Ok(())
    }

    pub fn update_profile(&self, update: ProfileUpdate) -> Result<User, SessionError> {
        let mut user = self.load()?.ok_or(SessionError::NotLoggedIn)?;
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(SessionError::MissingField("name"));
            }
        }
        if let Some(email) = &update.email {
            if email.trim().is_empty() {
                return Err(SessionError::MissingField("email"));
            }
        }
        user.merge(update);
        self.save(&user)?;
        Ok(user)
    }

    fn save(&self, user: &User) -> Result<(), SessionError> {
        self.store.set(USER_KEY, serde_json::to_string(user)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.store.remove(LOGGED_IN_KEY)?;
        self.store.remove(USER_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solidarity_store::InMemoryStore;
    use std::sync::Arc;

    #[test]
    fn login_then_load_returns_user() {
        let session = Session::new(InMemoryStore::new());
        let user = session.login(" amal@example.org ", "Amal").unwrap();
        assert_eq!(user.email, "amal@example.org");

        let loaded = session.load().unwrap().unwrap();
        assert_eq!(loaded, user);
        assert!(session.is_logged_in().unwrap());
    }

    #[test]
    fn login_requires_email_and_name() {
        let session = Session::new(InMemoryStore::new());
        assert!(matches!(
            session.login("", "Amal").unwrap_err(),
            SessionError::MissingField("email")
        ));
        assert!(matches!(
            session.register("amal@example.org", "  ").unwrap_err(),
            SessionError::MissingField("name")
        ));
        assert!(session.load().unwrap().is_none());
    }

    #[test]
    fn logout_clears_both_keys() {
        let store = Arc::new(InMemoryStore::new());
        let session = Session::new(Arc::clone(&store));
        session.login("amal@example.org", "Amal").unwrap();
        session.logout().unwrap();

        assert!(store.get(LOGGED_IN_KEY).unwrap().is_none());
        assert!(store.get(USER_KEY).unwrap().is_none());
        assert!(session.load().unwrap().is_none());
    }

    #[test]
    fn corrupt_user_signs_out() {
        let store = Arc::new(InMemoryStore::new());
        store.set(LOGGED_IN_KEY, "true".to_string()).unwrap();
        store.set(USER_KEY, "not json".to_string()).unwrap();

        let session = Session::new(Arc::clone(&store));
        assert!(session.load().unwrap().is_none());
        assert!(store.get(LOGGED_IN_KEY).unwrap().is_none());
    }

    #[test]
    fn user_record_without_id_stays_signed_in() {
        let store = Arc::new(InMemoryStore::new());
        store.set(LOGGED_IN_KEY, "true".to_string()).unwrap();
        store
            .set(USER_KEY, r#"{"name":"Amal","email":"amal@example.org"}"#.to_string())
            .unwrap();

        let session = Session::new(Arc::clone(&store));
        let user = session.load().unwrap().unwrap();
        assert_eq!(user.name, "Amal");
        assert_eq!(user.email, "amal@example.org");
        assert!(store.get(USER_KEY).unwrap().is_some());
        assert!(session.is_logged_in().unwrap());
    }

    #[test]
    fn user_without_flag_is_not_signed_in() {
        let store = Arc::new(InMemoryStore::new());
        let session = Session::new(Arc::clone(&store));
        session.login("amal@example.org", "Amal").unwrap();
        store.remove(LOGGED_IN_KEY).unwrap();
        assert!(session.load().unwrap().is_none());
    }

    #[test]
    fn update_profile_merges_and_persists() {
        let session = Session::new(InMemoryStore::new());
        let original = session.login("amal@example.org", "Amal").unwrap();

        let updated = session
            .update_profile(ProfileUpdate {
                name: Some("Amal H.".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.name, "Amal H.");
        assert_eq!(updated.email, "amal@example.org");
        assert_eq!(session.load().unwrap().unwrap(), updated);
    }

    #[test]
    fn update_profile_requires_sign_in() {
        let session = Session::new(InMemoryStore::new());
        assert!(matches!(
            session.update_profile(ProfileUpdate::default()).unwrap_err(),
            SessionError::NotLoggedIn
        ));
    }
}
