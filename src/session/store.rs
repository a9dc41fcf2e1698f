//! Session state shared by every screen: the auth token and the current page
//! of users.
//!
//! The store is owned by the UI thread and passed explicitly; there is no
//! global. The token is persisted through a [`TokenStorage`] on every write,
//! the user list only ever lives in memory and holds exactly one fetched page.

use crate::api::User;
use crate::config::SecureString;
use crate::session::storage::TokenStorage;
use crate::session::SessionError;

pub struct SessionStore {
    token: Option<SecureString>,
    users: Vec<User>,
    storage: Box<dyn TokenStorage>,
}

impl SessionStore {
    /// Open a session, restoring a previously persisted token if present.
    pub fn open(storage: Box<dyn TokenStorage>) -> Result<Self, SessionError> {
        let token = storage.load()?.map(SecureString::new);
        Ok(Self {
            token,
            users: Vec::new(),
            storage,
        })
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_ref().map(SecureString::expose)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Store and persist a new token.
    ///
    /// The in-memory token is only replaced once persisting succeeded.
    pub fn set_token(&mut self, token: String) -> Result<(), SessionError> {
        self.storage.save(&token)?;
        self.token = Some(SecureString::new(token));
        Ok(())
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Replace the whole list with a freshly fetched page.
    pub fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
    }

    pub fn clear_users(&mut self) {
        self.users.clear();
    }

    pub fn find_user(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Replace the entry with the same id in place.
    ///
    /// Returns false (and changes nothing) when no entry matches.
    pub fn replace_user(&mut self, user: User) -> bool {
        match self.users.iter_mut().find(|existing| existing.id == user.id) {
            Some(existing) => {
                *existing = user;
                true
            }
            None => false,
        }
    }

    /// Remove the entry with `id`, keeping the order of the others.
    pub fn remove_user(&mut self, id: u64) -> bool {
        let before = self.users.len();
        self.users.retain(|user| user.id != id);
        self.users.len() != before
    }

    /// Forget the token (memory and storage) and the loaded users.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.token = None;
        self.users.clear();
        self.storage.clear()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("token", &self.token)
            .field("users", &self.users.len())
            .finish()
    }
}
