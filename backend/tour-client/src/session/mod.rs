//! Client-held session state.
//!
//! The session is two values, `token` and `user`, which are always written
//! and cleared together. The access layer reads it before every request and
//! clears it on a 401; hosts inject the store so tests can substitute an
//! in-memory one.

pub mod events;
pub mod file;
pub mod memory;

pub use events::{SessionEvent, SessionEvents};
pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use crate::error::SessionError;

use common::RedactedToken;
use models::User;

/// Proof of authentication plus the cached user profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: RedactedToken,
    pub user: User,
}

impl Session {
    pub fn new(token: RedactedToken, user: User) -> Self {
        Self { token, user }
    }
}

/// Durable storage for the current session.
///
/// Reads never fail: an unreadable store behaves like an empty one, so the
/// request simply goes out without credentials.
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Option<Session>;

    fn token(&self) -> Option<RedactedToken> {
        self.get().map(|session| session.token)
    }

    fn user(&self) -> Option<User> {
        self.get().map(|session| session.user)
    }

    fn set(&self, session: Session) -> Result<(), SessionError>;

    fn clear(&self) -> Result<(), SessionError>;

    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
