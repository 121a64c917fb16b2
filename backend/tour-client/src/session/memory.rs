use crate::error::SessionError;
use crate::session::{Session, SessionStore};

use common::ErrorLocation;

use std::panic::Location;
use std::sync::RwLock;

use log::warn;

/// Process-local session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        match self.session.read() {
            Ok(guard) => guard.clone(),
            Err(_) => {
                warn!("Session lock poisoned, treating as signed out");
                None
            }
        }
    }

    #[track_caller]
    fn set(&self, session: Session) -> Result<(), SessionError> {
        let mut guard = self.session.write().map_err(|_| SessionError::Poisoned {
            location: ErrorLocation::from(Location::caller()),
        })?;
        *guard = Some(session);
        Ok(())
    }

    #[track_caller]
    fn clear(&self) -> Result<(), SessionError> {
        let mut guard = self.session.write().map_err(|_| SessionError::Poisoned {
            location: ErrorLocation::from(Location::caller()),
        })?;
        *guard = None;
        Ok(())
    }
}
