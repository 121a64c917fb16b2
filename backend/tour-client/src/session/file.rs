//! Session persisted as a small JSON document on disk.
//!
//! Layout: `{"token": "...", "user": {...}}`. A missing file means signed out.
//! Writes go through a uniquely named temp file + rename so a crash never
//! leaves half a session and concurrent writers never share a temp file.

use crate::error::SessionError;
use crate::session::{Session, SessionStore};

use common::{ErrorLocation, RedactedToken};
use models::User;

use std::io::{ErrorKind, Write};
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct StoredSession {
    token: String,
    user: User,
}

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Read the stored session, distinguishing "none stored" from "unreadable".
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SessionError::ReadError {
                    location: ErrorLocation::from(Location::caller()),
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let stored: StoredSession =
            serde_json::from_str(&contents).map_err(|e| SessionError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        Ok(Some(Session::new(RedactedToken::new(stored.token), stored.user)))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<Session> {
        match self.load() {
            Ok(session) => session,
            Err(e) => {
                warn!("Ignoring unreadable session file: {e}");
                None
            }
        }
    }

    fn set(&self, session: Session) -> Result<(), SessionError> {
        let dir = self.parent_dir();
        std::fs::create_dir_all(dir).map_err(|e| SessionError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: dir.to_path_buf(),
            source: e,
        })?;

        let stored = StoredSession {
            token: session.token.as_str().to_string(),
            user: session.user,
        };

        let json = serde_json::to_string_pretty(&stored).map_err(|e| {
            SessionError::SerializeError {
                location: ErrorLocation::from(Location::caller()),
                reason: e.to_string(),
            }
        })?;

        let mut temp = tempfile::Builder::new()
            .prefix(".session-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| SessionError::WriteError {
                location: ErrorLocation::from(Location::caller()),
                path: dir.to_path_buf(),
                source: e,
            })?;

        temp.write_all(json.as_bytes())
            .map_err(|e| SessionError::WriteError {
                location: ErrorLocation::from(Location::caller()),
                path: temp.path().to_path_buf(),
                source: e,
            })?;

        temp.persist(&self.path).map_err(|e| SessionError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: self.path.clone(),
            source: e.error,
        })?;

        debug!("Session written to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Session file removed: {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::WriteError {
                location: ErrorLocation::from(Location::caller()),
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}
