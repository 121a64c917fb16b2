//! Session lifecycle notifications.
//!
//! The access layer never navigates. It publishes [`SessionEvent::Expired`]
//! and the host decides where to send the user.

use log::debug;
use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A login-style response stored a new session.
    LoggedIn { user_id: Option<String> },

    /// The session was cleared on request.
    LoggedOut,

    /// The backend answered 401 and the session was cleared.
    Expired { login_path: String },
}

/// Broadcast hub shared by every clone of the client.
#[derive(Debug, Clone)]
pub struct SessionEvents {
    sender: broadcast::Sender<SessionEvent>,
}

impl SessionEvents {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: SessionEvent) {
        match self.sender.send(event) {
            Ok(receivers) => debug!("Session event delivered to {receivers} subscriber(s)"),
            Err(broadcast::error::SendError(event)) => {
                debug!("Session event {event:?} dropped, no subscribers")
            }
        }
    }
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new()
    }
}
