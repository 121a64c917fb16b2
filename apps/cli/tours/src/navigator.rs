//! Where the app goes when the session expires.
//!
//! The access layer only publishes [`SessionEvent::Expired`]; the host owns
//! navigation. For the CLI "navigating" means telling the user to sign in again.

use tour_client::SessionEvent;

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Logs the redirect and prints a sign-in hint.
#[derive(Debug, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, path: &str) {
        warn!("Session expired, redirecting to {path}");
        eprintln!("Your session has expired. Run `tours login <email> <password>` to sign in again.");
    }
}

/// Forward every `Expired` event to `navigator` until the channel closes.
pub fn spawn_expiry_forwarder(
    mut events: broadcast::Receiver<SessionEvent>,
    navigator: Arc<dyn Navigator>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(SessionEvent::Expired { login_path }) => navigator.navigate(&login_path),
                Ok(other) => debug!("Session event: {other:?}"),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Missed {skipped} session event(s)");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
