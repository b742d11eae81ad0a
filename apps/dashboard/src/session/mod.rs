//! Session state the dashboard consults before showing anything.
//!
//! A `SessionContext` is created per signed-in viewer and handed to whoever
//! needs it. The dashboard only reads it; the sign-in flow and the registry
//! are the only writers.

pub mod registry;

use tokio::sync::watch;
use tracing::debug;

use crate::models::Session;

pub use registry::SessionRegistry;

/// Observable session state with an explicit lifecycle:
/// `new` (loading) → `resolve` → `sign_in` / `sign_out` / `expire`.
#[derive(Debug)]
pub struct SessionContext {
    tx: watch::Sender<Session>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    /// Starts unresolved: `is_loading` is set until `resolve` is called.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Session::LOADING);
        Self { tx }
    }

    pub fn current(&self) -> Session {
        *self.tx.borrow()
    }

    /// Receiver that wakes whenever the session actually changes.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    /// Marks the session resolved with the outcome of the authentication check.
    pub fn resolve(&self, authenticated: bool) {
        self.set(Session {
            is_authenticated: authenticated,
            is_loading: false,
        });
    }

    pub fn sign_in(&self) {
        self.set(Session::SIGNED_IN);
    }

    pub fn sign_out(&self) {
        self.set(Session::SIGNED_OUT);
    }

    /// Same end state as `sign_out`; kept separate so logs tell them apart.
    pub fn expire(&self) {
        debug!("Session expired");
        self.set(Session::SIGNED_OUT);
    }

    // Only notifies subscribers on an actual change.
    fn set(&self, next: Session) {
        self.tx.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }
}
