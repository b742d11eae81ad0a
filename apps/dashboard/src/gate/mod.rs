//! Access Gate — decides, after each render pass, whether the viewer keeps
//! the dashboard or is sent to sign in.
//!
//! One gate exists per visit. It starts `Unresolved`, moves to
//! `Authenticated` once the session resolves signed-in, and ends in
//! `Unauthenticated` the first time the session reads signed-out. That last
//! state is terminal: the navigation has been issued and the gate stays quiet
//! until a fresh visit builds a new one.

pub mod navigation;
pub mod watcher;

use tracing::{debug, info};

use crate::models::{Session, SessionPhase};

pub use navigation::{auth_redirect, sanitize_return_to, NavigationTarget, Navigator};
pub use watcher::watch_session;

pub const DEFAULT_AUTH_ROUTE: &str = "/auth";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Unresolved,
    Authenticated,
    Unauthenticated,
}

/// Outcome of one gate evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Session still loading; render a placeholder, do not redirect.
    Pending,
    /// Signed in; the collection view stays.
    Proceed,
    /// Navigation was just issued to this target.
    Redirect(NavigationTarget),
    /// Navigation was issued earlier in this visit; nothing more to do.
    Redirected,
}

#[derive(Debug, Clone)]
pub struct AccessGate {
    auth_route: String,
    location: String,
    state: GateState,
}

impl AccessGate {
    /// Gate for a visit to `location`, redirecting to the default auth route.
    pub fn new(location: &str) -> Self {
        Self::with_auth_route(DEFAULT_AUTH_ROUTE, location)
    }

    pub fn with_auth_route(auth_route: &str, location: &str) -> Self {
        Self {
            auth_route: auth_route.to_string(),
            location: sanitize_return_to(location),
            state: GateState::Unresolved,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Evaluates the session after a render pass.
    ///
    /// Issues at most one navigation per gate. While the session is loading
    /// an unresolved gate waits; an already authenticated gate keeps the view
    /// up until the session actually reads signed-out.
    pub fn on_render(&mut self, session: Session, navigator: &dyn Navigator) -> GateDecision {
        if self.state == GateState::Unauthenticated {
            return GateDecision::Redirected;
        }

        match session.phase() {
            SessionPhase::Loading => match self.state {
                GateState::Authenticated => GateDecision::Proceed,
                _ => GateDecision::Pending,
            },
            SessionPhase::Authenticated => {
                if self.state != GateState::Authenticated {
                    debug!("Access gate for {} resolved: authenticated", self.location);
                }
                self.state = GateState::Authenticated;
                GateDecision::Proceed
            }
            SessionPhase::Anonymous => {
                self.state = GateState::Unauthenticated;
                let target = auth_redirect(&self.auth_route, &self.location);
                info!("Access gate redirecting to {target}");
                navigator.navigate(&target);
                GateDecision::Redirect(target)
            }
        }
    }
}
