use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::gate::{AccessGate, GateState, Navigator};
use crate::models::Session;

/// Drives `gate` from a session subscription.
///
/// The gate is evaluated once for the current value and again each time the
/// session flags change. The task finishes with the gate's final state when
/// the gate goes `Unauthenticated` or the session channel closes.
pub fn watch_session(
    mut rx: watch::Receiver<Session>,
    mut gate: AccessGate,
    navigator: Arc<dyn Navigator>,
) -> JoinHandle<GateState> {
    tokio::spawn(async move {
        let mut last = *rx.borrow_and_update();
        gate.on_render(last, navigator.as_ref());

        while gate.state() != GateState::Unauthenticated {
            if rx.changed().await.is_err() {
                debug!("Session channel closed for {}", gate.location());
                break;
            }
            let next = *rx.borrow_and_update();
            if next == last {
                continue;
            }
            last = next;
            gate.on_render(next, navigator.as_ref());
        }

        gate.state()
    })
}
