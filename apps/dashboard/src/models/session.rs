use serde::{Deserialize, Serialize};

/// The viewer's authentication status as observed by the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl Session {
    /// Session that has not resolved yet.
    pub const LOADING: Session = Session {
        is_authenticated: false,
        is_loading: true,
    };
    pub const SIGNED_IN: Session = Session {
        is_authenticated: true,
        is_loading: false,
    };
    pub const SIGNED_OUT: Session = Session {
        is_authenticated: false,
        is_loading: false,
    };

    pub fn phase(&self) -> SessionPhase {
        match (self.is_loading, self.is_authenticated) {
            (true, _) => SessionPhase::Loading,
            (false, true) => SessionPhase::Authenticated,
            (false, false) => SessionPhase::Anonymous,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Authenticated,
    Anonymous,
}
