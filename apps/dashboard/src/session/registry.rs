use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use tracing::info;
use uuid::Uuid;

use crate::models::Session;
use crate::session::SessionContext;

struct Entry {
    context: Arc<SessionContext>,
    username: String,
    expires_at: DateTime<Utc>,
}

/// In-memory map from session token to live `SessionContext`.
///
/// Stands in for the external authentication provider: it only answers
/// "is this token signed in" and runs the sign-in / sign-out flow.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, Entry>>,
    ttl: Duration,
}

impl SessionRegistry {
    pub fn new(ttl_secs: u64) -> Self {
        // chrono panics above i64::MAX / 1000 seconds
        let ttl_secs = i64::try_from(ttl_secs)
            .unwrap_or(i64::MAX)
            .min(i64::MAX / 1_000);
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    /// Signs `username` in and returns the new session token.
    pub fn create(&self, username: &str) -> Uuid {
        self.create_at(username, Utc::now())
    }

    fn create_at(&self, username: &str, now: DateTime<Utc>) -> Uuid {
        let token = Uuid::new_v4();
        let context = Arc::new(SessionContext::new());
        context.resolve(true);

        let entry = Entry {
            context,
            username: username.to_string(),
            expires_at: now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
        };
        self.write().insert(token, entry);
        info!("Session created for {username}");
        token
    }

    /// Live context for `token`. Expired sessions are expired and dropped here.
    pub fn lookup(&self, token: Uuid) -> Option<Arc<SessionContext>> {
        self.lookup_at(token, Utc::now())
    }

    fn lookup_at(&self, token: Uuid, now: DateTime<Utc>) -> Option<Arc<SessionContext>> {
        {
            let sessions = self.read();
            let entry = sessions.get(&token)?;
            if entry.expires_at > now {
                return Some(entry.context.clone());
            }
        }

        if let Some(entry) = self.write().remove(&token) {
            entry.context.expire();
            info!("Session for {} expired", entry.username);
        }
        None
    }

    /// Session snapshot for an optional token. Unknown tokens read as signed out.
    pub fn session_for(&self, token: Option<Uuid>) -> Session {
        token
            .and_then(|t| self.lookup(t))
            .map(|ctx| ctx.current())
            .unwrap_or(Session::SIGNED_OUT)
    }

    pub fn username(&self, token: Uuid) -> Option<String> {
        self.read().get(&token).map(|e| e.username.clone())
    }

    /// Signs the session out and forgets it. Returns false for unknown tokens.
    pub fn end(&self, token: Uuid) -> bool {
        match self.write().remove(&token) {
            Some(entry) => {
                entry.context.sign_out();
                info!("Session ended for {}", entry.username);
                true
            }
            None => false,
        }
    }

    /// Expires every session past its deadline; returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.write();
        let before = sessions.len();
        sessions.retain(|_, entry| {
            let alive = entry.expires_at > now;
            if !alive {
                entry.context.expire();
            }
            alive
        });
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Uuid, Entry>> {
        self.sessions.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Uuid, Entry>> {
        self.sessions.write().unwrap_or_else(|e| e.into_inner())
    }
}
