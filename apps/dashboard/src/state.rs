use std::sync::Arc;

use crate::config::Config;
use crate::resumes::ResumeSource;
use crate::session::SessionRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: Arc<SessionRegistry>,
    /// Pluggable collection source. JSON file when RESUMES_PATH is set, samples otherwise.
    pub resumes: Arc<dyn ResumeSource>,
}

impl AppState {
    pub fn new(config: Config, resumes: Arc<dyn ResumeSource>) -> Self {
        let sessions = Arc::new(SessionRegistry::new(config.session_ttl_secs));
        Self {
            config,
            sessions,
            resumes,
        }
    }
}
