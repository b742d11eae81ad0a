//! Resume collection sources — read-only snapshots for the dashboard.
//!
//! `AppState` holds an `Arc<dyn ResumeSource>`, chosen at startup from config.

pub mod source;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::ResumeCollection;

pub use source::{sample_resumes, JsonFileSource, StaticSource};

/// Read-only access to the ordered resume collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResumeSource: Send + Sync {
    /// Current collection, read once per render pass.
    async fn snapshot(&self) -> Result<ResumeCollection, AppError>;

    /// Short label for logs ("static", "json:<path>").
    fn describe(&self) -> String;
}
