use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::models::{Feedback, ResumeCollection, ResumeSummary};
use crate::resumes::ResumeSource;

/// Reads the collection from a JSON array on disk on every snapshot.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ResumeSource for JsonFileSource {
    async fn snapshot(&self) -> Result<ResumeCollection, AppError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::Source(format!("reading {}: {e}", self.path.display()))
        })?;

        let items: Vec<ResumeSummary> = serde_json::from_str(&raw).map_err(|e| {
            AppError::Source(format!("parsing {}: {e}", self.path.display()))
        })?;

        debug!("Loaded {} resumes from {}", items.len(), self.path.display());
        ResumeCollection::new(items)
            .map_err(|e| AppError::Source(format!("{}: {e}", self.path.display())))
    }

    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }
}

/// Fixed in-memory collection.
pub struct StaticSource {
    collection: ResumeCollection,
}

impl StaticSource {
    pub fn new(collection: ResumeCollection) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl ResumeSource for StaticSource {
    async fn snapshot(&self) -> Result<ResumeCollection, AppError> {
        Ok(self.collection.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

fn sample(id: &str, company: &str, title: &str, image: &str, score: u8, ats: u8) -> ResumeSummary {
    ResumeSummary {
        id: id.to_string(),
        company_name: Some(company.to_string()),
        job_title: Some(title.to_string()),
        image_path: format!("/images/{image}.png"),
        resume_path: format!("/resumes/resume-{id}.pdf"),
        feedback: Feedback {
            overall_score: score,
            ats_score: Some(ats),
        },
        created_at: None,
    }
}

/// Built-in collection used when no snapshot file is configured.
pub fn sample_resumes() -> ResumeCollection {
    let items = vec![
        sample("1", "Google", "Frontend Developer", "resume_01", 85, 90),
        sample("2", "Microsoft", "Cloud Engineer", "resume_02", 55, 62),
        sample("3", "Apple", "iOS Developer", "resume_03", 75, 80),
    ];
    // Ids above are literal and distinct.
    ResumeCollection::new(items).unwrap_or_default()
}
