use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Scores attached to an analyzed resume. Only what the dashboard displays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub overall_score: u8, // 0 – 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ats_score: Option<u8>,
}

/// One previously analyzed resume, as listed on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSummary {
    pub id: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    /// Thumbnail of the first page.
    pub image_path: String,
    pub resume_path: String,
    pub feedback: Feedback,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Ordered snapshot of resume summaries read for one render pass.
///
/// Ids are non-empty and unique; order is exactly the order supplied.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct ResumeCollection {
    items: Vec<ResumeSummary>,
}

impl ResumeCollection {
    pub fn new(items: Vec<ResumeSummary>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id.trim().is_empty() {
                return Err(AppError::Validation(
                    "resume summary with an empty id".to_string(),
                ));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(AppError::Validation(format!(
                    "duplicate resume id '{}'",
                    item.id
                )));
            }
        }
        Ok(Self { items })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResumeSummary> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a ResumeCollection {
    type Item = &'a ResumeSummary;
    type IntoIter = std::slice::Iter<'a, ResumeSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
pub(crate) fn summary(id: &str) -> ResumeSummary {
    ResumeSummary {
        id: id.to_string(),
        company_name: Some(format!("Company {id}")),
        job_title: Some("Engineer".to_string()),
        image_path: format!("/images/{id}.png"),
        resume_path: format!("/resumes/{id}.pdf"),
        feedback: Feedback {
            overall_score: 80,
            ats_score: None,
        },
        created_at: None,
    }
}
