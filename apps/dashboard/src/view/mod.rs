//! Collection View — the dashboard render model.
//!
//! Rendering is a pure function of the collection snapshot. Navigation and
//! heading always appear; the grid exists only for a non-empty collection.

pub mod html;
pub mod reconcile;

use serde::Serialize;

use crate::models::{ResumeCollection, ResumeSummary};

pub use reconcile::{reconcile, KeyedChange};

pub const PAGE_TITLE: &str = "Resume Analyzer";
pub const PAGE_DESCRIPTION: &str = "Smart feedback for Resume ATS Scanning";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Navbar {
    pub brand: &'static str,
    pub upload_href: &'static str,
    pub upload_label: &'static str,
}

impl Default for Navbar {
    fn default() -> Self {
        Self {
            brand: "RESUMIND",
            upload_href: "/upload",
            upload_label: "Upload Resume",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Heading {
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl Default for Heading {
    fn default() -> Self {
        Self {
            title: "Track Your Applications & Resume Ratings",
            subtitle: "Review your submissions and check AI-powered feedback.",
        }
    }
}

/// One resume tile. `key` is the record id and is the card's identity.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResumeCard {
    pub key: String,
    pub company_name: Option<String>,
    pub job_title: Option<String>,
    pub image_path: String,
    pub resume_path: String,
    pub score: u8,
}

impl From<&ResumeSummary> for ResumeCard {
    fn from(resume: &ResumeSummary) -> Self {
        Self {
            key: resume.id.clone(),
            company_name: resume.company_name.clone(),
            job_title: resume.job_title.clone(),
            image_path: resume.image_path.clone(),
            resume_path: resume.resume_path.clone(),
            score: resume.feedback.overall_score.min(100),
        }
    }
}

impl ResumeCard {
    /// Link to the detailed review of this resume.
    pub fn href(&self) -> String {
        format!("/resume/{}", self.key)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResumeGrid {
    pub cards: Vec<ResumeCard>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub navbar: Navbar,
    pub heading: Heading,
    pub grid: Option<ResumeGrid>,
}

impl DashboardView {
    pub fn render(collection: &ResumeCollection) -> Self {
        let grid = if collection.is_empty() {
            None
        } else {
            Some(ResumeGrid {
                cards: collection.iter().map(ResumeCard::from).collect(),
            })
        };

        Self {
            navbar: Navbar::default(),
            heading: Heading::default(),
            grid,
        }
    }

    pub fn card_count(&self) -> usize {
        self.grid.as_ref().map_or(0, |g| g.cards.len())
    }

    pub fn card_keys(&self) -> Vec<&str> {
        self.grid
            .iter()
            .flat_map(|g| g.cards.iter())
            .map(|c| c.key.as_str())
            .collect()
    }
}
