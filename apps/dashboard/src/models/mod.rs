pub mod resume;
pub mod session;

pub use resume::{Feedback, ResumeCollection, ResumeSummary};
pub use session::{Session, SessionPhase};
