mod mentor;

pub use mentor::{Mentor, MentorSummary};
