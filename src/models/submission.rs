use serde::{Deserialize, Serialize};

pub const SUBMISSION_TYPE: &str = "story_stake_submission";
pub const SUBMISSION_SOURCE: &str = "story.markets";

/// A normalized story stake, as persisted and logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(rename = "type")]
    pub kind: String,
    pub project: String,
    pub token: Option<String>,
    pub story: String,
    pub contact: Option<String>,
    pub timestamp: String,
    pub source: String,
}
