use std::fmt;

use serde::Deserialize;

/// Sentence used before the first review appears and whenever the remote
/// submission list is empty.
pub const NOT_YET_REVIEWED: &str = "The project is not yet reviewed.";

/// Name substituted when the API omits `homework_name`.
pub const UNNAMED_SUBMISSION: &str = "latest homework";

/// The three review states the remote API documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    /// Maps a raw status code to a known state; `None` for anything
    /// outside the documented set.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// The fixed verdict sentence for this state.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "The work has been reviewed: the reviewer liked everything. Hooray!",
            Self::Reviewing => "The work has been taken up for review.",
            Self::Rejected => "The work has been reviewed: errors were found.",
        }
    }
}

/// One reviewable unit as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Submission {
    pub status: String,
    #[serde(default)]
    pub homework_name: Option<String>,
}

/// A status code outside the documented set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndocumentedStatus {
    pub code: String,
}

impl fmt::Display for UndocumentedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "undocumented review status \"{}\"", self.code)
    }
}

/// Renders the status-change sentence for a submission.
///
/// Re-checks table membership even though the validator filters unknown
/// codes upstream; translation may be invoked on its own.
pub fn translate(submission: &Submission) -> Result<String, UndocumentedStatus> {
    let Some(status) = ReviewStatus::from_code(&submission.status) else {
        return Err(UndocumentedStatus {
            code: submission.status.clone(),
        });
    };
    let name = submission
        .homework_name
        .as_deref()
        .unwrap_or(UNNAMED_SUBMISSION);
    Ok(format!(
        "The review status of \"{name}\" has changed. {}",
        status.verdict()
    ))
}
