use crate::Submission;

/// One cycle outcome, fed to the state machine by the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Fetch and validation produced a well-formed submission list.
    PollSucceeded {
        submissions: Vec<Submission>,
        /// Epoch seconds the cursor moves to once the cycle is accepted.
        now: i64,
    },
    /// Fetch or validation failed; `report` is the rendered error.
    PollFailed { report: String },
    /// The notifier confirmed delivery of a status notice.
    NoticeDelivered { text: String },
}
