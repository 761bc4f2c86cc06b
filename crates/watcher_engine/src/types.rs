use std::fmt;

use watcher_core::UndocumentedStatus;

/// A classified failure from one poll round-trip (fetch or validation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollError {
    pub kind: PollKind,
    pub message: String,
}

impl PollError {
    pub fn new(kind: PollKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for PollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for PollError {}

impl From<UndocumentedStatus> for PollError {
    fn from(err: UndocumentedStatus) -> Self {
        let message = err.to_string();
        Self::new(PollKind::UndocumentedStatus { code: err.code }, message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollKind {
    Network,
    Timeout,
    HttpStatus(u16),
    EmptyAnswer,
    MissingKey { present: Vec<String> },
    MalformedShape,
    UndocumentedStatus { code: String },
}

impl fmt::Display for PollKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollKind::Network => write!(f, "network error"),
            PollKind::Timeout => write!(f, "timeout"),
            PollKind::HttpStatus(code) => write!(f, "http status {code}"),
            PollKind::EmptyAnswer => write!(f, "empty answer"),
            PollKind::MissingKey { present } => {
                write!(f, "missing key (present: {})", present.join(", "))
            }
            PollKind::MalformedShape => write!(f, "malformed answer"),
            PollKind::UndocumentedStatus { code } => {
                write!(f, "undocumented status {code}")
            }
        }
    }
}
