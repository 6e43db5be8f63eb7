use std::fmt;

use serde::{Deserialize, Serialize};

/// Wire request body for `POST /api/vtu/results`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsRequest {
    pub usns: Vec<String>,
    pub subject_code: String,
    pub index_url: String,
    pub result_url: String,
}

/// Wire response body from the result service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResultsReport {
    pub status: String,
    pub total_successful: u32,
    pub failed_count: u32,
    #[serde(default)]
    pub download_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SubmitCompleted {
        result: Result<ResultsReport, SubmitError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct SubmitError {
    pub kind: FailureKind,
    pub message: String,
}

impl SubmitError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    InvalidBody,
    Cancelled,
    /// Reserved for failure modes the backend does not distinguish yet.
    Unknown,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::InvalidBody => write!(f, "invalid response body"),
            FailureKind::Cancelled => write!(f, "cancelled"),
            FailureKind::Unknown => write!(f, "unknown error"),
        }
    }
}
