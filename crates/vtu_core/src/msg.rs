/// Parsed response body from the result service, as seen by the core.
///
/// The core does not talk JSON itself; the shell decodes the wire response
/// and hands the fields over unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultReport {
    pub status: String,
    pub total_successful: u32,
    pub failed_count: u32,
    pub download_url: Option<String>,
}

/// Transport-level failure of the outstanding request (network error,
/// bad HTTP status, undecodable body, abort).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the USN input box.
    UsnInputChanged(String),
    /// User edited the subject code input.
    SubjectCodeChanged(String),
    /// User edited the index page URL.
    IndexUrlChanged(String),
    /// User edited the result page URL.
    ResultUrlChanged(String),
    /// User asked for a sequential USN batch to be appended to the input.
    GenerateClicked { prefix: String, start: u32, end: u32 },
    /// User submitted the current input for fetching.
    FetchClicked,
    /// User asked to abort the outstanding request.
    AbortClicked,
    /// Resolution of the outstanding request.
    FetchCompleted {
        result: Result<ResultReport, TransportFailure>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
