use crate::state::{FetchPhase, Notice};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: FetchPhase,
    /// True while the single outstanding request is in flight.
    pub busy: bool,
    /// Distinct USNs the current input would submit.
    pub roster_count: usize,
    pub subject_code: String,
    pub index_url: String,
    pub result_url: String,
    pub notice: Option<Notice>,
}
