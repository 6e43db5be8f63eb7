use crate::effect::ResultRequest;
use crate::roster::normalize_usns;
use crate::view_model::AppViewModel;

/// Lifecycle of the single outstanding request.
///
/// `Loading` is the only phase that blocks submission; every completion
/// path leaves it, so the machine is reusable indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Outcome figures carried by a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    pub requested: usize,
    pub total_successful: u32,
    pub failed_count: u32,
    pub download_url: Option<String>,
}

/// One-line status event for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Generated { count: usize },
    ValidationFailed { reason: String },
    Loading { requested: usize },
    ResultReady { summary: FetchSummary },
    FetchFailed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    usn_input: String,
    subject_code: String,
    index_url: String,
    result_url: String,
    phase: FetchPhase,
    requested: usize,
    notice: Option<Notice>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase,
            busy: self.phase == FetchPhase::Loading,
            roster_count: self.normalized_roster().len(),
            subject_code: self.subject_code.trim().to_uppercase(),
            index_url: self.index_url.trim().to_string(),
            result_url: self.result_url.trim().to_string(),
            notice: self.notice.clone(),
        }
    }

    /// Returns and clears the render-dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Normalized, deduplicated view of the current USN input.
    pub fn normalized_roster(&self) -> Vec<String> {
        normalize_usns(&self.usn_input)
    }

    pub(crate) fn set_usn_input(&mut self, text: String) {
        self.usn_input = text;
        self.dirty = true;
    }

    pub(crate) fn set_subject_code(&mut self, text: String) {
        self.subject_code = text;
        self.dirty = true;
    }

    pub(crate) fn set_index_url(&mut self, text: String) {
        self.index_url = text;
        self.dirty = true;
    }

    pub(crate) fn set_result_url(&mut self, text: String) {
        self.result_url = text;
        self.dirty = true;
    }

    /// Appends freshly generated USNs after any existing input content.
    pub(crate) fn append_generated(&mut self, usns: &[String]) {
        let joined = usns.join(", ");
        let current = self.usn_input.trim();
        self.usn_input = if current.is_empty() {
            joined
        } else {
            format!("{current}, {joined}")
        };
        self.dirty = true;
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.dirty = true;
    }

    /// Builds the wire request from the current inputs.
    pub(crate) fn build_request(&self, usns: Vec<String>) -> ResultRequest {
        ResultRequest {
            usns,
            subject_code: self.subject_code.trim().to_uppercase(),
            index_url: self.index_url.trim().to_string(),
            result_url: self.result_url.trim().to_string(),
        }
    }

    pub(crate) fn enter_loading(&mut self, requested: usize) {
        self.phase = FetchPhase::Loading;
        self.requested = requested;
        self.set_notice(Notice::Loading { requested });
    }

    pub(crate) fn finish_success(
        &mut self,
        total_successful: u32,
        failed_count: u32,
        download_url: Option<String>,
    ) {
        self.phase = FetchPhase::Succeeded;
        let summary = FetchSummary {
            requested: self.requested,
            total_successful,
            failed_count,
            download_url,
        };
        self.set_notice(Notice::ResultReady { summary });
    }

    pub(crate) fn finish_failure(&mut self, reason: String) {
        self.phase = FetchPhase::Failed;
        self.set_notice(Notice::FetchFailed { reason });
    }
}
