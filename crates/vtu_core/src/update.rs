use crate::{AppState, Effect, FetchPhase, Msg, Notice, RangeSpec};

/// Uniform failure reason for a well-formed response with no usable
/// results. The backend does not let us tell a legitimate zero-match run
/// apart from a verification-challenge error, so neither do we.
pub const NO_RESULTS_REASON: &str = "no results found or verification-challenge error";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UsnInputChanged(text) => {
            state.set_usn_input(text);
            Vec::new()
        }
        Msg::SubjectCodeChanged(text) => {
            state.set_subject_code(text);
            Vec::new()
        }
        Msg::IndexUrlChanged(text) => {
            state.set_index_url(text);
            Vec::new()
        }
        Msg::ResultUrlChanged(text) => {
            state.set_result_url(text);
            Vec::new()
        }
        Msg::GenerateClicked { prefix, start, end } => {
            match RangeSpec::new(&prefix, start, end) {
                Ok(spec) => {
                    let usns = spec.generate();
                    state.set_notice(Notice::Generated { count: usns.len() });
                    state.append_generated(&usns);
                }
                Err(err) => {
                    state.set_notice(Notice::ValidationFailed {
                        reason: err.to_string(),
                    });
                }
            }
            Vec::new()
        }
        Msg::FetchClicked => {
            // Single-flight guard: a second submit while Loading is a
            // no-op, never queued or merged.
            if state.phase() == FetchPhase::Loading {
                return (state, Vec::new());
            }
            let usns = state.normalized_roster();
            if usns.is_empty() {
                state.set_notice(Notice::ValidationFailed {
                    reason: "enter at least one valid USN".to_string(),
                });
                return (state, Vec::new());
            }
            let request = state.build_request(usns);
            state.enter_loading(request.usns.len());
            vec![Effect::SubmitBatch(request)]
        }
        Msg::AbortClicked => {
            if state.phase() == FetchPhase::Loading {
                vec![Effect::AbortSubmit]
            } else {
                Vec::new()
            }
        }
        Msg::FetchCompleted { result } => {
            // Stale completions (after an abort already resolved the
            // request) must not disturb a later submission.
            if state.phase() != FetchPhase::Loading {
                return (state, Vec::new());
            }
            match result {
                Ok(report) if report.status == "success" && report.total_successful > 0 => {
                    state.finish_success(
                        report.total_successful,
                        report.failed_count,
                        report.download_url,
                    );
                }
                Ok(_) => {
                    state.finish_failure(NO_RESULTS_REASON.to_string());
                }
                Err(failure) => {
                    state.finish_failure(failure.message);
                }
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
