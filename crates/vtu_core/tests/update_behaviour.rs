use std::sync::Once;

use vtu_core::{
    update, AppState, Effect, FetchPhase, Msg, Notice, ResultReport, TransportFailure,
    NO_RESULTS_REASON,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(fetch_logging::initialize_for_tests);
}

fn submit_usns(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::UsnInputChanged(input.to_string()));
    update(state, Msg::FetchClicked)
}

fn success_report(total_successful: u32, failed_count: u32) -> ResultReport {
    ResultReport {
        status: "success".to_string(),
        total_successful,
        failed_count,
        download_url: None,
    }
}

#[test]
fn submit_with_empty_roster_is_refused_without_effects() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = submit_usns(state, "  \n ; , \n");

    assert_eq!(next.phase(), FetchPhase::Idle);
    assert!(effects.is_empty());
    assert!(matches!(
        next.view().notice,
        Some(Notice::ValidationFailed { .. })
    ));
}

#[test]
fn submit_normalizes_and_enters_loading() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::SubjectCodeChanged(" bcs401 ".to_string()));
    let (state, _) = update(
        state,
        Msg::IndexUrlChanged("https://results.example.in/index.php".to_string()),
    );
    let (state, _) = update(
        state,
        Msg::ResultUrlChanged("https://results.example.in/resultpage.php".to_string()),
    );

    let (next, effects) = submit_usns(state, "1bi23ec001, 1BI23EC002;1bi23ec001\n");

    assert_eq!(next.phase(), FetchPhase::Loading);
    assert!(next.view().busy);
    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::SubmitBatch(request) => {
            assert_eq!(request.usns, vec!["1BI23EC001", "1BI23EC002"]);
            assert_eq!(request.subject_code, "BCS401");
            assert_eq!(request.index_url, "https://results.example.in/index.php");
            assert_eq!(request.result_url, "https://results.example.in/resultpage.php");
        }
        other => panic!("unexpected effect {other:?}"),
    }
    assert_eq!(next.view().notice, Some(Notice::Loading { requested: 2 }));
}

#[test]
fn second_submit_while_loading_is_ignored() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = submit_usns(state, "1BI23EC001");
    assert_eq!(effects.len(), 1);

    // Back-to-back submit: no new effect, still Loading.
    let (state, effects) = update(state, Msg::FetchClicked);
    assert_eq!(state.phase(), FetchPhase::Loading);
    assert!(effects.is_empty());
}

#[test]
fn successful_report_lands_in_succeeded_with_summary() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_usns(state, "1BI23EC001, 1BI23EC002, 1BI23EC003, 1BI23EC004");

    let report = ResultReport {
        status: "success".to_string(),
        total_successful: 3,
        failed_count: 1,
        download_url: Some("x".to_string()),
    };
    let (next, effects) = update(state, Msg::FetchCompleted { result: Ok(report) });

    assert_eq!(next.phase(), FetchPhase::Succeeded);
    assert!(effects.is_empty());
    match next.view().notice {
        Some(Notice::ResultReady { summary }) => {
            assert_eq!(summary.requested, 4);
            assert_eq!(summary.total_successful, 3);
            assert_eq!(summary.failed_count, 1);
            assert_eq!(summary.download_url.as_deref(), Some("x"));
        }
        other => panic!("unexpected notice {other:?}"),
    }
}

#[test]
fn zero_successes_is_a_failure_despite_success_status() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_usns(state, "1BI23EC001");

    let (next, _) = update(
        state,
        Msg::FetchCompleted {
            result: Ok(success_report(0, 5)),
        },
    );

    assert_eq!(next.phase(), FetchPhase::Failed);
    assert_eq!(
        next.view().notice,
        Some(Notice::FetchFailed {
            reason: NO_RESULTS_REASON.to_string()
        })
    );
}

#[test]
fn non_success_status_is_a_failure() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_usns(state, "1BI23EC001");

    let report = ResultReport {
        status: "error".to_string(),
        total_successful: 7,
        failed_count: 0,
        download_url: None,
    };
    let (next, _) = update(state, Msg::FetchCompleted { result: Ok(report) });

    assert_eq!(next.phase(), FetchPhase::Failed);
}

#[test]
fn transport_failure_reenables_submission() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_usns(state, "1BI23EC001");

    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            result: Err(TransportFailure {
                message: "connection refused".to_string(),
            }),
        },
    );
    assert_eq!(state.phase(), FetchPhase::Failed);
    assert_eq!(
        state.view().notice,
        Some(Notice::FetchFailed {
            reason: "connection refused".to_string()
        })
    );

    // The machine is submittable again; no stuck Loading.
    let (state, effects) = update(state, Msg::FetchClicked);
    assert_eq!(state.phase(), FetchPhase::Loading);
    assert_eq!(effects.len(), 1);
}

#[test]
fn resubmission_works_after_success() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_usns(state, "1BI23EC001");
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            result: Ok(success_report(1, 0)),
        },
    );
    assert_eq!(state.phase(), FetchPhase::Succeeded);

    let (state, effects) = update(state, Msg::FetchClicked);
    assert_eq!(state.phase(), FetchPhase::Loading);
    assert_eq!(effects.len(), 1);
}

#[test]
fn stale_completion_outside_loading_is_ignored() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::UsnInputChanged("1BI23EC001".to_string()));
    let before = state.view();

    let (next, effects) = update(
        state,
        Msg::FetchCompleted {
            result: Ok(success_report(1, 0)),
        },
    );

    assert_eq!(next.phase(), FetchPhase::Idle);
    assert_eq!(next.view(), before);
    assert!(effects.is_empty());
}

#[test]
fn abort_emits_effect_only_while_loading() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(state, Msg::AbortClicked);
    assert!(effects.is_empty());

    let (state, _) = submit_usns(state, "1BI23EC001");
    let (state, effects) = update(state, Msg::AbortClicked);
    assert_eq!(effects, vec![Effect::AbortSubmit]);
    // The phase change arrives via the cancelled completion.
    assert_eq!(state.phase(), FetchPhase::Loading);
}

#[test]
fn generate_appends_to_existing_input() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::UsnInputChanged("1BI23EC900".to_string()));
    let (state, effects) = update(
        state,
        Msg::GenerateClicked {
            prefix: "1bi23ec".to_string(),
            start: 1,
            end: 3,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().notice, Some(Notice::Generated { count: 3 }));
    assert_eq!(state.view().roster_count, 4);

    let (state, effects) = update(state, Msg::FetchClicked);
    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::SubmitBatch(request) => {
            assert_eq!(
                request.usns,
                vec!["1BI23EC900", "1BI23EC001", "1BI23EC002", "1BI23EC003"]
            );
        }
        other => panic!("unexpected effect {other:?}"),
    }
    assert_eq!(state.phase(), FetchPhase::Loading);
}

#[test]
fn generate_with_invalid_range_is_refused() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(
        state,
        Msg::GenerateClicked {
            prefix: "1bi23ec".to_string(),
            start: 9,
            end: 3,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().roster_count, 0);
    assert!(matches!(
        state.view().notice,
        Some(Notice::ValidationFailed { .. })
    ));
}

#[test]
fn generated_duplicates_collapse_with_typed_entries() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::UsnInputChanged("1BI23EC002".to_string()));
    let (state, _) = update(
        state,
        Msg::GenerateClicked {
            prefix: "1BI23EC".to_string(),
            start: 1,
            end: 3,
        },
    );

    // The generator itself does not dedupe; submission-time
    // normalization collapses the overlap.
    let (_, effects) = update(state, Msg::FetchClicked);
    match &effects[0] {
        Effect::SubmitBatch(request) => {
            assert_eq!(request.usns, vec!["1BI23EC002", "1BI23EC001", "1BI23EC003"]);
        }
        other => panic!("unexpected effect {other:?}"),
    }
}
