use std::sync::mpsc;
use std::thread;

use fetch_logging::{fetch_info, fetch_warn};
use vtu_core::{Effect, Msg, ResultReport, ResultRequest, TransportFailure};
use vtu_engine::{EngineConfig, EngineEvent, EngineHandle, ResultsRequest};

use crate::app::Input;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(base_url: &str, input_tx: mpsc::Sender<Input>) -> Self {
        let (engine, event_rx) = EngineHandle::new(EngineConfig::new(base_url));
        spawn_event_loop(event_rx, input_tx);
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitBatch(request) => {
                    fetch_info!(
                        "SubmitBatch usns={} subject={}",
                        request.usns.len(),
                        request.subject_code
                    );
                    self.engine.submit(map_request(request));
                }
                Effect::AbortSubmit => {
                    self.engine.abort();
                }
            }
        }
    }
}

/// Forwards engine completions back into the app's input channel.
fn spawn_event_loop(event_rx: mpsc::Receiver<EngineEvent>, input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            match event {
                EngineEvent::SubmitCompleted { result } => {
                    let result = match result {
                        Ok(report) => Ok(map_report(report)),
                        Err(err) => {
                            fetch_warn!("submission failed: {err}");
                            Err(TransportFailure {
                                message: err.to_string(),
                            })
                        }
                    };
                    if input_tx
                        .send(Input::Core(Msg::FetchCompleted { result }))
                        .is_err()
                    {
                        break;
                    }
                }
            }
        }
    });
}

fn map_request(request: ResultRequest) -> ResultsRequest {
    ResultsRequest {
        usns: request.usns,
        subject_code: request.subject_code,
        index_url: request.index_url,
        result_url: request.result_url,
    }
}

fn map_report(report: vtu_engine::ResultsReport) -> ResultReport {
    ResultReport {
        status: report.status,
        total_successful: report.total_successful,
        failed_count: report.failed_count,
        download_url: report.download_url,
    }
}
