use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use fetch_logging::{fetch_info, fetch_warn};

use crate::client::{ReqwestResultService, ResultService, SubmitSettings};
use crate::{EngineEvent, FailureKind, ResultsRequest, SubmitError};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub base_url: String,
    pub settings: SubmitSettings,
}

impl EngineConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            settings: SubmitSettings::default(),
        }
    }
}

enum EngineCommand {
    Submit { request: ResultsRequest },
    Abort,
}

/// Command side of the engine. Events arrive on the receiver returned by
/// [`EngineHandle::new`]; the caller decides where to pump them.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let service = Arc::new(ReqwestResultService::new(config.base_url, config.settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let in_flight: Arc<Mutex<Option<tokio::task::AbortHandle>>> =
                Arc::new(Mutex::new(None));

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Submit { request } => {
                        fetch_info!(
                            "Submit usns={} subject={}",
                            request.usns.len(),
                            request.subject_code
                        );
                        let service = service.clone();
                        let event_tx = event_tx.clone();
                        let slot = in_flight.clone();
                        let task = runtime.spawn(async move {
                            let result = service.submit(&request).await;
                            if let Ok(mut guard) = slot.lock() {
                                guard.take();
                            }
                            if let Err(err) = &result {
                                fetch_warn!("submission failed: {err}");
                            }
                            let _ = event_tx.send(EngineEvent::SubmitCompleted { result });
                        });
                        if let Ok(mut guard) = in_flight.lock() {
                            *guard = Some(task.abort_handle());
                        }
                    }
                    EngineCommand::Abort => {
                        let handle = in_flight.lock().ok().and_then(|mut guard| guard.take());
                        if let Some(handle) = handle {
                            fetch_info!("aborting outstanding submission");
                            handle.abort();
                            let _ = event_tx.send(EngineEvent::SubmitCompleted {
                                result: Err(SubmitError::new(
                                    FailureKind::Cancelled,
                                    "request aborted",
                                )),
                            });
                        }
                    }
                }
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn submit(&self, request: ResultsRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Submit { request });
    }

    pub fn abort(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Abort);
    }
}
