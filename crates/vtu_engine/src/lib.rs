//! Fetcher engine: batch submission to the external result service.
mod client;
mod engine;
mod types;

pub use client::{ReqwestResultService, ResultService, SubmitSettings, RESULTS_PATH};
pub use engine::{EngineConfig, EngineHandle};
pub use types::{EngineEvent, FailureKind, ResultsReport, ResultsRequest, SubmitError};
