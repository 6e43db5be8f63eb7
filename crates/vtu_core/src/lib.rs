//! Fetcher core: pure state machine and roster helpers.
mod effect;
mod msg;
mod roster;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, ResultRequest};
pub use msg::{Msg, ResultReport, TransportFailure};
pub use roster::{generate_usns, normalize_usns, RangeError, RangeSpec, USN_PAD_WIDTH};
pub use state::{AppState, FetchPhase, FetchSummary, Notice};
pub use update::{update, NO_RESULTS_REASON};
pub use view_model::AppViewModel;
