//! Board state (pure).
//!
//! All state transitions are pure functions testable without a terminal
//! or a network.

pub mod app_state;
pub mod controller;
pub mod filter;
pub mod form;
pub mod paginator;
pub mod search;

// Re-export for convenience
pub use app_state::AppState;
pub use controller::{
    FetchOutcome, LoadPhase, PageStatus, PendingFetch, RequestId, SearchController, LOADING,
    NO_MORE_RESULTS,
};
pub use filter::{filter_by_route, matches_route};
pub use form::{FormField, SearchForm};
pub use paginator::{load_batch, Batch, DEFAULT_BATCH_SIZE};
pub use search::{RouteQuery, SearchState};
