//! Search controller: result store, cursor and fetch bookkeeping.
//!
//! Owns everything the board knows about the current result set. Searching is
//! a two-stage pipeline: `submit_search`/`reset_search` update state and hand
//! back a [`PendingFetch`] for the shell to dispatch, then `apply_fetch` consumes
//! the fetch result. Results tagged with anything but the latest [`RequestId`]
//! are dropped, so an older, slower fetch can never overwrite a newer search.
//!
//! All transitions are synchronous and free of I/O.

use crate::model::{FlightRecord, SourceError};
use crate::state::filter::filter_by_route;
use crate::state::paginator::{load_batch, DEFAULT_BATCH_SIZE};
use crate::state::search::SearchState;
use std::fmt;
use tracing::{debug, info, warn};

/// Status shown once every record of the active set is on screen.
pub const NO_MORE_RESULTS: &str = "No more results to show.";

/// Status shown while a fetch is outstanding.
pub const LOADING: &str = "Loading flights...";

// ===== RequestId =====

/// Monotonically increasing tag attached to every fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// Raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ===== LoadPhase =====

/// Lifecycle of the latest fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// A fetch has been issued and not resolved.
    Loading,
    /// Latest fetch succeeded; pagination is live.
    Ready,
    /// Latest fetch failed with the given reason.
    Failed(String),
}

// ===== Outcomes =====

/// Stage one of a search: the fetch the shell must dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    /// Tag to hand back to `apply_fetch`.
    pub request: RequestId,
    /// Search state in effect for this fetch.
    pub search: SearchState,
}

/// Where pagination stands after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageStatus {
    /// Records revealed by this step.
    pub newly_revealed: usize,
    /// Cursor after this step.
    pub cursor: usize,
    /// Nothing left to reveal.
    pub exhausted: bool,
}

/// Stage two of a search: what happened to a fetch result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Result applied and the first batch revealed.
    Loaded(PageStatus),
    /// Result belonged to a superseded request and was discarded.
    Stale,
    /// Fetch failed; the controller is now in `LoadPhase::Failed`.
    Failed,
}

// ===== SearchController =====

/// Owns the result set, the active filter and the pagination cursor.
#[derive(Debug, Clone)]
pub struct SearchController {
    /// Full result set from the last successful fetch.
    records: Vec<FlightRecord>,
    /// Subset matching the active route. Empty while idle.
    filtered: Vec<FlightRecord>,
    search: SearchState,
    /// Count of records revealed from the active set.
    cursor: usize,
    batch_size: usize,
    phase: LoadPhase,
    last_issued: u64,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE)
    }
}

impl SearchController {
    /// Empty controller. Nothing is active until the first fetch resolves.
    pub fn new(batch_size: usize) -> Self {
        Self {
            records: Vec::new(),
            filtered: Vec::new(),
            search: SearchState::Idle,
            cursor: 0,
            batch_size,
            phase: LoadPhase::Loading,
            last_issued: 0,
        }
    }

    // ----- transitions -----

    /// Apply a route search.
    ///
    /// Either code empty is a reset, not an error. Otherwise the filter becomes
    /// active, the cursor returns to 0 and a fresh fetch is requested.
    pub fn submit_search(&mut self, origin: &str, destination: &str) -> PendingFetch {
        match SearchState::from_input(origin, destination) {
            SearchState::Idle => self.reset_search(),
            filtered => {
                info!(origin, destination, "Route search submitted");
                self.begin(filtered)
            }
        }
    }

    /// Drop any filter and refetch the full set.
    pub fn reset_search(&mut self) -> PendingFetch {
        debug!("Search reset");
        self.begin(SearchState::Idle)
    }

    /// Consume the result of a dispatched fetch.
    ///
    /// The filter is applied with the search that is current now, not the one
    /// current when the fetch was issued. Results for superseded requests are
    /// ignored entirely.
    pub fn apply_fetch(
        &mut self,
        request: RequestId,
        result: Result<Vec<FlightRecord>, SourceError>,
    ) -> FetchOutcome {
        if request.get() != self.last_issued {
            debug!(%request, latest = self.last_issued, "Discarding stale fetch result");
            return FetchOutcome::Stale;
        }

        match result {
            Ok(records) => {
                info!(%request, count = records.len(), "Flights loaded");
                self.records = records;
                self.filtered = match &self.search {
                    SearchState::Idle => Vec::new(),
                    SearchState::Filtered { route } => {
                        filter_by_route(route.origin(), route.destination(), &self.records)
                    }
                };
                self.cursor = 0;
                self.phase = LoadPhase::Ready;
                FetchOutcome::Loaded(self.load_more())
            }
            Err(err) => {
                warn!(%request, error = %err, "Flight fetch failed");
                self.phase = LoadPhase::Failed(err.to_string());
                FetchOutcome::Failed
            }
        }
    }

    /// Reveal the next batch of the active set.
    ///
    /// Does nothing while a fetch is outstanding or after a failure.
    pub fn load_more(&mut self) -> PageStatus {
        if self.phase != LoadPhase::Ready {
            return PageStatus {
                newly_revealed: 0,
                cursor: self.cursor,
                exhausted: self.is_exhausted(),
            };
        }

        let batch = load_batch(self.active(), self.cursor, self.batch_size);
        let status = PageStatus {
            newly_revealed: batch.revealed.len(),
            cursor: batch.new_cursor,
            exhausted: batch.exhausted,
        };
        self.cursor = status.cursor;
        status
    }

    fn begin(&mut self, search: SearchState) -> PendingFetch {
        self.search = search;
        self.filtered.clear();
        self.cursor = 0;
        self.phase = LoadPhase::Loading;
        self.last_issued += 1;
        PendingFetch {
            request: RequestId(self.last_issued),
            search: self.search.clone(),
        }
    }

    // ----- queries -----

    /// The set pagination walks: full set when idle, filtered subset otherwise.
    pub fn active(&self) -> &[FlightRecord] {
        match self.search {
            SearchState::Idle => &self.records,
            SearchState::Filtered { .. } => &self.filtered,
        }
    }

    /// Records revealed so far, in order.
    pub fn revealed(&self) -> &[FlightRecord] {
        &self.active()[..self.cursor]
    }

    /// Full result set from the last successful fetch.
    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }

    /// Search the current results belong to.
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Number of records revealed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Records revealed per `load_more`.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Size of the active set (filtered subset or full set).
    pub fn active_len(&self) -> usize {
        self.active().len()
    }

    /// Fetch lifecycle phase.
    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// Latest issued request, if any fetch was requested yet.
    pub fn latest_request(&self) -> Option<RequestId> {
        (self.last_issued > 0).then_some(RequestId(self.last_issued))
    }

    /// Cursor has reached the end of the active set.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.active_len()
    }

    /// Whether the "load more" control should be offered.
    pub fn can_load_more(&self) -> bool {
        self.phase == LoadPhase::Ready && !self.is_exhausted()
    }

    /// Message for the status line.
    pub fn status_message(&self) -> String {
        match &self.phase {
            LoadPhase::Loading => LOADING.to_string(),
            LoadPhase::Failed(reason) => format!("Failed to load flights: {}", reason),
            LoadPhase::Ready if self.is_exhausted() => NO_MORE_RESULTS.to_string(),
            LoadPhase::Ready => String::new(),
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
