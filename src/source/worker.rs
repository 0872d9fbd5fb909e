//! Background fetch worker.
//!
//! Each fetch runs on its own thread so the event loop never blocks on the
//! network. Results come back over an mpsc channel tagged with the
//! `RequestId` they were issued for; deciding whether a result is still wanted
//! is the controller's job, not the worker's. Fetches cannot be cancelled.

use crate::model::{FlightRecord, SourceError};
use crate::source::DataSource;
use crate::state::RequestId;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// A completed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// Request the fetch was issued for.
    pub request: RequestId,
    /// Flights, or why the fetch failed.
    pub result: Result<Vec<FlightRecord>, SourceError>,
}

/// Runs fetches against a shared `DataSource` on background threads.
pub struct FetchWorker {
    source: Arc<dyn DataSource>,
    tx: Sender<FetchResult>,
    rx: Receiver<FetchResult>,
    in_flight: usize,
}

impl FetchWorker {
    /// Worker fetching from `source`. Nothing runs until `dispatch`.
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Human readable description of the underlying source.
    pub fn describe(&self) -> String {
        self.source.describe()
    }

    /// Start a fetch for `request`. Returns immediately.
    pub fn dispatch(&mut self, request: RequestId) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.in_flight += 1;
        debug!(%request, in_flight = self.in_flight, "Dispatching fetch");

        let spawned = thread::Builder::new()
            .name(format!("flightboard-fetch-{}", request.get()))
            .spawn(move || {
                let result = source.fetch_all_flights();
                // Receiver gone means the app is shutting down.
                let _ = tx.send(FetchResult { request, result });
            });

        if let Err(e) = spawned {
            warn!(%request, error = %e, "Failed to spawn fetch thread");
            let _ = self.tx.send(FetchResult {
                request,
                result: Err(SourceError::WorkerDisconnected),
            });
        }
    }

    /// Drain every completed fetch without blocking.
    pub fn poll(&mut self) -> Vec<FetchResult> {
        let completed: Vec<FetchResult> = self.rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(completed.len());
        completed
    }

    /// Block up to `timeout` for the next completed fetch.
    pub fn wait(&mut self, timeout: Duration) -> Option<FetchResult> {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(result)
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Fetches dispatched but not yet collected.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
