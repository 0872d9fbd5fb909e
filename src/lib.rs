//! Flightboard
//!
//! Terminal flight board: fetch flights from the aviationstack API (or a saved
//! response), filter them by departure/arrival airport and reveal them in
//! fixed-size batches.
//!
//! Pure Core / Impure Shell: `model` and `state` are side-effect free,
//! `source`, `logging` and `view` talk to the network, disk and terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
