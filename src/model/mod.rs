//! Domain model types (pure).

pub mod error;
pub mod flight;
pub mod key_action;

pub use error::{AppError, SourceError};
pub use flight::{Airline, ApiErrorBody, Endpoint, FlightIdent, FlightRecord, FlightsResponse};
pub use key_action::KeyAction;
