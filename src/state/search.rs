//! Search state machine.
//!
//! SearchState is a sum type with two states:
//! - Idle: no filter, the full result set is active
//! - Filtered: a departure/arrival pair narrows the result set

use std::fmt;

// ===== SearchState =====

/// Whether a route filter is applied, and with which parameters.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    /// No filter. The full result set is shown.
    #[default]
    Idle,
    /// Only flights on `route` are shown.
    Filtered {
        /// Departure/arrival pair to match.
        route: RouteQuery,
    },
}

impl SearchState {
    /// Build the state a search submission leads to.
    ///
    /// Either code empty means "show everything", so the result is `Idle`.
    pub fn from_input(origin: &str, destination: &str) -> Self {
        match RouteQuery::new(origin, destination) {
            Some(route) => SearchState::Filtered { route },
            None => SearchState::Idle,
        }
    }

    /// True when a route filter is applied.
    pub fn is_active(&self) -> bool {
        matches!(self, SearchState::Filtered { .. })
    }

    /// The applied route, if any.
    pub fn route(&self) -> Option<&RouteQuery> {
        match self {
            SearchState::Idle => None,
            SearchState::Filtered { route } => Some(route),
        }
    }
}

// ===== RouteQuery =====

/// Validated departure/arrival pair. Neither code is empty.
///
/// Codes are stored exactly as typed: no trimming, no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteQuery {
    origin: String,
    destination: String,
}

impl RouteQuery {
    /// Smart constructor. Returns `None` if either code is the empty string.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Option<Self> {
        let origin = origin.into();
        let destination = destination.into();
        if origin.is_empty() || destination.is_empty() {
            None
        } else {
            Some(Self {
                origin,
                destination,
            })
        }
    }

    /// Departure airport code.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Arrival airport code.
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

impl fmt::Display for RouteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.origin, self.destination)
    }
}
