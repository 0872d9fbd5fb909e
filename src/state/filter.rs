//! Route filtering over a fetched result set.

use crate::model::FlightRecord;

/// Keep the flights that depart from `origin` and arrive at `destination`.
///
/// Exact, case-sensitive comparison against the IATA codes. Empty strings are
/// matched literally. Records without a code never match. Input order is kept.
pub fn filter_by_route(
    origin: &str,
    destination: &str,
    records: &[FlightRecord],
) -> Vec<FlightRecord> {
    records
        .iter()
        .filter(|record| matches_route(record, origin, destination))
        .cloned()
        .collect()
}

/// Single-record predicate behind [`filter_by_route`].
pub fn matches_route(record: &FlightRecord, origin: &str, destination: &str) -> bool {
    record.departure_iata() == Some(origin) && record.arrival_iata() == Some(destination)
}
