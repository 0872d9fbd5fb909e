//! Flight records as returned by the aviationstack `/v1/flights` endpoint.
//!
//! Only the fields the board displays or filters on are modelled. Every display
//! field is optional because the API routinely returns `null` for them, down to
//! whole sections such as `"airline": null`. Unknown fields are ignored.

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One side of a flight (departure or arrival).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Endpoint {
    /// Airport display name, e.g. "Ben Gurion".
    #[serde(default)]
    pub airport: Option<String>,
    /// IATA airport code, e.g. "TLV". The filter key.
    #[serde(default)]
    pub iata: Option<String>,
    /// Scheduled time (RFC 3339).
    #[serde(default)]
    pub scheduled: Option<String>,
    /// Estimated time (RFC 3339).
    #[serde(default)]
    pub estimated: Option<String>,
}

impl Endpoint {
    /// Endpoint with just an IATA code set.
    pub fn at(iata: impl Into<String>) -> Self {
        Self {
            iata: Some(iata.into()),
            ..Self::default()
        }
    }

    /// Builder: set the estimated timestamp.
    pub fn with_estimated(mut self, estimated: impl Into<String>) -> Self {
        self.estimated = Some(estimated.into());
        self
    }

    /// IATA code as `&str`, if present.
    pub fn iata(&self) -> Option<&str> {
        self.iata.as_deref()
    }
}

/// Operating airline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Airline {
    /// Airline name, e.g. "El Al".
    #[serde(default)]
    pub name: Option<String>,
}

/// Flight identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FlightIdent {
    /// Flight number without the airline prefix, e.g. "1004".
    #[serde(default)]
    pub number: Option<String>,
    /// Full IATA flight code, e.g. "AA1004".
    #[serde(default)]
    pub iata: Option<String>,
}

/// A single flight. Immutable once ingested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FlightRecord {
    /// Date of the flight (`YYYY-MM-DD`).
    #[serde(default)]
    pub flight_date: Option<String>,
    /// Status as reported by the API ("scheduled", "active", "landed", ...).
    #[serde(default)]
    pub flight_status: Option<String>,
    /// Where the flight leaves from.
    #[serde(default, deserialize_with = "null_as_default")]
    pub departure: Endpoint,
    /// Where the flight lands.
    #[serde(default, deserialize_with = "null_as_default")]
    pub arrival: Endpoint,
    /// Operating airline.
    #[serde(default, deserialize_with = "null_as_default")]
    pub airline: Airline,
    /// Flight number and code.
    #[serde(default, deserialize_with = "null_as_default")]
    pub flight: FlightIdent,
}

impl FlightRecord {
    /// Minimal record for a route, used heavily by tests and benches.
    pub fn route(departure: &str, arrival: &str) -> Self {
        Self {
            departure: Endpoint::at(departure),
            arrival: Endpoint::at(arrival),
            ..Self::default()
        }
    }

    /// Builder: set the flight number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.flight.number = Some(number.into());
        self
    }

    /// Builder: set the airline name.
    pub fn with_airline(mut self, name: impl Into<String>) -> Self {
        self.airline.name = Some(name.into());
        self
    }

    /// Builder: set the flight date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.flight_date = Some(date.into());
        self
    }

    /// Departure IATA code, the origin filter key.
    pub fn departure_iata(&self) -> Option<&str> {
        self.departure.iata()
    }

    /// Arrival IATA code, the destination filter key.
    pub fn arrival_iata(&self) -> Option<&str> {
        self.arrival.iata()
    }
}

/// Error object aviationstack returns instead of `data`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// Machine readable code, e.g. "invalid_access_key".
    #[serde(default)]
    pub code: Option<String>,
    /// Human readable explanation.
    #[serde(default)]
    pub message: Option<String>,
}

/// Top-level response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlightsResponse {
    /// The flights, absent on error responses.
    #[serde(default)]
    pub data: Option<Vec<FlightRecord>>,
    /// Set when the request was rejected.
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "pagination": {"limit": 100, "offset": 0, "count": 1, "total": 1},
        "data": [{
            "flight_date": "2019-12-12",
            "flight_status": "active",
            "departure": {
                "airport": "San Francisco International",
                "timezone": "America/Los_Angeles",
                "iata": "SFO",
                "icao": "KSFO",
                "scheduled": "2019-12-12T04:20:00+00:00",
                "estimated": "2019-12-12T04:20:00+00:00"
            },
            "arrival": {
                "airport": "Dallas/Fort Worth International",
                "iata": "DFW",
                "estimated": null
            },
            "airline": {"name": "American Airlines", "iata": "AA"},
            "flight": {"number": "1004", "iata": "AA1004"},
            "aircraft": null,
            "live": null
        }]
    }"#;

    #[test]
    fn deserializes_aviationstack_payload() {
        let response: FlightsResponse = serde_json::from_str(SAMPLE).unwrap();
        let data = response.data.expect("data present");
        assert_eq!(data.len(), 1);

        let record = &data[0];
        assert_eq!(record.departure_iata(), Some("SFO"));
        assert_eq!(record.arrival_iata(), Some("DFW"));
        assert_eq!(record.airline.name.as_deref(), Some("American Airlines"));
        assert_eq!(record.flight.number.as_deref(), Some("1004"));
        assert_eq!(record.arrival.estimated, None);
        assert!(response.error.is_none());
    }

    #[test]
    fn deserializes_error_envelope() {
        let body = r#"{"error": {"code": "invalid_access_key", "message": "You have not supplied a valid API Access Key."}}"#;
        let response: FlightsResponse = serde_json::from_str(body).unwrap();
        assert!(response.data.is_none());
        let error = response.error.expect("error present");
        assert_eq!(error.code.as_deref(), Some("invalid_access_key"));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let record: FlightRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.departure_iata(), None);
        assert_eq!(record.arrival_iata(), None);
        assert_eq!(record, FlightRecord::default());
    }

    #[test]
    fn null_sections_default_to_empty() {
        let body = r#"{
            "flight_date": null,
            "departure": null,
            "arrival": {"iata": "JFK"},
            "airline": null,
            "flight": null
        }"#;
        let record: FlightRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.departure, Endpoint::default());
        assert_eq!(record.arrival_iata(), Some("JFK"));
        assert_eq!(record.airline, Airline::default());
        assert_eq!(record.flight, FlightIdent::default());
    }

    #[test]
    fn route_builder_sets_codes() {
        let record = FlightRecord::route("TLV", "JFK").with_number("001");
        assert_eq!(record.departure_iata(), Some("TLV"));
        assert_eq!(record.arrival_iata(), Some("JFK"));
        assert_eq!(record.flight.number.as_deref(), Some("001"));
    }
}
