//! aviationstack HTTP source.

use crate::model::{FlightRecord, SourceError};
use crate::source::{decode_flights, DataSource};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Default flights endpoint. The free plan is plain HTTP only.
pub const DEFAULT_API_URL: &str = "http://api.aviationstack.com/v1/flights";

/// Blocking HTTP client for the flights endpoint.
///
/// Issues a single `GET` per fetch with only the access key as a parameter, so
/// the result is whatever page the API returns by default.
pub struct ApiSource {
    url: String,
    access_key: String,
    client: reqwest::blocking::Client,
}

impl fmt::Debug for ApiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSource")
            .field("url", &self.url)
            .field("access_key", &"<redacted>")
            .finish()
    }
}

impl ApiSource {
    /// Build a source for `url` authenticated with `access_key`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Transport` if the HTTP client cannot be built
    /// (e.g. TLS backend initialisation failure).
    pub fn new(
        url: impl Into<String>,
        access_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        let url = url.into();
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Transport {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            url,
            access_key: access_key.into(),
            client,
        })
    }

    /// Endpoint this source queries.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn transport_error(&self, err: reqwest::Error) -> SourceError {
        // The request URL carries the access key; keep it out of messages.
        SourceError::Transport {
            url: self.url.clone(),
            reason: err.without_url().to_string(),
        }
    }
}

impl DataSource for ApiSource {
    fn fetch_all_flights(&self) -> Result<Vec<FlightRecord>, SourceError> {
        debug!(url = %self.url, "Requesting flights");

        let response = self
            .client
            .get(&self.url)
            .query(&[("access_key", self.access_key.as_str())])
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(rejection(status.as_u16(), &body));
        }

        let body = response.text().map_err(|e| self.transport_error(e))?;
        decode_flights(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Error for a non-2xx response: the API's own `error` object when the body
/// carries one, the bare status otherwise.
fn rejection(status: u16, body: &str) -> SourceError {
    match decode_flights(body) {
        Err(api @ SourceError::Api { .. }) => {
            warn!(status, %api, "Flights request rejected");
            api
        }
        _ => SourceError::Status { status },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_access_key() {
        let source = ApiSource::new(DEFAULT_API_URL, "super-secret", Duration::from_secs(5))
            .expect("client builds");
        let debug = format!("{:?}", source);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn describe_is_the_url() {
        let source = ApiSource::new("http://localhost:9/v1/flights", "k", Duration::from_secs(5))
            .expect("client builds");
        assert_eq!(source.describe(), "http://localhost:9/v1/flights");
        assert_eq!(source.url(), "http://localhost:9/v1/flights");
    }

    #[test]
    fn rejection_prefers_api_error_object() {
        let body = r#"{"error": {"code": "usage_limit_reached", "message": "Monthly limit reached."}}"#;
        assert_eq!(
            rejection(429, body),
            SourceError::Api {
                code: "usage_limit_reached".to_string(),
                message: "Monthly limit reached.".to_string(),
            }
        );
    }

    #[test]
    fn rejection_without_error_object_is_status() {
        assert_eq!(
            rejection(502, "<html>502 Bad Gateway</html>"),
            SourceError::Status { status: 502 }
        );
        assert_eq!(rejection(500, ""), SourceError::Status { status: 500 });
        assert_eq!(
            rejection(500, r#"{"data": []}"#),
            SourceError::Status { status: 500 }
        );
    }

    #[test]
    fn unreachable_host_is_transport_error_without_key() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let source = ApiSource::new(
            "http://127.0.0.1:9/v1/flights",
            "super-secret",
            Duration::from_secs(2),
        )
        .expect("client builds");
        match source.fetch_all_flights() {
            Err(SourceError::Transport { url, reason }) => {
                assert_eq!(url, "http://127.0.0.1:9/v1/flights");
                assert!(!reason.contains("super-secret"), "reason leaked key: {}", reason);
            }
            other => panic!("expected Transport error, got {:?}", other),
        }
    }
}
