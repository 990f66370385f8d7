//! Geocoding web services.
//!
//! Each provider turns a free-text place into [`GeoPlace`]s and classifies
//! its own failures as retryable or permanent. Response parsing is split
//! from the HTTP call so it can be exercised without a network.

mod geoapify;
mod nominatim;
mod open_meteo;

use std::time::Duration;

pub use geoapify::GeoapifyProvider;
pub use nominatim::NominatimProvider;
pub use open_meteo::OpenMeteoProvider;

use crate::place::GeoPlace;

/// Result of one provider call.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderOutcome {
    Success(Vec<GeoPlace>),
    /// Transient: timeouts, connection failures, 429 and 5xx.
    Retryable(String),
    /// Retrying will not help: other HTTP statuses, malformed bodies.
    Permanent(String),
}

/// A place-name search service.
pub trait GeocodeProvider {
    /// Short identifier used in logs and error reports.
    fn name(&self) -> &'static str;

    /// Search for `place`, returning at most `limit` results.
    fn search(&self, place: &str, limit: usize) -> ProviderOutcome;
}

pub(crate) fn http_agent(timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new().timeout(timeout).build()
}

pub(crate) fn status_outcome(code: u16) -> ProviderOutcome {
    if code == 429 || code >= 500 {
        ProviderOutcome::Retryable(format!("HTTP {code}"))
    } else {
        ProviderOutcome::Permanent(format!("HTTP {code}"))
    }
}

/// Issue the request and hand the body to `parse`.
pub(crate) fn fetch<F>(request: ureq::Request, parse: F) -> ProviderOutcome
where
    F: FnOnce(&str) -> Result<Vec<GeoPlace>, String>,
{
    let body = match request.call() {
        Ok(response) => match response.into_string() {
            Ok(body) => body,
            Err(e) => return ProviderOutcome::Retryable(format!("reading response: {e}")),
        },
        Err(ureq::Error::Status(code, _)) => return status_outcome(code),
        Err(ureq::Error::Transport(transport)) => {
            return ProviderOutcome::Retryable(transport.to_string());
        }
    };
    match parse(&body) {
        Ok(places) => ProviderOutcome::Success(places),
        Err(e) => ProviderOutcome::Permanent(format!("malformed response: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_and_server_errors_are_retryable() {
        for code in [429, 500, 502, 503] {
            assert!(matches!(status_outcome(code), ProviderOutcome::Retryable(_)));
        }
    }

    #[test]
    fn client_errors_are_permanent() {
        for code in [400, 401, 403, 404] {
            assert!(matches!(status_outcome(code), ProviderOutcome::Permanent(_)));
        }
    }
}
