use std::time::Duration;

use serde::Deserialize;

use super::{GeocodeProvider, ProviderOutcome, fetch, http_agent};
use crate::place::GeoPlace;

const ENDPOINT: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Open-Meteo geocoding. No key required.
pub struct OpenMeteoProvider {
    agent: ureq::Agent,
}

impl OpenMeteoProvider {
    pub fn new(timeout: Duration) -> Self {
        Self {
            agent: http_agent(timeout),
        }
    }

    /// Labels join name, first-level region and country with ", ".
    pub fn parse_response(body: &str, place: &str) -> Result<Vec<GeoPlace>, String> {
        let response: Response = serde_json::from_str(body).map_err(|e| e.to_string())?;
        Ok(response
            .results
            .unwrap_or_default()
            .into_iter()
            .map(|r| {
                let label = [r.name.as_deref(), r.admin1.as_deref(), r.country.as_deref()]
                    .into_iter()
                    .flatten()
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ");
                GeoPlace {
                    label: if label.is_empty() { place.to_string() } else { label },
                    latitude: r.latitude,
                    longitude: r.longitude,
                    country: r.country,
                    city: r.name,
                    source: "open-meteo".to_string(),
                }
            })
            .collect())
    }
}

#[derive(Deserialize)]
struct Response {
    // Absent when nothing matched.
    results: Option<Vec<Feature>>,
}

#[derive(Deserialize)]
struct Feature {
    name: Option<String>,
    admin1: Option<String>,
    country: Option<String>,
    latitude: f64,
    longitude: f64,
}

impl GeocodeProvider for OpenMeteoProvider {
    fn name(&self) -> &'static str {
        "open-meteo"
    }

    fn search(&self, place: &str, limit: usize) -> ProviderOutcome {
        let request = self
            .agent
            .get(ENDPOINT)
            .query("name", place)
            .query("count", &limit.to_string())
            .query("language", "en")
            .query("format", "json");
        fetch(request, |body| Self::parse_response(body, place))
    }
}
