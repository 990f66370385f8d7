use std::time::Duration;

use serde::Deserialize;

use super::{GeocodeProvider, ProviderOutcome, fetch, http_agent};
use crate::place::GeoPlace;

const ENDPOINT: &str = "https://api.geoapify.com/v1/geocode/search";

/// Geoapify forward geocoding; needs an API key.
pub struct GeoapifyProvider {
    agent: ureq::Agent,
    api_key: String,
}

impl GeoapifyProvider {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            agent: http_agent(timeout),
            api_key: api_key.into(),
        }
    }

    pub fn parse_response(body: &str, place: &str) -> Result<Vec<GeoPlace>, String> {
        let response: Response = serde_json::from_str(body).map_err(|e| e.to_string())?;
        Ok(response
            .results
            .into_iter()
            .map(|r| GeoPlace {
                label: r.formatted.or(r.name).unwrap_or_else(|| place.to_string()),
                latitude: r.lat,
                longitude: r.lon,
                country: r.country,
                city: r.city.or(r.state),
                source: "geoapify".to_string(),
            })
            .collect())
    }
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    results: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    formatted: Option<String>,
    name: Option<String>,
    lat: f64,
    lon: f64,
    country: Option<String>,
    city: Option<String>,
    state: Option<String>,
}

impl GeocodeProvider for GeoapifyProvider {
    fn name(&self) -> &'static str {
        "geoapify"
    }

    fn search(&self, place: &str, limit: usize) -> ProviderOutcome {
        let request = self
            .agent
            .get(ENDPOINT)
            .query("text", place)
            .query("limit", &limit.to_string())
            .query("format", "json")
            .query("apiKey", &self.api_key);
        fetch(request, |body| Self::parse_response(body, place))
    }
}
