use std::time::Duration;

use serde::Deserialize;

use super::{GeocodeProvider, ProviderOutcome, fetch, http_agent};
use crate::place::GeoPlace;

const ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

/// OpenStreetMap Nominatim. The usage policy requires an identifying
/// User-Agent.
pub struct NominatimProvider {
    agent: ureq::Agent,
    user_agent: String,
}

impl NominatimProvider {
    pub fn new(user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            agent: http_agent(timeout),
            user_agent: user_agent.into(),
        }
    }

    /// Nominatim encodes coordinates as strings.
    pub fn parse_response(body: &str, place: &str) -> Result<Vec<GeoPlace>, String> {
        let features: Vec<Feature> = serde_json::from_str(body).map_err(|e| e.to_string())?;
        features
            .into_iter()
            .map(|f| {
                Ok(GeoPlace {
                    label: f.display_name.unwrap_or_else(|| place.to_string()),
                    latitude: parse_coordinate("lat", &f.lat)?,
                    longitude: parse_coordinate("lon", &f.lon)?,
                    country: None,
                    city: None,
                    source: "nominatim".to_string(),
                })
            })
            .collect()
    }
}

fn parse_coordinate(field: &str, value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("{field} is not a number: {value:?}"))
}

#[derive(Deserialize)]
struct Feature {
    display_name: Option<String>,
    lat: String,
    lon: String,
}

impl GeocodeProvider for NominatimProvider {
    fn name(&self) -> &'static str {
        "nominatim"
    }

    fn search(&self, place: &str, limit: usize) -> ProviderOutcome {
        let request = self
            .agent
            .get(ENDPOINT)
            .set("User-Agent", &self.user_agent)
            .query("q", place)
            .query("format", "json")
            .query("limit", &limit.to_string());
        fetch(request, |body| Self::parse_response(body, place))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_coordinates() {
        let body = r#"[{"place_id":1,"lat":"37.5666791","lon":"126.9782914",
            "display_name":"서울특별시, 대한민국"}]"#;
        let places = NominatimProvider::parse_response(body, "seoul").unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].label, "서울특별시, 대한민국");
        assert!((places[0].latitude - 37.5666791).abs() < 1e-9);
        assert_eq!(places[0].source, "nominatim");
    }

    #[test]
    fn bad_coordinate_is_reported() {
        let body = r#"[{"lat":"north","lon":"1.0"}]"#;
        let err = NominatimProvider::parse_response(body, "x").unwrap_err();
        assert!(err.contains("lat"));
    }

    #[test]
    fn empty_array() {
        assert!(NominatimProvider::parse_response("[]", "x").unwrap().is_empty());
    }
}
