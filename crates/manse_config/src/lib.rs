//! TOML configuration for the `manse` command-line tool.
//!
//! ```toml
//! [geocoder]
//! providers = ["geoapify", "open-meteo", "nominatim"]
//! geoapify_api_key = ""
//! timeout_secs = 20
//! max_attempts = 3
//!
//! [chart]
//! basis = "standard"
//! convention = "index"
//! latitude = 37.5665
//! longitude = 126.978
//! ```
//!
//! Every field is optional. A missing file means all defaults.

use std::path::Path;

use manse_chart::TimeBasis;
use manse_cycle::PolarityConvention;
use serde::{Deserialize, Serialize};

pub const GEOAPIFY_KEY_ENV: &str = "GEOAPIFY_KEY";

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

/// A geocoding web service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    Geoapify,
    OpenMeteo,
    Nominatim,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Tried in this order.
    #[serde(default = "default_providers")]
    pub providers: Vec<ProviderKind>,
    /// Geoapify is skipped without a key.
    #[serde(default)]
    pub geoapify_api_key: Option<String>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
}

fn default_providers() -> Vec<ProviderKind> {
    vec![
        ProviderKind::Geoapify,
        ProviderKind::OpenMeteo,
        ProviderKind::Nominatim,
    ]
}

fn default_user_agent() -> String {
    format!("manse/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    20
}

fn default_max_attempts() -> u32 {
    3
}

fn default_result_limit() -> usize {
    5
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
            geoapify_api_key: None,
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
            result_limit: default_result_limit(),
        }
    }
}

impl GeocoderConfig {
    /// Configured providers, minus Geoapify when no key is set.
    pub fn active_providers(&self) -> Vec<ProviderKind> {
        let has_key = self
            .geoapify_api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty());
        self.providers
            .iter()
            .copied()
            .filter(|p| *p != ProviderKind::Geoapify || has_key)
            .collect()
    }
}

/// Defaults applied to chart requests that omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDefaults {
    /// `standard` or `lmt`.
    #[serde(default)]
    pub basis: TimeBasis,
    /// `index` or `functional`.
    #[serde(default)]
    pub convention: PolarityConvention,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

// Seoul City Hall.
fn default_latitude() -> f64 {
    37.5665
}

fn default_longitude() -> f64 {
    126.978
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            basis: TimeBasis::default(),
            convention: PolarityConvention::default(),
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManseConfig {
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    #[serde(default)]
    pub chart: ChartDefaults,
}

impl ManseConfig {
    pub fn from_toml(path: &str, content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file; a file that does not exist yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml(&path.display().to_string(), &content)
    }

    /// Apply environment overrides: a non-empty `GEOAPIFY_KEY` replaces the
    /// configured key.
    pub fn with_env<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = var(GEOAPIFY_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.geocoder.geoapify_api_key = Some(key.trim().to_string());
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-90.0..=90.0).contains(&self.chart.latitude) {
            return Err(ConfigError::Invalid {
                field: "chart.latitude",
                message: format!("{} is outside [-90, 90]", self.chart.latitude),
            });
        }
        if !(-180.0..=180.0).contains(&self.chart.longitude) {
            return Err(ConfigError::Invalid {
                field: "chart.longitude",
                message: format!("{} is outside [-180, 180]", self.chart.longitude),
            });
        }
        if self.geocoder.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "geocoder.timeout_secs",
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = ManseConfig::from_toml("empty.toml", "").unwrap();
        assert_eq!(config, ManseConfig::default());
        assert_eq!(config.geocoder.max_attempts, 3);
        assert_eq!(config.chart.basis, TimeBasis::StandardTime);
        assert_eq!(config.chart.convention, PolarityConvention::IndexParity);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = ManseConfig::from_toml(
            "partial.toml",
            r#"
            [geocoder]
            providers = ["nominatim"]
            max_attempts = 5

            [chart]
            basis = "lmt"
            "#,
        )
        .unwrap();
        assert_eq!(config.geocoder.providers, vec![ProviderKind::Nominatim]);
        assert_eq!(config.geocoder.max_attempts, 5);
        assert_eq!(config.geocoder.timeout_secs, 20);
        assert_eq!(config.chart.basis, TimeBasis::LocalMeanTime);
        assert!((config.chart.latitude - 37.5665).abs() < 1e-12);
    }

    #[test]
    fn unknown_provider_is_a_parse_error() {
        let err = ManseConfig::from_toml("bad.toml", "[geocoder]\nproviders = [\"bing\"]")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref path, .. } if path == "bad.toml"));
    }

    #[test]
    fn bad_basis_fails_at_load() {
        let err = ManseConfig::from_toml("x.toml", "[chart]\nbasis = \"sidereal\"").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Parse { ref message, .. } if message.contains("sidereal")
        ));
    }

    #[test]
    fn functional_convention_from_toml() {
        let config =
            ManseConfig::from_toml("f.toml", "[chart]\nconvention = \"functional\"").unwrap();
        assert_eq!(config.chart.convention, PolarityConvention::Functional);
        assert_eq!(config.chart.basis, TimeBasis::StandardTime);
    }

    #[test]
    fn geoapify_needs_a_key() {
        let config = ManseConfig::default();
        assert_eq!(
            config.geocoder.active_providers(),
            vec![ProviderKind::OpenMeteo, ProviderKind::Nominatim]
        );
        let keyed = config.with_env(|name| (name == GEOAPIFY_KEY_ENV).then(|| "abc".to_string()));
        assert_eq!(keyed.geocoder.geoapify_api_key.as_deref(), Some("abc"));
        assert_eq!(keyed.geocoder.active_providers()[0], ProviderKind::Geoapify);
    }

    #[test]
    fn blank_env_key_does_not_override() {
        let config = ManseConfig::from_toml("k.toml", "[geocoder]\ngeoapify_api_key = \"file\"")
            .unwrap()
            .with_env(|_| Some("  ".to_string()));
        assert_eq!(config.geocoder.geoapify_api_key.as_deref(), Some("file"));
    }

    #[test]
    fn missing_file_is_default() {
        let config = ManseConfig::load(Path::new("/nonexistent/manse.toml")).unwrap();
        assert_eq!(config, ManseConfig::default());
    }
}
