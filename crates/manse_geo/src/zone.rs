use manse_chart::ZoneResolver;
use tzf_rs::DefaultFinder;

/// Offline coordinate → IANA zone lookup from bundled boundary data.
pub struct TzfZoneResolver {
    finder: DefaultFinder,
}

impl TzfZoneResolver {
    /// Loads the boundary data; keep one instance around.
    pub fn new() -> Self {
        Self {
            finder: DefaultFinder::new(),
        }
    }
}

impl Default for TzfZoneResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneResolver for TzfZoneResolver {
    fn zone_for(&self, latitude: f64, longitude: f64) -> Option<String> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        let name = self.finder.get_tz_name(longitude, latitude);
        (!name.is_empty()).then(|| name.to_string())
    }
}
