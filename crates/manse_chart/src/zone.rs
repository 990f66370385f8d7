//! Coordinate → IANA time zone lookup.

/// Resolves a coordinate to an IANA zone name such as `Asia/Seoul`.
pub trait ZoneResolver {
    /// Zone containing the coordinate, or `None` when unknown.
    fn zone_for(&self, latitude: f64, longitude: f64) -> Option<String>;
}

/// Resolves every coordinate to the same zone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FixedZone(pub Option<String>);

impl FixedZone {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Some(name.into()))
    }

    /// Resolver that never finds a zone.
    pub fn unresolved() -> Self {
        Self(None)
    }
}

impl ZoneResolver for FixedZone {
    fn zone_for(&self, _latitude: f64, _longitude: f64) -> Option<String> {
        self.0.clone()
    }
}

impl<T: ZoneResolver + ?Sized> ZoneResolver for &T {
    fn zone_for(&self, latitude: f64, longitude: f64) -> Option<String> {
        (**self).zone_for(latitude, longitude)
    }
}
