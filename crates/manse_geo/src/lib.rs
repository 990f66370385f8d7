//! Geocoding and time-zone collaborators backed by external data.
//!
//! [`Geocoder`] walks an ordered list of [`GeocodeProvider`]s with bounded
//! retries; [`TzfZoneResolver`] maps coordinates to IANA zones offline.

pub mod error;
pub mod geocoder;
pub mod place;
pub mod providers;
pub mod zone;

pub use error::{GeoError, ProviderFailure};
pub use geocoder::{DEFAULT_MAX_ATTEMPTS, Geocoder};
pub use place::GeoPlace;
pub use providers::{
    GeoapifyProvider, GeocodeProvider, NominatimProvider, OpenMeteoProvider, ProviderOutcome,
};
pub use zone::TzfZoneResolver;
