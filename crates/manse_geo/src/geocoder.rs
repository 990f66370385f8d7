//! Ordered provider cascade with bounded retries.

use tracing::{debug, warn};

use crate::error::{GeoError, ProviderFailure};
use crate::place::GeoPlace;
use crate::providers::{GeocodeProvider, ProviderOutcome};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Tries each provider in order.
///
/// A provider is retried on [`ProviderOutcome::Retryable`] up to
/// `max_attempts` times and abandoned on [`ProviderOutcome::Permanent`].
/// An empty result moves on to the next provider. The first non-empty
/// result wins.
pub struct Geocoder {
    providers: Vec<Box<dyn GeocodeProvider>>,
    max_attempts: u32,
}

impl Geocoder {
    pub fn new(providers: Vec<Box<dyn GeocodeProvider>>) -> Self {
        Self {
            providers,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Attempts per provider; clamped to at least one.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Resolve free text to candidate places.
    ///
    /// Blank input yields no places without calling any provider. When every
    /// provider answers but none finds anything, the result is empty; when
    /// none of them answers, [`GeoError::CollaboratorUnavailable`] lists why.
    pub fn resolve(&self, place: &str, limit: usize) -> Result<Vec<GeoPlace>, GeoError> {
        let place = place.trim();
        if place.is_empty() {
            return Ok(Vec::new());
        }

        let mut failures = Vec::new();
        let mut any_answered = false;
        for provider in &self.providers {
            match self.query(provider.as_ref(), place, limit) {
                Ok(places) if places.is_empty() => {
                    debug!(provider = provider.name(), place, "no results");
                    any_answered = true;
                }
                Ok(mut places) => {
                    debug!(provider = provider.name(), place, count = places.len(), "geocoded");
                    places.truncate(limit);
                    return Ok(places);
                }
                Err(failure) => {
                    warn!(
                        provider = failure.provider,
                        attempts = failure.attempts,
                        error = %failure.message,
                        "geocoding provider failed"
                    );
                    failures.push(failure);
                }
            }
        }

        if any_answered {
            Ok(Vec::new())
        } else {
            Err(GeoError::CollaboratorUnavailable {
                place: place.to_string(),
                failures,
            })
        }
    }

    fn query(
        &self,
        provider: &dyn GeocodeProvider,
        place: &str,
        limit: usize,
    ) -> Result<Vec<GeoPlace>, ProviderFailure> {
        let mut attempts = 0;
        loop {
            attempts += 1;
            match provider.search(place, limit) {
                ProviderOutcome::Success(places) => return Ok(places),
                ProviderOutcome::Retryable(message) if attempts < self.max_attempts => {
                    debug!(provider = provider.name(), attempts, %message, "retrying");
                }
                ProviderOutcome::Retryable(message) | ProviderOutcome::Permanent(message) => {
                    return Err(ProviderFailure {
                        provider: provider.name(),
                        attempts,
                        message,
                    });
                }
            }
        }
    }
}
