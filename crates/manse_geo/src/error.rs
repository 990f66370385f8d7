//! Geocoding failures.

/// One provider's last failure, kept for the error report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderFailure {
    pub provider: &'static str,
    pub attempts: u32,
    pub message: String,
}

impl std::fmt::Display for ProviderFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} attempt{}): {}",
            self.provider,
            self.attempts,
            if self.attempts == 1 { "" } else { "s" },
            self.message
        )
    }
}

fn join_failures(failures: &[ProviderFailure]) -> String {
    if failures.is_empty() {
        return "no providers configured".to_string();
    }
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GeoError {
    /// Every provider failed; recoverable by retrying later or entering
    /// coordinates directly.
    #[error("geocoding unavailable for {place:?}: {}", join_failures(.failures))]
    CollaboratorUnavailable {
        place: String,
        failures: Vec<ProviderFailure>,
    },
}
