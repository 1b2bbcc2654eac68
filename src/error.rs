//! Unified error handling for the discovery engine.
//!
//! Validation failures surface before any repository access; repository
//! failures propagate unchanged so a broken store is never mistaken for an
//! empty match set. Zero matches is a successful result, not an error.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// Errors produced by query validation and search execution.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Nearby search was requested without a complete coordinate pair.
    #[error("latitude and longitude are required")]
    MissingCoordinates,

    /// A supplied coordinate pair is outside the valid ranges
    /// ([-90, 90] latitude, [-180, 180] longitude) or not finite.
    #[error("coordinates out of range: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Route search was requested with neither a location name nor a
    /// complete coordinate pair.
    #[error("route search requires a location name or origin coordinates")]
    MissingRouteCriteria,

    /// The external repository failed; no partial result is returned.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Failure reported by a [`ProviderRepository`](crate::ProviderRepository)
/// implementation.
#[derive(Debug, Error)]
#[error("repository unavailable: {message}")]
pub struct RepositoryError {
    pub message: String,
}

impl RepositoryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
