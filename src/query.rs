//! Query validation and normalization.
//!
//! Inbound requests are checked and normalized here, before any repository
//! access: coordinate presence and range, radius clamping against the
//! configured ceiling, and pagination bounds. Downstream components only
//! ever see a well-formed query.

use crate::error::{DiscoveryError, Result};
use crate::{GeoPoint, NearbyRequest, RouteRequest, SearchConfig};

/// A validated and normalized nearby-search query.
#[derive(Debug, Clone)]
pub struct NearbyQuery {
    /// Search origin, guaranteed in range
    pub origin: GeoPoint,
    /// Category filter, passed through verbatim. Unknown ids yield zero
    /// matches downstream, not an error.
    pub category_id: Option<String>,
    /// Effective radius in kilometers, clamped to the configured ceiling
    pub radius_km: f64,
    /// 1-based page number, floored at 1
    pub page: u32,
    /// Page size, clamped to [1, max_limit]
    pub limit: u32,
}

impl NearbyQuery {
    /// Validate and normalize an inbound request.
    ///
    /// Fails with [`DiscoveryError::MissingCoordinates`] if either
    /// coordinate is absent, or [`DiscoveryError::InvalidCoordinates`] if
    /// the pair is out of range. Everything else is normalized, never
    /// rejected.
    pub fn from_request(request: &NearbyRequest, config: &SearchConfig) -> Result<Self> {
        let (latitude, longitude) = match (request.latitude, request.longitude) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => return Err(DiscoveryError::MissingCoordinates),
        };

        let origin = GeoPoint::new(latitude, longitude);
        if !origin.is_valid() {
            return Err(DiscoveryError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        // A non-finite or non-positive requested radius falls back to the
        // default rather than poisoning the clamp.
        let requested = request
            .radius_km
            .filter(|r| r.is_finite() && *r > 0.0)
            .unwrap_or(config.default_radius_km);
        let radius_km = requested.min(config.max_radius_km);

        let page = request.page.unwrap_or(1).max(1);
        let limit = request
            .limit
            .unwrap_or(config.default_limit)
            .clamp(1, config.max_limit);

        Ok(Self {
            origin,
            category_id: request.category_id.clone(),
            radius_km,
            page,
            limit,
        })
    }

    /// Zero-based offset of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.limit as usize
    }
}

/// A validated route-search query.
#[derive(Debug, Clone)]
pub struct RouteQuery {
    /// Starting-endpoint name term, trimmed; `None` when blank or absent
    pub from_location: Option<String>,
    /// Destination-endpoint name term, trimmed; `None` when blank or absent
    pub to_location: Option<String>,
    /// Requester origin; present only when both coordinates were supplied
    pub origin: Option<GeoPoint>,
}

impl RouteQuery {
    /// Validate an inbound route-search request.
    ///
    /// At least one non-blank location name or a complete coordinate pair
    /// is required. A lone latitude or longitude does not count as an
    /// origin.
    pub fn from_request(request: &RouteRequest) -> Result<Self> {
        let from_location = normalize_term(request.from_location.as_deref());
        let to_location = normalize_term(request.to_location.as_deref());

        let origin = match (request.latitude, request.longitude) {
            (Some(latitude), Some(longitude)) => {
                let point = GeoPoint::new(latitude, longitude);
                if !point.is_valid() {
                    return Err(DiscoveryError::InvalidCoordinates {
                        latitude,
                        longitude,
                    });
                }
                Some(point)
            }
            _ => None,
        };

        if from_location.is_none() && to_location.is_none() && origin.is_none() {
            return Err(DiscoveryError::MissingRouteCriteria);
        }

        Ok(Self {
            from_location,
            to_location,
            origin,
        })
    }

    /// Whether the query carries any name terms (as opposed to being
    /// coordinate-only).
    pub fn has_name_terms(&self) -> bool {
        self.from_location.is_some() || self.to_location.is_some()
    }
}

/// Trim a search term; blank terms count as absent.
fn normalize_term(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
