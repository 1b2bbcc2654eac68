//! # nearfind
//!
//! Deterministic geospatial discovery engine for nearby service providers
//! and transport routes.
//!
//! This library provides:
//! - Haversine great-circle distance on a spherical Earth
//! - Radius-bounded candidate filtering over a pluggable repository
//! - Multi-key deterministic ranking (subscription tier, online status,
//!   rating, distance)
//! - Offset pagination whose total count always matches the filtered set
//! - Result assembly with badge aggregation and plan display flags
//!
//! The engine is stateless per request and owns no storage: it consumes any
//! [`ProviderRepository`] implementation and produces ranked, paginated
//! result sets. An in-memory [`Catalog`] implementation is included for
//! embedding and tests.
//!
//! ## Features
//!
//! - **`parallel`** - Enable parallel candidate evaluation with rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use nearfind::{Catalog, Category, DiscoveryEngine, GeoPoint, NearbyRequest, Provider};
//!
//! let mut catalog = Catalog::new();
//! catalog.add_category(Category::new("plumber", "Plumber"));
//!
//! let mut provider = Provider::new("p-1", "Asha Plumbing", "plumber");
//! provider.position = Some(GeoPoint::new(28.6139, 77.2090)); // New Delhi
//! provider.is_online = true;
//! provider.average_rating = 4.6;
//! catalog.add_provider(provider);
//!
//! let engine = DiscoveryEngine::new(catalog);
//! let response = engine
//!     .search_nearby(&NearbyRequest {
//!         latitude: Some(28.61),
//!         longitude: Some(77.21),
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//! assert_eq!(response.pagination.total, 1);
//! assert_eq!(response.providers[0].provider_id, "p-1");
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{DiscoveryError, RepositoryError, Result};

// Geographic utilities (great-circle distance, rounding)
pub mod geo;

// Query validation and normalization
pub mod query;
pub use query::{NearbyQuery, RouteQuery};

// Repository seam for the external entity store
pub mod repository;
pub use repository::{ProviderRecord, ProviderRepository, RouteRecord};

// In-memory repository implementation
pub mod catalog;
pub use catalog::Catalog;

// Discovery engine with staged pipeline components
pub mod engine;
pub use engine::{Candidate, DiscoveryEngine, RouteCandidate};

// ============================================================================
// Core Types
// ============================================================================

/// A geographic coordinate with latitude and longitude.
///
/// # Example
/// ```
/// use nearfind::GeoPoint;
/// let point = GeoPoint::new(28.6139, 77.2090); // New Delhi
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new geographic point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

/// A searchable service provider.
///
/// Providers without a [`position`](Self::position) are unlocated and are
/// never returned by nearby search regardless of their other attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    /// Contact person name
    pub name: String,
    /// Registered business name, if any
    pub business_name: Option<String>,
    pub phone: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    /// Last known position. `None` means the provider is unlocated.
    pub position: Option<GeoPoint>,
    /// Category this provider belongs to (mandatory)
    pub category_id: String,
    /// Subscription plan reference, if subscribed
    pub plan_id: Option<String>,
    /// Inactive providers are invisible to every search
    pub is_active: bool,
    /// Whether the provider is currently accepting work
    pub is_online: bool,
    pub is_verified: bool,
    /// Aggregate rating, bounded to [0, 5]
    pub average_rating: f64,
    pub total_ratings: u32,
    pub services_completed: u32,
    pub profile_pic: Option<String>,
}

impl Provider {
    /// Create an active provider with the given identity and category.
    ///
    /// All other fields start at their defaults: unlocated, offline,
    /// unrated, no plan.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category_id: category_id.into(),
            is_active: true,
            ..Self::default()
        }
    }
}

/// A subscription plan granting display and ranking privileges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    /// Ordinal rank of the plan (free < standard < premium)
    pub rank: u8,
    /// Plans with this flag rank strictly above any plan without it,
    /// independent of rating or distance
    pub show_top_listing: bool,
    /// Render the provider name highlighted
    pub highlight_name: bool,
    /// Grant the verified badge in result displays
    pub verified_badge: bool,
}

/// A label grantable to any number of providers (many-to-many).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
}

impl Badge {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A category partitioning providers; optional filter dimension for search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Localized display name, if available
    pub name_local: Option<String>,
    pub is_active: bool,
}

impl Category {
    /// Create an active category.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_local: None,
            is_active: true,
        }
    }
}

/// A transport route owned by exactly one provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    /// Owning provider (the driver)
    pub provider_id: String,
    pub name: String,
    /// Named starting endpoint (e.g. a landmark or locality)
    pub from_location: String,
    /// Named destination endpoint
    pub to_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_point: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_point: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_fare: Option<f64>,
    /// Inactive routes are invisible to route search
    pub is_active: bool,
}

/// Configuration for search normalization and pagination bounds.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Ceiling for the search radius in kilometers. Requested radii are
    /// clamped to this value. Default: 20.0
    pub max_radius_km: f64,

    /// Radius in kilometers applied when the request carries none.
    /// Default: 5.0
    pub default_radius_km: f64,

    /// Page size applied when the request carries none. Default: 20
    pub default_limit: u32,

    /// Upper bound for the page size. Requested limits are clamped to
    /// [1, max_limit]. Default: 100
    pub max_limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_radius_km: 20.0,
            default_radius_km: 5.0,
            default_limit: 20,
            max_limit: 100,
        }
    }
}

// ============================================================================
// Request Types
// ============================================================================

/// Inbound nearby-search request, before validation.
///
/// Coordinates are mandatory; everything else is normalized against
/// [`SearchConfig`] by [`NearbyQuery::from_request`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NearbyRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub category_id: Option<String>,
    /// Requested search radius in kilometers
    #[serde(rename = "radius")]
    pub radius_km: Option<f64>,
    /// 1-based page number
    pub page: Option<u32>,
    /// Requested page size
    pub limit: Option<u32>,
}

/// Inbound route-search request, before validation.
///
/// Requires at least one location name or a complete coordinate pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteRequest {
    pub from_location: Option<String>,
    pub to_location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

// ============================================================================
// Result Types
// ============================================================================

/// A provider as it appears in search results and profile lookups.
///
/// Carries the provider's own fields plus everything the assembler merges
/// on: category labels, plan display flags and the deduplicated badge set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderHit {
    pub provider_id: String,
    pub name: String,
    pub business_name: Option<String>,
    pub phone: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_online: bool,
    pub is_verified: bool,
    pub average_rating: f64,
    pub total_ratings: u32,
    pub services_completed: u32,
    pub profile_pic: Option<String>,
    /// Display name of the provider's category, when the category resolves
    pub category_name: Option<String>,
    pub category_name_local: Option<String>,
    pub plan_name: Option<String>,
    pub show_top_listing: bool,
    pub highlight_name: bool,
    pub verified_badge: bool,
    /// Deduplicated badge labels. Empty set, never absent, when none.
    pub badges: BTreeSet<String>,
    /// Distance from the search origin in kilometers, rounded to two
    /// decimal places. Absent in contexts without an origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Pagination envelope for a result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    /// Count of the exact filtered-and-ranked candidate set the page was
    /// sliced from
    pub total: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

/// The normalized parameters a nearby search was answered for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    pub latitude: f64,
    pub longitude: f64,
    /// Effective radius in kilometers, after clamping
    pub radius: f64,
    pub category_id: Option<String>,
}

/// Response of a nearby provider search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyResponse {
    pub providers: Vec<ProviderHit>,
    pub pagination: Pagination,
    #[serde(rename = "searchParams")]
    pub search_params: SearchParams,
}

/// A route as it appears in route-search results, joined with its driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteHit {
    pub route_id: String,
    pub provider_id: String,
    pub route_name: String,
    pub from_location: String,
    pub to_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_point: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_point: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_fare: Option<f64>,
    pub driver_name: String,
    pub phone: String,
    pub average_rating: f64,
    pub total_ratings: u32,
    pub is_online: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_position: Option<GeoPoint>,
    /// Distance from the requester to the driver's current position in
    /// kilometers, rounded to two decimal places. Present only when the
    /// query supplied origin coordinates and the driver has a position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_user: Option<f64>,
}

/// Response of a route search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSearchResponse {
    pub routes: Vec<RouteHit>,
    pub total: usize,
}

/// A single provider profile with its active routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderDetails {
    pub provider: ProviderHit,
    pub routes: Vec<Route>,
}
