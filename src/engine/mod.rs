//! # Discovery Engine
//!
//! Stateless search pipeline over a pluggable repository.
//!
//! ## Architecture
//!
//! The engine is composed of focused modules, one per pipeline stage:
//! - `filter` - Candidate selection (activity, position, category, radius)
//! - `ranking` - Deterministic multi-key ordering
//! - `pagination` - Offset windowing with a consistent total count
//! - `assemble` - Result shaping (badges, labels, plan flags, distance)
//!
//! Each request flows query validation → repository read → filter → rank →
//! paginate → assemble. The engine holds no mutable state and takes no
//! locks; any number of requests may run concurrently against the same
//! instance.

pub mod assemble;
pub mod filter;
pub mod pagination;
pub mod ranking;

pub use filter::{Candidate, RouteCandidate};

use log::{debug, warn};

use crate::error::Result;
use crate::query::{NearbyQuery, RouteQuery};
use crate::repository::ProviderRepository;
use crate::{
    Category, NearbyRequest, NearbyResponse, ProviderDetails, RouteRequest, RouteSearchResponse,
    SearchConfig, SearchParams,
};

/// Geospatial discovery engine.
///
/// Owns a repository handle and a [`SearchConfig`]; every search is
/// evaluated independently from the repository's current state, so results
/// track mutations (online toggles, position updates) made between calls.
pub struct DiscoveryEngine<R> {
    repository: R,
    config: SearchConfig,
}

impl<R: ProviderRepository> DiscoveryEngine<R> {
    /// Create an engine with the default configuration.
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, SearchConfig::default())
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(repository: R, config: SearchConfig) -> Self {
        Self { repository, config }
    }

    /// Current search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Mutable access to the underlying repository, for embedded use where
    /// the caller also owns the store.
    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    /// Find active providers near an origin, ranked and paginated.
    ///
    /// Validation failures surface before any repository access. Zero
    /// matches is a success with `total: 0`.
    pub fn search_nearby(&self, request: &NearbyRequest) -> Result<NearbyResponse> {
        let query = NearbyQuery::from_request(request, &self.config)?;

        let records = self.repository.find_active(query.category_id.as_deref())?;

        #[cfg(feature = "parallel")]
        let mut candidates = filter::filter_candidates_parallel(records, &query);
        #[cfg(not(feature = "parallel"))]
        let mut candidates = filter::filter_candidates(records, &query);

        ranking::rank_candidates(&mut candidates);

        let (window, pagination) = pagination::paginate(candidates, query.page, query.limit);

        let mut providers = Vec::with_capacity(window.len());
        for candidate in window {
            let category = self.repository.category(&candidate.provider().category_id)?;
            if category.is_none() {
                warn!(
                    "provider '{}' references unknown category '{}'",
                    candidate.provider().id,
                    candidate.provider().category_id
                );
            }
            let badges = self.repository.badge_labels(&candidate.provider().id)?;
            providers.push(assemble::provider_hit(candidate, category.as_ref(), badges));
        }

        debug!(
            "nearby search at ({:.4}, {:.4}) radius {:.1} km: {} match(es), page {}/{}",
            query.origin.latitude,
            query.origin.longitude,
            query.radius_km,
            pagination.total,
            pagination.page,
            pagination.total_pages
        );

        Ok(NearbyResponse {
            providers,
            pagination,
            search_params: SearchParams {
                latitude: query.origin.latitude,
                longitude: query.origin.longitude,
                radius: query.radius_km,
                category_id: query.category_id,
            },
        })
    }

    /// Find active routes by endpoint name and/or requester position.
    ///
    /// Name terms match case-insensitively against either endpoint. The
    /// requester distance is annotated per route when the query carried an
    /// origin and the driver has a known position.
    pub fn search_routes(&self, request: &RouteRequest) -> Result<RouteSearchResponse> {
        let query = RouteQuery::from_request(request)?;

        let records = self.repository.find_active_routes()?;
        let mut candidates = filter::filter_route_candidates(records, &query);
        ranking::rank_route_candidates(&mut candidates);

        let total = candidates.len();
        let routes = candidates.into_iter().map(assemble::route_hit).collect();

        debug!("route search: {} match(es)", total);

        Ok(RouteSearchResponse { routes, total })
    }

    /// Look up a single active provider with its badges, plan flags and
    /// active routes. Unknown or inactive providers yield `Ok(None)`.
    pub fn provider_details(&self, provider_id: &str) -> Result<Option<ProviderDetails>> {
        let Some(record) = self.repository.find_provider(provider_id)? else {
            return Ok(None);
        };

        let category = self.repository.category(&record.provider.category_id)?;
        let badges = self.repository.badge_labels(provider_id)?;
        let routes = self.repository.routes_for_provider(provider_id)?;

        Ok(Some(ProviderDetails {
            provider: assemble::profile_hit(record, category.as_ref(), badges),
            routes,
        }))
    }

    /// All active categories, ordered by display name.
    pub fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.repository.categories()?)
    }
}
