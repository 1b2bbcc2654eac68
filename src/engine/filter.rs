//! Candidate filtering.
//!
//! Selects the entities a query may return: active, positioned, matching
//! the category filter, and within the effective radius. Non-geographic
//! predicates run before the distance bound; correctness does not depend
//! on that order, only the work saved does. Pure computation over the
//! records the repository returned.

use crate::geo::haversine_distance_km;
use crate::query::{NearbyQuery, RouteQuery};
use crate::repository::{ProviderRecord, RouteRecord};
use crate::{Provider, Route, SubscriptionPlan};

/// A provider that survived filtering, with its computed distance.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub record: ProviderRecord,
    /// Unrounded distance from the search origin in kilometers
    pub distance_km: f64,
}

impl Candidate {
    pub fn provider(&self) -> &Provider {
        &self.record.provider
    }

    pub fn plan(&self) -> Option<&SubscriptionPlan> {
        self.record.plan.as_ref()
    }

    /// Whether the candidate's plan grants top-listing placement.
    /// Plan-less providers never do.
    pub fn show_top_listing(&self) -> bool {
        self.record.plan.as_ref().is_some_and(|p| p.show_top_listing)
    }
}

/// A route that survived filtering, with the requester distance annotation.
#[derive(Debug, Clone)]
pub struct RouteCandidate {
    pub record: RouteRecord,
    /// Unrounded distance from the requester to the driver's current
    /// position. `None` when the query had no origin or the driver is
    /// unlocated.
    pub distance_from_user: Option<f64>,
}

impl RouteCandidate {
    pub fn route(&self) -> &Route {
        &self.record.route
    }

    pub fn driver(&self) -> &Provider {
        &self.record.driver
    }
}

/// Filter repository records down to the candidate set for a query.
pub fn filter_candidates(records: Vec<ProviderRecord>, query: &NearbyQuery) -> Vec<Candidate> {
    records
        .into_iter()
        .filter_map(|record| evaluate(record, query))
        .collect()
}

/// Parallel variant of [`filter_candidates`] fanning the per-record
/// evaluation out with rayon.
#[cfg(feature = "parallel")]
pub fn filter_candidates_parallel(
    records: Vec<ProviderRecord>,
    query: &NearbyQuery,
) -> Vec<Candidate> {
    use rayon::prelude::*;

    records
        .into_par_iter()
        .filter_map(|record| evaluate(record, query))
        .collect()
}

fn evaluate(record: ProviderRecord, query: &NearbyQuery) -> Option<Candidate> {
    let provider = &record.provider;
    if !provider.is_active {
        return None;
    }
    if let Some(category_id) = query.category_id.as_deref() {
        if provider.category_id != category_id {
            return None;
        }
    }
    // Unlocated providers are never returned, whatever their other
    // attributes.
    let position = provider.position?;

    let distance_km = haversine_distance_km(&query.origin, &position);
    if distance_km > query.radius_km {
        return None;
    }

    Some(Candidate {
        record,
        distance_km,
    })
}

/// Filter route records down to the candidate set for a query, annotating
/// the requester distance where it can be computed.
pub fn filter_route_candidates(
    records: Vec<RouteRecord>,
    query: &RouteQuery,
) -> Vec<RouteCandidate> {
    records
        .into_iter()
        .filter(|record| {
            record.route.is_active && record.driver.is_active && matches_terms(&record.route, query)
        })
        .map(|record| {
            let distance_from_user = match (query.origin, record.driver.position) {
                (Some(origin), Some(position)) => {
                    Some(haversine_distance_km(&origin, &position))
                }
                _ => None,
            };
            RouteCandidate {
                record,
                distance_from_user,
            }
        })
        .collect()
}

/// A route matches when any supplied name term occurs, case-insensitively,
/// in either endpoint name. Queries without name terms match every route.
fn matches_terms(route: &Route, query: &RouteQuery) -> bool {
    if !query.has_name_terms() {
        return true;
    }

    let from = route.from_location.to_lowercase();
    let to = route.to_location.to_lowercase();

    [&query.from_location, &query.to_location]
        .into_iter()
        .flatten()
        .any(|term| {
            let term = term.to_lowercase();
            from.contains(&term) || to.contains(&term)
        })
}
