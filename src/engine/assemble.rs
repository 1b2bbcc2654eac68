//! Result assembly.
//!
//! Shapes the output structures: merges category labels, plan display
//! flags and the deduplicated badge set onto each candidate, and attaches
//! the computed distance rounded to two decimal places. Never mutates
//! entity state.

use std::collections::BTreeSet;

use crate::geo::round_km;
use crate::repository::ProviderRecord;
use crate::{Category, ProviderHit, RouteHit};

use super::filter::{Candidate, RouteCandidate};

/// Assemble a search hit from a filtered candidate.
pub fn provider_hit(
    candidate: Candidate,
    category: Option<&Category>,
    badges: BTreeSet<String>,
) -> ProviderHit {
    let distance = round_km(candidate.distance_km);
    let mut hit = profile_hit(candidate.record, category, badges);
    hit.distance = Some(distance);
    hit
}

/// Assemble a provider hit without a distance annotation, for contexts
/// with no search origin (profile lookups).
pub fn profile_hit(
    record: ProviderRecord,
    category: Option<&Category>,
    badges: BTreeSet<String>,
) -> ProviderHit {
    let ProviderRecord { provider, plan } = record;

    ProviderHit {
        provider_id: provider.id,
        name: provider.name,
        business_name: provider.business_name,
        phone: provider.phone,
        description: provider.description,
        address: provider.address,
        city: provider.city,
        latitude: provider.position.map(|p| p.latitude),
        longitude: provider.position.map(|p| p.longitude),
        is_online: provider.is_online,
        is_verified: provider.is_verified,
        average_rating: provider.average_rating,
        total_ratings: provider.total_ratings,
        services_completed: provider.services_completed,
        profile_pic: provider.profile_pic,
        category_name: category.map(|c| c.name.clone()),
        category_name_local: category.and_then(|c| c.name_local.clone()),
        plan_name: plan.as_ref().map(|p| p.name.clone()),
        show_top_listing: plan.as_ref().is_some_and(|p| p.show_top_listing),
        highlight_name: plan.as_ref().is_some_and(|p| p.highlight_name),
        verified_badge: plan.as_ref().is_some_and(|p| p.verified_badge),
        badges,
        distance: None,
    }
}

/// Assemble a route hit from a filtered route candidate.
pub fn route_hit(candidate: RouteCandidate) -> RouteHit {
    let distance_from_user = candidate.distance_from_user.map(round_km);
    let route = candidate.record.route;
    let driver = candidate.record.driver;

    RouteHit {
        route_id: route.id,
        provider_id: route.provider_id,
        route_name: route.name,
        from_location: route.from_location,
        to_location: route.to_location,
        from_point: route.from_point,
        to_point: route.to_point,
        estimated_fare: route.estimated_fare,
        driver_name: driver.name,
        phone: driver.phone,
        average_rating: driver.average_rating,
        total_ratings: driver.total_ratings,
        is_online: driver.is_online,
        current_position: driver.position,
        distance_from_user,
    }
}
