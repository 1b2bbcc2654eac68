//! Deterministic ranking over the filtered candidate set.
//!
//! Providers order by an ordered tuple of descending-priority keys:
//! top-listing plan flag, online status, average rating, distance, and
//! finally provider id so the order is a total one. Two calls against an
//! unchanged candidate set always yield the identical sequence.
//!
//! Routes carry no subscription tier: drivers order by online status,
//! rating, the annotated requester distance when one exists, then route id.

use std::cmp::Ordering;

use super::filter::{Candidate, RouteCandidate};

/// Sort candidates into their final result order.
pub fn rank_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(compare_candidates);
}

/// Total-order comparator for provider candidates.
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    b.show_top_listing()
        .cmp(&a.show_top_listing())
        .then_with(|| b.provider().is_online.cmp(&a.provider().is_online))
        .then_with(|| {
            b.provider()
                .average_rating
                .total_cmp(&a.provider().average_rating)
        })
        .then_with(|| a.distance_km.total_cmp(&b.distance_km))
        .then_with(|| a.provider().id.cmp(&b.provider().id))
}

/// Sort route candidates into their final result order.
pub fn rank_route_candidates(candidates: &mut [RouteCandidate]) {
    candidates.sort_by(compare_route_candidates);
}

/// Total-order comparator for route candidates.
///
/// Text-only queries annotate no distances, so every distance comparison
/// is a tie and ordering reduces to online status, rating and route id.
pub fn compare_route_candidates(a: &RouteCandidate, b: &RouteCandidate) -> Ordering {
    b.driver()
        .is_online
        .cmp(&a.driver().is_online)
        .then_with(|| {
            b.driver()
                .average_rating
                .total_cmp(&a.driver().average_rating)
        })
        .then_with(|| compare_annotated(a.distance_from_user, b.distance_from_user))
        .then_with(|| a.route().id.cmp(&b.route().id))
}

/// Unlocated drivers (no annotation) sort after located ones among ties.
fn compare_annotated(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
