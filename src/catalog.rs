//! In-memory provider catalog.
//!
//! A [`ProviderRepository`] implementation backed by hash maps, used for
//! embedding the engine without an external store and as the fixture store
//! in tests. Mutators cover the store-level lifecycle the discovery engine
//! reads through: providers coming online and offline, position updates,
//! badge grants and route registration.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::error::RepositoryError;
use crate::repository::{ProviderRecord, ProviderRepository, RouteRecord};
use crate::{Badge, Category, GeoPoint, Provider, Route, SubscriptionPlan};

/// In-memory storage for providers, plans, categories, badges and routes.
#[derive(Debug, Default)]
pub struct Catalog {
    providers: HashMap<String, Provider>,
    plans: HashMap<String, SubscriptionPlan>,
    categories: HashMap<String, Category>,
    badges: HashMap<String, Badge>,
    /// provider id -> granted badge ids (set semantics)
    badge_grants: HashMap<String, HashSet<String>>,
    routes: HashMap<String, Route>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Providers
    // ========================================================================

    /// Insert or replace a provider.
    pub fn add_provider(&mut self, provider: Provider) {
        self.providers.insert(provider.id.clone(), provider);
    }

    /// Remove a provider along with its badge grants.
    ///
    /// Returns the removed provider if it existed. Routes owned by the
    /// provider remain but disappear from search while ownerless.
    pub fn remove_provider(&mut self, provider_id: &str) -> Option<Provider> {
        self.badge_grants.remove(provider_id);
        self.providers.remove(provider_id)
    }

    /// Get a provider by id.
    pub fn get_provider(&self, provider_id: &str) -> Option<&Provider> {
        self.providers.get(provider_id)
    }

    /// Check if a provider exists.
    pub fn contains_provider(&self, provider_id: &str) -> bool {
        self.providers.contains_key(provider_id)
    }

    /// Set a provider's online flag. Returns false if the provider is
    /// unknown.
    pub fn set_online(&mut self, provider_id: &str, is_online: bool) -> bool {
        match self.providers.get_mut(provider_id) {
            Some(provider) => {
                provider.is_online = is_online;
                true
            }
            None => false,
        }
    }

    /// Update a provider's position. `None` marks the provider unlocated,
    /// removing it from nearby search. Returns false if the provider is
    /// unknown.
    pub fn set_position(&mut self, provider_id: &str, position: Option<GeoPoint>) -> bool {
        match self.providers.get_mut(provider_id) {
            Some(provider) => {
                provider.position = position;
                true
            }
            None => false,
        }
    }

    /// Get all provider ids.
    pub fn provider_ids(&self) -> impl Iterator<Item = &String> {
        self.providers.keys()
    }

    /// Get the number of providers.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    // ========================================================================
    // Plans, Categories, Badges
    // ========================================================================

    /// Insert or replace a subscription plan.
    pub fn add_plan(&mut self, plan: SubscriptionPlan) {
        self.plans.insert(plan.id.clone(), plan);
    }

    /// Insert or replace a category.
    pub fn add_category(&mut self, category: Category) {
        self.categories.insert(category.id.clone(), category);
    }

    /// Insert or replace a badge definition.
    pub fn add_badge(&mut self, badge: Badge) {
        self.badges.insert(badge.id.clone(), badge);
    }

    /// Grant a badge to a provider.
    ///
    /// Returns true if the grant was newly recorded, false if it already
    /// existed or the badge is undefined. Granting twice has no effect.
    pub fn grant_badge(&mut self, provider_id: &str, badge_id: &str) -> bool {
        if !self.badges.contains_key(badge_id) {
            return false;
        }
        self.badge_grants
            .entry(provider_id.to_string())
            .or_default()
            .insert(badge_id.to_string())
    }

    /// Revoke a badge from a provider. Returns true if a grant was removed.
    pub fn revoke_badge(&mut self, provider_id: &str, badge_id: &str) -> bool {
        self.badge_grants
            .get_mut(provider_id)
            .is_some_and(|grants| grants.remove(badge_id))
    }

    // ========================================================================
    // Routes
    // ========================================================================

    /// Insert or replace a route.
    pub fn add_route(&mut self, route: Route) {
        self.routes.insert(route.id.clone(), route);
    }

    /// Remove a route. Returns the removed route if it existed.
    pub fn remove_route(&mut self, route_id: &str) -> Option<Route> {
        self.routes.remove(route_id)
    }

    /// Set a route's active flag. Returns false if the route is unknown.
    pub fn set_route_active(&mut self, route_id: &str, is_active: bool) -> bool {
        match self.routes.get_mut(route_id) {
            Some(route) => {
                route.is_active = is_active;
                true
            }
            None => false,
        }
    }

    /// Get the number of routes.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Clear all stored entities.
    pub fn clear(&mut self) {
        self.providers.clear();
        self.plans.clear();
        self.categories.clear();
        self.badges.clear();
        self.badge_grants.clear();
        self.routes.clear();
    }

    fn record_for(&self, provider: &Provider) -> ProviderRecord {
        let plan = provider
            .plan_id
            .as_deref()
            .and_then(|id| self.plans.get(id))
            .cloned();
        ProviderRecord {
            provider: provider.clone(),
            plan,
        }
    }
}

impl ProviderRepository for Catalog {
    fn find_active(
        &self,
        category_id: Option<&str>,
    ) -> Result<Vec<ProviderRecord>, RepositoryError> {
        let records = self
            .providers
            .values()
            .filter(|p| p.is_active)
            .filter(|p| category_id.is_none_or(|c| p.category_id == c))
            .map(|p| self.record_for(p))
            .collect();
        Ok(records)
    }

    fn find_provider(&self, provider_id: &str) -> Result<Option<ProviderRecord>, RepositoryError> {
        let record = self
            .providers
            .get(provider_id)
            .filter(|p| p.is_active)
            .map(|p| self.record_for(p));
        Ok(record)
    }

    fn category(&self, category_id: &str) -> Result<Option<Category>, RepositoryError> {
        Ok(self.categories.get(category_id).cloned())
    }

    fn categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let mut active: Vec<Category> = self
            .categories
            .values()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        active.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(active)
    }

    fn badge_labels(&self, provider_id: &str) -> Result<BTreeSet<String>, RepositoryError> {
        let labels = self
            .badge_grants
            .get(provider_id)
            .map(|grants| {
                grants
                    .iter()
                    .filter_map(|badge_id| self.badges.get(badge_id))
                    .map(|badge| badge.name.clone())
                    .collect()
            })
            .unwrap_or_default();
        Ok(labels)
    }

    fn find_active_routes(&self) -> Result<Vec<RouteRecord>, RepositoryError> {
        let records = self
            .routes
            .values()
            .filter(|r| r.is_active)
            .filter_map(|r| {
                let driver = self.providers.get(&r.provider_id)?;
                if !driver.is_active {
                    return None;
                }
                Some(RouteRecord {
                    route: r.clone(),
                    driver: driver.clone(),
                })
            })
            .collect();
        Ok(records)
    }

    fn routes_for_provider(&self, provider_id: &str) -> Result<Vec<Route>, RepositoryError> {
        let mut routes: Vec<Route> = self
            .routes
            .values()
            .filter(|r| r.is_active && r.provider_id == provider_id)
            .cloned()
            .collect();
        routes.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(routes)
    }
}
