//! Repository seam for the external entity store.
//!
//! The engine owns no storage: every search reads through this trait.
//! Implementations decide where the data lives (the bundled [`Catalog`]
//! keeps it in memory; a service would back it with its database) and are
//! responsible for their own snapshot and read-consistency guarantees.
//!
//! [`Catalog`]: crate::Catalog

use std::collections::BTreeSet;

use crate::error::RepositoryError;
use crate::{Category, Provider, Route, SubscriptionPlan};

/// A provider joined with its resolved subscription plan, as repositories
/// return it. Providers without a plan carry `None`.
#[derive(Debug, Clone)]
pub struct ProviderRecord {
    pub provider: Provider,
    pub plan: Option<SubscriptionPlan>,
}

/// A route joined with its owning provider (the driver).
#[derive(Debug, Clone)]
pub struct RouteRecord {
    pub route: Route,
    pub driver: Provider,
}

/// Read-only access to providers, plans, categories, badges and routes.
///
/// All methods are fallible: a failing store must surface as
/// [`RepositoryError`], never as an empty result. The engine performs no
/// retries of its own.
pub trait ProviderRepository {
    /// All active providers, optionally restricted to a category, each
    /// joined with its subscription plan. Unknown category ids yield an
    /// empty list.
    ///
    /// Implementations may return unpositioned providers; the candidate
    /// filter drops them.
    fn find_active(&self, category_id: Option<&str>) -> Result<Vec<ProviderRecord>, RepositoryError>;

    /// A single active provider by id, joined with its plan.
    fn find_provider(&self, provider_id: &str) -> Result<Option<ProviderRecord>, RepositoryError>;

    /// Look up a category by id.
    fn category(&self, category_id: &str) -> Result<Option<Category>, RepositoryError>;

    /// All active categories, ordered by display name.
    fn categories(&self) -> Result<Vec<Category>, RepositoryError>;

    /// Deduplicated badge labels granted to a provider. Empty set when
    /// none.
    fn badge_labels(&self, provider_id: &str) -> Result<BTreeSet<String>, RepositoryError>;

    /// All active routes whose owning provider is also active, joined with
    /// that provider.
    fn find_active_routes(&self) -> Result<Vec<RouteRecord>, RepositoryError>;

    /// Active routes owned by a single provider.
    fn routes_for_provider(&self, provider_id: &str) -> Result<Vec<Route>, RepositoryError>;
}
