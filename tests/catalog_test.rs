//! Integration tests for the in-memory Catalog

use nearfind::{
    Badge, Catalog, Category, GeoPoint, Provider, ProviderRepository, Route, SubscriptionPlan,
};

fn sample_provider(id: &str) -> Provider {
    let mut p = Provider::new(id, format!("Provider {id}"), "plumber");
    p.position = Some(GeoPoint::new(28.6, 77.2));
    p
}

#[test]
fn test_add_and_get_provider() {
    let mut catalog = Catalog::new();
    catalog.add_provider(sample_provider("p-1"));

    assert_eq!(catalog.provider_count(), 1);
    assert!(catalog.contains_provider("p-1"));

    let provider = catalog.get_provider("p-1").unwrap();
    assert_eq!(provider.name, "Provider p-1");
    assert!(provider.is_active);
}

#[test]
fn test_remove_provider() {
    let mut catalog = Catalog::new();
    catalog.add_provider(sample_provider("p-1"));
    catalog.add_provider(sample_provider("p-2"));

    let removed = catalog.remove_provider("p-1");
    assert!(removed.is_some());
    assert_eq!(catalog.provider_count(), 1);
    assert!(!catalog.contains_provider("p-1"));
    assert!(catalog.contains_provider("p-2"));
}

#[test]
fn test_set_online_and_position() {
    let mut catalog = Catalog::new();
    catalog.add_provider(sample_provider("p-1"));

    assert!(catalog.set_online("p-1", true));
    assert!(catalog.get_provider("p-1").unwrap().is_online);

    assert!(catalog.set_position("p-1", Some(GeoPoint::new(28.7, 77.3))));
    let position = catalog.get_provider("p-1").unwrap().position.unwrap();
    assert_eq!(position.latitude, 28.7);

    assert!(catalog.set_position("p-1", None));
    assert!(catalog.get_provider("p-1").unwrap().position.is_none());

    // Unknown ids report failure instead of inserting.
    assert!(!catalog.set_online("ghost", true));
    assert!(!catalog.set_position("ghost", None));
}

#[test]
fn test_find_active_excludes_inactive() {
    let mut catalog = Catalog::new();
    catalog.add_provider(sample_provider("active"));
    let mut retired = sample_provider("retired");
    retired.is_active = false;
    catalog.add_provider(retired);

    let records = catalog.find_active(None).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].provider.id, "active");
}

#[test]
fn test_find_active_category_restriction() {
    let mut catalog = Catalog::new();
    catalog.add_provider(sample_provider("plumber-1"));
    let mut sparks = sample_provider("sparks");
    sparks.category_id = "electrician".to_string();
    catalog.add_provider(sparks);

    let records = catalog.find_active(Some("electrician")).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].provider.id, "sparks");

    assert!(catalog.find_active(Some("ghost")).unwrap().is_empty());
}

#[test]
fn test_find_active_resolves_plans() {
    let mut catalog = Catalog::new();
    catalog.add_plan(SubscriptionPlan {
        id: "premium".to_string(),
        name: "Premium".to_string(),
        rank: 2,
        show_top_listing: true,
        highlight_name: true,
        verified_badge: true,
    });

    let mut subscribed = sample_provider("subscribed");
    subscribed.plan_id = Some("premium".to_string());
    catalog.add_provider(subscribed);
    catalog.add_provider(sample_provider("free"));

    let records = catalog.find_active(None).unwrap();
    let subscribed = records
        .iter()
        .find(|r| r.provider.id == "subscribed")
        .unwrap();
    assert!(subscribed.plan.as_ref().unwrap().show_top_listing);

    let free = records.iter().find(|r| r.provider.id == "free").unwrap();
    assert!(free.plan.is_none());
}

#[test]
fn test_find_provider_requires_active() {
    let mut catalog = Catalog::new();
    catalog.add_provider(sample_provider("p-1"));
    let mut retired = sample_provider("retired");
    retired.is_active = false;
    catalog.add_provider(retired);

    assert!(catalog.find_provider("p-1").unwrap().is_some());
    assert!(catalog.find_provider("retired").unwrap().is_none());
    assert!(catalog.find_provider("ghost").unwrap().is_none());
}

#[test]
fn test_badge_grants_are_sets() {
    let mut catalog = Catalog::new();
    catalog.add_provider(sample_provider("p-1"));
    catalog.add_badge(Badge::new("b-top", "Top Rated"));
    catalog.add_badge(Badge::new("b-fast", "Fast Response"));

    assert!(catalog.grant_badge("p-1", "b-top"));
    assert!(!catalog.grant_badge("p-1", "b-top")); // already granted
    assert!(!catalog.grant_badge("p-1", "undefined-badge"));
    assert!(catalog.grant_badge("p-1", "b-fast"));

    let labels = catalog.badge_labels("p-1").unwrap();
    assert_eq!(labels.len(), 2);
    assert!(labels.contains("Top Rated"));
    assert!(labels.contains("Fast Response"));

    assert!(catalog.revoke_badge("p-1", "b-top"));
    assert!(!catalog.revoke_badge("p-1", "b-top"));
    assert_eq!(catalog.badge_labels("p-1").unwrap().len(), 1);

    // Ungranted providers get an empty set.
    assert!(catalog.badge_labels("ghost").unwrap().is_empty());
}

#[test]
fn test_categories_ordered_and_active_only() {
    let mut catalog = Catalog::new();
    catalog.add_category(Category::new("plumber", "Plumber"));
    catalog.add_category(Category::new("auto", "Auto Rickshaw"));
    catalog.add_category(Category::new("electrician", "Electrician"));
    let mut hidden = Category::new("legacy", "Legacy Trade");
    hidden.is_active = false;
    catalog.add_category(hidden);

    let names: Vec<String> = catalog
        .categories()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Auto Rickshaw", "Electrician", "Plumber"]);
}

#[test]
fn test_routes_join_active_drivers() {
    let mut catalog = Catalog::new();
    catalog.add_provider(sample_provider("d1"));
    let mut retired = sample_provider("d2");
    retired.is_active = false;
    catalog.add_provider(retired);

    catalog.add_route(Route {
        id: "r1".to_string(),
        provider_id: "d1".to_string(),
        from_location: "A".to_string(),
        to_location: "B".to_string(),
        is_active: true,
        ..Default::default()
    });
    catalog.add_route(Route {
        id: "r2".to_string(),
        provider_id: "d2".to_string(),
        from_location: "A".to_string(),
        to_location: "C".to_string(),
        is_active: true,
        ..Default::default()
    });
    catalog.add_route(Route {
        id: "r3".to_string(),
        provider_id: "d1".to_string(),
        from_location: "B".to_string(),
        to_location: "C".to_string(),
        is_active: false,
        ..Default::default()
    });
    // Route owned by nobody.
    catalog.add_route(Route {
        id: "r4".to_string(),
        provider_id: "ghost".to_string(),
        from_location: "X".to_string(),
        to_location: "Y".to_string(),
        is_active: true,
        ..Default::default()
    });

    let records = catalog.find_active_routes().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].route.id, "r1");
    assert_eq!(records[0].driver.id, "d1");
}

#[test]
fn test_routes_for_provider_sorted_and_active_only() {
    let mut catalog = Catalog::new();
    catalog.add_provider(sample_provider("d1"));
    for (id, active) in [("r-b", true), ("r-a", true), ("r-c", false)] {
        catalog.add_route(Route {
            id: id.to_string(),
            provider_id: "d1".to_string(),
            from_location: "A".to_string(),
            to_location: "B".to_string(),
            is_active: active,
            ..Default::default()
        });
    }

    let routes = catalog.routes_for_provider("d1").unwrap();
    let ids: Vec<&str> = routes.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r-a", "r-b"]);
}

#[test]
fn test_set_route_active() {
    let mut catalog = Catalog::new();
    catalog.add_route(Route {
        id: "r1".to_string(),
        provider_id: "d1".to_string(),
        is_active: true,
        ..Default::default()
    });

    assert!(catalog.set_route_active("r1", false));
    assert!(!catalog.set_route_active("ghost", false));
}

#[test]
fn test_clear() {
    let mut catalog = Catalog::new();
    catalog.add_provider(sample_provider("p-1"));
    catalog.add_category(Category::new("plumber", "Plumber"));
    catalog.add_route(Route {
        id: "r1".to_string(),
        provider_id: "p-1".to_string(),
        is_active: true,
        ..Default::default()
    });

    catalog.clear();

    assert_eq!(catalog.provider_count(), 0);
    assert_eq!(catalog.route_count(), 0);
    assert!(catalog.categories().unwrap().is_empty());
}

#[test]
fn test_remove_provider_drops_badge_grants() {
    let mut catalog = Catalog::new();
    catalog.add_provider(sample_provider("p-1"));
    catalog.add_badge(Badge::new("b-top", "Top Rated"));
    catalog.grant_badge("p-1", "b-top");

    catalog.remove_provider("p-1");
    assert!(catalog.badge_labels("p-1").unwrap().is_empty());
}
