//! Per-shell route tables and the page registry
//!
//! Routes are declared here as explicit configuration data, one table
//! per shell, and validated at startup: duplicate paths and pages
//! missing from the registry abort the launch instead of surfacing on
//! navigation. The mobile table is a superset of the desktop table
//! (`/profile` exists only on mobile).

use std::collections::HashMap;

use dioxus::prelude::*;
use reverb_domain::{DomainError, PageId, RouteMatch, RouteTable, RouteTableBuilder};

use crate::ui::presentation::views;

/// Renderable page body, resolved from a [`PageId`].
///
/// Page views are plain hook-free render functions; the shells call the
/// resolved function inside their own scope.
pub type PageView = fn() -> Element;

/// Route table for the mobile shell
pub fn mobile_routes() -> Result<RouteTable, DomainError> {
    RouteTableBuilder::new("mobile")
        .route("/", PageId::SignIn)
        .route("/home", PageId::Home)
        .route("/ratings", PageId::Ratings)
        .route("/statistics", PageId::Statistics)
        .route("/recommendations", PageId::Recommendations)
        .route("/friends", PageId::Friends)
        .route("/profile", PageId::Profile)
        .build()
}

/// Route table for the desktop shell (no profile route)
pub fn desktop_routes() -> Result<RouteTable, DomainError> {
    RouteTableBuilder::new("desktop")
        .route("/", PageId::SignIn)
        .route("/home", PageId::Home)
        .route("/ratings", PageId::Ratings)
        .route("/statistics", PageId::Statistics)
        .route("/recommendations", PageId::Recommendations)
        .route("/friends", PageId::Friends)
        .build()
}

/// Maps page identifiers to renderable views.
#[derive(Clone)]
pub struct PageRegistry {
    views: HashMap<PageId, PageView>,
}

impl PageRegistry {
    /// Registry over the built-in page set
    pub fn with_defaults() -> Self {
        let mut views: HashMap<PageId, PageView> = HashMap::new();
        views.insert(PageId::SignIn, views::SignInPage as PageView);
        views.insert(PageId::Home, views::HomePage as PageView);
        views.insert(PageId::Ratings, views::RatingsPage as PageView);
        views.insert(PageId::Statistics, views::StatisticsPage as PageView);
        views.insert(PageId::Recommendations, views::RecommendationsPage as PageView);
        views.insert(PageId::Friends, views::FriendsPage as PageView);
        views.insert(PageId::Profile, views::ProfilePage as PageView);
        views.insert(PageId::NotFound, views::NotFoundPage as PageView);
        Self { views }
    }

    /// Look up the view for a page
    pub fn resolve(&self, page: PageId) -> Option<PageView> {
        self.views.get(&page).copied()
    }

    /// Resolve a route match, falling back to the NotFound view.
    ///
    /// Infallible at navigation time: tables are validated against this
    /// registry at startup, so the only runtime miss is an undeclared
    /// path, which renders the fallback.
    pub fn resolve_match(&self, matched: RouteMatch) -> (PageId, PageView) {
        let page = matched.page().unwrap_or(PageId::NotFound);
        match self.resolve(page) {
            Some(view) => (page, view),
            None => (PageId::NotFound, views::NotFoundPage as PageView),
        }
    }

    /// Check that every page a table references is registered, plus the
    /// NotFound fallback the shells rely on.
    pub fn validate(&self, table: &RouteTable) -> Result<(), DomainError> {
        for page in table.pages().chain(std::iter::once(PageId::NotFound)) {
            if !self.views.contains_key(&page) {
                return Err(DomainError::missing_page_view(table.name(), page));
            }
        }
        Ok(())
    }
}

/// Validated routing configuration shared by both shells.
///
/// Built once by the composition root; construction failures are
/// configuration bugs and abort startup.
#[derive(Clone)]
pub struct RoutingConfig {
    pub mobile: RouteTable,
    pub desktop: RouteTable,
    pub registry: PageRegistry,
}

impl RoutingConfig {
    pub fn load() -> Result<Self, DomainError> {
        let registry = PageRegistry::with_defaults();
        let mobile = mobile_routes()?;
        let desktop = desktop_routes()?;
        registry.validate(&mobile)?;
        registry.validate(&desktop)?;
        Ok(Self {
            mobile,
            desktop,
            registry,
        })
    }
}

/// Browser tab title for a page
pub fn page_title(page: PageId) -> &'static str {
    match page {
        PageId::SignIn => "Reverb",
        PageId::Home => "Reverb - Home",
        PageId::Ratings => "Reverb - Ratings",
        PageId::Statistics => "Reverb - Statistics",
        PageId::Recommendations => "Reverb - Recommendations",
        PageId::Friends => "Reverb - Friends",
        PageId::Profile => "Reverb - Profile",
        PageId::NotFound => "Reverb - Not Found",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reverb_domain::{classify, ChromePolicy, ViewportClass};

    #[test]
    fn config_loads_and_validates() {
        let config = RoutingConfig::load().expect("routing config must be valid");
        assert_eq!(config.mobile.entries().len(), 7);
        assert_eq!(config.desktop.entries().len(), 6);
    }

    #[test]
    fn both_tables_resolve_root_to_sign_in() {
        let config = RoutingConfig::load().expect("valid");
        assert_eq!(config.mobile.resolve("/"), RouteMatch::Page(PageId::SignIn));
        assert_eq!(
            config.desktop.resolve("/"),
            RouteMatch::Page(PageId::SignIn)
        );
    }

    #[test]
    fn profile_route_is_mobile_only() {
        let config = RoutingConfig::load().expect("valid");
        assert!(config.mobile.declares("/profile"));
        assert!(!config.desktop.declares("/profile"));
    }

    #[test]
    fn registry_misses_fail_validation() {
        let mut registry = PageRegistry::with_defaults();
        registry.views.remove(&PageId::Friends);
        let table = mobile_routes().expect("valid table");
        assert_eq!(
            registry.validate(&table),
            Err(DomainError::missing_page_view("mobile", PageId::Friends))
        );
    }

    #[test]
    fn unmatched_path_falls_back_to_not_found_view() {
        let config = RoutingConfig::load().expect("valid");
        let (page, _view) = config.registry.resolve_match(config.mobile.resolve("/unknown"));
        assert_eq!(page, PageId::NotFound);
    }

    #[test]
    fn scenario_narrow_viewport_on_sign_in_hides_navbar() {
        // width=400, path="/" => mobile shell, sign-in page, no navbar
        let config = RoutingConfig::load().expect("valid");
        assert_eq!(classify(400.0), ViewportClass::Mobile);
        assert_eq!(config.mobile.resolve("/"), RouteMatch::Page(PageId::SignIn));
        let chrome = ChromePolicy::mobile().visibility("/");
        assert!(!chrome.show_navbar);
        assert!(!chrome.show_profile_affordance);
    }

    #[test]
    fn scenario_mobile_home_shows_navbar_over_registered_paths() {
        // width=400, navigate to "/home" => home page with the icon navbar
        let config = RoutingConfig::load().expect("valid");
        assert_eq!(classify(400.0), ViewportClass::Mobile);
        assert_eq!(
            config.mobile.resolve("/home"),
            RouteMatch::Page(PageId::Home)
        );
        assert!(ChromePolicy::mobile().visibility("/home").show_navbar);

        // Every navbar link targets a path the mobile table declares
        for item in crate::ui::presentation::components::MOBILE_NAV_ITEMS.iter() {
            assert!(
                config.mobile.declares(item.path),
                "navbar links to undeclared path {}",
                item.path
            );
        }
        let order: Vec<PageId> = crate::ui::presentation::components::MOBILE_NAV_ITEMS
            .iter()
            .map(|item| item.page)
            .collect();
        assert_eq!(
            order,
            vec![
                PageId::Recommendations,
                PageId::Statistics,
                PageId::Home,
                PageId::Friends,
                PageId::Ratings,
            ]
        );
    }

    #[test]
    fn scenario_wide_viewport_ratings_without_affordance() {
        // width=1200, path="/ratings" => desktop shell, navbar, no affordance
        let config = RoutingConfig::load().expect("valid");
        assert_eq!(classify(1200.0), ViewportClass::Desktop);
        assert_eq!(
            config.desktop.resolve("/ratings"),
            RouteMatch::Page(PageId::Ratings)
        );
        let chrome = ChromePolicy::desktop().visibility("/ratings");
        assert!(chrome.show_navbar);
        assert!(!chrome.show_profile_affordance);
    }

    #[test]
    fn titles_cover_every_page() {
        let config = RoutingConfig::load().expect("valid");
        for page in config.mobile.pages() {
            assert!(page_title(page).starts_with("Reverb"));
        }
        assert_eq!(page_title(PageId::NotFound), "Reverb - Not Found");
    }
}
