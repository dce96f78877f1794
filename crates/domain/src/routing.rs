//! Route tables and navigation state
//!
//! Each shell owns a declarative path-to-page table. Matching is exact
//! string equality; there are no dynamic segments. Tables are built once
//! at startup through [`RouteTableBuilder`], which rejects duplicate
//! paths so a bad declaration fails fast instead of shadowing an entry
//! at match time.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Path every session starts on, resolving to the sign-in page in both
/// shells.
pub const SIGN_IN_PATH: &str = "/";

/// Identifier for a page view, resolved to renderable content by the
/// client's page registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    SignIn,
    Home,
    Ratings,
    Statistics,
    Recommendations,
    Friends,
    Profile,
    /// Fallback view for undeclared paths. Never declared in a route
    /// table; reached only through [`RouteMatch::NotFound`].
    NotFound,
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PageId::SignIn => "sign_in",
            PageId::Home => "home",
            PageId::Ratings => "ratings",
            PageId::Statistics => "statistics",
            PageId::Recommendations => "recommendations",
            PageId::Friends => "friends",
            PageId::Profile => "profile",
            PageId::NotFound => "not_found",
        };
        write!(f, "{name}")
    }
}

/// One declared path-to-page mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub path: String,
    pub page: PageId,
}

/// Result of resolving a path against a route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    /// The path is declared and maps to this page
    Page(PageId),
    /// The path is not declared in this table
    NotFound,
}

impl RouteMatch {
    /// The matched page, if any
    pub fn page(self) -> Option<PageId> {
        match self {
            RouteMatch::Page(page) => Some(page),
            RouteMatch::NotFound => None,
        }
    }
}

/// Builder for [`RouteTable`], validating declarations eagerly.
#[derive(Debug)]
pub struct RouteTableBuilder {
    name: &'static str,
    entries: Vec<RouteEntry>,
}

impl RouteTableBuilder {
    /// Start a table with a name used in configuration errors.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    /// Declare a route. Order is preserved; duplicates are caught in
    /// [`Self::build`].
    pub fn route(mut self, path: impl Into<String>, page: PageId) -> Self {
        self.entries.push(RouteEntry {
            path: path.into(),
            page,
        });
        self
    }

    /// Validate the declarations and produce the table.
    pub fn build(self) -> Result<RouteTable, DomainError> {
        for (i, entry) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|e| e.path == entry.path) {
                return Err(DomainError::duplicate_route(self.name, entry.path.clone()));
            }
        }
        Ok(RouteTable {
            name: self.name,
            entries: self.entries,
        })
    }
}

/// Ordered, duplicate-free path-to-page mapping owned by one shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    name: &'static str,
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Table name, used in configuration errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Resolve a path by exact string match.
    pub fn resolve(&self, path: &str) -> RouteMatch {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| RouteMatch::Page(entry.page))
            .unwrap_or(RouteMatch::NotFound)
    }

    /// Whether the path is declared in this table.
    pub fn declares(&self, path: &str) -> bool {
        matches!(self.resolve(path), RouteMatch::Page(_))
    }

    /// Declared entries, in declaration order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Every page referenced by this table, in declaration order.
    pub fn pages(&self) -> impl Iterator<Item = PageId> + '_ {
        self.entries.iter().map(|entry| entry.page)
    }
}

/// Current navigation position, owned by the routing subsystem.
///
/// Starts at the sign-in path and changes only through explicit
/// navigation. An undeclared path is a legal state (the shell renders the
/// fallback view for it); the next successful navigation leaves it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_path: String,
}

impl NavigationState {
    /// Start a session at the sign-in path.
    pub fn new() -> Self {
        Self {
            current_path: SIGN_IN_PATH.to_string(),
        }
    }

    /// Start a session at a host-provided path (e.g. a deep link).
    pub fn starting_at(path: impl Into<String>) -> Self {
        Self {
            current_path: path.into(),
        }
    }

    /// The path currently navigated to.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Move to a new path.
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTableBuilder::new("test")
            .route("/", PageId::SignIn)
            .route("/home", PageId::Home)
            .route("/ratings", PageId::Ratings)
            .build()
            .expect("valid table")
    }

    #[test]
    fn resolves_declared_paths_exactly() {
        let table = table();
        assert_eq!(table.resolve("/"), RouteMatch::Page(PageId::SignIn));
        assert_eq!(table.resolve("/home"), RouteMatch::Page(PageId::Home));
        assert_eq!(table.resolve("/ratings"), RouteMatch::Page(PageId::Ratings));
    }

    #[test]
    fn undeclared_paths_are_not_found() {
        let table = table();
        assert_eq!(table.resolve("/unknown"), RouteMatch::NotFound);
        // No prefix or fuzzy matching
        assert_eq!(table.resolve("/home/"), RouteMatch::NotFound);
        assert_eq!(table.resolve("/hom"), RouteMatch::NotFound);
        assert_eq!(table.resolve(""), RouteMatch::NotFound);
    }

    #[test]
    fn resolve_is_idempotent() {
        let table = table();
        let first = table.resolve("/home");
        for _ in 0..10 {
            assert_eq!(table.resolve("/home"), first);
        }
    }

    #[test]
    fn duplicate_paths_fail_at_build_time() {
        let err = RouteTableBuilder::new("dup")
            .route("/", PageId::SignIn)
            .route("/home", PageId::Home)
            .route("/home", PageId::Ratings)
            .build()
            .expect_err("duplicate must be rejected");
        assert_eq!(
            err,
            DomainError::DuplicateRoute {
                table: "dup",
                path: "/home".to_string(),
            }
        );
    }

    #[test]
    fn entries_preserve_declaration_order() {
        let table = table();
        let paths: Vec<&str> = table.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/home", "/ratings"]);
    }

    #[test]
    fn navigation_starts_at_sign_in() {
        let nav = NavigationState::new();
        assert_eq!(nav.current_path(), SIGN_IN_PATH);
    }

    #[test]
    fn navigation_recovers_from_undeclared_path() {
        let table = table();
        let mut nav = NavigationState::new();

        nav.navigate("/unknown");
        assert_eq!(table.resolve(nav.current_path()), RouteMatch::NotFound);

        // The next successful navigation leaves the unknown state
        nav.navigate("/home");
        assert_eq!(
            table.resolve(nav.current_path()),
            RouteMatch::Page(PageId::Home)
        );
    }
}
