//! Unified error types for the domain layer
//!
//! Shell configuration is validated when the tables are built, so every
//! variant here represents a build-time mistake that must stop startup,
//! not a runtime condition to recover from.

use thiserror::Error;

use crate::routing::PageId;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A route table declared the same path twice
    #[error("Duplicate route path in {table}: {path}")]
    DuplicateRoute { table: &'static str, path: String },

    /// A route table references a page the registry cannot resolve
    #[error("Route table {table} references unregistered page {page}")]
    MissingPageView { table: &'static str, page: PageId },
}

impl DomainError {
    /// Create a duplicate-route error
    pub fn duplicate_route(table: &'static str, path: impl Into<String>) -> Self {
        Self::DuplicateRoute {
            table,
            path: path.into(),
        }
    }

    /// Create a missing-page-view error
    pub fn missing_page_view(table: &'static str, page: PageId) -> Self {
        Self::MissingPageView { table, page }
    }
}
