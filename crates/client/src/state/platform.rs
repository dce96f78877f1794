//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection
//! container that aggregates the platform-specific service
//! implementations behind port traits.
//!
//! The Platform struct lives in the adapters layer because:
//! 1. It's a concrete implementation (DI container with Arc<dyn> fields)
//! 2. It contains type erasure logic (*Dyn traits and blanket impls)
//! 3. The ports layer should only contain pure interface definitions
//!
//! Usage:
//! - Created by `create_platform()` in infrastructure/platform
//! - Injected into Dioxus context by the composition root
//! - Accessed in UI via `use_context::<Platform>()`
//!
//! Everything behind this container runs on the UI thread; the traits
//! carry no Send/Sync bounds.

use std::sync::Arc;

use crate::ports::outbound::{
    DocumentProvider, HistoryProvider, ResizeSubscription, ViewportProvider,
};

/// Unified platform services container
///
/// Provides all platform abstractions through a single injectable type.
/// Use via Dioxus context: `use_context::<Platform>()`
#[derive(Clone)]
pub struct Platform {
    viewport: Arc<dyn ViewportProviderDyn>,
    history: Arc<dyn HistoryProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage
// =============================================================================

trait ViewportProviderDyn {
    fn width(&self) -> Option<f64>;
    fn watch_resize(&self, on_width: Box<dyn FnMut(f64) + 'static>) -> ResizeSubscription;
}

trait HistoryProviderDyn {
    fn current_path(&self) -> Option<String>;
    fn push_path(&self, path: &str);
}

trait DocumentProviderDyn {
    fn set_page_title(&self, title: &str);
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: ViewportProvider> ViewportProviderDyn for T {
    fn width(&self) -> Option<f64> {
        ViewportProvider::width(self)
    }
    fn watch_resize(&self, on_width: Box<dyn FnMut(f64) + 'static>) -> ResizeSubscription {
        ViewportProvider::watch_resize(self, on_width)
    }
}

impl<T: HistoryProvider> HistoryProviderDyn for T {
    fn current_path(&self) -> Option<String> {
        HistoryProvider::current_path(self)
    }
    fn push_path(&self, path: &str) {
        HistoryProvider::push_path(self, path)
    }
}

impl<T: DocumentProvider> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<V, H, D>(viewport: V, history: H, document: D) -> Self
    where
        V: ViewportProvider,
        H: HistoryProvider,
        D: DocumentProvider,
    {
        Self {
            viewport: Arc::new(viewport),
            history: Arc::new(history),
            document: Arc::new(document),
        }
    }

    // -------------------------------------------------------------------------
    // Viewport operations
    // -------------------------------------------------------------------------

    /// Current window inner width, `None` without a windowing context
    pub fn viewport_width(&self) -> Option<f64> {
        self.viewport.width()
    }

    /// Register a resize listener; dropping the guard removes it
    pub fn watch_resize(
        &self,
        on_width: Box<dyn FnMut(f64) + 'static>,
    ) -> ResizeSubscription {
        self.viewport.watch_resize(on_width)
    }

    // -------------------------------------------------------------------------
    // History operations
    // -------------------------------------------------------------------------

    /// Path the host is currently at, `None` without a browsing context
    pub fn current_path(&self) -> Option<String> {
        self.history.current_path()
    }

    /// Record a navigation in the host history
    pub fn push_path(&self, path: &str) {
        self.history.push_path(path)
    }

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title (no-op on desktop)
    pub fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }
}
