//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract host-environment operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here. The ports layer contains only
//! trait definitions.

/// Viewport measurement and resize notifications
pub trait ViewportProvider: Clone + 'static {
    /// Current window inner width in CSS pixels.
    ///
    /// `None` when there is no windowing context to measure (e.g. a
    /// native window); callers fall back to the desktop classification.
    fn width(&self) -> Option<f64>;

    /// Register a resize listener that receives the new width.
    ///
    /// Registers exactly one underlying listener per call. Dropping the
    /// returned subscription removes it; a listener must never fire after
    /// its subscription is gone.
    fn watch_resize(&self, on_width: Box<dyn FnMut(f64) + 'static>) -> ResizeSubscription;
}

/// Host navigation history (browser location/history)
pub trait HistoryProvider: Clone + 'static {
    /// Path the host is currently at, `None` without a browsing context.
    fn current_path(&self) -> Option<String>;

    /// Record a navigation in the host history (no-op without one).
    fn push_path(&self, path: &str);
}

/// Browser document operations (page title, etc.)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}

/// Drop guard pairing a resize subscription with its removal.
///
/// Holding the guard keeps the underlying listener registered; dropping
/// it deterministically deregisters. This is what keeps a discarded
/// monitor from firing after its owner is torn down.
pub struct ResizeSubscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl ResizeSubscription {
    /// Guard that runs `cancel` exactly once, on drop.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Guard with nothing to release, for platforms without resize
    /// events.
    pub fn detached() -> Self {
        Self { cancel: None }
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for ResizeSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeSubscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn drop_runs_cancel_once() {
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let subscription = ResizeSubscription::new(move || counter.set(counter.get() + 1));
        drop(subscription);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn detached_guard_is_inert() {
        drop(ResizeSubscription::detached());
    }
}
