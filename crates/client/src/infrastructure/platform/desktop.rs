//! Desktop platform implementations
//!
//! A native window exposes no CSS-pixel viewport to this client, so the
//! viewport provider reports no measurement and the dispatcher falls
//! back to the desktop shell (`REVERB_SHELL` overrides it at startup).
//! Navigation history lives purely in `NavigationState` on desktop.

use crate::ports::outbound::{
    DocumentProvider, HistoryProvider, ResizeSubscription, ViewportProvider,
};
use crate::state::Platform;

/// Desktop viewport provider: no windowing context to measure
#[derive(Clone, Default)]
pub struct DesktopViewportProvider;

impl ViewportProvider for DesktopViewportProvider {
    fn width(&self) -> Option<f64> {
        None
    }

    fn watch_resize(&self, _on_width: Box<dyn FnMut(f64) + 'static>) -> ResizeSubscription {
        // No resize events without a browser viewport; the shell is fixed
        // for the lifetime of the native window.
        ResizeSubscription::detached()
    }
}

/// Desktop history provider: no browsing context
#[derive(Clone, Default)]
pub struct DesktopHistoryProvider;

impl HistoryProvider for DesktopHistoryProvider {
    fn current_path(&self) -> Option<String> {
        None
    }

    fn push_path(&self, path: &str) {
        tracing::trace!("navigation (no host history): {path}");
    }
}

/// Desktop document provider
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, title: &str) {
        tracing::trace!("page title (no document): {title}");
    }
}

/// Create the platform container for desktop targets
pub fn create_platform() -> Platform {
    Platform::new(
        DesktopViewportProvider,
        DesktopHistoryProvider,
        DesktopDocumentProvider,
    )
}
