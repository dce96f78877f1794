//! Navigation state management using Dioxus signals
//!
//! One `NavState` is provided above the shells, so the current path
//! survives a shell swap the same way a browser URL survives a window
//! resize. All mutation goes through [`NavState::navigate`]; nothing
//! else may touch the path.

use dioxus::prelude::*;
use reverb_domain::NavigationState;

use crate::state::Platform;

/// Signal-backed wrapper around the domain [`NavigationState`].
#[derive(Clone, Copy)]
pub struct NavState {
    nav: Signal<NavigationState>,
}

impl NavState {
    /// Create the state for a session starting at the given position.
    ///
    /// Must be called inside an active Dioxus runtime.
    pub fn new(initial: NavigationState) -> Self {
        Self {
            nav: Signal::new(initial),
        }
    }

    /// The path currently navigated to
    pub fn current_path(&self) -> String {
        self.nav.read().current_path().to_string()
    }

    /// Navigate to a path: record it in the host history, then update
    /// the signal so subscribed views re-render.
    pub fn navigate(&mut self, path: &str, platform: &Platform) {
        if self.nav.peek().current_path() == path {
            return;
        }
        tracing::debug!("navigate: {path}");
        platform.push_path(path);
        self.nav.write().navigate(path);
    }
}

/// Access the navigation state from Dioxus context.
///
/// Non-hook accessor, safe from any render position.
pub fn use_navigation() -> NavState {
    consume_context::<NavState>()
}
