//! Mock platform for tests
//!
//! A scriptable platform: tests set the viewport width, fire synthetic
//! resize events, and inspect listener registrations to assert that
//! subscriptions are released on teardown.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ports::outbound::{
    DocumentProvider, HistoryProvider, ResizeSubscription, ViewportProvider,
};
use crate::state::Platform;

type ResizeCallback = Rc<RefCell<Box<dyn FnMut(f64)>>>;

#[derive(Default)]
struct MockViewportInner {
    width: Option<f64>,
    next_id: u64,
    listeners: Vec<(u64, ResizeCallback)>,
}

/// Scriptable viewport: settable width plus synthetic resize events
#[derive(Clone, Default)]
pub struct MockViewport {
    inner: Rc<RefCell<MockViewportInner>>,
}

impl MockViewport {
    /// Viewport with a fixed starting width
    pub fn with_width(width: f64) -> Self {
        let viewport = Self::default();
        viewport.inner.borrow_mut().width = Some(width);
        viewport
    }

    /// Viewport without a windowing context (`width()` is `None`)
    pub fn headless() -> Self {
        Self::default()
    }

    /// Set the width and deliver a resize event to every listener
    pub fn resize(&self, width: f64) {
        // Snapshot the callbacks so a listener may unsubscribe (or
        // subscribe) during delivery without holding the borrow.
        let callbacks: Vec<ResizeCallback> = {
            let mut inner = self.inner.borrow_mut();
            inner.width = Some(width);
            inner.listeners.iter().map(|(_, cb)| cb.clone()).collect()
        };
        for callback in callbacks {
            (callback.borrow_mut())(width);
        }
    }

    /// Number of currently registered resize listeners
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ViewportProvider for MockViewport {
    fn width(&self) -> Option<f64> {
        self.inner.borrow().width
    }

    fn watch_resize(&self, on_width: Box<dyn FnMut(f64) + 'static>) -> ResizeSubscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::new(RefCell::new(on_width))));
            id
        };
        let inner = self.inner.clone();
        ResizeSubscription::new(move || {
            inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
        })
    }
}

#[derive(Default)]
struct MockHistoryInner {
    current: Option<String>,
    pushed: Vec<String>,
}

/// Recording history provider
#[derive(Clone, Default)]
pub struct MockHistory {
    inner: Rc<RefCell<MockHistoryInner>>,
}

impl MockHistory {
    /// History starting at a host-provided path
    pub fn at_path(path: &str) -> Self {
        let history = Self::default();
        history.inner.borrow_mut().current = Some(path.to_string());
        history
    }

    /// Paths pushed so far, oldest first
    pub fn pushed(&self) -> Vec<String> {
        self.inner.borrow().pushed.clone()
    }
}

impl HistoryProvider for MockHistory {
    fn current_path(&self) -> Option<String> {
        self.inner.borrow().current.clone()
    }

    fn push_path(&self, path: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.current = Some(path.to_string());
        inner.pushed.push(path.to_string());
    }
}

/// Recording document provider
#[derive(Clone, Default)]
pub struct MockDocument {
    titles: Rc<RefCell<Vec<String>>>,
}

impl MockDocument {
    /// Most recently set page title
    pub fn last_title(&self) -> Option<String> {
        self.titles.borrow().last().cloned()
    }
}

impl DocumentProvider for MockDocument {
    fn set_page_title(&self, title: &str) {
        self.titles.borrow_mut().push(title.to_string());
    }
}

/// Aggregated mock platform with handles kept for assertions
#[derive(Clone, Default)]
pub struct MockPlatform {
    pub viewport: MockViewport,
    pub history: MockHistory,
    pub document: MockDocument,
}

impl MockPlatform {
    /// Mock platform with a fixed viewport width
    pub fn with_width(width: f64) -> Self {
        Self {
            viewport: MockViewport::with_width(width),
            ..Self::default()
        }
    }

    /// Build the injectable container sharing these handles
    pub fn platform(&self) -> Platform {
        Platform::new(
            self.viewport.clone(),
            self.history.clone(),
            self.document.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_width_and_notifies() {
        let viewport = MockViewport::with_width(1024.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _guard = viewport.watch_resize(Box::new(move |w| sink.borrow_mut().push(w)));

        viewport.resize(500.0);
        assert_eq!(viewport.width(), Some(500.0));
        assert_eq!(*seen.borrow(), vec![500.0]);
    }

    #[test]
    fn dropping_subscription_removes_listener() {
        let viewport = MockViewport::with_width(1024.0);
        let guard = viewport.watch_resize(Box::new(|_| {}));
        assert_eq!(viewport.listener_count(), 1);
        drop(guard);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn container_delegates_to_mock_providers() {
        let mock = MockPlatform {
            history: MockHistory::at_path("/home"),
            ..MockPlatform::default()
        };
        let platform = mock.platform();

        assert_eq!(platform.current_path(), Some("/home".to_string()));

        platform.push_path("/ratings");
        platform.set_page_title("Reverb - Ratings");

        assert_eq!(mock.history.pushed(), vec!["/ratings".to_string()]);
        assert_eq!(platform.current_path(), Some("/ratings".to_string()));
        assert_eq!(
            mock.document.last_title(),
            Some("Reverb - Ratings".to_string())
        );
    }
}
