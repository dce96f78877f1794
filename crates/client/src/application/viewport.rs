//! Viewport monitoring service
//!
//! Wraps the platform viewport port with classification: consumers get
//! notified with a [`ViewportClass`] only when a resize actually crosses
//! the breakpoint, so dimension changes inside one class never remount a
//! shell.

use reverb_domain::{classify, ViewportClass};

use crate::ports::outbound::ResizeSubscription;
use crate::state::Platform;

/// Classifies the current window width and notifies on class changes.
pub struct ViewportMonitor {
    platform: Platform,
}

impl ViewportMonitor {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Current classification.
    ///
    /// Desktop when the platform has no viewport to measure.
    pub fn current_class(&self) -> ViewportClass {
        self.platform
            .viewport_width()
            .map(classify)
            .unwrap_or(ViewportClass::Desktop)
    }

    /// Subscribe to classification changes (edge-triggered).
    ///
    /// Registers one underlying resize listener; `on_change` fires only
    /// when the class differs from the previously observed one. Dropping
    /// the returned guard deregisters the listener.
    pub fn subscribe(
        &self,
        mut on_change: impl FnMut(ViewportClass) + 'static,
    ) -> ResizeSubscription {
        let mut last = self.current_class();
        self.platform.watch_resize(Box::new(move |width| {
            let class = classify(width);
            if class != last {
                tracing::debug!("viewport class changed: {last} -> {class}");
                last = class;
                on_change(class);
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockPlatform;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn changes_sink() -> (Rc<RefCell<Vec<ViewportClass>>>, impl FnMut(ViewportClass)) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |class| sink.borrow_mut().push(class))
    }

    #[test]
    fn classifies_current_width() {
        let mock = MockPlatform::with_width(400.0);
        let monitor = ViewportMonitor::new(mock.platform());
        assert_eq!(monitor.current_class(), ViewportClass::Mobile);

        mock.viewport.resize(1200.0);
        assert_eq!(monitor.current_class(), ViewportClass::Desktop);
    }

    #[test]
    fn defaults_to_desktop_without_windowing_context() {
        let mock = MockPlatform::default();
        let monitor = ViewportMonitor::new(mock.platform());
        assert_eq!(monitor.current_class(), ViewportClass::Desktop);
    }

    #[test]
    fn notifies_only_when_class_changes() {
        let mock = MockPlatform::with_width(1024.0);
        let monitor = ViewportMonitor::new(mock.platform());
        let (seen, on_change) = changes_sink();
        let _guard = monitor.subscribe(on_change);

        // Still desktop: no notification
        mock.viewport.resize(900.0);
        assert!(seen.borrow().is_empty());

        // Crosses the breakpoint: one notification
        mock.viewport.resize(400.0);
        assert_eq!(*seen.borrow(), vec![ViewportClass::Mobile]);

        // Still mobile: nothing new
        mock.viewport.resize(500.0);
        assert_eq!(*seen.borrow(), vec![ViewportClass::Mobile]);

        // Back across: one more
        mock.viewport.resize(800.0);
        assert_eq!(
            *seen.borrow(),
            vec![ViewportClass::Mobile, ViewportClass::Desktop]
        );
    }

    #[test]
    fn dropped_subscription_never_fires_again() {
        let mock = MockPlatform::with_width(1024.0);
        let monitor = ViewportMonitor::new(mock.platform());
        let (seen, on_change) = changes_sink();

        let guard = monitor.subscribe(on_change);
        assert_eq!(mock.viewport.listener_count(), 1);

        drop(guard);
        assert_eq!(mock.viewport.listener_count(), 0);

        mock.viewport.resize(400.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn each_subscription_registers_one_listener() {
        let mock = MockPlatform::with_width(1024.0);
        let monitor = ViewportMonitor::new(mock.platform());

        let first = monitor.subscribe(|_| {});
        let second = monitor.subscribe(|_| {});
        assert_eq!(mock.viewport.listener_count(), 2);

        drop(first);
        assert_eq!(mock.viewport.listener_count(), 1);
        drop(second);
        assert_eq!(mock.viewport.listener_count(), 0);
    }
}
