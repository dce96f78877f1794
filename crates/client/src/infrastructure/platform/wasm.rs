//! WASM platform implementations
//!
//! Browser-backed providers using web-sys. The resize subscription keeps
//! its `Closure` alive inside the drop guard and removes the DOM
//! listener when the guard is dropped, so a torn-down monitor can never
//! fire again.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::ports::outbound::{
    DocumentProvider, HistoryProvider, ResizeSubscription, ViewportProvider,
};
use crate::state::Platform;

fn window_inner_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

/// Browser viewport provider
#[derive(Clone, Default)]
pub struct WasmViewportProvider;

impl ViewportProvider for WasmViewportProvider {
    fn width(&self) -> Option<f64> {
        window_inner_width()
    }

    fn watch_resize(&self, mut on_width: Box<dyn FnMut(f64) + 'static>) -> ResizeSubscription {
        let Some(window) = web_sys::window() else {
            return ResizeSubscription::detached();
        };

        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            if let Some(width) = window_inner_width() {
                on_width(width);
            }
        });

        if window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("failed to register resize listener");
            return ResizeSubscription::detached();
        }

        ResizeSubscription::new(move || {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            }
            // The Closure is dropped here, after deregistration.
            drop(closure);
        })
    }
}

/// Browser history provider (location + pushState)
#[derive(Clone, Default)]
pub struct WasmHistoryProvider;

impl HistoryProvider for WasmHistoryProvider {
    fn current_path(&self) -> Option<String> {
        web_sys::window().and_then(|w| w.location().pathname().ok())
    }

    fn push_path(&self, path: &str) {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
            tracing::warn!("pushState failed for {path}: {err:?}");
        }
    }
}

/// Browser document provider
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Create the platform container for browser targets
pub fn create_platform() -> Platform {
    Platform::new(
        WasmViewportProvider,
        WasmHistoryProvider,
        WasmDocumentProvider,
    )
}
