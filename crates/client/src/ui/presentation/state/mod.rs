//! Presentation state containers backed by Dioxus signals.

mod navigation;

pub use navigation::{use_navigation, NavState};
