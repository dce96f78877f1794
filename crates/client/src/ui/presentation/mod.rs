//! Presentation layer: navigation state, chrome components, page views.

pub mod components;
pub mod state;
pub mod views;

pub use state::{use_navigation, NavState};
