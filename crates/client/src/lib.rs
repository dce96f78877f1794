//! Unified Reverb client crate.
//!
//! This crate contains the UI shells, application logic, and platform
//! adapters. Multi-platform support is provided via compile-time `cfg`
//! selection.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use state::Platform;
pub use ui::presentation;
pub use ui::routes;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::{use_platform, ShellKind};
