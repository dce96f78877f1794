//! Reverb domain core.
//!
//! Pure, UI-framework-free logic for the adaptive client shell:
//! viewport classification, per-shell route tables, navigation state,
//! and the chrome-visibility policy. The client crate composes these
//! into the rendered shells; nothing in here touches a window, a DOM,
//! or an event loop.

pub mod chrome;
pub mod error;
pub mod routing;
pub mod viewport;

pub use chrome::{ChromePolicy, ChromeVisibility};
pub use error::DomainError;
pub use routing::{
    NavigationState, PageId, RouteEntry, RouteMatch, RouteTable, RouteTableBuilder, SIGN_IN_PATH,
};
pub use viewport::{classify, ViewportClass, MOBILE_BREAKPOINT};
