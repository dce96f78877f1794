pub mod platform;

pub use platform::{
    DocumentProvider, HistoryProvider, ResizeSubscription, ViewportProvider,
};
