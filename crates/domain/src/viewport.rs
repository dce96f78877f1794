//! Viewport classification
//!
//! The client renders exactly one of two shells, picked from the window
//! width. Classification is derived, never stored: it is recomputed from
//! the current width on mount and on every resize.

use serde::{Deserialize, Serialize};

/// Width threshold between the mobile and desktop shells, in CSS pixels.
///
/// Widths strictly below this are mobile; everything else is desktop.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Device class derived from the current window width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    /// Narrow viewport - bottom icon navbar, profile affordance
    Mobile,
    /// Wide viewport - top text navbar, no profile affordance
    Desktop,
}

impl std::fmt::Display for ViewportClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewportClass::Mobile => write!(f, "mobile"),
            ViewportClass::Desktop => write!(f, "desktop"),
        }
    }
}

/// Classify a window width into a viewport class.
pub fn classify(width: f64) -> ViewportClass {
    if width < MOBILE_BREAKPOINT {
        ViewportClass::Mobile
    } else {
        ViewportClass::Desktop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_below_breakpoint_are_mobile() {
        assert_eq!(classify(0.0), ViewportClass::Mobile);
        assert_eq!(classify(400.0), ViewportClass::Mobile);
        assert_eq!(classify(767.0), ViewportClass::Mobile);
        assert_eq!(classify(767.999), ViewportClass::Mobile);
    }

    #[test]
    fn widths_at_or_above_breakpoint_are_desktop() {
        assert_eq!(classify(768.0), ViewportClass::Desktop);
        assert_eq!(classify(1024.0), ViewportClass::Desktop);
        assert_eq!(classify(1200.0), ViewportClass::Desktop);
    }

    #[test]
    fn classification_matches_threshold_for_all_widths() {
        for w in 0..2000 {
            let width = f64::from(w);
            let expected = if width < MOBILE_BREAKPOINT {
                ViewportClass::Mobile
            } else {
                ViewportClass::Desktop
            };
            assert_eq!(classify(width), expected, "width {width}");
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&ViewportClass::Mobile).expect("serialize");
        assert_eq!(json, "\"mobile\"");
    }
}
