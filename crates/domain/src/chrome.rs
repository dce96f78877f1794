//! Chrome-visibility policy
//!
//! Whether the navbar and the profile affordance are shown is a pure
//! function of the current path. The flags are recomputed on every
//! navigation; they are never cached across path changes.

use serde::{Deserialize, Serialize};

use crate::routing::SIGN_IN_PATH;

/// Visibility flags for the shell chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeVisibility {
    pub show_navbar: bool,
    pub show_profile_affordance: bool,
}

/// Per-shell chrome policy.
///
/// Both shells hide all chrome on the sign-in path. The mobile shell's
/// profile affordance mirrors the navbar; the desktop shell has no
/// affordance at all, which is a shell configuration difference rather
/// than a path rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromePolicy {
    sign_in_path: &'static str,
    has_profile_affordance: bool,
}

impl ChromePolicy {
    /// Policy for the mobile shell: navbar plus profile affordance.
    pub fn mobile() -> Self {
        Self {
            sign_in_path: SIGN_IN_PATH,
            has_profile_affordance: true,
        }
    }

    /// Policy for the desktop shell: navbar only.
    pub fn desktop() -> Self {
        Self {
            sign_in_path: SIGN_IN_PATH,
            has_profile_affordance: false,
        }
    }

    /// Compute the chrome flags for a path.
    pub fn visibility(&self, path: &str) -> ChromeVisibility {
        let show_navbar = path != self.sign_in_path;
        ChromeVisibility {
            show_navbar,
            show_profile_affordance: self.has_profile_affordance && show_navbar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_path_hides_all_chrome() {
        for policy in [ChromePolicy::mobile(), ChromePolicy::desktop()] {
            let visibility = policy.visibility("/");
            assert!(!visibility.show_navbar);
            assert!(!visibility.show_profile_affordance);
        }
    }

    #[test]
    fn other_paths_show_navbar() {
        for path in ["/home", "/ratings", "/statistics", "/unknown"] {
            assert!(ChromePolicy::mobile().visibility(path).show_navbar);
            assert!(ChromePolicy::desktop().visibility(path).show_navbar);
        }
    }

    #[test]
    fn mobile_affordance_mirrors_navbar() {
        let policy = ChromePolicy::mobile();
        for path in ["/home", "/profile", "/friends"] {
            let visibility = policy.visibility(path);
            assert_eq!(visibility.show_profile_affordance, visibility.show_navbar);
        }
    }

    #[test]
    fn desktop_never_shows_affordance() {
        let policy = ChromePolicy::desktop();
        for path in ["/", "/home", "/ratings", "/unknown"] {
            assert!(!policy.visibility(path).show_profile_affordance);
        }
    }

    #[test]
    fn visibility_is_idempotent() {
        let policy = ChromePolicy::mobile();
        let first = policy.visibility("/home");
        for _ in 0..10 {
            assert_eq!(policy.visibility("/home"), first);
        }
    }
}
