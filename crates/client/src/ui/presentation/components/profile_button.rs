//! Profile affordance - mobile-only corner button

use dioxus::prelude::*;

use crate::ui::presentation::use_navigation;
use crate::ui::use_platform;

static PROFILE_ICON: Asset = asset!("assets/icons/profile.svg");

/// Floating profile button shown by the mobile shell whenever the
/// navbar is visible. Navigates to the profile page.
#[component]
pub fn ProfileButton() -> Element {
    let platform = use_platform();
    let mut nav = use_navigation();

    rsx! {
        button {
            class: "profile-button",
            aria_label: "Profile",
            onclick: move |_| nav.navigate("/profile", &platform),

            img {
                class: "profile-icon",
                src: "{PROFILE_ICON}",
                alt: "Profile",
            }
        }
    }
}
