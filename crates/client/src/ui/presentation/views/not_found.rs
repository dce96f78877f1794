//! Fallback view for undeclared paths
//!
//! Always rendered instead of a blank screen when the active route
//! table has no entry for the current path. Offers the way back to the
//! sign-in page.

use dioxus::prelude::*;
use reverb_domain::SIGN_IN_PATH;

use crate::ui::presentation::use_navigation;
use crate::ui::use_platform;

#[allow(non_snake_case)]
pub fn NotFoundPage() -> Element {
    let platform = use_platform();
    let mut nav = use_navigation();
    let path = nav.current_path();

    rsx! {
        div {
            class: "page not-found-page",

            h2 { "Page not found" }
            p { class: "subtext", "Nothing lives at {path}" }

            a {
                class: "btn btn-primary",
                href: "{SIGN_IN_PATH}",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    nav.navigate(SIGN_IN_PATH, &platform);
                },
                "Back to sign-in"
            }
        }
    }
}
