//! Desktop navbar - top text bar

use dioxus::prelude::*;

use crate::ui::presentation::use_navigation;
use crate::ui::use_platform;

/// Desktop navbar links as (path, label), in bar order.
pub static DESKTOP_NAV_LINKS: [(&str, &str); 5] = [
    ("/home", "Home"),
    ("/ratings", "Ratings"),
    ("/statistics", "Statistics"),
    ("/recommendations", "Recommendations"),
    ("/friends", "Friends"),
];

/// Top text navbar for the desktop shell
#[component]
pub fn NavbarDesktop() -> Element {
    let platform = use_platform();
    let mut nav = use_navigation();
    let current = nav.current_path();

    rsx! {
        nav {
            class: "navbar navbar-desktop",

            span { class: "navbar-brand", "Reverb" }

            for (path, label) in DESKTOP_NAV_LINKS.iter().copied() {
                a {
                    key: "{path}",
                    class: if current == path { "nav-link active" } else { "nav-link" },
                    href: "{path}",
                    onclick: {
                        let platform = platform.clone();
                        move |evt: MouseEvent| {
                            evt.prevent_default();
                            nav.navigate(path, &platform);
                        }
                    },

                    "{label}"
                }
            }
        }
    }
}
