//! Mobile navbar - bottom icon bar
//!
//! Icon variant of the navigation bar. Link order is part of the mobile
//! layout (home sits in the center slot of the bar).

use dioxus::prelude::*;
use reverb_domain::PageId;

use crate::ui::presentation::use_navigation;
use crate::ui::use_platform;

/// One navbar link: target path plus its icon and label.
pub struct NavItem {
    pub path: &'static str,
    pub page: PageId,
    pub label: &'static str,
    pub icon: Asset,
}

/// Mobile navbar links, in bar order.
pub static MOBILE_NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        path: "/recommendations",
        page: PageId::Recommendations,
        label: "Recs",
        icon: asset!("assets/icons/recommendations.svg"),
    },
    NavItem {
        path: "/statistics",
        page: PageId::Statistics,
        label: "Stats",
        icon: asset!("assets/icons/statistics.svg"),
    },
    NavItem {
        path: "/home",
        page: PageId::Home,
        label: "Home",
        icon: asset!("assets/icons/home.svg"),
    },
    NavItem {
        path: "/friends",
        page: PageId::Friends,
        label: "Friends",
        icon: asset!("assets/icons/friends.svg"),
    },
    NavItem {
        path: "/ratings",
        page: PageId::Ratings,
        label: "Ratings",
        icon: asset!("assets/icons/ratings.svg"),
    },
];

/// Bottom icon navbar for the mobile shell
#[component]
pub fn NavbarMobile() -> Element {
    let platform = use_platform();
    let mut nav = use_navigation();
    let current = nav.current_path();

    rsx! {
        nav {
            class: "navbar navbar-mobile",

            for item in MOBILE_NAV_ITEMS.iter() {
                a {
                    key: "{item.path}",
                    class: if current == item.path { "nav-item active" } else { "nav-item" },
                    href: "{item.path}",
                    onclick: {
                        let platform = platform.clone();
                        move |evt: MouseEvent| {
                            evt.prevent_default();
                            nav.navigate(item.path, &platform);
                        }
                    },

                    img {
                        class: "nav-icon",
                        src: "{item.icon}",
                        alt: "{item.label}",
                    }
                    span { class: "nav-label", "{item.label}" }
                }
            }
        }
    }
}
