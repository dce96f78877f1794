//! Profile page - mobile-only route

use dioxus::prelude::*;

#[allow(non_snake_case)]
pub fn ProfilePage() -> Element {
    rsx! {
        div {
            class: "page profile-page",

            div { class: "profile-avatar" }
            h2 { class: "profile-name", "Your Profile" }
            p { class: "subtext", "Listening since 2023" }
        }
    }
}
