//! Friends page

use dioxus::prelude::*;

#[allow(non_snake_case)]
pub fn FriendsPage() -> Element {
    rsx! {
        div {
            class: "page friends-page",

            h2 { "Friends" }
            p { class: "subtext", "What your friends are listening to" }

            div {
                class: "friends-list",
                for name in ["Esther", "Otto", "Sam"] {
                    div {
                        key: "{name}",
                        class: "friend-row",
                        div { class: "friend-avatar" }
                        span { class: "friend-name", "{name}" }
                    }
                }
            }
        }
    }
}
