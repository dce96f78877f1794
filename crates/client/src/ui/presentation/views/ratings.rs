//! Ratings page

use dioxus::prelude::*;

use crate::ui::presentation::components::SongCard;

#[allow(non_snake_case)]
pub fn RatingsPage() -> Element {
    rsx! {
        div {
            class: "page ratings-page",

            h2 { "Ratings" }
            p { class: "subtext", "Songs you have rated" }

            div {
                class: "ratings-list",
                for rating in ["9.2", "8.7", "7.5"] {
                    div {
                        key: "{rating}",
                        class: "rated-song",
                        SongCard { avatar_only: true }
                        span { class: "rating-value", "{rating}" }
                    }
                }
            }
        }
    }
}
