//! Recommendations page

use dioxus::prelude::*;

use crate::ui::presentation::components::SongCard;

#[allow(non_snake_case)]
pub fn RecommendationsPage() -> Element {
    rsx! {
        div {
            class: "page recommendations-page",

            h2 { "Recommendations" }
            p { class: "subtext", "Picked from what you play" }

            div {
                class: "recommendations-list",
                SongCard {}
                SongCard {}
                SongCard {}
            }
        }
    }
}
