//! Statistics page

use dioxus::prelude::*;

#[allow(non_snake_case)]
pub fn StatisticsPage() -> Element {
    rsx! {
        div {
            class: "page statistics-page",

            h2 { "Statistics" }
            p { class: "subtext", "Your listening in numbers" }

            div {
                class: "stat-grid",
                div {
                    class: "stat-block",
                    p { class: "stat-value", "128" }
                    p { class: "stat-label", "Hours this month" }
                }
                div {
                    class: "stat-block",
                    p { class: "stat-value", "42" }
                    p { class: "stat-label", "Artists discovered" }
                }
                div {
                    class: "stat-block",
                    p { class: "stat-value", "311" }
                    p { class: "stat-label", "Songs played" }
                }
            }
        }
    }
}
