//! Sign-in page - landing view at `/`
//!
//! Rendered without any chrome. The sign-in button points at the
//! backend's auth entrypoint; this client carries no auth logic of its
//! own.

use dioxus::prelude::*;

use crate::application::ClientConfig;
use crate::ui::presentation::use_navigation;
use crate::ui::use_platform;

#[allow(non_snake_case)]
pub fn SignInPage() -> Element {
    let config = consume_context::<ClientConfig>();
    let platform = use_platform();
    let mut nav = use_navigation();

    rsx! {
        div {
            class: "page sign-in-page",

            h1 { class: "sign-in-title", "Reverb" }
            p { class: "sign-in-tagline", "Your listening, in numbers." }

            a {
                class: "btn btn-primary sign-in-button",
                href: "{config.api_url}/",
                "Sign in with Spotify"
            }

            a {
                class: "sign-in-guest",
                href: "/home",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    nav.navigate("/home", &platform);
                },
                "Continue as guest"
            }
        }
    }
}
