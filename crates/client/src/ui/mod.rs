//! UI composition: layout dispatcher and the two shells.
//!
//! `AppRoot` owns the viewport subscription and mounts exactly one
//! shell for the current classification; a class change swaps the shell
//! in a single render, discarding the old shell's local state. The
//! navigation state lives above the shells and survives the swap.

use std::rc::Rc;

use dioxus::prelude::*;
use reverb_domain::{ChromePolicy, NavigationState, ViewportClass, SIGN_IN_PATH};

use crate::application::ViewportMonitor;
use crate::state::Platform;

pub mod presentation;
pub mod routes;

use presentation::components::{NavbarDesktop, NavbarMobile, ProfileButton};
use presentation::{use_navigation, NavState};
use routes::RoutingConfig;

/// Shell variant for UI layout selection.
///
/// The initial value is passed via Dioxus context from the composition
/// root; afterwards the dispatcher re-derives it from viewport changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl From<ViewportClass> for ShellKind {
    fn from(class: ViewportClass) -> Self {
        match class {
            ViewportClass::Mobile => ShellKind::Mobile,
            ViewportClass::Desktop => ShellKind::Desktop,
        }
    }
}

/// Access the Platform from Dioxus context.
///
/// Non-hook accessor, safe from any render position (including the
/// registry-dispatched page views).
pub fn use_platform() -> Platform {
    consume_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Platform adapters for the current target. Provided here rather
    // than at launch: everything behind the container stays on the UI
    // thread.
    let platform = use_context_provider(crate::infrastructure::platform::create_platform);

    // Provided by the composition root (see `src/main.rs`).
    let initial_shell = consume_context::<ShellKind>();
    let mut shell = use_signal(|| initial_shell);

    // Navigation is owned above the shells so the current path survives
    // a shell swap, like a URL survives a window resize.
    use_context_provider(|| {
        let initial = platform
            .current_path()
            .unwrap_or_else(|| SIGN_IN_PATH.to_string());
        NavState::new(NavigationState::starting_at(initial))
    });

    // One resize listener for the whole app. The guard lives in this
    // hook; dropping it on root teardown deregisters the listener.
    use_hook({
        let platform = platform.clone();
        move || {
            let monitor = ViewportMonitor::new(platform);
            Rc::new(monitor.subscribe(move |class| shell.set(ShellKind::from(class))))
        }
    });

    rsx! {
        document::Stylesheet {
            href: asset!("assets/css/reverb.css"),
        }

        {
            match shell() {
                ShellKind::Desktop => rsx! { DesktopShell {} },
                ShellKind::Mobile => rsx! { MobileShell {} },
            }
        }
    }
}

#[component]
fn MobileShell() -> Element {
    let platform = use_platform();
    let routing = consume_context::<RoutingConfig>();
    let nav = use_navigation();

    let path = nav.current_path();
    let (_, view) = routing.registry.resolve_match(routing.mobile.resolve(&path));
    let policy = ChromePolicy::mobile();
    let chrome = policy.visibility(&path);

    // Keep the tab title in sync with the matched page.
    let platform_for_title = platform.clone();
    let routing_for_title = routing.clone();
    use_effect(move || {
        let path = nav.current_path();
        let (page, _) = routing_for_title
            .registry
            .resolve_match(routing_for_title.mobile.resolve(&path));
        platform_for_title.set_page_title(routes::page_title(page));
    });

    rsx! {
        div {
            class: "shell mobile-shell",

            if chrome.show_profile_affordance {
                ProfileButton {}
            }

            main { class: "shell-content", {view()} }

            if chrome.show_navbar {
                NavbarMobile {}
            }
        }
    }
}

#[component]
fn DesktopShell() -> Element {
    let platform = use_platform();
    let routing = consume_context::<RoutingConfig>();
    let nav = use_navigation();

    let path = nav.current_path();
    let (_, view) = routing.registry.resolve_match(routing.desktop.resolve(&path));
    let policy = ChromePolicy::desktop();
    let chrome = policy.visibility(&path);

    let platform_for_title = platform.clone();
    let routing_for_title = routing.clone();
    use_effect(move || {
        let path = nav.current_path();
        let (page, _) = routing_for_title
            .registry
            .resolve_match(routing_for_title.desktop.resolve(&path));
        platform_for_title.set_page_title(routes::page_title(page));
    });

    rsx! {
        div {
            class: "shell desktop-shell",

            if chrome.show_navbar {
                NavbarDesktop {}
            }

            main { class: "shell-content", {view()} }
        }
    }
}
