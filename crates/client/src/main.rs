//! Reverb client - unified composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reverb_client::application::ClientConfig;
use reverb_client::ui;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reverb_client=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Reverb client");

    if let Err(err) = run() {
        tracing::error!("startup failed: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Configuration
    let config = ClientConfig::from_env();
    tracing::info!(api_url = %config.api_url, "resolved client configuration");

    // Fail fast: both shells' route tables must be valid and fully
    // resolvable against the page registry before anything renders.
    let routing = ui::routes::RoutingConfig::load()?;

    // Shell kind (desktop vs mobile layout)
    let shell = initial_shell();
    tracing::info!("initial shell: {shell:?}");

    // Launch Dioxus. The platform container is provided inside the app
    // root; it stays on the UI thread.
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_client_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(shell)
        .with_context(config)
        .with_context(routing)
        .launch(ui::app);

    Ok(())
}

/// Initial shell selection.
///
/// Browser targets classify the measured window width; without a
/// measurable viewport the client defaults to the desktop shell. Native
/// targets pick via `REVERB_SHELL`.
fn initial_shell() -> ui::ShellKind {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .map(reverb_domain::classify)
            .map(ui::ShellKind::from)
            .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var("REVERB_SHELL")
            .ok()
            .and_then(|s| match s.trim().to_ascii_lowercase().as_str() {
                "desktop" => Some(ui::ShellKind::Desktop),
                "mobile" => Some(ui::ShellKind::Mobile),
                _ => None,
            })
            .unwrap_or_default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_client_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/reverb.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
