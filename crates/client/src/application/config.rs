//! Client configuration
//!
//! Resolved once at startup and injected via Dioxus context. The only
//! tunable is the backend base URL: in development the backend runs on
//! its own port, in release builds the client is served from the backend
//! origin and relative URLs suffice.

/// Backend base URL used during development.
const DEV_API_URL: &str = "http://localhost:8000";

/// Startup configuration for the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the Reverb backend (empty = same origin)
    pub api_url: String,
}

impl ClientConfig {
    /// Resolve configuration from the environment.
    ///
    /// `REVERB_API_URL` overrides the backend base URL (native targets
    /// only; the variable does not exist in a browser).
    pub fn from_env() -> Self {
        let api_url = std::env::var("REVERB_API_URL")
            .ok()
            .unwrap_or_else(|| Self::default_api_url().to_string());
        Self { api_url }
    }

    fn default_api_url() -> &'static str {
        if cfg!(debug_assertions) {
            DEV_API_URL
        } else {
            // Served from the backend origin in production
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_default_points_at_dev_backend() {
        // Tests build with debug assertions enabled
        assert_eq!(ClientConfig::default_api_url(), DEV_API_URL);
    }
}
