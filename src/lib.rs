//! `TravelHub` - Japan travel hub dashboard
//!
//! Attractions, public transport, safety facilities, weather and earthquake
//! data behind resilient providers that always answer, falling back to
//! static datasets when the upstream API is unavailable.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod models;
pub mod providers;
pub mod telemetry;
pub mod view;
pub mod web;

// Re-export core types for public API
pub use config::TravelHubConfig;
pub use dashboard::{Dashboard, DashboardLayout, Tab};
pub use error::{FetchError, TravelHubError};
pub use providers::{DataProvider, Endpoint, HttpUpstream, Providers, Upstream};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
