//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::ResolvedConfig;
use crate::core::state::App;

/// A resolved config with a short toast for fast tests.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        toast_duration_ms: 50,
        ..ResolvedConfig::default()
    }
}

/// Creates a test App on the home screen.
pub fn test_app() -> App {
    App::from_config(&test_config())
}
