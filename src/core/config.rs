//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.trio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::screen::Screen;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TrioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// One of "home", "name", "calculator", "countries".
    pub start_screen: Option<String>,
    pub toast_duration_ms: Option<u64>,
    pub tick_rate_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TOAST_DURATION_MS: u64 = 2000;
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_screen: Screen,
    pub toast_duration_ms: u64,
    pub tick_rate_ms: u64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            start_screen: Screen::Home,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.trio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".trio").join("config.toml"))
}

/// Load config from `~/.trio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TrioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TrioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TrioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TrioConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: TrioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {config:?}");
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Trio Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → CLI flags.

# [general]
# Screen to open at startup: "home", "name", "calculator" or "countries".
# start_screen = "home"
# How long a toast notification stays on screen, in milliseconds.
# toast_duration_ms = 2000
# Event loop poll interval, in milliseconds.
# tick_rate_ms = 250
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Could not create {}: {e}", parent.display());
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Could not write default config to {}: {e}", path.display());
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Map a config/CLI screen key to its `Screen`.
pub fn screen_from_key(key: &str) -> Option<Screen> {
    match key {
        "home" => Some(Screen::Home),
        "name" => Some(Screen::NameEntry),
        "calculator" => Some(Screen::Calculator),
        "countries" => Some(Screen::CountryList),
        _ => None,
    }
}

/// Fold the sparse file config and the CLI override into concrete values.
pub fn resolve(file: TrioConfig, cli_start_screen: Option<Screen>) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();

    if let Some(key) = file.general.start_screen.as_deref() {
        match screen_from_key(key) {
            Some(screen) => resolved.start_screen = screen,
            None => warn!("Unknown start_screen {key:?} in config, using home"),
        }
    }
    if let Some(ms) = file.general.toast_duration_ms {
        resolved.toast_duration_ms = ms;
    }
    if let Some(ms) = file.general.tick_rate_ms {
        resolved.tick_rate_ms = ms;
    }

    // CLI wins over the file.
    if let Some(screen) = cli_start_screen {
        resolved.start_screen = screen;
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_defaults_when_everything_is_sparse() {
        let resolved = resolve(TrioConfig::default(), None);
        assert_eq!(resolved.start_screen, Screen::Home);
        assert_eq!(resolved.toast_duration_ms, DEFAULT_TOAST_DURATION_MS);
        assert_eq!(resolved.tick_rate_ms, DEFAULT_TICK_RATE_MS);
    }

    #[test]
    fn resolve_applies_file_values() {
        let file: TrioConfig = toml::from_str(
            r#"
            [general]
            start_screen = "calculator"
            toast_duration_ms = 500
            "#,
        )
        .unwrap();
        let resolved = resolve(file, None);
        assert_eq!(resolved.start_screen, Screen::Calculator);
        assert_eq!(resolved.toast_duration_ms, 500);
        assert_eq!(resolved.tick_rate_ms, DEFAULT_TICK_RATE_MS);
    }

    #[test]
    fn cli_flag_wins_over_file() {
        let file: TrioConfig = toml::from_str(
            r#"
            [general]
            start_screen = "countries"
            "#,
        )
        .unwrap();
        let resolved = resolve(file, Some(Screen::NameEntry));
        assert_eq!(resolved.start_screen, Screen::NameEntry);
    }

    #[test]
    fn unknown_start_screen_falls_back_to_home() {
        let file: TrioConfig = toml::from_str(
            r#"
            [general]
            start_screen = "settings"
            "#,
        )
        .unwrap();
        assert_eq!(resolve(file, None).start_screen, Screen::Home);
    }

    #[test]
    fn screen_keys_cover_every_screen() {
        assert_eq!(screen_from_key("home"), Some(Screen::Home));
        assert_eq!(screen_from_key("name"), Some(Screen::NameEntry));
        assert_eq!(screen_from_key("calculator"), Some(Screen::Calculator));
        assert_eq!(screen_from_key("countries"), Some(Screen::CountryList));
        assert_eq!(screen_from_key("about"), None);
    }

    #[test]
    fn empty_toml_parses_as_sparse_config() {
        let file: TrioConfig = toml::from_str("").unwrap();
        assert!(file.general.start_screen.is_none());
    }
}
