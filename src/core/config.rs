//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.zzmenu/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The menu labels live here too, so the lists can change without a rebuild.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::menu::{MenuConfig, MenuError, NavItem, default_side_nav, default_tab_bar};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ZzMenuConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub menu: MenuSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub initial_path: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MenuSection {
    pub side_nav: Option<Vec<NavItem>>,
    pub tab_bar: Option<Vec<NavItem>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_INITIAL_PATH: &str = "/";
pub const PATH_ENV: &str = "ZZMENU_PATH";
pub const CONFIG_ENV: &str = "ZZMENU_CONFIG";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub initial_path: String,
    pub menu: MenuConfig,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Menu(MenuError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Menu(e) => write!(f, "invalid menu: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.zzmenu/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".zzmenu").join("config.toml"))
}

/// Load config from an explicit path (CLI or `ZZMENU_CONFIG`), falling back
/// to `~/.zzmenu/config.toml`.
///
/// An explicit path must exist. The default path is generated with
/// commented-out defaults when missing.
pub fn load_config(explicit: Option<&Path>) -> Result<ZzMenuConfig, ConfigError> {
    let explicit = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

    if let Some(path) = explicit {
        return read_config(&path);
    }

    let path = match default_config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ZzMenuConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ZzMenuConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<ZzMenuConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ZzMenuConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# zzmenu Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# initial_path = "/"                 # Or set ZZMENU_PATH, or pass --path

# Side navigation rows, top to bottom. Keys must be unique within the list.
# [[menu.side_nav]]
# key = "1"
# title = "大厨"
#
# [[menu.side_nav]]
# key = "2"
# title = "家常菜"
#
# [[menu.side_nav]]
# key = "3"
# title = "主食"
#
# [[menu.side_nav]]
# key = "4"
# title = "小吃"

# Bottom tab bar, left to right.
# [[menu.tab_bar]]
# key = "1"
# title = "菜单"
#
# [[menu.tab_bar]]
# key = "2"
# title = "订单"
#
# [[menu.tab_bar]]
# key = "3"
# title = "我的"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_path` is the `--path` flag (None = not specified).
pub fn resolve(config: &ZzMenuConfig, cli_path: Option<&str>) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli_path, std::env::var(PATH_ENV).ok())
}

fn resolve_with_env(
    config: &ZzMenuConfig,
    cli_path: Option<&str>,
    env_path: Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Initial path: CLI → env → config → default
    let initial_path = cli_path
        .map(|s| s.to_string())
        .or(env_path)
        .or_else(|| config.general.initial_path.clone())
        .unwrap_or_else(|| DEFAULT_INITIAL_PATH.to_string());

    // Each list falls back to its built-in labels independently
    let side_nav = config.menu.side_nav.clone().unwrap_or_else(default_side_nav);
    let tab_bar = config.menu.tab_bar.clone().unwrap_or_else(default_tab_bar);
    let menu = MenuConfig::new(side_nav, tab_bar).map_err(ConfigError::Menu)?;

    Ok(ResolvedConfig { initial_path, menu })
}
