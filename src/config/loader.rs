//! Configuration file loading with precedence handling.

use crate::layout::{Breakpoint, Breakpoints, LayoutPolicy, WeightStrategy};
use crate::model::FeedOrder;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Default terminal cell width in pixels used to map columns to a viewport width.
pub const DEFAULT_CELL_WIDTH_PX: u16 = 8;

/// Default interval between feed file change checks.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// The `[breakpoints]` table is unusable.
    #[error("Invalid breakpoints: {0}")]
    InvalidBreakpoints(String),

    /// A setting is out of range.
    #[error("Invalid value for {name}: {value}")]
    InvalidValue {
        /// Setting name.
        name: &'static str,
        /// Offending value.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/feedgrid/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Pixel width of one terminal cell.
    #[serde(default)]
    pub cell_width_px: Option<u16>,

    /// Weight proxy for item height.
    #[serde(default)]
    pub weight: Option<WeightStrategy>,

    /// Feed ordering applied before layout.
    #[serde(default)]
    pub order: Option<FeedOrder>,

    /// Milliseconds between feed file change checks.
    #[serde(default)]
    pub poll_interval_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Custom breakpoint table.
    #[serde(default)]
    pub breakpoints: Option<BreakpointsSection>,
}

/// Breakpoints section from TOML.
///
/// ```toml
/// [breakpoints]
/// thresholds = [[1200, 4], [992, 3], [768, 2]]
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BreakpointsSection {
    /// `[min_width, columns]` pairs in any order.
    pub thresholds: Vec<(i64, usize)>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Pixel width of one terminal cell.
    pub cell_width_px: u16,
    /// Breakpoints and weight strategy.
    pub policy: LayoutPolicy,
    /// Feed ordering.
    pub order: FeedOrder,
    /// Interval between feed file change checks.
    pub poll_interval: Duration,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            cell_width_px: DEFAULT_CELL_WIDTH_PX,
            policy: LayoutPolicy::default(),
            order: FeedOrder::default(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/feedgrid/feedgrid.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("feedgrid").join("feedgrid.log")
    } else {
        PathBuf::from("feedgrid.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/feedgrid/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("feedgrid").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FEEDGRID_CONFIG` environment variable
/// 3. Default path `~/.config/feedgrid/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("FEEDGRID_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns error for a zero cell width, a zero poll interval, or an invalid
/// breakpoint table.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let cell_width_px = match config.cell_width_px {
        Some(0) => {
            return Err(ConfigError::InvalidValue {
                name: "cell_width_px",
                value: "0".to_string(),
            })
        }
        Some(px) => px,
        None => defaults.cell_width_px,
    };

    let poll_interval = match config.poll_interval_ms {
        Some(0) => {
            return Err(ConfigError::InvalidValue {
                name: "poll_interval_ms",
                value: "0".to_string(),
            })
        }
        Some(ms) => Duration::from_millis(ms),
        None => defaults.poll_interval,
    };

    let breakpoints = match config.breakpoints {
        Some(section) => Breakpoints::new(
            section
                .thresholds
                .into_iter()
                .map(|(min_width, columns)| Breakpoint::new(min_width, columns)),
        )
        .map_err(|e| ConfigError::InvalidBreakpoints(e.to_string()))?,
        None => defaults.policy.breakpoints,
    };

    Ok(ResolvedConfig {
        cell_width_px,
        policy: LayoutPolicy::new(
            breakpoints,
            config.weight.unwrap_or(defaults.policy.weight),
        ),
        order: config.order.unwrap_or(defaults.order),
        poll_interval,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FEEDGRID_WEIGHT`: `chars` or `display-width`
/// - `FEEDGRID_CELL_WIDTH`: positive integer
///
/// Unparseable values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("FEEDGRID_WEIGHT") {
        match WeightStrategy::parse(&raw) {
            Some(weight) => config.policy.weight = weight,
            None => warn!(value = %raw, "ignoring unknown FEEDGRID_WEIGHT"),
        }
    }

    if let Ok(raw) = std::env::var("FEEDGRID_CELL_WIDTH") {
        match raw.trim().parse::<u16>() {
            Ok(px) if px > 0 => config.cell_width_px = px,
            _ => warn!(value = %raw, "ignoring invalid FEEDGRID_CELL_WIDTH"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    weight_override: Option<WeightStrategy>,
    order_override: Option<FeedOrder>,
    cell_width_override: Option<u16>,
) -> ResolvedConfig {
    if let Some(weight) = weight_override {
        config.policy.weight = weight;
    }

    if let Some(order) = order_override {
        config.order = order;
    }

    if let Some(px) = cell_width_override.filter(|px| *px > 0) {
        config.cell_width_px = px;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
