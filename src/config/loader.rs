//! Configuration file loading with precedence handling.

use crate::model::{Color, InvalidColor};
use crate::palette::{PaletteConfigError, PaletteSet};
use crate::state::reader::{ReaderSettings, DEFAULT_NODE_COLOR};
use crate::view_state::layout_params::{DEFAULT_GAP, DEFAULT_MIN_INDICATOR_HEIGHT};
use crate::view_state::OutlineParams;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

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

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// Errors raised when a resolved config cannot become reader settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Palette section is invalid.
    #[error(transparent)]
    Palette(#[from] PaletteConfigError),

    /// `default_color` is invalid.
    #[error("Invalid default_color: {0}")]
    DefaultColor(#[from] InvalidColor),

    /// Outline numbers are out of range.
    #[error("Invalid outline setting {field}: {value}")]
    Outline {
        /// Offending key.
        field: &'static str,
        /// Offending value, as written.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/docmap/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Palettes in cycling order. Replaces the stock palettes entirely.
    #[serde(default)]
    pub palettes: Option<Vec<PaletteEntry>>,

    /// Color of nodes before the first section start.
    #[serde(default)]
    pub default_color: Option<String>,

    /// Outline layout section.
    #[serde(default)]
    pub outline: Option<OutlineSection>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Path to the bookmark store file.
    #[serde(default)]
    pub bookmark_store_path: Option<PathBuf>,
}

/// One palette table.
///
/// Structure matches the TOML format:
/// ```toml
/// [[palettes]]
/// name = "greenish"
/// colors = ["#687E00", "#4E451A", "#4C7F1F"]
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PaletteEntry {
    /// Palette name, used for keyed dispensing.
    pub name: String,
    /// Colors in dispense order.
    pub colors: Vec<String>,
}

/// `[outline]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct OutlineSection {
    /// Gap subtracted from each node box, in outline pixels.
    #[serde(default)]
    pub gap: Option<f64>,

    /// Indicator height floor, in outline pixels.
    #[serde(default)]
    pub min_indicator_height: Option<f64>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file and env vars.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Palettes in cycling order.
    pub palettes: Vec<PaletteEntry>,
    /// Color of nodes before the first section start.
    pub default_color: String,
    /// Outline gap.
    pub gap: f64,
    /// Indicator floor.
    pub min_indicator_height: f64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Path to the bookmark store file.
    pub bookmark_store_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let palettes = PaletteSet::default()
            .iter()
            .map(|(name, colors)| PaletteEntry {
                name: name.to_string(),
                colors: colors.iter().map(|c| c.to_string()).collect(),
            })
            .collect();

        Self {
            palettes,
            default_color: DEFAULT_NODE_COLOR.to_string(),
            gap: DEFAULT_GAP,
            min_indicator_height: DEFAULT_MIN_INDICATOR_HEIGHT,
            log_file_path: default_log_path(),
            bookmark_store_path: default_bookmark_store_path(),
        }
    }
}

impl ResolvedConfig {
    /// Validate and convert into reader settings.
    ///
    /// # Errors
    ///
    /// Fails on an invalid palette section, a blank default color, a negative
    /// or non-finite gap, or a non-positive indicator floor.
    pub fn reader_settings(&self) -> Result<ReaderSettings, SettingsError> {
        let palettes = PaletteSet::from_raw(
            self.palettes
                .iter()
                .map(|p| (p.name.clone(), p.colors.clone())),
        )?;
        let default_color = Color::new(self.default_color.clone())?;

        if !(self.gap.is_finite() && self.gap >= 0.0) {
            return Err(SettingsError::Outline {
                field: "gap",
                value: self.gap.to_string(),
            });
        }
        if !(self.min_indicator_height.is_finite() && self.min_indicator_height > 0.0) {
            return Err(SettingsError::Outline {
                field: "min_indicator_height",
                value: self.min_indicator_height.to_string(),
            });
        }

        Ok(ReaderSettings {
            palettes,
            default_color,
            outline: OutlineParams::new(self.gap, self.min_indicator_height),
        })
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/docmap/docmap.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("docmap").join("docmap.log")
    } else {
        PathBuf::from("docmap.log")
    }
}

/// Resolve default bookmark store path.
///
/// Returns `~/.local/share/docmap/bookmarks.json` on Linux, falling back to
/// the current directory.
pub fn default_bookmark_store_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("docmap").join("bookmarks.json")
    } else {
        PathBuf::from("bookmarks.json")
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
/// Returns `~/.config/docmap/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docmap").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument
/// 2. `DOCMAP_CONFIG` environment variable
/// 3. Default path `~/.config/docmap/config.toml`
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

    if let Ok(env_path) = std::env::var("DOCMAP_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `DOCMAP_LOG_FILE`: Override log file path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var("DOCMAP_LOG_FILE") {
        config.log_file_path = PathBuf::from(path);
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let outline = config.outline.unwrap_or_default();

    ResolvedConfig {
        palettes: config.palettes.unwrap_or(defaults.palettes),
        default_color: config.default_color.unwrap_or(defaults.default_color),
        gap: outline.gap.unwrap_or(defaults.gap),
        min_indicator_height: outline
            .min_indicator_height
            .unwrap_or(defaults.min_indicator_height),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        bookmark_store_path: config
            .bookmark_store_path
            .unwrap_or(defaults.bookmark_store_path),
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
