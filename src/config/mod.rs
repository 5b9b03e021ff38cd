//! Configuration module.
//!
//! Settings come from an optional TOML file, layered over built-in defaults,
//! with a small set of environment overrides.

pub mod loader;

pub use loader::{
    apply_env_overrides, default_bookmark_store_path, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    OutlineSection, PaletteEntry, ResolvedConfig, SettingsError,
};
