//! Configuration module.
//!
//! Precedence chain: Defaults → Config File → Env Vars → CLI Args.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, BreakpointsSection, ConfigError,
    ConfigFile, ResolvedConfig, DEFAULT_CELL_WIDTH_PX, DEFAULT_POLL_INTERVAL_MS,
};
