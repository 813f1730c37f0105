//! Theme, key bindings and user settings for the pokedex TUI.
//!
//! Public re-exports keep the `crate::theme::*` API stable.

/// Settings skeleton creation.
mod config;
/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings loading.
mod settings;
/// Palette store.
mod store;
/// Theme type definitions.
mod types;

pub use config::{SETTINGS_SKELETON_CONTENT, ensure_settings_file, write_skeleton_if_empty};
pub use paths::{config_dir, default_settings_path, logs_dir};
pub use settings::{load_settings_from, parse_settings, settings};
pub use store::theme;
pub use types::{KeyChord, KeyMap, Settings, Theme};
