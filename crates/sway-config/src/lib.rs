//! Presets and parameter validation for the sway auto-pan.
//!
//! A preset is a small TOML file with the four auto-pan parameters and the
//! context (sample rate, tempo) they were tuned for. This crate loads, saves
//! and validates them, ships a handful of factory presets, and knows where
//! user presets live.
//!
//! # Example
//!
//! ```rust,no_run
//! use sway_config::{Preset, user_presets_dir, validate_preset};
//!
//! let preset = Preset::load("bounce.toml").unwrap();
//! validate_preset(&preset).unwrap();
//!
//! let copy = preset.clone().with_description("copied");
//! copy.save(user_presets_dir().join("bounce_copy.toml")).unwrap();
//! ```

mod error;
mod preset;

/// Preset directories and lookup.
pub mod paths;

/// Parameter and preset validation.
pub mod validation;

/// Presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_presets, get_factory_preset, is_factory_preset,
};
pub use paths::{
    ensure_user_presets_dir, find_preset_file, list_presets_in, list_system_presets,
    list_user_presets, preset_name_from_path, resolve_preset, system_presets_dir,
    user_presets_dir,
};
pub use preset::{PanConfig, Preset};
pub use validation::{
    ValidationError, ValidationResult, find_param, parse_param_value, validate_param,
    validate_preset, validate_settings,
};
