//! Configuration for merge and validation runs.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets (`default`, `strict`, `ntia`)
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use spdx_reconcile::config::{AppConfig, ConfigPreset};
//!
//! let config = AppConfig::from_preset(ConfigPreset::Ntia);
//!
//! let config = AppConfig::builder()
//!     .replace_relationships(true)
//!     .validate_after_merge(true)
//!     .build();
//!
//! use spdx_reconcile::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.spdx-reconcile.yaml` file in your project root or
//! `~/.config/spdx-reconcile/`:
//!
//! ```yaml
//! merge:
//!   replace_relationships: true
//! validation:
//!   ntia: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::ConfigPreset;
pub use types::{
    AppConfig, AppConfigBuilder, MergeConfig, OutputConfig, OutputFormat, ValidationConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Documents every option that can be set in `.spdx-reconcile.yaml`, for
/// editor validation and autocompletion.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}
