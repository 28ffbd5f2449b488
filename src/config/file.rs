//! Configuration file loading and discovery.

use super::types::{AppConfig, OutputFormat};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Names tried in each candidate directory, in order.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".spdx-reconcile.yaml",
    ".spdx-reconcile.yml",
    "spdx-reconcile.yaml",
    "spdx-reconcile.yml",
];

/// Locate the config file to use.
///
/// An explicit path wins when it exists. Otherwise the current directory,
/// the enclosing git checkout and `~/.config/spdx-reconcile/` are searched
/// in that order.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path.filter(|p| p.is_file()) {
        return Some(path.to_path_buf());
    }
    candidate_dirs().iter().find_map(|dir| find_config_in_dir(dir))
}

fn candidate_dirs() -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(3);
    if let Ok(cwd) = std::env::current_dir() {
        let checkout = cwd
            .ancestors()
            .skip(1)
            .find(|dir| dir.join(".git").exists())
            .map(Path::to_path_buf);
        candidates.push(cwd);
        candidates.extend(checkout);
    }
    candidates.extend(dirs::config_dir().map(|user| user.join("spdx-reconcile")));
    candidates
}

fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Why a config file could not be used.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl From<ConfigFileError> for crate::error::SpdxError {
    fn from(err: ConfigFileError) -> Self {
        Self::config(err.to_string())
    }
}

/// Read one YAML config file. Keys it omits keep their defaults.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.is_file() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Discovered config, or defaults when there is none or it is unusable.
///
/// Returns the path the config was read from, if any.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    if let Some(path) = explicit_path.filter(|p| !p.is_file()) {
        tracing::warn!("config file {} does not exist, searching defaults", path.display());
    }
    let Some(path) = discover_config_file(explicit_path) else {
        return (AppConfig::default(), None);
    };
    match load_config_file(&path) {
        Ok(config) => (config, Some(path)),
        Err(e) => {
            tracing::warn!("ignoring {}: {e}", path.display());
            (AppConfig::default(), None)
        }
    }
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Booleans only ever switch on; options override when set.
    pub fn merge(&mut self, other: &Self) {
        if other.merge.replace_relationships {
            self.merge.replace_relationships = true;
        }
        if other.merge.validate {
            self.merge.validate = true;
        }
        if other.merge.document_name.is_some() {
            self.merge.document_name.clone_from(&other.merge.document_name);
        }
        if other.merge.document_namespace.is_some() {
            self.merge
                .document_namespace
                .clone_from(&other.merge.document_namespace);
        }
        if !other.merge.parallel_load {
            self.merge.parallel_load = false;
        }

        if other.validation.ntia {
            self.validation.ntia = true;
        }
        if !other.validation.fail_on_issues {
            self.validation.fail_on_issues = false;
        }

        if other.output.format != OutputFormat::default() {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.compact {
            self.output.compact = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_example_config() -> String {
    r"# spdx-reconcile configuration
#
# Place this file at .spdx-reconcile.yaml in your project root or
# ~/.config/spdx-reconcile/spdx-reconcile.yaml for a global default.
# CLI arguments always override file settings.

merge:
  # Restate the kind of an existing relationship instead of adding another
  replace_relationships: false
  # Validate the merged document and report issues on stderr
  validate: false
  # Name and namespace of the merged document (first fragment's when unset)
  # document_name: my-product
  # document_namespace: https://example.com/spdx/my-product
  parallel_load: true

validation:
  # Require supplier, version and id on every package
  ntia: false
  # Exit with code 1 when issues are found
  fail_on_issues: true

output:
  # Report format: text, json
  format: text
  # Output file path (omit for stdout)
  # file: merged.spdx.json
  compact: false
"
    .to_string()
}
