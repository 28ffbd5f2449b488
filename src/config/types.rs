//! Configuration types for merge and validation runs.

use crate::validation::ValidationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments override file settings; see [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// How fragments are folded together
    pub merge: MergeConfig,
    /// Which validation rules apply
    pub validation: ValidationConfig,
    /// Where and how results are written
    pub output: OutputConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub const fn replace_relationships(mut self, replace: bool) -> Self {
        self.config.merge.replace_relationships = replace;
        self
    }

    pub const fn validate_after_merge(mut self, validate: bool) -> Self {
        self.config.merge.validate = validate;
        self
    }

    pub fn document_name(mut self, name: Option<String>) -> Self {
        self.config.merge.document_name = name;
        self
    }

    pub fn document_namespace(mut self, namespace: Option<String>) -> Self {
        self.config.merge.document_namespace = namespace;
        self
    }

    pub const fn ntia(mut self, ntia: bool) -> Self {
        self.config.validation.ntia = ntia;
        self
    }

    pub const fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub const fn compact(mut self, compact: bool) -> Self {
        self.config.output.compact = compact;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Merge behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MergeConfig {
    /// Let later fragments restate the kind of a relationship between an
    /// already related pair instead of adding a second relationship
    pub replace_relationships: bool,
    /// Validate the merged document and report issues on stderr
    pub validate: bool,
    /// Name of the merged document (first fragment's name when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    /// Namespace URI of the merged document (first fragment's when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_namespace: Option<String>,
    /// Parse input fragments on a thread pool
    pub parallel_load: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            replace_relationships: false,
            validate: false,
            document_name: None,
            document_namespace: None,
            parallel_load: true,
        }
    }
}

/// Validation rule selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ValidationConfig {
    /// Require the NTIA minimum elements on every package
    pub ntia: bool,
    /// Exit non-zero when validation reports issues
    pub fail_on_issues: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            ntia: false,
            fail_on_issues: true,
        }
    }
}

impl ValidationConfig {
    #[must_use]
    pub const fn options(&self) -> ValidationOptions {
        ValidationOptions { ntia: self.ntia }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format for validation issues and root listings
    pub format: OutputFormat,
    /// Output file path (stdout when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Write JSON without indentation
    pub compact: bool,
}

/// Format of human-facing reports. Merged documents are always SPDX JSON.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per issue or package
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
