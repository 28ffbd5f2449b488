//! Sanity checks on a loaded configuration.

use super::types::{AppConfig, MergeConfig, OutputConfig};
use thiserror::Error;

/// One configuration value that cannot work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ConfigError {
    /// Dotted path of the offending key, e.g. `merge.document_namespace`
    pub field: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Configuration sections that can check themselves.
pub trait Validatable {
    fn validate(&self) -> Vec<ConfigError>;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.merge.validate();
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for MergeConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self
            .document_name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            errors.push(ConfigError::new(
                "merge.document_name",
                "document name must not be blank",
            ));
        }
        if let Some(namespace) = self
            .document_namespace
            .as_deref()
            .filter(|ns| !ns.contains("://"))
        {
            errors.push(ConfigError::new(
                "merge.document_namespace",
                format!("'{namespace}' is not an absolute URI"),
            ));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let missing_parent = self
            .file
            .as_deref()
            .and_then(std::path::Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty() && !dir.exists());
        missing_parent
            .map(|dir| {
                ConfigError::new(
                    "output.file",
                    format!("directory {} does not exist", dir.display()),
                )
            })
            .into_iter()
            .collect()
    }
}
