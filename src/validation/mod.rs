//! Structural and referential validation of an SPDX document.
//!
//! Validation never fails: every rule runs over every element and each
//! violation becomes one [`ValidationIssue`]. Dangling references left by a
//! merge, malformed timestamps, missing required fields and so on are all
//! reported in a single pass.
//!
//! ```
//! use spdx_reconcile::model::{Document, Package};
//! use spdx_reconcile::validation::{validate_with, ValidationOptions};
//!
//! let mut doc = Document::new("app", "https://example.com/app");
//! doc.packages.push(Package::new("SPDXRef-app", "app", ""));
//!
//! let issues = validate_with(&doc, &ValidationOptions { ntia: true });
//! assert!(issues.iter().any(|i| i.contains("Missing Version")));
//! ```

mod patterns;
mod rules;

use crate::index::DocumentIndex;
use crate::model::Document;
use serde::{Deserialize, Serialize};

/// Which rule sets to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Also require the NTIA minimum elements (supplier, version, id) on
    /// every package
    pub ntia: bool,
}

impl ValidationOptions {
    #[must_use]
    pub const fn ntia() -> Self {
        Self { ntia: true }
    }
}

/// One rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Element the issue was found on (SPDX id, or a description when the
    /// element has no usable id)
    pub element: String,
    /// What is wrong
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.element.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.element, self.message)
        }
    }
}

/// Validate with the default rule set.
#[must_use]
pub fn validate(document: &Document) -> Vec<String> {
    validate_with(document, &ValidationOptions::default())
}

/// Validate and render each issue as a human-readable line.
#[must_use]
pub fn validate_with(document: &Document, options: &ValidationOptions) -> Vec<String> {
    validate_issues(document, options)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Validate and keep the structured issues.
#[must_use]
pub fn validate_issues(document: &Document, options: &ValidationOptions) -> Vec<ValidationIssue> {
    let mut validator = Validator::new(document, *options);
    rules::Validate::validate(document, &document.spdx_id, &mut validator);
    tracing::info!(
        issues = validator.issues.len(),
        ntia = options.ntia,
        elements = document.element_count(),
        "validated document"
    );
    validator.issues
}

/// Accumulates issues while the rules walk the document.
pub(crate) struct Validator<'a> {
    index: DocumentIndex<'a>,
    options: ValidationOptions,
    issues: Vec<ValidationIssue>,
}

impl<'a> Validator<'a> {
    fn new(document: &'a Document, options: ValidationOptions) -> Self {
        Self {
            index: DocumentIndex::build(document),
            options,
            issues: Vec::new(),
        }
    }

    pub(crate) fn report(&mut self, element: &str, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            element: element.to_string(),
            message: message.into(),
        });
    }

    pub(crate) const fn index(&self) -> &DocumentIndex<'a> {
        &self.index
    }

    pub(crate) const fn options(&self) -> &ValidationOptions {
        &self.options
    }
}
