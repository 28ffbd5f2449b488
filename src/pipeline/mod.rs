//! Pipeline orchestration: load → merge → validate → write.
//!
//! The reconciliation core is I/O-free; this module is the thin layer that
//! reads fragments, applies the run configuration and hands results to the
//! CLI.

mod load;
mod output;

pub use load::{load_document, load_fragments, parse_document_str};
pub use output::{to_json, write_output, OutputTarget};

use crate::config::AppConfig;
use crate::error::{Result, SpdxError};
use crate::model::Document;
use crate::reconcile::{merge_all_with, DocumentMergeStats, MergeOptions};
use crate::validation::{validate_issues, ValidationIssue};
use std::path::PathBuf;

/// Result of merging a set of fragments.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub document: Document,
    pub stats: DocumentMergeStats,
    /// Present when the configuration asked for validation after merge
    pub issues: Option<Vec<ValidationIssue>>,
}

/// Load every fragment, fold them in order and optionally validate.
pub fn merge_fragments(paths: &[PathBuf], config: &AppConfig) -> Result<MergeOutcome> {
    if paths.is_empty() {
        return Err(SpdxError::config("at least one input fragment is required"));
    }

    let fragments = load_fragments(paths, config.merge.parallel_load)?;
    let options = MergeOptions {
        replace_relationships: config.merge.replace_relationships,
    };
    let (mut document, stats) = merge_all_with(fragments, options)
        .ok_or_else(|| SpdxError::config("at least one input fragment is required"))?;

    if let Some(name) = &config.merge.document_name {
        document.name.clone_from(name);
    }
    if let Some(namespace) = &config.merge.document_namespace {
        document.document_namespace.clone_from(namespace);
    }

    let issues = config
        .merge
        .validate
        .then(|| validate_issues(&document, &config.validation.options()));

    Ok(MergeOutcome {
        document,
        stats,
        issues,
    })
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    /// Validation reported at least one issue
    pub const ISSUES_FOUND: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}
