//! Merge command handler.

use crate::config::AppConfig;
use crate::pipeline::{exit_codes, merge_fragments, to_json, write_output, OutputTarget};
use anyhow::Result;
use std::path::PathBuf;

/// Fold `inputs` into one document and write it as SPDX JSON.
///
/// When the configuration asks for validation, issues go to stderr and
/// decide the exit code; the merged document is written either way.
pub fn run_merge(inputs: &[PathBuf], config: &AppConfig) -> Result<i32> {
    let outcome = merge_fragments(inputs, config)?;

    let json = to_json(&outcome.document, config.output.compact)?;
    write_output(&json, &OutputTarget::from_option(config.output.file.clone()))?;

    tracing::info!(
        fragments = inputs.len(),
        matched = outcome.stats.elements_matched(),
        appended = outcome.stats.elements_appended(),
        aliased = outcome.stats.aliased_ids,
        renamed = outcome.stats.renamed_ids,
        "merge complete"
    );

    let Some(issues) = outcome.issues else {
        return Ok(exit_codes::SUCCESS);
    };
    for issue in &issues {
        eprintln!("{issue}");
    }
    if issues.is_empty() {
        Ok(exit_codes::SUCCESS)
    } else {
        eprintln!("{} validation issue(s) in merged document", issues.len());
        Ok(if config.validation.fail_on_issues {
            exit_codes::ISSUES_FOUND
        } else {
            exit_codes::SUCCESS
        })
    }
}
