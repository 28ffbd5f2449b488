//! Roots command handler.

use crate::config::{AppConfig, OutputFormat};
use crate::pipeline::{exit_codes, load_document, to_json, write_output, OutputTarget};
use crate::roots::root_packages;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RootEntry<'a> {
    #[serde(rename = "SPDXID")]
    spdx_id: &'a str,
    name: &'a str,
    version_info: &'a str,
}

/// List the packages the document describes.
pub fn run_roots(input: &Path, config: &AppConfig) -> Result<i32> {
    let document = load_document(input)?;
    let roots: Vec<RootEntry<'_>> = root_packages(&document)
        .into_iter()
        .map(|p| RootEntry {
            spdx_id: &p.spdx_id,
            name: &p.name,
            version_info: &p.version_info,
        })
        .collect();

    if roots.is_empty() {
        tracing::warn!("{} describes no packages", input.display());
    }

    let content = match config.output.format {
        OutputFormat::Text => roots
            .iter()
            .map(|r| format!("{}\t{}\t{}", r.spdx_id, r.name, r.version_info))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => to_json(&roots, config.output.compact)?,
    };
    write_output(&content, &OutputTarget::from_option(config.output.file.clone()))?;
    Ok(exit_codes::SUCCESS)
}
