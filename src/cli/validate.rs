//! Validate command handler.

use crate::config::{AppConfig, OutputFormat};
use crate::pipeline::{exit_codes, load_document, to_json, write_output, OutputTarget};
use crate::validation::{validate_issues, ValidationIssue};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// JSON shape of a validation run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub document: String,
    pub ntia: bool,
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

/// Validate one document and report every issue.
pub fn run_validate(input: &Path, config: &AppConfig) -> Result<i32> {
    let document = load_document(input)?;
    let options = config.validation.options();
    let issues = validate_issues(&document, &options);

    let content = match config.output.format {
        OutputFormat::Text => render_text(&document.name, &issues),
        OutputFormat::Json => to_json(
            &ValidationReport {
                document: document.name.clone(),
                ntia: options.ntia,
                valid: issues.is_empty(),
                issues: issues.clone(),
            },
            config.output.compact,
        )?,
    };
    write_output(&content, &OutputTarget::from_option(config.output.file.clone()))?;

    if !issues.is_empty() && config.validation.fail_on_issues {
        Ok(exit_codes::ISSUES_FOUND)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

fn render_text(name: &str, issues: &[ValidationIssue]) -> String {
    if issues.is_empty() {
        return format!("{name}: valid");
    }
    let mut out = format!("{name}: {} issue(s)\n", issues.len());
    for issue in issues {
        out.push_str("  ");
        out.push_str(&issue.to_string());
        out.push('\n');
    }
    out.truncate(out.trim_end().len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const NO_VERSION: &str = r#"{
        "SPDXID": "SPDXRef-DOCUMENT",
        "spdxVersion": "SPDX-2.3",
        "dataLicense": "CC0-1.0",
        "name": "app",
        "documentNamespace": "https://example.com/app",
        "creationInfo": {"creators": ["Tool: x"], "created": "2024-01-01T00:00:00Z"},
        "packages": [{"SPDXID": "SPDXRef-P", "name": "p", "downloadLocation": "NOASSERTION",
                      "supplier": "Organization: ACME"}]
    }"#;

    #[test]
    fn test_render_text() {
        assert_eq!(render_text("doc", &[]), "doc: valid");
        let issues = vec![ValidationIssue {
            element: "SPDXRef-P".to_string(),
            message: "Missing Version".to_string(),
        }];
        assert_eq!(
            render_text("doc", &issues),
            "doc: 1 issue(s)\n  SPDXRef-P: Missing Version"
        );
    }

    #[test]
    fn test_ntia_decides_exit_code() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("doc.json");
        std::fs::write(&input, NO_VERSION).unwrap();
        let out = tmp.path().join("report.json");

        let plain = AppConfig::builder()
            .output_file(Some(out.clone()))
            .build();
        assert_eq!(run_validate(&input, &plain).unwrap(), exit_codes::SUCCESS);

        let ntia = AppConfig::builder()
            .ntia(true)
            .output_format(OutputFormat::Json)
            .output_file(Some(out.clone()))
            .build();
        assert_eq!(run_validate(&input, &ntia).unwrap(), exit_codes::ISSUES_FOUND);

        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(report["valid"], false);
        assert_eq!(report["issues"][0]["message"], "Missing Version");
    }
}
