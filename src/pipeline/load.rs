//! Reading SPDX JSON documents from disk.

use crate::error::{ErrorContext, ParseErrorKind, Result, SpdxError};
use crate::model::Document;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Parse SPDX 2.x JSON text.
///
/// Any JSON object deserializes into a [`Document`] because every field has a
/// default, so text carrying neither `SPDXID` nor `spdxVersion` is rejected
/// as not being SPDX at all.
pub fn parse_document_str(content: &str) -> Result<Document> {
    let document: Document = serde_json::from_str(content)?;
    if document.spdx_id.is_empty() && document.spdx_version.is_empty() {
        return Err(SpdxError::parse(
            "checking document header",
            ParseErrorKind::NotSpdx("neither SPDXID nor spdxVersion is present".to_string()),
        ));
    }
    Ok(document)
}

/// Read and parse one document.
pub fn load_document(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path).map_err(|e| SpdxError::io(path, e))?;
    let document =
        parse_document_str(&content).with_context(|| format!("loading {}", path.display()))?;
    tracing::debug!(
        packages = document.packages.len(),
        files = document.files.len(),
        relationships = document.relationships.len(),
        "loaded {}",
        path.display()
    );
    Ok(document)
}

/// Load fragments in input order, optionally parsing them in parallel.
///
/// The first failure is returned; no partial list is produced.
pub fn load_fragments(paths: &[PathBuf], parallel: bool) -> Result<Vec<Document>> {
    tracing::info!(count = paths.len(), parallel, "loading fragments");
    if parallel {
        paths.par_iter().map(|p| load_document(p)).collect()
    } else {
        paths.iter().map(|p| load_document(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"{
        "SPDXID": "SPDXRef-DOCUMENT",
        "spdxVersion": "SPDX-2.3",
        "name": "fragment",
        "packages": [{"SPDXID": "SPDXRef-P", "name": "p", "versionInfo": "1"}]
    }"#;

    #[test]
    fn test_parse_minimal_document() {
        let doc = parse_document_str(MINIMAL).unwrap();
        assert_eq!(doc.name, "fragment");
        assert_eq!(doc.packages.len(), 1);
        assert!(doc.files.is_empty());
    }

    #[test]
    fn test_reject_non_spdx_json() {
        let err = parse_document_str(r#"{"bomFormat": "CycloneDX"}"#).unwrap_err();
        assert!(err.to_string().contains("checking document header"));
    }

    #[test]
    fn test_reject_invalid_json() {
        assert!(matches!(
            parse_document_str("{not json"),
            Err(SpdxError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_document_adds_path_context() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        std::fs::write(&path, "[]").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_document(Path::new("/nonexistent/fragment.json")).unwrap_err();
        assert!(matches!(err, SpdxError::Io { path: Some(_), .. }));
    }

    #[test]
    fn test_load_fragments_keeps_order() {
        let tmp = TempDir::new().unwrap();
        let mut paths = Vec::new();
        for name in ["one", "two", "three"] {
            let path = tmp.path().join(format!("{name}.json"));
            std::fs::write(&path, MINIMAL.replace("\"fragment\"", &format!("\"{name}\""))).unwrap();
            paths.push(path);
        }

        for parallel in [true, false] {
            let docs = load_fragments(&paths, parallel).unwrap();
            let names: Vec<_> = docs.iter().map(|d| d.name.as_str()).collect();
            assert_eq!(names, vec!["one", "two", "three"]);
        }
    }
}
