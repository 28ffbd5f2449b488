//! SPDX file elements.

use super::{Annotation, Checksum, ChecksumAlgorithm, FileType};
use serde::{Deserialize, Serialize};

/// A single file, keyed by its relative path.
///
/// Different scanners may report different checksum sets for the same path;
/// the path alone decides whether two records are the same file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct File {
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_types: Vec<FileType>,
    pub checksums: Vec<Checksum>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub license_concluded: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub license_info_in_files: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub license_comments: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub copyright_text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notice_text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_contributors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attribution_texts: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl File {
    pub fn new(spdx_id: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            spdx_id: spdx_id.into(),
            file_name: file_name.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper to attach a checksum.
    #[must_use]
    pub fn with_checksum(mut self, checksum: Checksum) -> Self {
        self.checksums.push(checksum);
        self
    }

    /// The SHA-1 digest, if one was reported.
    #[must_use]
    pub fn sha1(&self) -> Option<&str> {
        self.checksums
            .iter()
            .find(|c| c.algorithm == ChecksumAlgorithm::Sha1)
            .map(|c| c.checksum_value.as_str())
    }
}
