//! The SPDX document root and its document-level records.

use super::{
    Annotation, Checksum, File, Package, Relationship, Snippet, DATA_LICENSE, DOCUMENT_SPDX_ID,
    SPDX_VERSION,
};
use serde::{Deserialize, Serialize};

/// Root container. Owns every element by value; elements refer to each other
/// only through SPDX identifier strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub spdx_version: String,
    pub data_license: String,
    pub name: String,
    pub document_namespace: String,
    pub creation_info: CreationInfo,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub document_describes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub external_document_refs: Vec<ExternalDocumentReference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub has_extracted_licensing_infos: Vec<ExtractedLicensingInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<Package>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub snippets: Vec<Snippet>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl Document {
    /// Create an empty SPDX 2.3 document with the fixed id and data license.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            spdx_id: DOCUMENT_SPDX_ID.to_string(),
            spdx_version: SPDX_VERSION.to_string(),
            data_license: DATA_LICENSE.to_string(),
            name: name.into(),
            document_namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Number of identifiable elements (packages, files, snippets).
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.packages.len() + self.files.len() + self.snippets.len()
    }

    #[must_use]
    pub fn package(&self, spdx_id: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.spdx_id == spdx_id)
    }

    #[must_use]
    pub fn file(&self, spdx_id: &str) -> Option<&File> {
        self.files.iter().find(|f| f.spdx_id == spdx_id)
    }
}

/// Who produced the document and when.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreationInfo {
    pub creators: Vec<String>,
    pub created: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub license_list_version: String,
}

impl CreationInfo {
    pub fn new(creators: Vec<String>, created: impl Into<String>) -> Self {
        Self {
            creators,
            created: created.into(),
            ..Self::default()
        }
    }
}

/// Declares a `DocumentRef-` alias for another SPDX document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExternalDocumentReference {
    pub external_document_id: String,
    pub spdx_document: String,
    pub checksum: Checksum,
}

/// License text found in the analysed sources that has no SPDX list id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractedLicensingInfo {
    pub license_id: String,
    pub extracted_text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub see_alsos: Vec<String>,
}

impl ExtractedLicensingInfo {
    pub fn new(license_id: impl Into<String>, extracted_text: impl Into<String>) -> Self {
        Self {
            license_id: license_id.into(),
            extracted_text: extracted_text.into(),
            ..Self::default()
        }
    }
}
