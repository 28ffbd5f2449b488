//! SPDX package elements.

use super::{Annotation, Checksum, PrimaryPackagePurpose, ReferenceCategory};
use serde::{Deserialize, Serialize};

/// A distributable unit of software.
///
/// Two packages describe the same real-world package when their name and
/// version match, whatever their SPDX ids or other fields say.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Package {
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version_info: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub package_file_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub supplier: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub originator: String,
    pub download_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_analyzed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_verification_code: Option<PackageVerificationCode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checksums: Vec<Checksum>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub homepage: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_info: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub license_concluded: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub license_info_from_files: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub license_declared: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub license_comments: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub copyright_text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub external_refs: Vec<ExternalReference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attribution_texts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_package_purpose: Option<PrimaryPackagePurpose>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub release_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub built_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub valid_until_date: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub has_files: Vec<String>,
}

impl Package {
    /// Create a package with an id, name and version; everything else unset.
    pub fn new(
        spdx_id: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            spdx_id: spdx_id.into(),
            name: name.into(),
            version_info: version.into(),
            ..Self::default()
        }
    }
}

/// Manifest-derived digest over a package's files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageVerificationCode {
    #[serde(rename = "packageVerificationCodeValue")]
    pub value: String,
    #[serde(
        rename = "packageVerificationCodeExcludedFiles",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub excluded_files: Vec<String>,
}

/// Pointer from a package to an external identifier (purl, cpe, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExternalReference {
    #[serde(skip_serializing_if = "ReferenceCategory::is_missing")]
    pub reference_category: ReferenceCategory,
    pub reference_type: String,
    pub reference_locator: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl ExternalReference {
    pub fn new(
        category: ReferenceCategory,
        reference_type: impl Into<String>,
        locator: impl Into<String>,
    ) -> Self {
        Self {
            reference_category: category,
            reference_type: reference_type.into(),
            reference_locator: locator.into(),
            comment: String::new(),
        }
    }

    /// Package-manager reference in purl form.
    pub fn purl(locator: impl Into<String>) -> Self {
        Self::new(ReferenceCategory::PackageManager, "purl", locator)
    }
}
