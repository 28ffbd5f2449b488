//! Per-element validation rules.

use super::patterns::{
    is_actor, is_creator, is_license_list_version, is_spdx_version, is_timestamp,
};
use super::Validator;
use crate::index::{classify_reference, Element};
use crate::model::{
    Annotation, Checksum, CreationInfo, Document, ExternalDocumentReference, ExternalReference,
    ExtractedLicensingInfo, File, Package, Relationship, Snippet, SnippetRange, DATA_LICENSE,
    DOCUMENT_REF_PREFIX, DOCUMENT_SPDX_ID, LICENSE_REF_PREFIX, NOASSERTION, SPDX_REF_PREFIX,
};

/// Checks one element, reporting against `scope`.
pub(crate) trait Validate {
    fn validate(&self, scope: &str, validator: &mut Validator<'_>);
}

/// Label for an element in issue output: its id, else its kind and name.
fn element_scope(spdx_id: &str, kind: &str, name: &str) -> String {
    if !spdx_id.is_empty() {
        spdx_id.to_string()
    } else if !name.is_empty() {
        format!("{kind} '{name}'")
    } else {
        kind.to_string()
    }
}

fn check_spdx_id(scope: &str, spdx_id: &str, v: &mut Validator<'_>) {
    if spdx_id.is_empty() {
        v.report(scope, "Missing SPDX Identifier");
    } else if !spdx_id.starts_with(SPDX_REF_PREFIX) {
        v.report(
            scope,
            format!("Invalid SPDX Identifier '{spdx_id}': must start with '{SPDX_REF_PREFIX}'"),
        );
    }
}

fn check_actor(scope: &str, field: &str, value: &str, v: &mut Validator<'_>) {
    if value.is_empty() || value == NOASSERTION || is_actor(value) {
        return;
    }
    v.report(
        scope,
        format!("Invalid {field} '{value}': expected NOASSERTION, Person: or Organization:"),
    );
}

fn check_range(scope: &str, label: &str, range: &SnippetRange, v: &mut Validator<'_>) {
    if range.start < 1 {
        v.report(
            scope,
            format!("Invalid {label} Start {}: must be at least 1", range.start),
        );
    }
    if range.end < range.start {
        v.report(
            scope,
            format!(
                "Invalid {label}: end {} precedes start {}",
                range.end, range.start
            ),
        );
    }
}

fn validate_all<T: Validate>(items: &[T], scope: &str, v: &mut Validator<'_>) {
    for item in items {
        item.validate(scope, v);
    }
}

// ============================================================================
// Document level
// ============================================================================

impl Validate for Document {
    fn validate(&self, _scope: &str, v: &mut Validator<'_>) {
        let scope = element_scope(&self.spdx_id, "Document", &self.name);
        let scope = scope.as_str();

        if self.spdx_id != DOCUMENT_SPDX_ID {
            v.report(
                scope,
                format!(
                    "Invalid SPDX Identifier '{}': expected '{DOCUMENT_SPDX_ID}'",
                    self.spdx_id
                ),
            );
        }
        if self.name.is_empty() {
            v.report(scope, "Missing Name");
        }
        if self.spdx_version.is_empty() {
            v.report(scope, "Missing SPDX Version");
        } else if !is_spdx_version(&self.spdx_version) {
            v.report(
                scope,
                format!("Invalid SPDX Version '{}'", self.spdx_version),
            );
        }
        if self.data_license != DATA_LICENSE {
            v.report(
                scope,
                format!(
                    "Invalid Data License '{}': expected '{DATA_LICENSE}'",
                    self.data_license
                ),
            );
        }
        if self.document_namespace.is_empty() {
            v.report(scope, "Missing Document Namespace");
        }

        self.creation_info.validate(scope, v);

        for described in &self.document_describes {
            if classify_reference(described).is_unresolvable_by_design() {
                continue;
            }
            if !v.index().contains(described) {
                v.report(
                    scope,
                    format!("Described element '{described}' does not exist"),
                );
            }
        }

        let duplicates = v.index().duplicate_ids().to_vec();
        for (id, kind) in duplicates {
            v.report(id, format!("Duplicate SPDX Identifier on {kind}"));
        }

        validate_all(&self.annotations, scope, v);
        for reference in &self.external_document_refs {
            let scope = element_scope(
                &reference.external_document_id,
                "External Document Reference",
                &reference.spdx_document,
            );
            reference.validate(&scope, v);
        }
        for info in &self.has_extracted_licensing_infos {
            let scope = element_scope(&info.license_id, "Extracted License", &info.name);
            info.validate(&scope, v);
        }
        for package in &self.packages {
            let scope = element_scope(&package.spdx_id, "Package", &package.name);
            package.validate(&scope, v);
        }
        for file in &self.files {
            let scope = element_scope(&file.spdx_id, "File", &file.file_name);
            file.validate(&scope, v);
        }
        for snippet in &self.snippets {
            let scope = element_scope(&snippet.spdx_id, "Snippet", &snippet.name);
            snippet.validate(&scope, v);
        }
        for relationship in &self.relationships {
            relationship.validate(&relationship.describe(), v);
        }
    }
}

impl Validate for CreationInfo {
    fn validate(&self, scope: &str, v: &mut Validator<'_>) {
        if self.creators.is_empty() {
            v.report(scope, "Missing Creators");
        }
        for creator in &self.creators {
            if !is_creator(creator) {
                v.report(
                    scope,
                    format!(
                        "Invalid Creator '{creator}': expected Person:, Organization: or Tool:"
                    ),
                );
            }
        }
        if self.created.is_empty() {
            v.report(scope, "Missing Created Timestamp");
        } else if !is_timestamp(&self.created) {
            v.report(
                scope,
                format!("Invalid Created Timestamp '{}'", self.created),
            );
        }
        if !self.license_list_version.is_empty()
            && !is_license_list_version(&self.license_list_version)
        {
            v.report(
                scope,
                format!(
                    "Invalid License List Version '{}'",
                    self.license_list_version
                ),
            );
        }
    }
}

impl Validate for ExternalDocumentReference {
    fn validate(&self, scope: &str, v: &mut Validator<'_>) {
        if self.external_document_id.is_empty() {
            v.report(scope, "Missing External Document Id");
        } else if !self.external_document_id.starts_with(DOCUMENT_REF_PREFIX) {
            v.report(
                scope,
                format!(
                    "Invalid External Document Id '{}': must start with '{DOCUMENT_REF_PREFIX}'",
                    self.external_document_id
                ),
            );
        }
        if self.spdx_document.is_empty() {
            v.report(scope, "Missing SPDX Document URI");
        }
        self.checksum.validate(scope, v);
    }
}

impl Validate for ExtractedLicensingInfo {
    fn validate(&self, scope: &str, v: &mut Validator<'_>) {
        if self.license_id.is_empty() {
            v.report(scope, "Missing License Id");
        } else if !self.license_id.starts_with(LICENSE_REF_PREFIX) {
            v.report(
                scope,
                format!(
                    "Invalid License Id '{}': must start with '{LICENSE_REF_PREFIX}'",
                    self.license_id
                ),
            );
        }
        if self.extracted_text.is_empty() {
            v.report(scope, "Missing Extracted Text");
        }
    }
}

// ============================================================================
// Elements
// ============================================================================

impl Validate for Package {
    fn validate(&self, scope: &str, v: &mut Validator<'_>) {
        if self.spdx_id.is_empty() {
            if v.options().ntia {
                v.report(scope, "Missing SPDX Identifier");
            }
        } else {
            check_spdx_id(scope, &self.spdx_id, v);
        }
        if self.name.is_empty() {
            v.report(scope, "Missing Name");
        }
        if self.download_location.is_empty() {
            v.report(scope, "Missing Download Location");
        }
        check_actor(scope, "Supplier", &self.supplier, v);
        check_actor(scope, "Originator", &self.originator, v);

        if v.options().ntia {
            if self.supplier.is_empty() {
                v.report(scope, "Missing Supplier");
            }
            if self.version_info.is_empty() {
                v.report(scope, "Missing Version");
            }
        }

        if let Some(code) = &self.package_verification_code {
            let len = code.value.chars().count();
            if len != 40 {
                v.report(
                    scope,
                    format!(
                        "Invalid Package Verification Code '{}': expected 40 characters, found {len}",
                        code.value
                    ),
                );
            }
        }

        for file_id in &self.has_files {
            match v.index().resolve(file_id) {
                Some(Element::File(_)) => {}
                Some(other) => v.report(
                    scope,
                    format!("hasFiles entry '{file_id}' is a {}, not a File", other.kind()),
                ),
                None => v.report(scope, format!("Unknown File '{file_id}' in hasFiles")),
            }
        }

        validate_all(&self.checksums, scope, v);
        validate_all(&self.external_refs, scope, v);
        validate_all(&self.annotations, scope, v);
    }
}

impl Validate for File {
    fn validate(&self, scope: &str, v: &mut Validator<'_>) {
        check_spdx_id(scope, &self.spdx_id, v);
        if self.file_name.is_empty() {
            v.report(scope, "Missing File Name");
        } else if !self.file_name.starts_with("./") {
            v.report(
                scope,
                format!("Invalid File Name '{}': must start with './'", self.file_name),
            );
        }
        if self.sha1().is_none() {
            v.report(scope, "Missing SHA1 Checksum");
        }
        validate_all(&self.checksums, scope, v);
        validate_all(&self.annotations, scope, v);
    }
}

impl Validate for Snippet {
    fn validate(&self, scope: &str, v: &mut Validator<'_>) {
        check_spdx_id(scope, &self.spdx_id, v);

        let from_file = self.snippet_from_file.as_str();
        if from_file.is_empty() {
            v.report(scope, "Missing Snippet From File");
        } else if !classify_reference(from_file).is_unresolvable_by_design() {
            match v.index().resolve(from_file) {
                Some(Element::File(_)) => {}
                Some(other) => v.report(
                    scope,
                    format!(
                        "Snippet From File '{from_file}' is a {}, not a File",
                        other.kind()
                    ),
                ),
                None => v.report(scope, format!("Unknown Snippet From File '{from_file}'")),
            }
        }

        check_range(scope, "Byte Range", &self.byte_range, v);
        if let Some(lines) = &self.line_range {
            check_range(scope, "Line Range", lines, v);
        }

        if self.license_concluded.is_empty() {
            v.report(scope, "Missing License Concluded");
        }
        if self.copyright_text.is_empty() {
            v.report(scope, "Missing Copyright Text");
        }
        validate_all(&self.annotations, scope, v);
    }
}

impl Validate for Relationship {
    fn validate(&self, scope: &str, v: &mut Validator<'_>) {
        let source = self.spdx_element_id.as_str();
        if source.is_empty() {
            v.report(scope, "Missing Source Element");
        } else if !v.index().contains(source) {
            v.report(scope, format!("Unknown Source Element '{source}'"));
        }

        let target = self.related_spdx_element.as_str();
        if target.is_empty() {
            v.report(scope, "Missing Related Element");
        } else if !v.index().contains(target)
            && !classify_reference(target).is_unresolvable_by_design()
        {
            v.report(scope, format!("Unknown Related Element '{target}'"));
        }

        if self.relationship_type.is_missing() {
            v.report(scope, "Missing Relationship Type");
        }
    }
}

// ============================================================================
// Nested records
// ============================================================================

impl Validate for Checksum {
    fn validate(&self, scope: &str, v: &mut Validator<'_>) {
        if self.algorithm.is_missing() {
            v.report(scope, "Missing Checksum Algorithm");
            if self.checksum_value.is_empty() {
                v.report(scope, "Missing Checksum Value");
            }
        } else if self.checksum_value.is_empty() {
            v.report(scope, format!("Missing {} Checksum Value", self.algorithm));
        }
    }
}

impl Validate for ExternalReference {
    fn validate(&self, scope: &str, v: &mut Validator<'_>) {
        if self.reference_category.is_missing() {
            v.report(scope, "Missing Reference Category");
        }
        if self.reference_type.is_empty() {
            v.report(scope, "Missing Reference Type");
        }
        if self.reference_locator.is_empty() {
            v.report(scope, "Missing Reference Locator");
        }
    }
}

impl Validate for Annotation {
    fn validate(&self, scope: &str, v: &mut Validator<'_>) {
        if self.annotator.is_empty() {
            v.report(scope, "Missing Annotator");
        }
        if self.annotation_date.is_empty() {
            v.report(scope, "Missing Annotation Date");
        } else if !is_timestamp(&self.annotation_date) {
            v.report(
                scope,
                format!("Invalid Annotation Date '{}'", self.annotation_date),
            );
        }
        if self.annotation_type.is_missing() {
            v.report(scope, "Missing Annotation Type");
        }
    }
}
