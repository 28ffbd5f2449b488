//! Per-element `Enhance` implementations.
//!
//! Every field of the incoming record is folded into the base with the
//! rules from [`super::field`]. Identity-key fields are equal by the time two
//! records are enhanced, so coalescing them is a no-op and the base keeps
//! its identity.

use super::collection::merge_into;
use super::field::{coalesce, enhance_nested, union};
use super::Enhance;
use crate::model::{
    Annotation, Checksum, CreationInfo, ExternalDocumentReference, ExternalReference,
    ExtractedLicensingInfo, File, Package, PackageVerificationCode, Relationship, Snippet,
};

impl Enhance for CreationInfo {
    fn enhance(&mut self, incoming: &Self) {
        union(&mut self.creators, &incoming.creators);
        coalesce(&mut self.created, &incoming.created);
        coalesce(&mut self.comment, &incoming.comment);
        coalesce(&mut self.license_list_version, &incoming.license_list_version);
    }
}

impl Enhance for Package {
    fn enhance(&mut self, incoming: &Self) {
        coalesce(&mut self.spdx_id, &incoming.spdx_id);
        coalesce(&mut self.name, &incoming.name);
        coalesce(&mut self.version_info, &incoming.version_info);
        coalesce(&mut self.package_file_name, &incoming.package_file_name);
        coalesce(&mut self.supplier, &incoming.supplier);
        coalesce(&mut self.originator, &incoming.originator);
        coalesce(&mut self.download_location, &incoming.download_location);
        coalesce(&mut self.files_analyzed, &incoming.files_analyzed);
        enhance_nested(
            &mut self.package_verification_code,
            &incoming.package_verification_code,
        );
        merge_into(&mut self.checksums, &incoming.checksums);
        coalesce(&mut self.homepage, &incoming.homepage);
        coalesce(&mut self.source_info, &incoming.source_info);
        coalesce(&mut self.license_concluded, &incoming.license_concluded);
        union(
            &mut self.license_info_from_files,
            &incoming.license_info_from_files,
        );
        coalesce(&mut self.license_declared, &incoming.license_declared);
        coalesce(&mut self.license_comments, &incoming.license_comments);
        coalesce(&mut self.copyright_text, &incoming.copyright_text);
        coalesce(&mut self.summary, &incoming.summary);
        coalesce(&mut self.description, &incoming.description);
        coalesce(&mut self.comment, &incoming.comment);
        merge_into(&mut self.external_refs, &incoming.external_refs);
        union(&mut self.attribution_texts, &incoming.attribution_texts);
        coalesce(
            &mut self.primary_package_purpose,
            &incoming.primary_package_purpose,
        );
        coalesce(&mut self.release_date, &incoming.release_date);
        coalesce(&mut self.built_date, &incoming.built_date);
        coalesce(&mut self.valid_until_date, &incoming.valid_until_date);
        merge_into(&mut self.annotations, &incoming.annotations);
        union(&mut self.has_files, &incoming.has_files);
    }
}

impl Enhance for File {
    fn enhance(&mut self, incoming: &Self) {
        coalesce(&mut self.spdx_id, &incoming.spdx_id);
        coalesce(&mut self.file_name, &incoming.file_name);
        union(&mut self.file_types, &incoming.file_types);
        merge_into(&mut self.checksums, &incoming.checksums);
        coalesce(&mut self.license_concluded, &incoming.license_concluded);
        union(
            &mut self.license_info_in_files,
            &incoming.license_info_in_files,
        );
        coalesce(&mut self.license_comments, &incoming.license_comments);
        coalesce(&mut self.copyright_text, &incoming.copyright_text);
        coalesce(&mut self.comment, &incoming.comment);
        coalesce(&mut self.notice_text, &incoming.notice_text);
        union(&mut self.file_contributors, &incoming.file_contributors);
        union(&mut self.attribution_texts, &incoming.attribution_texts);
        merge_into(&mut self.annotations, &incoming.annotations);
    }
}

impl Enhance for Snippet {
    fn enhance(&mut self, incoming: &Self) {
        coalesce(&mut self.spdx_id, &incoming.spdx_id);
        coalesce(&mut self.snippet_from_file, &incoming.snippet_from_file);
        coalesce(&mut self.line_range, &incoming.line_range);
        coalesce(&mut self.license_concluded, &incoming.license_concluded);
        union(
            &mut self.license_info_in_snippets,
            &incoming.license_info_in_snippets,
        );
        coalesce(&mut self.license_comments, &incoming.license_comments);
        coalesce(&mut self.copyright_text, &incoming.copyright_text);
        coalesce(&mut self.comment, &incoming.comment);
        coalesce(&mut self.name, &incoming.name);
        union(&mut self.attribution_texts, &incoming.attribution_texts);
        merge_into(&mut self.annotations, &incoming.annotations);
    }
}

impl Enhance for Relationship {
    fn enhance(&mut self, incoming: &Self) {
        coalesce(&mut self.spdx_element_id, &incoming.spdx_element_id);
        coalesce(&mut self.relationship_type, &incoming.relationship_type);
        coalesce(
            &mut self.related_spdx_element,
            &incoming.related_spdx_element,
        );
        coalesce(&mut self.comment, &incoming.comment);
    }
}

impl Enhance for Checksum {
    fn enhance(&mut self, incoming: &Self) {
        coalesce(&mut self.algorithm, &incoming.algorithm);
        coalesce(&mut self.checksum_value, &incoming.checksum_value);
    }
}

impl Enhance for ExternalReference {
    fn enhance(&mut self, incoming: &Self) {
        coalesce(&mut self.reference_category, &incoming.reference_category);
        coalesce(&mut self.reference_type, &incoming.reference_type);
        coalesce(&mut self.reference_locator, &incoming.reference_locator);
        coalesce(&mut self.comment, &incoming.comment);
    }
}

impl Enhance for ExternalDocumentReference {
    fn enhance(&mut self, incoming: &Self) {
        coalesce(
            &mut self.external_document_id,
            &incoming.external_document_id,
        );
        coalesce(&mut self.spdx_document, &incoming.spdx_document);
        self.checksum.enhance(&incoming.checksum);
    }
}

impl Enhance for Annotation {
    fn enhance(&mut self, incoming: &Self) {
        coalesce(&mut self.annotator, &incoming.annotator);
        coalesce(&mut self.annotation_date, &incoming.annotation_date);
        coalesce(&mut self.annotation_type, &incoming.annotation_type);
        coalesce(&mut self.comment, &incoming.comment);
    }
}

impl Enhance for ExtractedLicensingInfo {
    fn enhance(&mut self, incoming: &Self) {
        coalesce(&mut self.license_id, &incoming.license_id);
        coalesce(&mut self.extracted_text, &incoming.extracted_text);
        coalesce(&mut self.name, &incoming.name);
        coalesce(&mut self.comment, &incoming.comment);
        union(&mut self.see_alsos, &incoming.see_alsos);
    }
}

impl Enhance for PackageVerificationCode {
    fn enhance(&mut self, incoming: &Self) {
        coalesce(&mut self.value, &incoming.value);
        union(&mut self.excluded_files, &incoming.excluded_files);
    }
}
