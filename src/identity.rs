//! Identity rules: when two records describe the same real-world entity.
//!
//! Each element kind exposes an identity key. Two records are the same when
//! their keys are equal; fields outside the key are ignored even when only
//! one side populates them. Keys borrow from the record, and
//! [`Identity::identity_hash`] hashes the key only, so records that are the
//! same always hash equal and can be bucketed for deduplication.

use crate::model::{
    Annotation, AnnotationType, Checksum, ChecksumAlgorithm, ExternalDocumentReference,
    ExternalReference, ExtractedLicensingInfo, File, Package, PackageVerificationCode,
    ReferenceCategory, Relationship, RelationshipType, Snippet,
};
use std::hash::{Hash, Hasher};
use xxhash_rust::xxh3::Xxh3;

/// Equivalence relation used to match records across fragments.
pub trait Identity {
    /// The fields that decide sameness.
    type Key<'a>: Eq + Hash
    where
        Self: 'a;

    fn identity_key(&self) -> Self::Key<'_>;

    /// Whether `self` and `other` describe the same entity.
    fn same_as(&self, other: &Self) -> bool {
        self.identity_key() == other.identity_key()
    }

    /// Hash of the identity key. Consistent with [`Identity::same_as`].
    fn identity_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        self.identity_key().hash(&mut hasher);
        hasher.finish()
    }
}

impl Identity for Package {
    type Key<'a> = (&'a str, &'a str);

    fn identity_key(&self) -> Self::Key<'_> {
        (self.name.as_str(), self.version_info.as_str())
    }
}

// Checksums are advisory for files: scanners disagree on which digests they
// emit, and the path is what they agree on.
impl Identity for File {
    type Key<'a> = &'a str;

    fn identity_key(&self) -> Self::Key<'_> {
        &self.file_name
    }
}

impl Identity for Snippet {
    type Key<'a> = (&'a str, u64, u64);

    fn identity_key(&self) -> Self::Key<'_> {
        (
            self.snippet_from_file.as_str(),
            self.byte_range.start,
            self.byte_range.end,
        )
    }
}

impl Identity for Relationship {
    type Key<'a> = (&'a str, RelationshipType, &'a str);

    fn identity_key(&self) -> Self::Key<'_> {
        (
            self.spdx_element_id.as_str(),
            self.relationship_type,
            self.related_spdx_element.as_str(),
        )
    }
}

impl Relationship {
    /// Same source and target, whatever the relationship kind.
    #[must_use]
    pub fn same_elements(&self, other: &Self) -> bool {
        self.spdx_element_id == other.spdx_element_id
            && self.related_spdx_element == other.related_spdx_element
    }
}

impl Identity for ExternalReference {
    type Key<'a> = (ReferenceCategory, &'a str, &'a str);

    fn identity_key(&self) -> Self::Key<'_> {
        (
            self.reference_category,
            self.reference_type.as_str(),
            self.reference_locator.as_str(),
        )
    }
}

impl Identity for ExternalDocumentReference {
    type Key<'a> = &'a str;

    fn identity_key(&self) -> Self::Key<'_> {
        &self.spdx_document
    }
}

impl Identity for ExtractedLicensingInfo {
    type Key<'a> = (&'a str, &'a str);

    fn identity_key(&self) -> Self::Key<'_> {
        (self.license_id.as_str(), self.extracted_text.as_str())
    }
}

// One digest per algorithm; a second value for the same algorithm is a
// conflict, and the first reported value wins on merge.
impl Identity for Checksum {
    type Key<'a> = ChecksumAlgorithm;

    fn identity_key(&self) -> Self::Key<'_> {
        self.algorithm
    }
}

impl Identity for Annotation {
    type Key<'a> = (&'a str, &'a str, AnnotationType, &'a str);

    fn identity_key(&self) -> Self::Key<'_> {
        (
            self.annotator.as_str(),
            self.annotation_date.as_str(),
            self.annotation_type,
            self.comment.as_str(),
        )
    }
}

impl Identity for PackageVerificationCode {
    type Key<'a> = &'a str;

    fn identity_key(&self) -> Self::Key<'_> {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SnippetRange;

    #[test]
    fn test_packages_match_on_name_and_version_only() {
        let mut a = Package::new("SPDXRef-A", "lodash", "4.17.21");
        a.supplier = "Organization: OpenJS".to_string();
        let b = Package::new("SPDXRef-B", "lodash", "4.17.21");
        let c = Package::new("SPDXRef-A", "lodash", "4.17.20");

        assert!(a.same_as(&b));
        assert!(b.same_as(&a));
        assert_eq!(a.identity_hash(), b.identity_hash());
        assert!(!a.same_as(&c));
    }

    #[test]
    fn test_files_match_on_name_despite_diverging_checksums() {
        let a = File::new("SPDXRef-F1", "./src/main.rs").with_checksum(Checksum::sha1("aa"));
        let b = File::new("SPDXRef-F2", "./src/main.rs").with_checksum(Checksum::new(
            ChecksumAlgorithm::Sha256,
            "bb",
        ));
        let c = File::new("SPDXRef-F1", "./src/lib.rs");

        assert!(a.same_as(&b));
        assert_eq!(a.identity_hash(), b.identity_hash());
        assert!(!a.same_as(&c));
    }

    #[test]
    fn test_snippets_ignore_line_range() {
        let mut a = Snippet::new("SPDXRef-S1", "SPDXRef-F", SnippetRange::new(10, 20));
        a.line_range = Some(SnippetRange::new(1, 2));
        let b = Snippet::new("SPDXRef-S2", "SPDXRef-F", SnippetRange::new(10, 20));
        let c = Snippet::new("SPDXRef-S1", "SPDXRef-F", SnippetRange::new(10, 21));

        assert!(a.same_as(&b));
        assert!(!a.same_as(&c));
    }

    #[test]
    fn test_relationship_same_versus_same_elements() {
        let contains = Relationship::new("SPDXRef-P1", RelationshipType::Contains, "SPDXRef-P2");
        let build_tool =
            Relationship::new("SPDXRef-P1", RelationshipType::BuildToolOf, "SPDXRef-P2");
        let reversed = Relationship::new("SPDXRef-P2", RelationshipType::Contains, "SPDXRef-P1");

        assert!(!contains.same_as(&build_tool));
        assert!(contains.same_elements(&build_tool));
        assert!(!contains.same_elements(&reversed));
    }

    #[test]
    fn test_external_reference_key_includes_category() {
        let purl = ExternalReference::purl("pkg:npm/lodash@4.17.21");
        let mut other = purl.clone();
        other.reference_category = ReferenceCategory::Other;
        let mut commented = purl.clone();
        commented.comment = "from lockfile".to_string();

        assert!(!purl.same_as(&other));
        assert!(purl.same_as(&commented));
    }

    #[test]
    fn test_relation_is_reflexive() {
        let info = ExtractedLicensingInfo::new("LicenseRef-1", "Some text");
        assert!(info.same_as(&info.clone()));
        let doc_ref = ExternalDocumentReference::default();
        assert!(doc_ref.same_as(&doc_ref));
    }
}
