//! Property-based tests for the merge laws.
//!
//! Merging must be idempotent, must never overwrite a populated field, and
//! must keep every incoming element reachable by identity.

use proptest::prelude::*;
use spdx_reconcile::identity::Identity;
use spdx_reconcile::model::{
    Checksum, ChecksumAlgorithm, Document, Package, Relationship, RelationshipType,
};
use spdx_reconcile::reconcile::{merge_array, merge_documents, Enhance};
use std::collections::HashSet;

fn checksum() -> impl Strategy<Value = Checksum> {
    (
        prop::sample::select(vec![
            ChecksumAlgorithm::Sha1,
            ChecksumAlgorithm::Sha256,
            ChecksumAlgorithm::Md5,
        ]),
        "[0-9a-f]{8}",
    )
        .prop_map(|(algorithm, value)| Checksum::new(algorithm, value))
}

fn optional_text(pattern: &'static str) -> impl Strategy<Value = String> {
    prop::option::of(pattern).prop_map(Option::unwrap_or_default)
}

fn package() -> impl Strategy<Value = Package> {
    (
        prop::sample::select(vec!["lodash", "openssl", "zlib", "busybox"]),
        prop::sample::select(vec!["", "1.0", "2.0"]),
        optional_text("SPDXRef-[a-z]{1,4}"),
        optional_text("(MIT|Apache-2\\.0|GPL-2\\.0-only)"),
        optional_text("Organization: [A-Z][a-z]{2,6}"),
        optional_text("https://[a-z]{3,8}\\.org"),
        prop::collection::vec(checksum(), 0..3),
        prop::collection::vec("[a-z]{1,5}", 0..3),
    )
        .prop_map(
            |(name, version, id, license, supplier, download, checksums, attribution)| Package {
                spdx_id: id,
                name: name.to_string(),
                version_info: version.to_string(),
                license_concluded: license,
                supplier,
                download_location: download,
                checksums,
                attribution_texts: attribution,
                ..Package::default()
            },
        )
}

fn relationship() -> impl Strategy<Value = Relationship> {
    (
        prop::sample::select(vec!["SPDXRef-A", "SPDXRef-B", "SPDXRef-C"]),
        prop::sample::select(vec![
            RelationshipType::Contains,
            RelationshipType::DependsOn,
            RelationshipType::DevDependencyOf,
        ]),
        prop::sample::select(vec!["SPDXRef-A", "SPDXRef-B", "NOASSERTION"]),
        optional_text("[a-z ]{1,10}"),
    )
        .prop_map(|(source, kind, target, comment)| {
            let mut rel = Relationship::new(source, kind, target);
            rel.comment = comment;
            rel
        })
}

/// Keep the first element of each identity.
fn distinct<T: Identity + Clone>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.identity_hash()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn merge_array_is_idempotent(
        base in prop::collection::vec(package(), 0..6),
        incoming in prop::collection::vec(package(), 0..6),
    ) {
        let once = merge_array(base, &incoming);
        let twice = merge_array(once.clone(), &incoming);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn merge_array_with_nothing_is_identity(base in prop::collection::vec(package(), 0..6)) {
        prop_assert_eq!(merge_array(base.clone(), &[]), base);
    }

    #[test]
    fn merge_array_into_nothing_copies_distinct_incoming(
        incoming in prop::collection::vec(package(), 0..6),
    ) {
        let incoming = distinct(incoming);
        prop_assert_eq!(merge_array(Vec::new(), &incoming), incoming);
    }

    #[test]
    fn merge_array_keeps_every_identity(
        base in prop::collection::vec(package(), 0..6),
        incoming in prop::collection::vec(package(), 0..6),
    ) {
        let merged = merge_array(base.clone(), &incoming);
        prop_assert!(merged.len() <= base.len() + incoming.len());
        for item in base.iter().chain(&incoming) {
            prop_assert!(
                merged.iter().any(|m| m.same_as(item)),
                "{:?} lost in merge", item.identity_key()
            );
        }
        // No two survivors share an identity unless base already had both.
        let base_keys: HashSet<u64> = base.iter().map(Identity::identity_hash).collect();
        let merged_keys: HashSet<u64> = merged.iter().map(Identity::identity_hash).collect();
        let new_keys = merged_keys.difference(&base_keys).count();
        prop_assert_eq!(merged.len(), base.len() + new_keys);
    }

    #[test]
    fn enhance_never_overwrites(base in package(), incoming in package()) {
        let mut merged = base.clone();
        merged.enhance(&incoming);

        for (before, after) in [
            (&base.spdx_id, &merged.spdx_id),
            (&base.name, &merged.name),
            (&base.version_info, &merged.version_info),
            (&base.license_concluded, &merged.license_concluded),
            (&base.supplier, &merged.supplier),
            (&base.download_location, &merged.download_location),
        ] {
            if !before.is_empty() {
                prop_assert_eq!(before, after);
            }
        }
        prop_assert!(merged.attribution_texts.starts_with(&base.attribution_texts));
        prop_assert!(merged.checksums.starts_with(&base.checksums));
    }

    #[test]
    fn enhance_fills_gaps(base in package(), incoming in package()) {
        let mut merged = base.clone();
        merged.enhance(&incoming);

        if base.license_concluded.is_empty() {
            prop_assert_eq!(&merged.license_concluded, &incoming.license_concluded);
        }
        for text in &incoming.attribution_texts {
            prop_assert!(merged.attribution_texts.contains(text));
        }
        for checksum in &incoming.checksums {
            prop_assert!(merged.checksums.iter().any(|c| c.algorithm == checksum.algorithm));
        }
    }

    #[test]
    fn enhance_with_self_is_a_no_op(package in package()) {
        let mut merged = package.clone();
        merged.enhance(&package);
        prop_assert_eq!(merged, package);
    }

    #[test]
    fn relationship_merge_is_idempotent(
        base in prop::collection::vec(relationship(), 0..8),
        incoming in prop::collection::vec(relationship(), 0..8),
    ) {
        let once = merge_array(base, &incoming);
        let twice = merge_array(once.clone(), &incoming);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn document_merge_is_idempotent(
        packages in prop::collection::vec(package(), 0..5),
        fragment_packages in prop::collection::vec(package(), 0..5),
    ) {
        let mut base = Document::new("doc", "https://example.com/doc");
        base.packages = packages;
        let mut fragment = Document::new("doc", "https://example.com/doc");
        fragment.packages = fragment_packages;

        merge_documents(&mut base, &fragment);
        let once = base.clone();
        merge_documents(&mut base, &fragment);
        prop_assert_eq!(base, once);
    }
}
