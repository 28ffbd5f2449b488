//! Integration tests for fragment merging.

use spdx_reconcile::model::{
    Annotation, AnnotationType, Checksum, ChecksumAlgorithm, CreationInfo, Document,
    ExternalReference, File, Package, Relationship, RelationshipType, Snippet, SnippetRange,
};
use spdx_reconcile::reconcile::{merge_all, merge_array, merge_documents, Enhance, MergeStats};
use spdx_reconcile::roots::root_packages;
use spdx_reconcile::validation::validate;

const LODASH_SHA1: &str = "f1e9b1b7a3e9c2d5e3c6a7b8d9e0f1a2b3c4d5e6";
const MAIN_SHA1: &str = "d6a770ba38583ed4bb4525bd96e50461655d2758";

fn fragment(tool: &str) -> Document {
    let mut doc = Document::new("webapp", "https://example.com/spdx/webapp-1.0");
    doc.creation_info = CreationInfo::new(vec![format!("Tool: {tool}")], "2024-06-01T08:30:00Z");
    doc
}

/// What a package-manager scanner sees: packages, purls, dependencies.
fn package_manager_fragment() -> Document {
    let mut doc = fragment("npm-scanner-2.1");

    let mut app = Package::new("SPDXRef-Package-webapp", "webapp", "1.0.0");
    app.download_location = "NOASSERTION".to_string();
    app.supplier = "Organization: Example Corp".to_string();
    doc.packages.push(app);

    let mut lodash = Package::new("SPDXRef-Package-npm-lodash", "lodash", "4.17.21");
    lodash.download_location = "https://registry.npmjs.org/lodash/-/lodash-4.17.21.tgz".to_string();
    lodash
        .external_refs
        .push(ExternalReference::purl("pkg:npm/lodash@4.17.21"));
    lodash.checksums.push(Checksum::sha1(LODASH_SHA1));
    doc.packages.push(lodash);

    doc.document_describes.push("SPDXRef-Package-webapp".to_string());
    doc.relationships.push(Relationship::new(
        "SPDXRef-Package-webapp",
        RelationshipType::DependsOn,
        "SPDXRef-Package-npm-lodash",
    ));
    doc
}

/// What a license/source scanner sees: files, licenses, its own ids.
fn source_scan_fragment() -> Document {
    let mut doc = fragment("source-scanner-31.0");

    let mut lodash = Package::new("SPDXRef-1", "lodash", "4.17.21");
    lodash.license_concluded = "MIT".to_string();
    lodash.license_declared = "MIT".to_string();
    lodash.download_location = "NOASSERTION".to_string();
    lodash.has_files.push("SPDXRef-2".to_string());
    doc.packages.push(lodash);

    let mut file = File::new("SPDXRef-2", "./node_modules/lodash/lodash.js")
        .with_checksum(Checksum::new(ChecksumAlgorithm::Sha256, "ab12"));
    file.license_concluded = "MIT".to_string();
    doc.files.push(file);

    doc.relationships.push(Relationship::new(
        "SPDXRef-1",
        RelationshipType::Contains,
        "SPDXRef-2",
    ));
    doc
}

#[test]
fn test_two_scanners_fold_into_one_package() {
    let (merged, stats) =
        merge_all([package_manager_fragment(), source_scan_fragment()]).unwrap();

    assert_eq!(merged.packages.len(), 2);
    assert_eq!(stats.packages, MergeStats { matched: 1, appended: 0 });
    assert_eq!(stats.files, MergeStats { matched: 0, appended: 1 });

    let lodash = merged.package("SPDXRef-Package-npm-lodash").unwrap();
    // Known values survive, gaps are filled.
    assert_eq!(
        lodash.download_location,
        "https://registry.npmjs.org/lodash/-/lodash-4.17.21.tgz"
    );
    assert_eq!(lodash.license_concluded, "MIT");
    assert_eq!(lodash.external_refs.len(), 1);
    assert_eq!(lodash.has_files, vec!["SPDXRef-2"]);

    // The scan's Contains edge now starts at the surviving package id.
    assert!(merged.relationships.iter().any(|r| {
        r.spdx_element_id == "SPDXRef-Package-npm-lodash"
            && r.relationship_type == RelationshipType::Contains
            && r.related_spdx_element == "SPDXRef-2"
    }));
    assert_eq!(
        merged.creation_info.creators,
        vec!["Tool: npm-scanner-2.1", "Tool: source-scanner-31.0"]
    );
}

#[test]
fn test_merge_order_decides_conflicting_scalars() {
    let mut first = package_manager_fragment();
    first.packages[1].license_concluded = "MIT OR Apache-2.0".to_string();

    let (merged, _) = merge_all([first, source_scan_fragment()]).unwrap();
    let lodash = merged.package("SPDXRef-Package-npm-lodash").unwrap();
    assert_eq!(lodash.license_concluded, "MIT OR Apache-2.0");
    assert_eq!(lodash.license_declared, "MIT");
}

#[test]
fn test_file_checksums_accumulate_across_scanners() {
    let mut a = fragment("a");
    a.files
        .push(File::new("SPDXRef-File-main", "./src/main.c").with_checksum(Checksum::sha1(MAIN_SHA1)));

    let mut b = fragment("b");
    b.files.push(
        File::new("SPDXRef-F9", "./src/main.c")
            .with_checksum(Checksum::new(ChecksumAlgorithm::Sha256, "9f86d081"))
            .with_checksum(Checksum::sha1("0000000000000000000000000000000000000000")),
    );

    merge_documents(&mut a, &b);

    assert_eq!(a.files.len(), 1);
    let file = &a.files[0];
    assert_eq!(file.spdx_id, "SPDXRef-File-main");
    assert_eq!(file.checksums.len(), 2);
    // The first reported SHA-1 is kept.
    assert_eq!(file.sha1(), Some(MAIN_SHA1));
}

#[test]
fn test_snippets_match_on_file_and_byte_range() {
    let mut a = fragment("a");
    a.files
        .push(File::new("SPDXRef-File-main", "./src/main.c").with_checksum(Checksum::sha1(MAIN_SHA1)));
    a.snippets.push(Snippet::new(
        "SPDXRef-Snippet-1",
        "SPDXRef-File-main",
        SnippetRange::new(100, 200),
    ));

    let mut b = a.clone();
    b.snippets[0].line_range = Some(SnippetRange::new(5, 9));
    b.snippets[0].license_concluded = "GPL-2.0-only".to_string();
    b.snippets.push(Snippet::new(
        "SPDXRef-Snippet-2",
        "SPDXRef-File-main",
        SnippetRange::new(100, 201),
    ));

    let stats = merge_documents(&mut a, &b);

    assert_eq!(stats.snippets, MergeStats { matched: 1, appended: 1 });
    assert_eq!(a.snippets[0].line_range, Some(SnippetRange::new(5, 9)));
    assert_eq!(a.snippets[0].license_concluded, "GPL-2.0-only");
}

#[test]
fn test_remerging_a_fragment_changes_nothing() {
    let (once, _) = merge_all([package_manager_fragment(), source_scan_fragment()]).unwrap();
    let mut twice = once.clone();
    let stats = merge_documents(&mut twice, &source_scan_fragment());

    assert_eq!(twice, once);
    assert_eq!(stats.elements_appended(), 0);
    assert_eq!(stats.relationships.appended, 0);
}

#[test]
fn test_new_element_reusing_a_taken_id_is_renamed() {
    let mut base = fragment("image-scanner");
    base.packages.push(Package::new("SPDXRef-1", "openssl", "3.0.13"));
    base.files.push(File::new("SPDXRef-3", "./src/main.c"));
    base.document_describes.push("SPDXRef-1".to_string());

    let mut incoming = fragment("lockfile-scanner");
    incoming.packages.push(Package::new("SPDXRef-1", "zlib", "1.3.1"));
    incoming.packages.push(Package::new("SPDXRef-2", "app", "2.0.0"));
    incoming.files.push(File::new("SPDXRef-3", "./src/app.c"));
    incoming.relationships.push(Relationship::new(
        "SPDXRef-2",
        RelationshipType::DependsOn,
        "SPDXRef-1",
    ));
    incoming.document_describes.push("SPDXRef-1".to_string());

    let mut merged = base.clone();
    let stats = merge_documents(&mut merged, &incoming);

    let ids: Vec<_> = merged
        .packages
        .iter()
        .map(|p| (p.spdx_id.as_str(), p.name.as_str()))
        .collect();
    assert_eq!(
        ids,
        vec![("SPDXRef-1", "openssl"), ("SPDXRef-1-1", "zlib"), ("SPDXRef-2", "app")]
    );
    assert_eq!(merged.files[1].spdx_id, "SPDXRef-3-1");
    assert_eq!(stats.renamed_ids, 2);
    assert_eq!(stats.aliased_ids, 0);

    // The fragment's references follow its package, not the base's.
    assert_eq!(merged.relationships[0].related_spdx_element, "SPDXRef-1-1");
    let roots: Vec<_> = root_packages(&merged)
        .into_iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(roots, vec!["openssl", "zlib"]);

    // Merging the same fragment again matches the renamed elements.
    let mut again = merged.clone();
    let stats = merge_documents(&mut again, &incoming);
    assert_eq!(again, merged);
    assert_eq!(stats.elements_appended(), 0);
}

#[test]
fn test_document_enhance_matches_merge() {
    let mut via_enhance = package_manager_fragment();
    via_enhance.enhance(&source_scan_fragment());

    let mut via_merge = package_manager_fragment();
    merge_documents(&mut via_merge, &source_scan_fragment());

    assert_eq!(via_enhance, via_merge);
}

#[test]
fn test_merge_array_on_value_records() {
    let review = Annotation::new(
        "Person: Jane Doe",
        "2024-06-02T10:00:00Z",
        AnnotationType::Review,
        "license confirmed",
    );
    let other = Annotation::new(
        "Person: Jane Doe",
        "2024-06-02T10:00:00Z",
        AnnotationType::Other,
        "license confirmed",
    );

    let merged = merge_array(vec![review.clone()], &[review.clone(), other.clone()]);
    assert_eq!(merged, vec![review, other]);

    let purl = ExternalReference::purl("pkg:npm/lodash@4.17.21");
    let mut commented = purl.clone();
    commented.comment = "from lockfile".to_string();
    let merged = merge_array(vec![purl], &[commented.clone()]);
    assert_eq!(merged, vec![commented]);
}

#[test]
fn test_merged_document_validates_cleanly() {
    let (mut merged, _) = merge_all([package_manager_fragment(), source_scan_fragment()]).unwrap();
    // The source scan never reported a SHA-1 for its file.
    merged.files[0]
        .checksums
        .push(Checksum::sha1("6b3a55e0261b0304143f805a24924d0c1c44524f"));

    let issues = validate(&merged);
    assert!(issues.is_empty(), "{issues:#?}");
}

#[test]
fn test_merged_package_snapshot() {
    let (merged, _) = merge_all([package_manager_fragment(), source_scan_fragment()]).unwrap();
    let lodash = merged.package("SPDXRef-Package-npm-lodash").unwrap();

    insta::assert_json_snapshot!(lodash, @r###"
    {
      "SPDXID": "SPDXRef-Package-npm-lodash",
      "name": "lodash",
      "versionInfo": "4.17.21",
      "downloadLocation": "https://registry.npmjs.org/lodash/-/lodash-4.17.21.tgz",
      "checksums": [
        {
          "algorithm": "SHA1",
          "checksumValue": "f1e9b1b7a3e9c2d5e3c6a7b8d9e0f1a2b3c4d5e6"
        }
      ],
      "licenseConcluded": "MIT",
      "licenseDeclared": "MIT",
      "externalRefs": [
        {
          "referenceCategory": "PACKAGE-MANAGER",
          "referenceType": "purl",
          "referenceLocator": "pkg:npm/lodash@4.17.21"
        }
      ],
      "hasFiles": [
        "SPDXRef-2"
      ]
    }
    "###);
}
