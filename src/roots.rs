//! The packages a document says it describes.

use crate::model::{Document, Package, RelationshipType};
use std::collections::HashSet;

/// Root packages of `document`.
///
/// A package is a root when its id is in `documentDescribes`, when the
/// document `DESCRIBES` it, or when it is `DESCRIBED_BY` the document. Each
/// root is returned once, in package order.
#[must_use]
pub fn root_packages(document: &Document) -> Vec<&Package> {
    let mut root_ids: HashSet<&str> = document
        .document_describes
        .iter()
        .map(String::as_str)
        .collect();

    for rel in &document.relationships {
        match rel.relationship_type {
            RelationshipType::Describes if rel.spdx_element_id == document.spdx_id => {
                root_ids.insert(&rel.related_spdx_element);
            }
            RelationshipType::DescribedBy if rel.related_spdx_element == document.spdx_id => {
                root_ids.insert(&rel.spdx_element_id);
            }
            _ => {}
        }
    }

    let mut seen = HashSet::new();
    document
        .packages
        .iter()
        .filter(|p| root_ids.contains(p.spdx_id.as_str()) && seen.insert(p.spdx_id.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Relationship;

    #[test]
    fn test_union_of_describes_list_and_both_relationship_directions() {
        let mut doc = Document::new("doc", "https://example.com/doc");
        doc.packages.push(Package::new("SPDXRef-Package-1", "one", "1"));
        doc.packages.push(Package::new("SPDXRef-Package-2", "two", "1"));
        doc.packages.push(Package::new("SPDXRef-Package-3", "three", "1"));
        doc.document_describes.push("SPDXRef-Package-1".to_string());
        doc.relationships.push(Relationship::new(
            "SPDXRef-DOCUMENT",
            RelationshipType::Describes,
            "SPDXRef-Package-1",
        ));
        doc.relationships.push(Relationship::new(
            "SPDXRef-Package-2",
            RelationshipType::DescribedBy,
            "SPDXRef-DOCUMENT",
        ));
        doc.relationships.push(Relationship::new(
            "SPDXRef-Package-1",
            RelationshipType::Contains,
            "SPDXRef-Package-3",
        ));

        let ids: Vec<_> = root_packages(&doc).iter().map(|p| p.spdx_id.as_str()).collect();
        assert_eq!(ids, vec!["SPDXRef-Package-1", "SPDXRef-Package-2"]);
    }

    #[test]
    fn test_describes_from_other_source_is_ignored() {
        let mut doc = Document::new("doc", "https://example.com/doc");
        doc.packages.push(Package::new("SPDXRef-A", "a", "1"));
        doc.packages.push(Package::new("SPDXRef-B", "b", "1"));
        doc.relationships.push(Relationship::new(
            "SPDXRef-A",
            RelationshipType::Describes,
            "SPDXRef-B",
        ));
        assert!(root_packages(&doc).is_empty());
    }

    #[test]
    fn test_non_package_describes_entries_are_skipped() {
        let mut doc = Document::new("doc", "https://example.com/doc");
        doc.document_describes.push("SPDXRef-File-1".to_string());
        assert!(root_packages(&doc).is_empty());
    }
}
