//! Registering relationships against a document.
//!
//! Unlike merging, registration is a deliberate mutation: an endpoint that
//! does not resolve is a programming error and the call fails without
//! touching the document.

use crate::error::{Endpoint, Result, SpdxError};
use crate::index::{classify_reference, resolve, DocumentIndex};
use crate::model::{Document, Relationship};
use crate::reconcile::merge_into;

/// Add one relationship, enhancing an existing identical one if present.
///
/// Fails with [`SpdxError::Referential`] when the source does not resolve,
/// or when the target neither resolves nor is `NOASSERTION`, `NONE` or a
/// `DocumentRef-` reference.
pub fn add_relationship(document: &mut Document, relationship: &Relationship) -> Result<()> {
    check_endpoints(relationship, |id| resolve(document, id).is_some())?;
    merge_into(
        &mut document.relationships,
        std::slice::from_ref(relationship),
    );
    Ok(())
}

/// Add several relationships.
///
/// Every endpoint is checked before the document is touched, so one bad
/// relationship rejects the whole batch. With `replace`, existing
/// relationships between the same pair of elements as any incoming one are
/// dropped first, letting a later pass restate the kind of a relationship.
pub fn add_relationships(
    document: &mut Document,
    relationships: &[Relationship],
    replace: bool,
) -> Result<()> {
    {
        let index = DocumentIndex::build(document);
        for relationship in relationships {
            check_endpoints(relationship, |id| index.contains(id))?;
        }
    }

    if replace {
        let before = document.relationships.len();
        document.relationships = std::mem::take(&mut document.relationships)
            .into_iter()
            .filter(|existing| !relationships.iter().any(|r| r.same_elements(existing)))
            .collect();
        let removed = before - document.relationships.len();
        if removed > 0 {
            tracing::debug!(removed, "replaced relationships between re-asserted pairs");
        }
    }

    let stats = merge_into(&mut document.relationships, relationships);
    tracing::debug!(
        added = stats.appended,
        enhanced = stats.matched,
        replace,
        "registered relationships"
    );
    Ok(())
}

fn check_endpoints(relationship: &Relationship, resolves: impl Fn(&str) -> bool) -> Result<()> {
    let source = relationship.spdx_element_id.as_str();
    if !resolves(source) {
        return Err(SpdxError::referential(
            source,
            Endpoint::Source,
            relationship.describe(),
        ));
    }

    let target = relationship.related_spdx_element.as_str();
    if !resolves(target) && !classify_reference(target).is_unresolvable_by_design() {
        return Err(SpdxError::referential(
            target,
            Endpoint::Target,
            relationship.describe(),
        ));
    }
    Ok(())
}
