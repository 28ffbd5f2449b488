//! Directed edges between SPDX elements.

use super::RelationshipType;
use serde::{Deserialize, Serialize};

/// `source --kind--> target`, both ends given as SPDX identifiers.
///
/// The target may also be `NOASSERTION`, `NONE`, or a `DocumentRef-` prefixed
/// reference into another document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Relationship {
    pub spdx_element_id: String,
    #[serde(skip_serializing_if = "RelationshipType::is_missing")]
    pub relationship_type: RelationshipType,
    pub related_spdx_element: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Relationship {
    pub fn new(
        source: impl Into<String>,
        relationship_type: RelationshipType,
        target: impl Into<String>,
    ) -> Self {
        Self {
            spdx_element_id: source.into(),
            relationship_type,
            related_spdx_element: target.into(),
            comment: String::new(),
        }
    }

    /// Short `source TYPE target` rendering used in errors and logs.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{} {} {}",
            self.spdx_element_id, self.relationship_type, self.related_spdx_element
        )
    }
}
