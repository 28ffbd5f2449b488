//! Value records shared by several element kinds.

use super::{AnnotationType, ChecksumAlgorithm};
use serde::{Deserialize, Serialize};

/// A digest of an element's content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Checksum {
    #[serde(skip_serializing_if = "ChecksumAlgorithm::is_missing")]
    pub algorithm: ChecksumAlgorithm,
    pub checksum_value: String,
}

impl Checksum {
    pub fn new(algorithm: ChecksumAlgorithm, value: impl Into<String>) -> Self {
        Self {
            algorithm,
            checksum_value: value.into(),
        }
    }

    /// Convenience constructor for the SHA-1 digest every file must carry.
    pub fn sha1(value: impl Into<String>) -> Self {
        Self::new(ChecksumAlgorithm::Sha1, value)
    }
}

/// A review or comment attached to an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Annotation {
    pub annotator: String,
    pub annotation_date: String,
    #[serde(skip_serializing_if = "AnnotationType::is_missing")]
    pub annotation_type: AnnotationType,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Annotation {
    pub fn new(
        annotator: impl Into<String>,
        annotation_date: impl Into<String>,
        annotation_type: AnnotationType,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            annotator: annotator.into(),
            annotation_date: annotation_date.into(),
            annotation_type,
            comment: comment.into(),
        }
    }
}
