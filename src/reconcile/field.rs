//! Field-level combination rules.
//!
//! A populated base value is never overwritten. Unset scalars take the
//! incoming value, lists grow by the incoming items they lack, and nested
//! records are enhanced recursively.

use super::Enhance;
use crate::model::{
    AnnotationType, ChecksumAlgorithm, FileType, PrimaryPackagePurpose, ReferenceCategory,
    RelationshipType,
};

/// A value that may be "not provided".
pub trait Coalesce {
    fn is_unset(&self) -> bool;
}

impl Coalesce for String {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Coalesce for Option<T> {
    fn is_unset(&self) -> bool {
        self.is_none()
    }
}

macro_rules! coalesce_vocabulary {
    ($($vocab:ty),+ $(,)?) => {
        $(
            impl Coalesce for $vocab {
                fn is_unset(&self) -> bool {
                    self.is_missing()
                }
            }
        )+
    };
}

coalesce_vocabulary!(
    AnnotationType,
    ChecksumAlgorithm,
    FileType,
    PrimaryPackagePurpose,
    ReferenceCategory,
    RelationshipType,
);

/// Take `incoming` only when `base` is unset.
pub fn coalesce<T: Coalesce + Clone>(base: &mut T, incoming: &T) {
    if base.is_unset() && !incoming.is_unset() {
        base.clone_from(incoming);
    }
}

/// Append the incoming items `base` does not already contain, keeping
/// base order first and incoming order after it. Equality is by value.
pub fn union<T: PartialEq + Clone>(base: &mut Vec<T>, incoming: &[T]) {
    for item in incoming {
        if !base.contains(item) {
            base.push(item.clone());
        }
    }
}

/// Enhance an optional nested record, adopting a copy when base has none.
pub fn enhance_nested<T: Enhance + Clone>(base: &mut Option<T>, incoming: &Option<T>) {
    match (base.as_mut(), incoming) {
        (Some(existing), Some(new)) => existing.enhance(new),
        (None, Some(new)) => *base = Some(new.clone()),
        (_, None) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalesce_fills_empty_string() {
        let mut base = String::new();
        coalesce(&mut base, &"MIT".to_string());
        assert_eq!(base, "MIT");
    }

    #[test]
    fn test_coalesce_never_overwrites() {
        let mut base = "Apache-2.0".to_string();
        coalesce(&mut base, &"MIT".to_string());
        assert_eq!(base, "Apache-2.0");

        let mut analyzed = Some(false);
        coalesce(&mut analyzed, &Some(true));
        assert_eq!(analyzed, Some(false));
    }

    #[test]
    fn test_coalesce_vocabulary_missing() {
        let mut kind = RelationshipType::Missing;
        coalesce(&mut kind, &RelationshipType::DependsOn);
        assert_eq!(kind, RelationshipType::DependsOn);
        coalesce(&mut kind, &RelationshipType::Contains);
        assert_eq!(kind, RelationshipType::DependsOn);
    }

    #[test]
    fn test_union_preserves_order_and_skips_duplicates() {
        let mut creators = vec!["Tool: a".to_string(), "Person: b".to_string()];
        union(
            &mut creators,
            &[
                "Tool: c".to_string(),
                "Person: b".to_string(),
                "Tool: c".to_string(),
                "Organization: d".to_string(),
            ],
        );
        assert_eq!(
            creators,
            vec!["Tool: a", "Person: b", "Tool: c", "Organization: d"]
        );
    }
}
