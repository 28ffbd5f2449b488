//! Set-union of element collections under [`Identity`].

use super::Enhance;
use crate::identity::Identity;
use serde::Serialize;
use std::collections::HashMap;

/// Where an incoming element ended up in the merged collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Enhanced an existing element at this index
    Matched(usize),
    /// Appended as a new element at this index
    Appended(usize),
}

impl Placement {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Matched(i) | Self::Appended(i) => i,
        }
    }
}

/// Counts of how a collection merge resolved its incoming elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeStats {
    pub matched: usize,
    pub appended: usize,
}

impl MergeStats {
    fn from_placements(placements: &[Placement]) -> Self {
        let matched = placements
            .iter()
            .filter(|p| matches!(p, Placement::Matched(_)))
            .count();
        Self {
            matched,
            appended: placements.len() - matched,
        }
    }
}

impl std::ops::AddAssign for MergeStats {
    fn add_assign(&mut self, other: Self) {
        self.matched += other.matched;
        self.appended += other.appended;
    }
}

/// A merged collection plus the placement of every incoming element.
#[derive(Debug)]
pub struct Reconciled<T> {
    pub items: Vec<T>,
    pub placements: Vec<Placement>,
}

impl<T> Reconciled<T> {
    #[must_use]
    pub fn stats(&self) -> MergeStats {
        MergeStats::from_placements(&self.placements)
    }
}

/// Merge `incoming` into `base`.
///
/// Each incoming element is matched against base and against elements
/// appended earlier in the same call. A match is enhanced in place; anything
/// unmatched is cloned and appended. Base order is preserved and appended
/// elements keep their encounter order.
pub fn reconcile<T>(base: Vec<T>, incoming: &[T]) -> Reconciled<T>
where
    T: Identity + Enhance + Clone,
{
    let mut items = base;
    let mut buckets: HashMap<u64, Vec<usize>> = HashMap::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        buckets.entry(item.identity_hash()).or_default().push(idx);
    }

    let mut placements = Vec::with_capacity(incoming.len());
    for new in incoming {
        let candidates = buckets.entry(new.identity_hash()).or_default();
        let found = candidates
            .iter()
            .copied()
            .find(|&idx| items[idx].same_as(new));

        match found {
            Some(idx) => {
                items[idx].enhance(new);
                placements.push(Placement::Matched(idx));
            }
            None => {
                let idx = items.len();
                candidates.push(idx);
                items.push(new.clone());
                placements.push(Placement::Appended(idx));
            }
        }
    }

    Reconciled { items, placements }
}

/// Merge two collections, returning the new collection.
pub fn merge_array<T>(base: Vec<T>, incoming: &[T]) -> Vec<T>
where
    T: Identity + Enhance + Clone,
{
    reconcile(base, incoming).items
}

/// Merge `incoming` into a collection field: build the merged collection,
/// then swap it into place.
pub fn merge_into<T>(field: &mut Vec<T>, incoming: &[T]) -> MergeStats
where
    T: Identity + Enhance + Clone,
{
    if incoming.is_empty() {
        return MergeStats::default();
    }
    let reconciled = reconcile(std::mem::take(field), incoming);
    let stats = reconciled.stats();
    *field = reconciled.items;
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Annotation, AnnotationType, Package};

    fn pkg(id: &str, name: &str, version: &str) -> Package {
        Package::new(id, name, version)
    }

    #[test]
    fn test_empty_incoming_is_identity() {
        let base = vec![pkg("SPDXRef-1", "a", "1"), pkg("SPDXRef-2", "b", "1")];
        assert_eq!(merge_array(base.clone(), &[]), base);
    }

    #[test]
    fn test_empty_base_copies_incoming() {
        let incoming = vec![pkg("SPDXRef-1", "a", "1"), pkg("SPDXRef-2", "b", "1")];
        assert_eq!(merge_array(Vec::new(), &incoming), incoming);
    }

    #[test]
    fn test_matches_enhance_and_unmatched_append_in_order() {
        let mut rich_a = pkg("SPDXRef-9", "a", "1");
        rich_a.license_declared = "MIT".to_string();
        let base = vec![pkg("SPDXRef-1", "a", "1"), pkg("SPDXRef-2", "b", "1")];
        let incoming = vec![pkg("SPDXRef-3", "c", "1"), rich_a, pkg("SPDXRef-4", "d", "1")];

        let reconciled = reconcile(base, &incoming);
        let names: Vec<_> = reconciled.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
        assert_eq!(reconciled.items[0].spdx_id, "SPDXRef-1");
        assert_eq!(reconciled.items[0].license_declared, "MIT");
        assert_eq!(
            reconciled.placements,
            vec![
                Placement::Appended(2),
                Placement::Matched(0),
                Placement::Appended(3)
            ]
        );
        assert_eq!(
            reconciled.stats(),
            MergeStats {
                matched: 1,
                appended: 2
            }
        );
    }

    #[test]
    fn test_duplicates_within_incoming_collapse() {
        let mut second = pkg("SPDXRef-x", "a", "1");
        second.homepage = "https://a.example".to_string();
        let merged = merge_array(Vec::new(), &[pkg("SPDXRef-1", "a", "1"), second]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].spdx_id, "SPDXRef-1");
        assert_eq!(merged[0].homepage, "https://a.example");
    }

    #[test]
    fn test_merge_into_swaps_field() {
        let note = Annotation::new(
            "Tool: scanner",
            "2024-01-01T00:00:00Z",
            AnnotationType::Review,
            "ok",
        );
        let mut annotations = vec![note.clone()];
        let stats = merge_into(&mut annotations, &[note.clone(), note]);
        assert_eq!(annotations.len(), 1);
        assert_eq!(stats.matched, 2);
    }
}
