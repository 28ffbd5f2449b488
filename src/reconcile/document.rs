//! Merging whole documents.
//!
//! Fragments from independent tools rarely agree on SPDX ids: the same
//! package may be `SPDXRef-Package-npm-lodash` in one and `SPDXRef-7` in
//! another. When an incoming element is matched to an existing one under a
//! different id, the incoming id becomes an alias for the surviving id and
//! every reference inside the incoming fragment is rewritten before it is
//! folded in. An incoming element that is new but reuses an id already
//! held in the base document gets a fresh `<id>-<n>` id, aliased the same
//! way. Files go first (snippets point at files), then snippets, then
//! packages (which list their files), then relationships.

use super::collection::{merge_into, reconcile, MergeStats, Placement};
use super::field::{coalesce, union};
use super::Enhance;
use crate::model::{Document, DOCUMENT_REF_PREFIX};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Summary of a document merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentMergeStats {
    pub packages: MergeStats,
    pub files: MergeStats,
    pub snippets: MergeStats,
    pub relationships: MergeStats,
    pub annotations: MergeStats,
    pub external_document_refs: MergeStats,
    pub extracted_licensing_infos: MergeStats,
    /// Incoming ids rewritten to the id of the element they merged into
    pub aliased_ids: usize,
    /// New incoming elements given a fresh id because theirs was taken
    pub renamed_ids: usize,
}

impl DocumentMergeStats {
    /// Elements (packages, files, snippets) that were matched to existing ones.
    #[must_use]
    pub const fn elements_matched(&self) -> usize {
        self.packages.matched + self.files.matched + self.snippets.matched
    }

    /// Elements (packages, files, snippets) that were new.
    #[must_use]
    pub const fn elements_appended(&self) -> usize {
        self.packages.appended + self.files.appended + self.snippets.appended
    }
}

impl std::ops::AddAssign for DocumentMergeStats {
    fn add_assign(&mut self, other: Self) {
        self.packages += other.packages;
        self.files += other.files;
        self.snippets += other.snippets;
        self.relationships += other.relationships;
        self.annotations += other.annotations;
        self.external_document_refs += other.external_document_refs;
        self.extracted_licensing_infos += other.extracted_licensing_infos;
        self.aliased_ids += other.aliased_ids;
        self.renamed_ids += other.renamed_ids;
    }
}

/// Switches for [`merge_documents_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Drop existing relationships between any pair of elements the incoming
    /// fragment relates, so the fragment's relationship kinds win
    pub replace_relationships: bool,
}

/// Incoming id → surviving id.
#[derive(Debug, Default)]
struct IdAliases {
    map: HashMap<String, String>,
    /// Element ids the base document held before the merge
    held: HashSet<String>,
    /// Every id in either document, plus fresh ids handed out
    taken: HashSet<String>,
    renamed: usize,
}

fn element_ids(doc: &Document) -> impl Iterator<Item = &str> {
    doc.external_document_refs
        .iter()
        .map(|r| r.external_document_id.as_str())
        .chain(doc.files.iter().map(|f| f.spdx_id.as_str()))
        .chain(doc.snippets.iter().map(|s| s.spdx_id.as_str()))
        .chain(doc.packages.iter().map(|p| p.spdx_id.as_str()))
        .filter(|id| !id.is_empty())
}

impl IdAliases {
    fn for_merge(base: &Document, incoming: &Document) -> Self {
        let held: HashSet<String> = element_ids(base).map(str::to_string).collect();
        let mut taken = held.clone();
        taken.extend(element_ids(incoming).map(str::to_string));
        taken.insert(base.spdx_id.clone());
        Self {
            held,
            taken,
            ..Self::default()
        }
    }

    fn insert(&mut self, from: &str, to: &str) {
        if from.is_empty() || to.is_empty() || from == to {
            return;
        }
        tracing::debug!(from, to, "aliasing merged element id");
        self.map.insert(from.to_string(), to.to_string());
    }

    /// Record aliases for every incoming element that merged into an
    /// existing element with a different id.
    fn record<T>(
        &mut self,
        incoming: &[T],
        merged: &[T],
        placements: &[Placement],
        id: fn(&T) -> &str,
    ) {
        for (new, placement) in incoming.iter().zip(placements) {
            if let Placement::Matched(idx) = placement {
                self.insert(id(new), id(&merged[*idx]));
            }
        }
    }

    /// Give every appended element whose id the base document already held
    /// a fresh id, and alias the old id to it.
    fn rename_collisions<T>(
        &mut self,
        merged: &mut [T],
        placements: &[Placement],
        id: fn(&mut T) -> &mut String,
    ) {
        for placement in placements {
            let Placement::Appended(idx) = *placement else {
                continue;
            };
            let current = id(&mut merged[idx]);
            if !self.held.contains(current.as_str()) {
                continue;
            }
            let fresh = self.fresh_id(current.as_str());
            tracing::debug!(
                from = current.as_str(),
                to = fresh.as_str(),
                "renaming colliding element id"
            );
            self.map.insert(current.clone(), fresh.clone());
            self.renamed += 1;
            *current = fresh;
        }
    }

    fn fresh_id(&mut self, id: &str) -> String {
        let mut n = 1usize;
        loop {
            let candidate = format!("{id}-{n}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Rewrite `value` in place if it names an aliased element, including
    /// the `DocumentRef-x` half of a `DocumentRef-x:SPDXRef-y` reference.
    fn rewrite(&self, value: &mut String) {
        if let Some(target) = self.map.get(value.as_str()) {
            value.clone_from(target);
            return;
        }
        if value.starts_with(DOCUMENT_REF_PREFIX) {
            if let Some((doc_ref, local)) = value.split_once(':') {
                if let Some(target) = self.map.get(doc_ref) {
                    *value = format!("{target}:{local}");
                }
            }
        }
    }

    fn aliased(&self) -> usize {
        self.map.len().saturating_sub(self.renamed)
    }
}

/// Fold `incoming` into `base`, returning what happened.
///
/// This never fails; references that still dangle afterwards are left for
/// validation to report.
pub fn merge_documents(base: &mut Document, incoming: &Document) -> DocumentMergeStats {
    merge_documents_with(base, incoming, MergeOptions::default())
}

/// [`merge_documents`] with explicit options.
pub fn merge_documents_with(
    base: &mut Document,
    incoming: &Document,
    options: MergeOptions,
) -> DocumentMergeStats {
    let mut aliases = IdAliases::for_merge(base, incoming);
    let mut incoming = incoming.clone();
    let mut stats = DocumentMergeStats::default();

    coalesce(&mut base.spdx_id, &incoming.spdx_id);
    aliases.insert(&incoming.spdx_id, &base.spdx_id);
    coalesce(&mut base.spdx_version, &incoming.spdx_version);
    coalesce(&mut base.data_license, &incoming.data_license);
    coalesce(&mut base.name, &incoming.name);
    coalesce(&mut base.document_namespace, &incoming.document_namespace);
    coalesce(&mut base.comment, &incoming.comment);
    base.creation_info.enhance(&incoming.creation_info);

    let mut doc_refs = reconcile(
        std::mem::take(&mut base.external_document_refs),
        &incoming.external_document_refs,
    );
    aliases.record(
        &incoming.external_document_refs,
        &doc_refs.items,
        &doc_refs.placements,
        |r| r.external_document_id.as_str(),
    );
    aliases.rename_collisions(&mut doc_refs.items, &doc_refs.placements, |r| {
        &mut r.external_document_id
    });
    stats.external_document_refs = doc_refs.stats();
    base.external_document_refs = doc_refs.items;

    stats.extracted_licensing_infos = merge_into(
        &mut base.has_extracted_licensing_infos,
        &incoming.has_extracted_licensing_infos,
    );

    let mut files = reconcile(std::mem::take(&mut base.files), &incoming.files);
    aliases.record(&incoming.files, &files.items, &files.placements, |f| f.spdx_id.as_str());
    aliases.rename_collisions(&mut files.items, &files.placements, |f| &mut f.spdx_id);
    stats.files = files.stats();
    base.files = files.items;

    for snippet in &mut incoming.snippets {
        aliases.rewrite(&mut snippet.snippet_from_file);
    }
    let mut snippets = reconcile(std::mem::take(&mut base.snippets), &incoming.snippets);
    aliases.record(
        &incoming.snippets,
        &snippets.items,
        &snippets.placements,
        |s| s.spdx_id.as_str(),
    );
    aliases.rename_collisions(&mut snippets.items, &snippets.placements, |s| &mut s.spdx_id);
    stats.snippets = snippets.stats();
    base.snippets = snippets.items;

    for package in &mut incoming.packages {
        for file_id in &mut package.has_files {
            aliases.rewrite(file_id);
        }
    }
    let mut packages = reconcile(std::mem::take(&mut base.packages), &incoming.packages);
    aliases.record(
        &incoming.packages,
        &packages.items,
        &packages.placements,
        |p| p.spdx_id.as_str(),
    );
    aliases.rename_collisions(&mut packages.items, &packages.placements, |p| &mut p.spdx_id);
    stats.packages = packages.stats();
    base.packages = packages.items;

    for described in &mut incoming.document_describes {
        aliases.rewrite(described);
    }
    union(&mut base.document_describes, &incoming.document_describes);

    for rel in &mut incoming.relationships {
        aliases.rewrite(&mut rel.spdx_element_id);
        aliases.rewrite(&mut rel.related_spdx_element);
    }
    if options.replace_relationships {
        base.relationships.retain(|existing| {
            !incoming
                .relationships
                .iter()
                .any(|r| r.same_elements(existing))
        });
    }
    stats.relationships = merge_into(&mut base.relationships, &incoming.relationships);
    stats.annotations = merge_into(&mut base.annotations, &incoming.annotations);
    stats.aliased_ids = aliases.aliased();
    stats.renamed_ids = aliases.renamed;

    tracing::debug!(
        matched = stats.elements_matched(),
        appended = stats.elements_appended(),
        relationships = stats.relationships.appended,
        aliased = stats.aliased_ids,
        renamed = stats.renamed_ids,
        "merged fragment '{}'",
        incoming.name
    );

    stats
}

impl Enhance for Document {
    fn enhance(&mut self, incoming: &Self) {
        merge_documents(self, incoming);
    }
}

/// Fold a sequence of fragments into the first one.
///
/// Returns `None` when `fragments` is empty.
pub fn merge_all<I>(fragments: I) -> Option<(Document, DocumentMergeStats)>
where
    I: IntoIterator<Item = Document>,
{
    merge_all_with(fragments, MergeOptions::default())
}

/// [`merge_all`] with explicit options.
pub fn merge_all_with<I>(fragments: I, options: MergeOptions) -> Option<(Document, DocumentMergeStats)>
where
    I: IntoIterator<Item = Document>,
{
    let mut fragments = fragments.into_iter();
    let mut merged = fragments.next()?;
    let mut total = DocumentMergeStats::default();
    for fragment in fragments {
        total += merge_documents_with(&mut merged, &fragment, options);
    }
    tracing::info!(
        packages = merged.packages.len(),
        files = merged.files.len(),
        snippets = merged.snippets.len(),
        relationships = merged.relationships.len(),
        "merged {} duplicate elements, {} aliased ids",
        total.elements_matched(),
        total.aliased_ids
    );
    Some((merged, total))
}
