//! Identifier resolution within one document.
//!
//! Elements refer to each other by SPDX id only. [`resolve`] is the plain
//! linear lookup; [`DocumentIndex`] precomputes an id map for callers that
//! resolve many ids against an unchanging document (validation, root
//! resolution, batch relationship registration).
//!
//! Cross-document references (`DocumentRef-...`) and the `NOASSERTION` /
//! `NONE` sentinels never resolve locally; [`classify_reference`] lets
//! callers tell them apart from genuinely dangling ids.

use crate::model::{
    Document, File, Package, Snippet, DOCUMENT_REF_PREFIX, NOASSERTION, NONE,
};
use std::collections::HashMap;

/// Kind of an identifiable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Document,
    Package,
    File,
    Snippet,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Document => write!(f, "Document"),
            Self::Package => write!(f, "Package"),
            Self::File => write!(f, "File"),
            Self::Snippet => write!(f, "Snippet"),
        }
    }
}

/// A borrowed element found by id.
#[derive(Debug, Clone, Copy)]
pub enum Element<'a> {
    Document(&'a Document),
    Package(&'a Package),
    File(&'a File),
    Snippet(&'a Snippet),
}

impl<'a> Element<'a> {
    #[must_use]
    pub fn spdx_id(&self) -> &'a str {
        match self {
            Self::Document(d) => &d.spdx_id,
            Self::Package(p) => &p.spdx_id,
            Self::File(f) => &f.spdx_id,
            Self::Snippet(s) => &s.spdx_id,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Document(_) => ElementKind::Document,
            Self::Package(_) => ElementKind::Package,
            Self::File(_) => ElementKind::File,
            Self::Snippet(_) => ElementKind::Snippet,
        }
    }

    #[must_use]
    pub const fn as_package(&self) -> Option<&'a Package> {
        match self {
            Self::Package(p) => Some(p),
            _ => None,
        }
    }
}

/// What an identifier string points at, before any lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementReference {
    /// An id that should resolve inside this document
    Local,
    /// `DocumentRef-<doc>:<id>`, resolved against another document
    External,
    /// `NOASSERTION`
    NoAssertion,
    /// `NONE`
    None,
}

impl ElementReference {
    /// Valid without a local element behind it.
    #[must_use]
    pub const fn is_unresolvable_by_design(self) -> bool {
        !matches!(self, Self::Local)
    }
}

#[must_use]
pub fn classify_reference(id: &str) -> ElementReference {
    if id == NOASSERTION {
        ElementReference::NoAssertion
    } else if id == NONE {
        ElementReference::None
    } else if id.starts_with(DOCUMENT_REF_PREFIX) {
        ElementReference::External
    } else {
        ElementReference::Local
    }
}

/// Find the element with SPDX id `id` by scanning the document.
///
/// Looks at the document itself, then packages, files and snippets, and
/// returns the first match.
#[must_use]
pub fn resolve<'a>(document: &'a Document, id: &str) -> Option<Element<'a>> {
    if id.is_empty() || classify_reference(id) != ElementReference::Local {
        return None;
    }
    if document.spdx_id == id {
        return Some(Element::Document(document));
    }
    document
        .packages
        .iter()
        .find(|p| p.spdx_id == id)
        .map(Element::Package)
        .or_else(|| {
            document
                .files
                .iter()
                .find(|f| f.spdx_id == id)
                .map(Element::File)
        })
        .or_else(|| {
            document
                .snippets
                .iter()
                .find(|s| s.spdx_id == id)
                .map(Element::Snippet)
        })
}

/// Precomputed id → element map for one document.
///
/// Resolves exactly like [`resolve`] (first match wins) but in O(1). Must be
/// rebuilt after the document's element collections change.
#[derive(Debug, Clone)]
#[must_use]
pub struct DocumentIndex<'a> {
    by_id: HashMap<&'a str, Element<'a>>,
    duplicates: Vec<(&'a str, ElementKind)>,
}

impl<'a> DocumentIndex<'a> {
    /// Build an index over every identifiable element of `document`.
    pub fn build(document: &'a Document) -> Self {
        let mut index = Self {
            by_id: HashMap::with_capacity(document.element_count() + 1),
            duplicates: Vec::new(),
        };

        index.insert(Element::Document(document));
        for package in &document.packages {
            index.insert(Element::Package(package));
        }
        for file in &document.files {
            index.insert(Element::File(file));
        }
        for snippet in &document.snippets {
            index.insert(Element::Snippet(snippet));
        }
        index
    }

    fn insert(&mut self, element: Element<'a>) {
        let id = element.spdx_id();
        if id.is_empty() {
            return;
        }
        if self.by_id.contains_key(id) {
            self.duplicates.push((id, element.kind()));
        } else {
            self.by_id.insert(id, element);
        }
    }

    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<Element<'a>> {
        self.by_id.get(id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Ids carried by more than one element, with the kind of each later
    /// occurrence.
    #[must_use]
    pub fn duplicate_ids(&self) -> &[(&'a str, ElementKind)] {
        &self.duplicates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
