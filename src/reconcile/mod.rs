//! Non-destructive merging of SPDX fragments.
//!
//! The merge is layered:
//!
//! - [`field`]: how two values of one field combine (coalesce, union, nest)
//! - [`Enhance`]: per-element merge, applying the field rules to every field
//! - [`merge_array`] / [`merge_into`]: set-union of collections under
//!   [`crate::identity::Identity`]
//! - [`merge_documents`]: whole-document merge with id aliasing
//!
//! None of these can fail. Missing or malformed incoming data simply does not
//! replace what is already known; validation reports it afterwards.
//!
//! ```
//! use spdx_reconcile::model::{Document, Package};
//! use spdx_reconcile::reconcile::merge_documents;
//!
//! let mut base = Document::new("app", "https://example.com/app");
//! base.packages.push(Package::new("SPDXRef-lodash", "lodash", "4.17.21"));
//!
//! let mut scan = base.clone();
//! scan.packages[0].license_declared = "MIT".to_string();
//!
//! merge_documents(&mut base, &scan);
//! assert_eq!(base.packages.len(), 1);
//! assert_eq!(base.packages[0].license_declared, "MIT");
//! ```

mod collection;
mod document;
mod enhance;
pub mod field;

pub use collection::{merge_array, merge_into, reconcile, MergeStats, Placement, Reconciled};
pub use document::{
    merge_all, merge_all_with, merge_documents, merge_documents_with, DocumentMergeStats,
    MergeOptions,
};

/// In-place, field-level merge of an incoming record into `self`.
///
/// Populated fields of `self` are never overwritten. Enhancing with a copy
/// of `self` leaves it unchanged.
pub trait Enhance {
    fn enhance(&mut self, incoming: &Self);
}
