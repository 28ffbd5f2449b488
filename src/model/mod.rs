//! In-memory SPDX document graph.
//!
//! The [`Document`] owns every element in flat vectors. Elements never hold
//! references to each other; every cross-reference is an SPDX identifier
//! string resolved through [`crate::index`]. This keeps the graph free of
//! ownership cycles and lets fragments be cloned and merged freely.
//!
//! String fields default to empty and collections to empty vectors, so a
//! document deserialized from a sparse fragment is always fully populated.

mod common;
mod document;
mod file;
mod package;
mod relationship;
mod snippet;
mod vocabulary;

pub use common::*;
pub use document::*;
pub use file::*;
pub use package::*;
pub use relationship::*;
pub use snippet::*;
pub use vocabulary::*;

/// SPDX id every document must carry.
pub const DOCUMENT_SPDX_ID: &str = "SPDXRef-DOCUMENT";
/// The only data license SPDX documents may declare.
pub const DATA_LICENSE: &str = "CC0-1.0";
/// Version written by [`Document::new`].
pub const SPDX_VERSION: &str = "SPDX-2.3";
/// "A value exists but the author makes no assertion about it."
pub const NOASSERTION: &str = "NOASSERTION";
/// "No value exists."
pub const NONE: &str = "NONE";
/// Prefix of local element identifiers.
pub const SPDX_REF_PREFIX: &str = "SPDXRef-";
/// Prefix of identifiers that point into another document.
pub const DOCUMENT_REF_PREFIX: &str = "DocumentRef-";
/// Prefix of extracted (non-list) license identifiers.
pub const LICENSE_REF_PREFIX: &str = "LicenseRef-";
