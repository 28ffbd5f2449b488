//! **Merge and validate SPDX software bills of materials.**
//!
//! Build pipelines often produce several partial SBOMs for one product: a
//! package-manager scan, a source-file scan, a container scan. Each tool
//! knows something the others don't, and each assigns its own SPDX ids.
//! `spdx-reconcile` folds such fragments into one canonical SPDX 2.3
//! document without losing or duplicating anything, then checks the result
//! against SPDX's structural and referential rules.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the SPDX 2.3 document graph. Elements refer to each other
//!   by SPDX id strings, never by pointer.
//! - **[`identity`]**: when two records from different fragments describe
//!   the same thing (a package is its name and version, a file is its path).
//! - **[`reconcile`]**: field-level merge ([`reconcile::Enhance`]),
//!   collection merge ([`reconcile::merge_array`]) and whole-document merge
//!   with id aliasing ([`reconcile::merge_documents`]).
//! - **[`index`]**: resolving an id to the element it names.
//! - **[`relationships`]**: adding relationships with referential checks.
//! - **[`validation`]**: reporting every format and reference violation.
//! - **[`roots`]**: the packages a document describes.
//! - **[`config`]**, **[`pipeline`]**, **[`cli`]**: file-based configuration
//!   and the I/O shell used by the `spdx-reconcile` binary.
//!
//! ## Merging fragments
//!
//! ```
//! use spdx_reconcile::model::{Document, Package, Relationship, RelationshipType};
//! use spdx_reconcile::reconcile::merge_all;
//! use spdx_reconcile::validation::validate;
//!
//! let mut npm = Document::new("app", "https://example.com/app");
//! npm.packages.push(Package::new("SPDXRef-npm-lodash", "lodash", "4.17.21"));
//!
//! let mut scan = Document::new("app", "https://example.com/app");
//! let mut lodash = Package::new("SPDXRef-42", "lodash", "4.17.21");
//! lodash.license_concluded = "MIT".to_string();
//! scan.packages.push(lodash);
//! scan.relationships.push(Relationship::new(
//!     "SPDXRef-DOCUMENT",
//!     RelationshipType::Describes,
//!     "SPDXRef-42",
//! ));
//!
//! let (merged, _stats) = merge_all([npm, scan]).expect("two fragments");
//! assert_eq!(merged.packages.len(), 1);
//! assert_eq!(merged.packages[0].license_concluded, "MIT");
//! // The relationship now points at the surviving id.
//! assert_eq!(merged.relationships[0].related_spdx_element, "SPDXRef-npm-lodash");
//!
//! for issue in validate(&merged) {
//!     println!("{issue}");
//! }
//! ```
//!
//! ## Registering relationships
//!
//! ```
//! use spdx_reconcile::model::{Document, Package, Relationship, RelationshipType};
//! use spdx_reconcile::relationships::add_relationship;
//!
//! let mut doc = Document::new("app", "https://example.com/app");
//! doc.packages.push(Package::new("SPDXRef-app", "app", "1.0"));
//!
//! let dangling = Relationship::new("SPDXRef-app", RelationshipType::DependsOn, "SPDXRef-gone");
//! assert!(add_relationship(&mut doc, &dangling).is_err());
//! assert!(doc.relationships.is_empty());
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod identity;
pub mod index;
pub mod model;
pub mod pipeline;
pub mod reconcile;
pub mod relationships;
pub mod roots;
pub mod validation;

pub use config::{AppConfig, AppConfigBuilder, ConfigError, ConfigPreset, Validatable};
pub use error::{ErrorContext, Result, SpdxError};
pub use identity::Identity;
pub use index::{classify_reference, resolve, DocumentIndex, Element, ElementReference};
pub use model::Document;
pub use reconcile::{merge_all, merge_array, merge_documents, DocumentMergeStats, Enhance};
pub use relationships::{add_relationship, add_relationships};
pub use roots::root_packages;
pub use validation::{validate, validate_with, ValidationIssue, ValidationOptions};
