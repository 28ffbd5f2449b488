//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs. Each returns the process exit code
//! instead of exiting, so tests can drive them directly.

mod merge;
mod roots;
mod validate;

pub use merge::run_merge;
pub use roots::run_roots;
pub use validate::{run_validate, ValidationReport};

use crate::config::{AppConfig, Validatable};

/// Report configuration problems without aborting the run.
pub fn warn_on_invalid_config(config: &AppConfig) {
    for error in config.validate() {
        tracing::warn!("config {error}");
    }
}
