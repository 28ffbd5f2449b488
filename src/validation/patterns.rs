//! Field format checks shared by the validation rules.

use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

static SPDX_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^SPDX-\d+\.\d+$").expect("static regex"));

static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z$").expect("static regex")
});

static LICENSE_LIST_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+$").expect("static regex"));

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// `SPDX-<major>.<minor>`
pub(crate) fn is_spdx_version(value: &str) -> bool {
    SPDX_VERSION.is_match(value)
}

/// `YYYY-MM-DDThh:mm:ssZ` naming a real calendar instant.
pub(crate) fn is_timestamp(value: &str) -> bool {
    TIMESTAMP.is_match(value) && NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).is_ok()
}

/// `<int>.<int>`
pub(crate) fn is_license_list_version(value: &str) -> bool {
    LICENSE_LIST_VERSION.is_match(value)
}

/// Creator strings name who or what produced the document.
pub(crate) fn is_creator(value: &str) -> bool {
    ["Person:", "Organization:", "Tool:"]
        .iter()
        .any(|prefix| value.starts_with(prefix))
}

/// Suppliers and originators are people or organizations, never tools.
pub(crate) fn is_actor(value: &str) -> bool {
    value.starts_with("Person:") || value.starts_with("Organization:")
}
