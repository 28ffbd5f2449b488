//! SPDX snippet elements.
//!
//! In memory a snippet carries its byte range (identity-bearing) and an
//! optional line range (informational). On the wire SPDX encodes both as a
//! `ranges` array of start/end pointers, so serde goes through
//! [`SnippetWire`]. Offsets start at 1; a `0..0` byte range means the input
//! had none and is not written back.

use super::Annotation;
use serde::{Deserialize, Serialize};

/// Inclusive range of offsets or line numbers within a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnippetRange {
    pub start: u64,
    pub end: u64,
}

impl SnippetRange {
    #[must_use]
    pub const fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }
}

/// A fragment of a file, identified by the file it came from and its byte range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SnippetWire", into = "SnippetWire")]
pub struct Snippet {
    pub spdx_id: String,
    pub snippet_from_file: String,
    pub byte_range: SnippetRange,
    pub line_range: Option<SnippetRange>,
    pub license_concluded: String,
    pub license_info_in_snippets: Vec<String>,
    pub license_comments: String,
    pub copyright_text: String,
    pub comment: String,
    pub name: String,
    pub attribution_texts: Vec<String>,
    pub annotations: Vec<Annotation>,
}

impl Snippet {
    pub fn new(
        spdx_id: impl Into<String>,
        snippet_from_file: impl Into<String>,
        byte_range: SnippetRange,
    ) -> Self {
        Self {
            spdx_id: spdx_id.into(),
            snippet_from_file: snippet_from_file.into(),
            byte_range,
            ..Self::default()
        }
    }
}

// ============================================================================
// Wire representation
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SnippetWire {
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    snippet_from_file: String,
    ranges: Vec<RangeWire>,
    #[serde(skip_serializing_if = "String::is_empty")]
    license_concluded: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    license_info_in_snippets: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    license_comments: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    copyright_text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    comment: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attribution_texts: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RangeWire {
    start_pointer: PointerWire,
    end_pointer: PointerWire,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PointerWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_number: Option<u64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    reference: String,
}

impl PointerWire {
    fn offset(offset: u64, reference: &str) -> Self {
        Self {
            offset: Some(offset),
            line_number: None,
            reference: reference.to_string(),
        }
    }

    fn line(line_number: u64, reference: &str) -> Self {
        Self {
            offset: None,
            line_number: Some(line_number),
            reference: reference.to_string(),
        }
    }
}

impl From<SnippetWire> for Snippet {
    fn from(wire: SnippetWire) -> Self {
        let mut byte_range = SnippetRange::default();
        let mut line_range = None;
        for range in &wire.ranges {
            match (range.start_pointer.offset, range.start_pointer.line_number) {
                (Some(start), _) => {
                    byte_range = SnippetRange::new(start, range.end_pointer.offset.unwrap_or(0));
                }
                (None, Some(start)) => {
                    line_range = Some(SnippetRange::new(
                        start,
                        range.end_pointer.line_number.unwrap_or(0),
                    ));
                }
                (None, None) => {}
            }
        }

        Self {
            spdx_id: wire.spdx_id,
            snippet_from_file: wire.snippet_from_file,
            byte_range,
            line_range,
            license_concluded: wire.license_concluded,
            license_info_in_snippets: wire.license_info_in_snippets,
            license_comments: wire.license_comments,
            copyright_text: wire.copyright_text,
            comment: wire.comment,
            name: wire.name,
            attribution_texts: wire.attribution_texts,
            annotations: wire.annotations,
        }
    }
}

impl From<Snippet> for SnippetWire {
    fn from(snippet: Snippet) -> Self {
        let file = snippet.snippet_from_file.as_str();
        let mut ranges = Vec::with_capacity(2);
        if snippet.byte_range != SnippetRange::default() {
            ranges.push(RangeWire {
                start_pointer: PointerWire::offset(snippet.byte_range.start, file),
                end_pointer: PointerWire::offset(snippet.byte_range.end, file),
            });
        }
        if let Some(lines) = snippet.line_range {
            ranges.push(RangeWire {
                start_pointer: PointerWire::line(lines.start, file),
                end_pointer: PointerWire::line(lines.end, file),
            });
        }

        Self {
            ranges,
            spdx_id: snippet.spdx_id,
            snippet_from_file: snippet.snippet_from_file,
            license_concluded: snippet.license_concluded,
            license_info_in_snippets: snippet.license_info_in_snippets,
            license_comments: snippet.license_comments,
            copyright_text: snippet.copyright_text,
            comment: snippet.comment,
            name: snippet.name,
            attribution_texts: snippet.attribution_texts,
            annotations: snippet.annotations,
        }
    }
}
