#![no_main]
use libfuzzer_sys::fuzz_target;
use spdx_reconcile::pipeline::parse_document_str;
use spdx_reconcile::reconcile::merge_documents;
use spdx_reconcile::validation::validate;

/// Parse arbitrary text as SPDX JSON, merge it with itself and validate.
///
/// Merging the same fragment a second time must change nothing.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(doc) = parse_document_str(s) else {
        return;
    };

    let mut merged = doc.clone();
    merge_documents(&mut merged, &doc);
    let _ = validate(&merged);

    let mut again = merged.clone();
    merge_documents(&mut again, &doc);
    assert_eq!(again, merged);
});
