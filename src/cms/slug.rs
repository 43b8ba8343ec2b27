use serde_json::{Map, Value as JsonValue};
use unicode_normalization::UnicodeNormalization;

use super::Operation;

const COMBINING_DIACRITICS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// URL slug: lowercase, accents stripped, every run of characters outside
/// `[a-z0-9]` collapsed to one `-`, no leading or trailing `-`.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_dash = false;

    for c in lowered.nfd().filter(|c| !COMBINING_DIACRITICS.contains(c)) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Slug hook: on create, or whenever the document has no slug, derive it
/// from `source`; otherwise keep what the editor sent.
pub fn resolve_slug(
    operation: Operation,
    doc: &Map<String, JsonValue>,
    slug_field: &str,
    source: &str,
) -> Option<String> {
    let current = doc
        .get(slug_field)
        .and_then(JsonValue::as_str)
        .filter(|s| !s.is_empty());
    let source = doc
        .get(source)
        .and_then(JsonValue::as_str)
        .filter(|s| !s.is_empty());

    match (operation, current, source) {
        (Operation::Create, _, Some(source)) | (_, None, Some(source)) => Some(slugify(source)),
        (_, current, _) => current.map(str::to_string),
    }
}
