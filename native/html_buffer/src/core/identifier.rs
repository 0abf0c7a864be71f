//! `id` / `class` identifier matching
//!
//! Works on a tag's attribute region: the bytes between the end of the tag
//! name and the tag's closing '>'. Attributes are not parsed; the region is
//! scanned for `id=` and `class=` keys and the value is compared in place.

use memchr::memchr2_iter;

/// Check whether the attribute region carries `identifier` as its `id`
/// (exact value) or at the start of its `class` value (raw prefix).
pub fn is_identified_with(attributes: &[u8], identifier: &[u8]) -> bool {
    memchr2_iter(b'i', b'c', attributes).any(|index| {
        let rest = &attributes[index..];
        match rest[0] {
            b'i' => matches_id(rest, identifier),
            _ => matches_class(rest, identifier),
        }
    })
}

/// `id=` followed by exactly `identifier`
fn matches_id(rest: &[u8], identifier: &[u8]) -> bool {
    let Some((value, quote)) = attribute_value(rest, b"id") else {
        return false;
    };
    let Some(tail) = value.strip_prefix(identifier) else {
        return false;
    };

    match (quote, tail.first()) {
        (Some(quote), Some(&next)) => next == quote,
        (Some(_), None) => false,
        // Unquoted value runs to whitespace, '/' or the end of the region
        (None, Some(&next)) => next.is_ascii_whitespace() || next == b'/',
        (None, None) => true,
    }
}

/// `class=` whose value starts with `identifier`
fn matches_class(rest: &[u8], identifier: &[u8]) -> bool {
    attribute_value(rest, b"class").is_some_and(|(value, _)| value.starts_with(identifier))
}

/// Strip `key=` and an optional opening quote, returning the value bytes and
/// the quote that opened them.
fn attribute_value<'a>(rest: &'a [u8], key: &[u8]) -> Option<(&'a [u8], Option<u8>)> {
    let value = rest.strip_prefix(key)?.strip_prefix(b"=")?;
    match value.first() {
        Some(&quote @ (b'"' | b'\'')) => Some((&value[1..], Some(quote))),
        _ => Some((value, None)),
    }
}
