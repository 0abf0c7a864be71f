//! Sequential Extraction
//!
//! Convenience drivers over [`HtmlBuffer`]: a one-shot seek-and-read, and a
//! loop that collects every matching value from the cursor onwards.

use crate::buffer::HtmlBuffer;

/// Seek once and read. An empty identifier seeks by name only.
pub fn extract(input: &[u8], name: &str, identifier: &str) -> Option<Vec<u8>> {
    let mut buffer = HtmlBuffer::new(input);
    read_next(&mut buffer, name, identifier).flatten()
}

/// Collect the values of all following matches, advancing `buffer` past the
/// last one. Void matches and unterminated tags contribute nothing.
pub fn collect_values(buffer: &mut HtmlBuffer, name: &str, identifier: &str) -> Vec<Vec<u8>> {
    let mut values = Vec::new();
    while let Some(value) = read_next(buffer, name, identifier) {
        values.extend(value);
    }
    values
}

/// `None` when the seek fails, `Some(None)` when it matched a tag with no
/// readable value
fn read_next(buffer: &mut HtmlBuffer, name: &str, identifier: &str) -> Option<Option<Vec<u8>>> {
    if !buffer.seek_to_identified_tag(name, identifier) {
        return None;
    }
    Some(buffer.read_tag_value().map(<[u8]>::to_vec))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract() {
        let input = b"<html><body><h1 class=\"title\">Hello</h1></body></html>";
        assert_eq!(extract(input, "h1", "title"), Some(b"Hello".to_vec()));
        assert_eq!(extract(input, "h1", ""), Some(b"Hello".to_vec()));
        assert_eq!(extract(input, "h2", ""), None);
        assert_eq!(extract(input, "h1", "subtitle"), None);
    }

    #[test]
    fn test_extract_void() {
        assert_eq!(extract(b"<br><p>x</p>", "br", ""), None);
    }

    #[test]
    fn test_collect_values() {
        let mut buffer = HtmlBuffer::new(b"<ul><li>a</li><li>b</li><li>c</li></ul>".as_slice());
        let values = collect_values(&mut buffer, "li", "");
        assert_eq!(values, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
        assert_eq!(buffer.current_tag().name(), "li");
    }

    #[test]
    fn test_collect_values_within_boundary() {
        let input = b"<ul id=\"x\"><li>1</li><li>2</li></ul><ul><li>3</li></ul>";
        let mut buffer = HtmlBuffer::new(input.as_slice());
        assert!(buffer.seek_to_identified_tag("ul", "x"));
        buffer.mark_closing_tag();

        let values = collect_values(&mut buffer, "li", "");
        assert_eq!(values, vec![b"1".to_vec(), b"2".to_vec()]);
    }

    #[test]
    fn test_collect_values_skips_void() {
        let mut buffer = HtmlBuffer::new(b"<hr><hr>".as_slice());
        assert!(collect_values(&mut buffer, "hr", "").is_empty());
        assert_eq!(buffer.position(), 8);
    }
}
