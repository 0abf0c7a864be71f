//! Parallel Extraction
//!
//! Uses Rayon to run independent queries over one buffer. Each query gets
//! its own fork of the cursor state, so the bytes are shared and the source
//! buffer never moves.

use rayon::prelude::*;

use crate::buffer::HtmlBuffer;

/// Run each `(name, identifier)` query on a fork of `buffer` and read the
/// matched value. Results keep query order.
pub fn extract_parallel(buffer: &HtmlBuffer, queries: &[(&str, &str)]) -> Vec<Option<Vec<u8>>> {
    queries
        .par_iter()
        .map(|&(name, identifier)| {
            let mut fork = buffer.fork();
            if !fork.seek_to_identified_tag(name, identifier) {
                return None;
            }
            fork.read_tag_value().map(<[u8]>::to_vec)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_extract() {
        let buffer = HtmlBuffer::new(
            b"<title>T</title><div id=\"a\">A</div><div class=\"b\">B</div><img>".as_slice(),
        );
        let queries = [("div", "b"), ("title", ""), ("div", "a"), ("img", ""), ("nav", "")];

        let results = extract_parallel(&buffer, &queries);
        assert_eq!(
            results,
            vec![
                Some(b"B".to_vec()),
                Some(b"T".to_vec()),
                Some(b"A".to_vec()),
                None,
                None,
            ]
        );
        assert_eq!(buffer.position(), 0);
    }

    #[test]
    fn test_parallel_starts_from_cursor() {
        let mut buffer = HtmlBuffer::new(b"<p>1</p><p>2</p>".as_slice());
        assert!(buffer.seek_to_tag("p"));

        let results = extract_parallel(&buffer, &[("p", "")]);
        assert_eq!(results, vec![Some(b"2".to_vec())]);
    }
}
