//! Value Reader
//!
//! The value of the current tag runs from the cursor up to the first
//! `</name` sequence after it. Nesting is not tracked: for
//! `<div>a<div>b</div>c</div>` the outer div's value is `a<div>b`.

use std::borrow::Cow;

use super::HtmlBuffer;
use crate::core::scanner::Scanner;

impl HtmlBuffer {
    /// Read the value of the tag the cursor points at, without moving the
    /// cursor. `None` when no tag is matched, the tag is void, or its
    /// closing sequence never appears.
    pub fn read_tag_value(&self) -> Option<&[u8]> {
        let tag = &self.current_tag;
        if tag.is_zero() || tag.is_void() {
            return None;
        }

        let scanner = Scanner::at(&self.data, self.cursor);
        let close = scanner.find_closing_sequence(tag.name().as_bytes())?;
        scanner.slice(self.cursor, close)
    }

    /// [`read_tag_value`](Self::read_tag_value) decoded as UTF-8, replacing
    /// invalid sequences
    pub fn read_tag_text(&self) -> Option<Cow<'_, str>> {
        self.read_tag_value().map(String::from_utf8_lossy)
    }
}

#[cfg(test)]
mod tests {
    use crate::buffer::HtmlBuffer;

    fn buffer(input: &str) -> HtmlBuffer {
        HtmlBuffer::new(input.as_bytes())
    }

    #[test]
    fn test_read_value() {
        let mut buf = buffer("<span>x</span><div>y</div>");
        assert!(buf.seek_to_tag("div"));
        assert_eq!(buf.read_tag_value(), Some(b"y".as_slice()));
        // Reading does not move the cursor
        assert_eq!(buf.read_tag_value(), Some(b"y".as_slice()));
    }

    #[test]
    fn test_read_without_seek() {
        let buf = buffer("<div>y</div>");
        assert_eq!(buf.read_tag_value(), None);
    }

    #[test]
    fn test_read_void_tag() {
        let mut buf = buffer("<p><img src=\"a.png\">caption</img></p>");
        assert!(buf.seek_to_tag("img"));
        assert_eq!(buf.read_tag_value(), None);
        assert_eq!(buf.read_tag_text(), None);
    }

    #[test]
    fn test_read_stops_at_first_closing_tag() {
        let mut buf = buffer("<div>a<div>b</div>c</div>");
        assert!(buf.seek_to_tag("div"));
        assert_eq!(buf.read_tag_value(), Some(b"a<div>b".as_slice()));
    }

    #[test]
    fn test_read_keeps_inner_markup() {
        let mut buf = buffer("<td>1 <b>bold</b> 2</td>");
        assert!(buf.seek_to_tag("td"));
        assert_eq!(buf.read_tag_text().as_deref(), Some("1 <b>bold</b> 2"));
    }

    #[test]
    fn test_read_empty_value() {
        let mut buf = buffer("<p></p>");
        assert!(buf.seek_to_tag("p"));
        assert_eq!(buf.read_tag_value(), Some(b"".as_slice()));
    }

    #[test]
    fn test_read_unterminated() {
        let mut buf = buffer("<p>never closed");
        assert!(buf.seek_to_tag("p"));
        assert_eq!(buf.read_tag_value(), None);

        let mut buf = buffer("<p>cut off </");
        assert!(buf.seek_to_tag("p"));
        assert_eq!(buf.read_tag_value(), None);
    }

    #[test]
    fn test_read_text_lossy() {
        let mut buf = HtmlBuffer::new(b"<p>caf\xe9</p>".as_slice());
        assert!(buf.seek_to_tag("p"));
        assert_eq!(buf.read_tag_text().as_deref(), Some("caf\u{fffd}"));
    }
}
