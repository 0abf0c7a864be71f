//! Seek Engine
//!
//! Forward scans from the cursor to the next opening tag with a given name,
//! optionally filtered by an `id`/`class` identifier. The first match wins.
//!
//! Names are compared as a fixed-length prefix of the tag, so seeking `a`
//! also stops at `<abbr>`.

use super::HtmlBuffer;
use crate::core::identifier::is_identified_with;
use crate::core::scanner::Scanner;
use crate::core::tag::Tag;

impl HtmlBuffer {
    /// Seek to the next `<name ...>` tag. Returns whether it was found.
    pub fn seek_to_tag(&mut self, name: &str) -> bool {
        self.seek(name, "")
    }

    /// Seek to the next `<name ...>` tag whose `id` equals `identifier` or
    /// whose `class` value starts with it. An empty identifier matches any
    /// tag with that name.
    pub fn seek_to_identified_tag(&mut self, name: &str, identifier: &str) -> bool {
        self.seek(name, identifier)
    }

    fn seek(&mut self, name: &str, identifier: &str) -> bool {
        match self.find_tag(name.as_bytes(), identifier.as_bytes()) {
            Some(tag_end) => {
                log::trace!("seek <{name}> [{identifier}] matched at {tag_end}");
                self.current_tag = Tag::new(name);
                self.cursor = tag_end + 1;
                true
            }
            None => {
                log::trace!("seek <{name}> [{identifier}] not found from {}", self.cursor);
                false
            }
        }
    }

    /// Position of the matching tag's '>'
    fn find_tag(&self, name: &[u8], identifier: &[u8]) -> Option<usize> {
        let mut scanner = Scanner::at(&self.data, self.cursor);

        while let Some(open) = scanner.find_tag_start() {
            scanner.set_position(open + 1);

            if scanner.peek()? == b'/' {
                if self.crosses_boundary(open) {
                    log::debug!("seek stopped at closing boundary </{}>", self.closing_tag.name());
                    return None;
                }
                continue;
            }

            if !scanner.has_remaining(name.len()) {
                return None;
            }
            if !scanner.starts_with(name) {
                continue;
            }

            let name_end = open + 1 + name.len();
            // No '>' left means no later tag can close either
            let tag_end = Scanner::at(&self.data, name_end).find_tag_end()?;

            if identifier.is_empty() || is_identified_with(&self.data[name_end..tag_end], identifier) {
                return Some(tag_end);
            }
        }

        None
    }

    /// Whether the closing tag starting at `open` is the closing boundary
    fn crosses_boundary(&self, open: usize) -> bool {
        !self.closing_tag.is_zero()
            && Scanner::at(&self.data, open).at_closing_tag(self.closing_tag.name().as_bytes())
    }
}
