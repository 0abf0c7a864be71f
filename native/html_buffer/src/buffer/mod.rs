//! Cursor State
//!
//! [`HtmlBuffer`] owns the markup bytes and a forward-only cursor into them.
//! Seek operations (see `seek.rs`) move the cursor to a matching opening tag
//! and remember it as the current tag; [`HtmlBuffer::read_tag_value`] (see
//! `value.rs`) returns what sits between that tag and its closing sequence.
//!
//! The bytes live behind an `Arc<[u8]>`, so [`HtmlBuffer::fork`] hands out
//! independent cursors over the same input without copying it.

mod seek;
mod value;

use std::sync::Arc;

use crate::core::tag::Tag;

/// Forward-only scanner state over a resident markup buffer
#[derive(Debug, Clone)]
pub struct HtmlBuffer {
    data: Arc<[u8]>,
    cursor: usize,
    current_tag: Tag,
    closing_tag: Tag,
}

impl HtmlBuffer {
    /// Create a scanner positioned at the start of `data`
    pub fn new(data: impl Into<Arc<[u8]>>) -> Self {
        HtmlBuffer {
            data: data.into(),
            cursor: 0,
            current_tag: Tag::zero(),
            closing_tag: Tag::zero(),
        }
    }

    /// Mark the current tag as the closing boundary: later seeks report
    /// not-found instead of crossing its closing tag.
    ///
    /// With no current tag the boundary is the zero tag, which never matches.
    pub fn mark_closing_tag(&mut self) {
        log::debug!("closing boundary set to {:?}", self.current_tag.name());
        self.closing_tag = Tag::new(self.current_tag.name());
    }

    /// Lift the closing boundary set by [`mark_closing_tag`](Self::mark_closing_tag)
    pub fn clear_closing_tag(&mut self) {
        self.closing_tag = Tag::zero();
    }

    /// Independent cursor state over the same bytes
    pub fn fork(&self) -> Self {
        self.clone()
    }

    /// Current cursor offset. After a successful seek this is just past the
    /// matched tag's '>'.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Tag matched by the most recent successful seek (zero if none)
    #[inline]
    pub fn current_tag(&self) -> &Tag {
        &self.current_tag
    }

    /// Active closing boundary (zero if none)
    #[inline]
    pub fn closing_tag(&self) -> &Tag {
        &self.closing_tag
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
