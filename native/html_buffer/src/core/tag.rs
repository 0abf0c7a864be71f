//! Tag classification
//!
//! A [`Tag`] is a matched element name plus whether it is an HTML void
//! element (no content, no closing tag).

/// Check whether `name` is one of the void elements.
///
/// Case-sensitive, exact match.
#[inline]
pub fn is_void_tag(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "html"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// A classified tag. The default (empty name) is the zero tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    name: String,
    is_void: bool,
}

impl Tag {
    /// Classify `name` against the void element set
    pub fn new(name: &str) -> Self {
        Tag {
            name: name.to_owned(),
            is_void: is_void_tag(name),
        }
    }

    /// The zero tag, meaning "no tag matched"
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        self.is_void
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.name.is_empty()
    }
}
