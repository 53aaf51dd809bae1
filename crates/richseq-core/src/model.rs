//! Rich content data model
//!
//! This module defines the content sequence and its items. A sequence is the
//! common intermediate format between DOM-tree input and the serialized
//! outputs (markup string, plain text).

use indexmap::IndexMap;

/// An ordered sequence of content items.
///
/// Order is reading order. There is no identity beyond position; equality is
/// structural. A sequence is immutable once produced: every operation in this
/// crate returns a new sequence rather than mutating in place.
///
/// Adjacent text runs are only guaranteed to be coalesced in the output of
/// [`concat`](crate::concat). Sequences built by
/// [`from_external_nodes`](crate::from_external_nodes) may contain
/// consecutive text runs, reflecting the source nodes one to one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentSequence {
    items: Vec<ContentItem>,
}

impl ContentSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a sequence from items, preserving them exactly as given
    pub fn from_items(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    /// The items in reading order
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items
    pub fn iter(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.iter()
    }
}

impl From<Vec<ContentItem>> for ContentSequence {
    fn from(items: Vec<ContentItem>) -> Self {
        Self::from_items(items)
    }
}

impl IntoIterator for ContentSequence {
    type Item = ContentItem;
    type IntoIter = std::vec::IntoIter<ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ContentSequence {
    type Item = &'a ContentItem;
    type IntoIter = std::slice::Iter<'a, ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<ContentItem> for ContentSequence {
    fn from_iter<I: IntoIterator<Item = ContentItem>>(iter: I) -> Self {
        Self::from_items(iter.into_iter().collect())
    }
}

/// One element of a content sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    /// A plain text run. Zero-length runs are legal but degenerate.
    Text(String),

    /// A structured inline unit (e.g. a link, an emphasis span)
    Node(InlineNode),
}

impl ContentItem {
    /// Create a text run
    pub fn text(value: impl Into<String>) -> Self {
        ContentItem::Text(value.into())
    }

    /// Check if this item is a text run
    pub fn is_text(&self) -> bool {
        matches!(self, ContentItem::Text(_))
    }

    /// Check if this item is an inline node
    pub fn is_node(&self) -> bool {
        matches!(self, ContentItem::Node(_))
    }
}

impl From<InlineNode> for ContentItem {
    fn from(node: InlineNode) -> Self {
        ContentItem::Node(node)
    }
}

/// A structured inline unit with nested children and arbitrary attributes.
///
/// The operations in this crate treat inline nodes as opaque: they never
/// merge them, never read their fields, and pass them through unchanged.
/// Only collaborators (node converters, markup renderers, text extractors)
/// construct or inspect the shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineNode {
    /// Node kind (e.g. a lowercase element name)
    pub kind: String,

    /// Attributes in insertion order
    pub attrs: IndexMap<String, String>,

    /// Nested content
    pub children: ContentSequence,
}

impl InlineNode {
    /// Create an inline node with no attributes and no children
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attrs: IndexMap::new(),
            children: ContentSequence::new(),
        }
    }

    /// Set the attributes
    pub fn with_attrs(mut self, attrs: IndexMap<String, String>) -> Self {
        self.attrs = attrs;
        self
    }

    /// Set the children
    pub fn with_children(mut self, children: ContentSequence) -> Self {
        self.children = children;
        self
    }
}
