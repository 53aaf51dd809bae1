//! Conversion of external node lists into content sequences.

use crate::contract::{ExternalNode, NodeConverter};
use crate::model::{ContentItem, ContentSequence};

/// Convert an ordered collection of external nodes into a sequence.
///
/// Nodes are converted in input order via the converter collaborator. A node
/// the converter rejects is skipped; the overall conversion never fails.
///
/// The output is not coalesced: two consecutive source nodes that both
/// convert to text runs stay separate items. Call sites that need the
/// no-adjacent-text guarantee end to end pipe the result through
/// [`concat`](crate::concat).
pub fn from_external_nodes<'a, N, C, I>(converter: &C, nodes: I) -> ContentSequence
where
    N: 'a + ?Sized,
    C: NodeConverter<N>,
    I: IntoIterator<Item = &'a N>,
{
    let mut items: Vec<ContentItem> = Vec::new();

    for node in nodes {
        if let Ok(item) = converter.convert_one(node) {
            items.push(item);
        }
    }

    ContentSequence::from_items(items)
}

/// A reusable extraction function closing over a selector.
///
/// Built once, applied to any number of roots. For each root: a non-empty
/// selector picks the first matching descendant, no selector (or an empty
/// one) picks the root itself. The match's children are then converted with
/// [`from_external_nodes`]; a selector that matches nothing yields an empty
/// sequence.
pub struct SelectorExtractor<C> {
    selector: Option<String>,
    converter: C,
}

impl<C> SelectorExtractor<C> {
    pub fn new(converter: C, selector: Option<impl Into<String>>) -> Self {
        Self {
            selector: selector.map(Into::into),
            converter,
        }
    }

    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    /// Extract the matched sub-tree's children as a sequence.
    pub fn extract<N>(&self, root: &N) -> ContentSequence
    where
        N: ExternalNode,
        C: NodeConverter<N>,
    {
        let target = match self.selector.as_deref() {
            Some(selector) if !selector.is_empty() => root.query_first_descendant(selector),
            _ => Some(root),
        };

        match target {
            Some(node) => from_external_nodes(&self.converter, node.child_nodes()),
            None => ContentSequence::new(),
        }
    }
}
