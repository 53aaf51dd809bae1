//! Collaborator contracts and the serialization entry points.
//!
//! The engine does not render markup, extract text, or convert single nodes
//! itself. Those concerns sit behind the traits in this module; `richseq-dom`
//! ships the reference implementations.

use crate::error::UnsupportedNode;
use crate::model::{ContentItem, ContentSequence};

/// A node in a caller-supplied tree (e.g. a live document).
///
/// The engine only reads the tree during conversion and never retains it
/// past the call.
pub trait ExternalNode {
    /// The node's children, in order. Must be finite.
    fn child_nodes(&self) -> Vec<&Self>;

    /// The first descendant matching `selector`, in document order, or
    /// `None` if nothing matches. The root itself is not a candidate.
    fn query_first_descendant(&self, selector: &str) -> Option<&Self>;
}

/// Single-node conversion into the content model.
pub trait NodeConverter<N: ?Sized> {
    /// Convert one external node into a content item.
    ///
    /// Returns [`UnsupportedNode`] for node kinds the converter does not
    /// recognize; callers skip such nodes rather than failing the whole
    /// conversion.
    fn convert_one(&self, node: &N) -> Result<ContentItem, UnsupportedNode>;
}

/// Markup rendering of a content sequence.
pub trait MarkupRenderer {
    fn render(&self, content: &ContentSequence) -> String;
}

/// Text-run extraction from a content sequence.
///
/// Implementations collect every text run depth-first, descending into
/// inline-node children and excluding attributes.
pub trait TextExtractor {
    fn text_runs(&self, content: &ContentSequence) -> Vec<String>;
}

/// Opaque handle accepted by the serialization entry points.
///
/// Not a stable contract: callers must not inspect or construct this shape
/// and may only obtain one through [`identity`]. The indirection lets the
/// internal sequence representation change without breaking callers that
/// stick to [`to_markup_string`] and [`to_plain_text`].
pub struct RenderInput<'a>(&'a ContentSequence);

/// Adapt a sequence into the form the serialization entry points accept.
pub fn identity(content: &ContentSequence) -> RenderInput<'_> {
    RenderInput(content)
}

/// Serialize to the markup form via the rendering collaborator.
///
/// Pure and deterministic for a given sequence and renderer.
pub fn to_markup_string<R>(renderer: &R, input: RenderInput<'_>) -> String
where
    R: MarkupRenderer + ?Sized,
{
    renderer.render(input.0)
}

/// Flatten to plain text via the extraction collaborator.
///
/// The extracted runs are joined with no separator; whitespace is preserved
/// exactly as stored.
pub fn to_plain_text<E>(extractor: &E, input: RenderInput<'_>) -> String
where
    E: TextExtractor + ?Sized,
{
    extractor.text_runs(input.0).concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InlineNode;

    /// Minimal depth-first extractor for exercising the entry points.
    struct Walker;

    impl TextExtractor for Walker {
        fn text_runs(&self, content: &ContentSequence) -> Vec<String> {
            let mut runs = Vec::new();
            collect(content, &mut runs);
            runs
        }
    }

    fn collect(content: &ContentSequence, runs: &mut Vec<String>) {
        for item in content {
            match item {
                ContentItem::Text(text) => runs.push(text.clone()),
                ContentItem::Node(node) => collect(&node.children, runs),
            }
        }
    }

    struct Uppercase;

    impl MarkupRenderer for Uppercase {
        fn render(&self, content: &ContentSequence) -> String {
            Walker.text_runs(content).concat().to_uppercase()
        }
    }

    #[test]
    fn test_plain_text_concatenates_runs() {
        let seq = ContentSequence::from_items(vec![
            ContentItem::text("s1"),
            ContentItem::text("s2"),
            ContentItem::text("s3"),
        ]);
        assert_eq!(to_plain_text(&Walker, identity(&seq)), "s1s2s3");
    }

    #[test]
    fn test_plain_text_preserves_whitespace() {
        let seq = ContentSequence::from_items(vec![
            ContentItem::text("  a "),
            ContentItem::text("\tb\n"),
        ]);
        assert_eq!(to_plain_text(&Walker, identity(&seq)), "  a \tb\n");
    }

    #[test]
    fn test_markup_delegates_to_renderer() {
        let seq = ContentSequence::from_items(vec![ContentItem::text("hi")]);
        assert_eq!(to_markup_string(&Uppercase, identity(&seq)), "HI");
    }

    #[test]
    fn test_nested_children_included() {
        let inner = ContentSequence::from_items(vec![ContentItem::text("there")]);
        let seq = ContentSequence::from_items(vec![
            ContentItem::text("Hi "),
            ContentItem::Node(InlineNode::new("em").with_children(inner)),
        ]);
        assert_eq!(to_plain_text(&Walker, identity(&seq)), "Hi there");
    }
}
