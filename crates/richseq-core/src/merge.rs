//! Sequence concatenation with text-run coalescing.

use crate::model::{ContentItem, ContentSequence, InlineNode};

/// One input to [`concat`]: either a single item or a whole sequence.
///
/// Call sites pass anything convertible into a part, so a bare string, an
/// inline node, and a previously built sequence all mix in one call.
#[derive(Debug, Clone)]
pub enum ConcatPart {
    Item(ContentItem),
    Sequence(ContentSequence),
}

impl From<ContentItem> for ConcatPart {
    fn from(item: ContentItem) -> Self {
        ConcatPart::Item(item)
    }
}

impl From<ContentSequence> for ConcatPart {
    fn from(sequence: ContentSequence) -> Self {
        ConcatPart::Sequence(sequence)
    }
}

impl From<InlineNode> for ConcatPart {
    fn from(node: InlineNode) -> Self {
        ConcatPart::Item(ContentItem::Node(node))
    }
}

impl From<String> for ConcatPart {
    fn from(text: String) -> Self {
        ConcatPart::Item(ContentItem::Text(text))
    }
}

impl From<&str> for ConcatPart {
    fn from(text: &str) -> Self {
        ConcatPart::Item(ContentItem::text(text))
    }
}

/// Concatenate parts into a single sequence, coalescing adjacent text runs.
///
/// Parts are flattened left to right. A text run whose predecessor in the
/// accumulated result is also a text run is merged into it by string append;
/// everything else is appended unchanged. Inline nodes never merge. Empty
/// sequences contribute nothing.
///
/// The output never contains two consecutive text runs, and the relative
/// order of all input items is preserved.
pub fn concat<I>(parts: I) -> ContentSequence
where
    I: IntoIterator,
    I::Item: Into<ConcatPart>,
{
    let mut items: Vec<ContentItem> = Vec::new();

    for part in parts {
        match part.into() {
            ConcatPart::Item(item) => push_coalescing(&mut items, item),
            ConcatPart::Sequence(sequence) => {
                for item in sequence {
                    push_coalescing(&mut items, item);
                }
            }
        }
    }

    ContentSequence::from_items(items)
}

fn push_coalescing(items: &mut Vec<ContentItem>, item: ContentItem) {
    if let ContentItem::Text(ref incoming) = item {
        if let Some(ContentItem::Text(last)) = items.last_mut() {
            last.push_str(incoming);
            return;
        }
    }
    items.push(item);
}
