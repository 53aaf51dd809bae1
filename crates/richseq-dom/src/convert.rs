//! Single-node conversion from DOM nodes into content items.

use indexmap::IndexMap;

use richseq_core::{
    from_external_nodes, ContentItem, InlineNode, NodeConverter, UnsupportedNode,
};

use crate::node::{Node, NodeType};

/// The reference node-conversion collaborator.
///
/// Text nodes become text runs; element nodes become inline nodes carrying
/// their tag name, attributes, and recursively converted children. Anything
/// else (comments, documents, fragments) is unsupported, which callers like
/// [`from_external_nodes`] treat as skip-and-continue.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomConverter;

impl DomConverter {
    pub fn new() -> Self {
        Self
    }
}

impl NodeConverter<Node> for DomConverter {
    fn convert_one(&self, node: &Node) -> Result<ContentItem, UnsupportedNode> {
        match node.node_type {
            NodeType::Text => Ok(ContentItem::Text(
                node.node_value.clone().unwrap_or_default(),
            )),

            NodeType::Element => {
                let mut attrs = IndexMap::new();
                for (name, value) in node.attr_pairs() {
                    attrs.insert(name.to_string(), value.to_string());
                }

                // Children go through the same skip policy as the top level
                let children = from_external_nodes(self, node.children());

                Ok(ContentItem::Node(
                    InlineNode::new(node.tag_name())
                        .with_attrs(attrs)
                        .with_children(children),
                ))
            }

            _ => Err(UnsupportedNode::new(&node.node_name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use richseq_core::{concat, ConcatPart, ContentSequence};

    #[test]
    fn test_text_node_converts_to_text_run() {
        let item = DomConverter.convert_one(&Node::text("hello")).unwrap();
        assert_eq!(item, ContentItem::text("hello"));
    }

    #[test]
    fn test_comment_is_unsupported() {
        let err = DomConverter.convert_one(&Node::comment("hidden")).unwrap_err();
        assert_eq!(err.kind, "#comment");
    }

    #[test]
    fn test_fragment_is_unsupported() {
        let err = DomConverter
            .convert_one(&Node::document_fragment())
            .unwrap_err();
        assert_eq!(err.kind, "#document-fragment");
    }

    #[test]
    fn test_element_converts_to_inline_node() {
        let mut a = Node::element_with_attrs("a", vec![("href", "https://example.com")]);
        a.add_child(Node::text("Link"));

        let item = DomConverter.convert_one(&a).unwrap();
        let ContentItem::Node(inline) = item else {
            panic!("expected inline node");
        };

        assert_eq!(inline.kind, "a");
        assert_eq!(
            inline.attrs.get("href").map(String::as_str),
            Some("https://example.com")
        );
        assert_eq!(
            inline.children,
            ContentSequence::from_items(vec![ContentItem::text("Link")])
        );
    }

    #[test]
    fn test_unsupported_children_are_skipped() {
        let mut em = Node::element("em");
        em.add_child(Node::text("kept"));
        em.add_child(Node::comment("dropped"));
        em.add_child(Node::text("too"));

        let item = DomConverter.convert_one(&em).unwrap();
        let ContentItem::Node(inline) = item else {
            panic!("expected inline node");
        };

        // Skipped, and the surviving runs stay separate items
        assert_eq!(
            inline.children,
            ContentSequence::from_items(vec![
                ContentItem::text("kept"),
                ContentItem::text("too"),
            ])
        );
    }

    #[test]
    fn test_conversion_never_fails_as_a_whole() {
        let nodes = vec![
            Node::text("x"),
            Node::comment("c"),
            Node::document_fragment(),
            Node::text("y"),
        ];

        let result = from_external_nodes(&DomConverter, &nodes);
        assert_eq!(
            result,
            ContentSequence::from_items(vec![
                ContentItem::text("x"),
                ContentItem::text("y"),
            ])
        );
    }

    #[test]
    fn test_piping_through_concat_restores_invariant() {
        let nodes = vec![Node::text("x"), Node::comment("c"), Node::text("y")];
        let raw = from_external_nodes(&DomConverter, &nodes);
        assert_eq!(raw.len(), 2);

        let merged = concat([ConcatPart::from(raw)]);
        assert_eq!(
            merged,
            ContentSequence::from_items(vec![ContentItem::text("xy")])
        );
    }
}
