//! HTML parsing support.
//!
//! Parses HTML strings into the CDP-style [`Node`] tree. The content model
//! itself only accepts DOM-tree input; this is a convenience for producing
//! that tree when no live document is at hand.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML fragment into a Node tree.
///
/// # Example
///
/// ```rust
/// use richseq_dom::{parse_html, selector_extractor};
/// use richseq_core::{identity, to_plain_text};
/// use richseq_dom::TextRunExtractor;
///
/// let root = parse_html("<p>Hello <em>World</em></p>");
/// let content = selector_extractor(Some("p")).extract(&root);
/// let text = to_plain_text(&TextRunExtractor, identity(&content));
/// assert_eq!(text, "Hello World");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();

    // Collect attributes
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = if attrs.is_empty() {
        Node::element(tag)
    } else {
        Node::element_with_attrs(tag, attrs)
    };

    // Process children
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Comment(comment) => {
                node.add_child(Node::comment(&comment.comment));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
