//! # richseq-dom
//!
//! DOM-tree collaborators for the `richseq` content model.
//!
//! `richseq-core` defines the content sequence and its operations but stays
//! agnostic about where nodes come from and what markup looks like. This
//! crate fills in those seams:
//!
//! - [`Node`]: a CDP-style DOM node usable as the external tree, with a
//!   simple-selector query capability
//! - [`DomConverter`]: single-node conversion (text → text run, element →
//!   inline node, everything else unsupported)
//! - [`HtmlRenderer`]: markup rendering
//! - [`TextRunExtractor`]: depth-first plain-text extraction
//!
//! ## Example
//!
//! ```rust
//! use richseq_core::{identity, to_markup_string};
//! use richseq_dom::{selector_extractor, HtmlRenderer, Node};
//!
//! let mut root = Node::element("div");
//! let mut em = Node::element("em");
//! em.add_child(Node::text("World"));
//! root.add_child(Node::text("Hello "));
//! root.add_child(em);
//!
//! let content = selector_extractor(None).extract(&root);
//! let markup = to_markup_string(&HtmlRenderer, identity(&content));
//! assert_eq!(markup, "Hello <em>World</em>");
//! ```

mod convert;
mod extract;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod render;
mod selector;

pub use convert::DomConverter;
pub use extract::TextRunExtractor;
#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Node, NodeType};
pub use render::HtmlRenderer;

use richseq_core::SelectorExtractor;

/// Build a reusable extractor over [`DomConverter`].
///
/// `selector` picks the first matching descendant of each root it is later
/// applied to; `None` (or an empty string) targets the root itself.
pub fn selector_extractor(selector: Option<&str>) -> SelectorExtractor<DomConverter> {
    SelectorExtractor::new(DomConverter, selector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use richseq_core::{identity, to_plain_text};

    #[test]
    fn test_selector_extractor_no_match_is_empty() {
        let mut root = Node::element("div");
        root.add_child(Node::text("content"));

        let content = selector_extractor(Some(".body")).extract(&root);
        assert!(content.is_empty());
    }

    #[test]
    fn test_selector_extractor_round_trip() {
        let mut root = Node::element("article");
        let mut body = Node::element_with_attrs("div", vec![("class", "body")]);
        body.add_child(Node::text("Hi "));
        let mut strong = Node::element("strong");
        strong.add_child(Node::text("there"));
        body.add_child(strong);
        root.add_child(body);

        let content = selector_extractor(Some(".body")).extract(&root);
        let text = to_plain_text(&TextRunExtractor, identity(&content));
        assert_eq!(text, "Hi there");
    }
}
