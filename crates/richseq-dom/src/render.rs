//! Markup rendering of content sequences.

use richseq_core::{ContentItem, ContentSequence, MarkupRenderer};

/// Void (self-closing) HTML elements
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// The reference markup-rendering collaborator.
///
/// Produces HTML-shaped markup: text runs are escaped, inline nodes become
/// tags with their attributes and rendered children, void elements close
/// themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl MarkupRenderer for HtmlRenderer {
    fn render(&self, content: &ContentSequence) -> String {
        let mut out = String::new();
        render_items(content, &mut out);
        out
    }
}

fn render_items(content: &ContentSequence, out: &mut String) {
    for item in content {
        match item {
            ContentItem::Text(text) => out.push_str(&escape_text(text)),
            ContentItem::Node(node) => {
                out.push('<');
                out.push_str(&node.kind);
                for (name, value) in &node.attrs {
                    out.push(' ');
                    out.push_str(name);
                    if !value.is_empty() {
                        out.push_str("=\"");
                        out.push_str(&escape_attr(value));
                        out.push('"');
                    }
                }
                out.push('>');

                if !is_void(&node.kind) {
                    render_items(&node.children, out);
                    out.push_str("</");
                    out.push_str(&node.kind);
                    out.push('>');
                }
            }
        }
    }
}

fn is_void(kind: &str) -> bool {
    VOID_ELEMENTS.contains(&kind)
}

/// Escape text content
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
