//! Simple selector matching over the DOM node tree.
//!
//! Supports compound simple selectors — a tag name (or `*`), `#id`, and
//! `.class` parts — and comma-separated lists of them. Combinators are not
//! supported; the query walks descendants depth-first and returns the first
//! element matching any alternative.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::node::Node;

static COMPOUND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\*|[a-zA-Z][a-zA-Z0-9-]*)?((?:[#.][a-zA-Z0-9_-]+)*)$").unwrap()
});

static PART_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[#.][a-zA-Z0-9_-]+").unwrap());

/// One compound selector, e.g. `p.note#intro`
#[derive(Debug, Clone, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(input: &str) -> Option<Self> {
        let captures = COMPOUND_RE.captures(input.trim())?;

        let tag = captures
            .get(1)
            .map(|m| m.as_str().to_lowercase())
            .filter(|t| t != "*");

        let mut id = None;
        let mut classes = Vec::new();
        if let Some(parts) = captures.get(2) {
            for part in PART_RE.find_iter(parts.as_str()) {
                let part = part.as_str();
                match part.as_bytes()[0] {
                    b'#' => id = Some(part[1..].to_string()),
                    _ => classes.push(part[1..].to_string()),
                }
            }
        }

        // An empty compound ("" or "*" alone with no parts) matches any
        // element only when written as "*"
        if tag.is_none() && id.is_none() && classes.is_empty() && input.trim() != "*" {
            return None;
        }

        Some(Self { tag, id, classes })
    }

    fn matches(&self, node: &Node) -> bool {
        if !node.is_element() {
            return false;
        }

        if let Some(ref tag) = self.tag {
            if node.tag_name() != *tag {
                return false;
            }
        }

        if let Some(ref id) = self.id {
            if node.attr("id") != Some(id.as_str()) {
                return false;
            }
        }

        if !self.classes.is_empty() {
            let class_attr = node.attr("class").unwrap_or("");
            let class_list: Vec<&str> = class_attr.split_whitespace().collect();
            if !self.classes.iter().all(|c| class_list.contains(&c.as_str())) {
                return false;
            }
        }

        true
    }
}

/// Parse a comma-separated selector list. Returns `None` when no
/// alternative parses, which callers treat as "matches nothing".
fn parse_list(selector: &str) -> Option<Vec<Compound>> {
    let compounds: Vec<Compound> = selector
        .split(',')
        .filter_map(Compound::parse)
        .collect();

    if compounds.is_empty() {
        None
    } else {
        Some(compounds)
    }
}

/// Find the first descendant of `root` matching `selector`, in document
/// order. The root itself is not a candidate.
pub(crate) fn query_first<'a>(root: &'a Node, selector: &str) -> Option<&'a Node> {
    let compounds = parse_list(selector)?;
    find_first(root, &compounds)
}

fn find_first<'a>(node: &'a Node, compounds: &[Compound]) -> Option<&'a Node> {
    for child in node.children() {
        if compounds.iter().any(|c| c.matches(child)) {
            return Some(child);
        }
        if let Some(found) = find_first(child, compounds) {
            return Some(found);
        }
    }
    None
}
