//! Text-run extraction from content sequences.

use richseq_core::{ContentItem, ContentSequence, TextExtractor};

/// The reference text-extraction collaborator.
///
/// Collects every text run depth-first, descending into inline-node
/// children. Attributes are excluded and whitespace is left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRunExtractor;

impl TextRunExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for TextRunExtractor {
    fn text_runs(&self, content: &ContentSequence) -> Vec<String> {
        let mut runs = Vec::new();
        collect_runs(content, &mut runs);
        runs
    }
}

fn collect_runs(content: &ContentSequence, runs: &mut Vec<String>) {
    for item in content {
        match item {
            ContentItem::Text(text) => runs.push(text.clone()),
            ContentItem::Node(node) => collect_runs(&node.children, runs),
        }
    }
}
