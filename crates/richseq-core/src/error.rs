//! Error types for richseq-core

/// A node the conversion collaborator does not recognize.
///
/// Raised by [`NodeConverter::convert_one`](crate::NodeConverter::convert_one)
/// and recovered locally by
/// [`from_external_nodes`](crate::from_external_nodes), which skips the node
/// and continues. It never surfaces past the conversion boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported node kind: {kind}")]
pub struct UnsupportedNode {
    /// Kind of the rejected node (e.g. "#comment")
    pub kind: String,
}

impl UnsupportedNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}
