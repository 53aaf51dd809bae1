//! richseq-core - rich content sequence model and operations
//!
//! This crate owns the data model for rich content inside an editor's
//! content model: an ordered sequence mixing plain text runs and structured
//! inline nodes, plus the operations to build, merge, and serialize it.
//!
//! # Architecture
//!
//! ```text
//! DOM-like tree ──from_external_nodes──▶ ┌─────────────────┐ ──▶ markup string
//!                                        │ ContentSequence │
//! items/sequences ──concat─────────────▶ │                 │ ──▶ plain text
//!                                        └─────────────────┘
//! ```
//!
//! Single-node conversion, markup rendering, text extraction, and tree
//! queries are collaborator traits ([`NodeConverter`], [`MarkupRenderer`],
//! [`TextExtractor`], [`ExternalNode`]); `richseq-dom` ships the reference
//! implementations.
//!
//! # Example
//!
//! ```rust
//! use richseq_core::{concat, ConcatPart, ContentItem, ContentSequence};
//!
//! let merged = concat(["Hello", " ", "World"]);
//! assert_eq!(
//!     merged,
//!     ContentSequence::from_items(vec![ContentItem::text("Hello World")])
//! );
//! ```
//!
//! All operations are pure, synchronous, single-pass transformations over
//! immutable inputs; nothing is shared between calls.

mod contract;
mod convert;
mod error;
mod merge;
mod model;

pub use contract::{
    identity, to_markup_string, to_plain_text, ExternalNode, MarkupRenderer, NodeConverter,
    RenderInput, TextExtractor,
};
pub use convert::{from_external_nodes, SelectorExtractor};
pub use error::UnsupportedNode;
pub use merge::{concat, ConcatPart};
pub use model::{ContentItem, ContentSequence, InlineNode};
