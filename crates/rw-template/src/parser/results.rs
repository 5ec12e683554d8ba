//! Output of a document parse.

use crate::descriptor::CodeGeneratorDescriptor;
use crate::diagnostics::Diagnostic;

use super::block::Block;
use super::span::Span;

/// Blocks and diagnostics produced for one document.
///
/// Always populated on a successful parse, even when diagnostics were
/// reported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct ParseResults {
    /// Finalized blocks in source order.
    pub blocks: Vec<Block>,
    /// Recoverable errors in the order they were reported.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResults {
    /// All spans in source order.
    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        self.blocks.iter().flat_map(|block| block.spans.iter())
    }

    /// Descriptors attached to spans, in source order.
    pub fn descriptors(&self) -> impl Iterator<Item = &CodeGeneratorDescriptor> {
        self.spans().filter_map(|span| span.descriptor.as_ref())
    }

    /// Whether any diagnostic was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Concatenated text of every span.
    #[must_use]
    pub fn content(&self) -> String {
        self.blocks.iter().map(Block::content).collect()
    }
}
