//! Blocks: groups of spans produced by one construct.

use super::span::Span;

/// Classification of a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum BlockKind {
    /// Template text.
    Markup,
    /// Code entered through `@`, before a handler classifies it.
    Statement,
    /// A directive: metadata only, never rendered.
    Directive,
}

/// A finalized group of spans.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Block {
    /// Block classification.
    pub kind: BlockKind,
    /// Spans in emission order.
    pub spans: Vec<Span>,
}

impl Block {
    pub(crate) fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            spans: Vec::new(),
        }
    }

    /// Concatenated text of all spans.
    #[must_use]
    pub fn content(&self) -> String {
        self.spans.iter().map(Span::content).collect()
    }
}
