//! Statement parser primitives shared by all directives.
//!
//! [`CodeParser`] owns the token cursor, the span under construction and
//! the block/diagnostic sinks. Directive handlers consume tokens through its
//! accept primitives and emit classified spans with [`CodeParser::output`].

mod block;
mod code_parser;
pub(crate) mod document;
mod results;
mod span;
mod table;

pub use block::{Block, BlockKind};
pub use code_parser::{CodeParser, INHERITS_KEYWORD, is_spacing_token};
pub use results::ParseResults;
pub use span::{AcceptedCharacters, Span, SpanKind};
pub use table::DirectiveTable;
