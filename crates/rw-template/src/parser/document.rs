//! Document loop: splits a template into markup and directive blocks.

use crate::error::ParseError;
use crate::syntax::TokenKind;

use super::block::BlockKind;
use super::code_parser::CodeParser;
use super::span::SpanKind;
use super::table::DirectiveTable;

/// Walk the whole token stream, dispatching registered directives.
///
/// An `@` immediately followed by a registered keyword opens a directive
/// block: the `@` is emitted as a transition span and `dispatch` is called
/// with the cursor on the keyword. Everything else is markup.
pub(crate) fn parse_document<D, F>(
    parser: &mut CodeParser,
    directives: &DirectiveTable<D>,
    mut dispatch: F,
) -> Result<(), ParseError>
where
    D: Copy,
    F: FnMut(&mut CodeParser, D) -> Result<(), ParseError>,
{
    while !parser.end_of_file() {
        if let Some(directive) = directive_at(parser, directives) {
            parser.begin_block(BlockKind::Statement);
            parser.accept_and_move_next();
            parser.output(SpanKind::Transition);

            tracing::debug!(
                keyword = parser.current().map_or("", |token| token.content.as_str()),
                location = %parser.current_location(),
                "Dispatching directive"
            );
            dispatch(parser, directive)?;
            parser.end_block();
        } else {
            if parser.current_block_kind() != Some(BlockKind::Markup) {
                parser.begin_block(BlockKind::Markup);
            }
            parser.accept_and_move_next();
        }
    }

    parser.end_block();
    tracing::debug!(
        blocks = parser.blocks().len(),
        diagnostics = parser.diagnostics().len(),
        "Parsed document"
    );
    Ok(())
}

/// Handler for the directive starting at the cursor, if any.
fn directive_at<D: Copy>(parser: &CodeParser, directives: &DirectiveTable<D>) -> Option<D> {
    if !parser.at(TokenKind::Transition) {
        return None;
    }
    let keyword = parser
        .peek()
        .filter(|token| token.kind == TokenKind::Identifier)?;
    directives.get(&keyword.content)
}
