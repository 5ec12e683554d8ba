//! `@inject <type-name> <property-name>`.

use crate::descriptor::CodeGeneratorDescriptor;
use crate::diagnostics::DiagnosticKind;
use crate::error::ParseError;
use crate::parser::{CodeParser, SpanKind, is_spacing_token};
use crate::syntax::TokenKind;

/// Keyword of the inject directive.
pub const INJECT_KEYWORD: &str = "inject";

/// Parse an inject directive with the cursor on its keyword.
///
/// The type name and the property name are read from separate token
/// ranges. Both may end up empty after a reported error.
pub(super) fn inject_directive(parser: &mut CodeParser) -> Result<(), ParseError> {
    parser.assert_directive(INJECT_KEYWORD)?;
    parser.accept_and_move_next();
    parser.output_directive_keyword();

    let has_type_error = !parser.at(TokenKind::Identifier);
    if has_type_error {
        parser.on_error(
            parser.current_location(),
            DiagnosticKind::MissingTypeName {
                keyword: INJECT_KEYWORD,
            },
        );
    }

    let type_name = parser.namespace_or_type_name();
    let property_start_location = parser.current_location();
    parser.accept_while(is_spacing_token(false, true));

    if !has_type_error && (parser.end_of_file() || parser.at(TokenKind::NewLine)) {
        parser.on_error(
            property_start_location,
            DiagnosticKind::MissingPropertyName {
                keyword: INJECT_KEYWORD,
            },
        );
    }

    let property_start = parser.span_len();
    parser.accept_until(TokenKind::NewLine);
    let property_name = parser.span_content_from(property_start);
    if !parser.design_time() {
        parser.optional(TokenKind::NewLine);
    }

    parser.set_descriptor(CodeGeneratorDescriptor::inject(
        type_name.trim(),
        property_name.trim(),
    ));
    parser.complete_block();
    parser.output(SpanKind::Code);
    Ok(())
}
