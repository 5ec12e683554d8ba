//! `@model` and `@inherits`, which both choose the generated base class.

use crate::descriptor::CodeGeneratorDescriptor;
use crate::diagnostics::DiagnosticKind;
use crate::error::ParseError;
use crate::parser::{CodeParser, INHERITS_KEYWORD};

use super::ParserState;

/// Keyword of the model directive.
pub const MODEL_KEYWORD: &str = "model";

/// `@inherits <type-name>`, recording where it ended for conflict reports.
pub(super) fn inherits_directive(
    parser: &mut CodeParser,
    state: &mut ParserState,
) -> Result<(), ParseError> {
    parser.assert_directive(INHERITS_KEYWORD)?;
    parser.accept_and_move_next();
    state.inherits_directive_end_location = Some(parser.current_location());

    parser.inherits_directive_core();
    check_for_inherits_and_model(parser, state);
    Ok(())
}

/// `@model <type-name>`.
pub(super) fn model_directive(
    parser: &mut CodeParser,
    state: &mut ParserState,
) -> Result<(), ParseError> {
    parser.assert_directive(MODEL_KEYWORD)?;
    parser.accept_and_move_next();
    let end_model_location = parser.current_location();

    let base_type = state.base_type().to_owned();
    parser.base_type_directive(MODEL_KEYWORD, |model_type| {
        CodeGeneratorDescriptor::model(base_type, model_type)
    });

    if state.model_statement_seen {
        parser.on_error(
            end_model_location,
            DiagnosticKind::DuplicateModel {
                keyword: MODEL_KEYWORD,
            },
        );
    }
    state.model_statement_seen = true;

    check_for_inherits_and_model(parser, state);
    Ok(())
}

/// Report `@inherits` and `@model` in the same document.
///
/// Runs after either directive completes, so the report comes from
/// whichever of the two appears second.
fn check_for_inherits_and_model(parser: &mut CodeParser, state: &ParserState) {
    if !state.model_statement_seen {
        return;
    }
    if let Some(location) = state.inherits_directive_end_location {
        parser.on_error(
            location,
            DiagnosticKind::ModelAndInherits {
                keyword: MODEL_KEYWORD,
            },
        );
    }
}
