//! `@route` and the `@http<verb>` aliases.

use crate::descriptor::{CodeGeneratorDescriptor, HttpVerb};
use crate::error::ParseError;
use crate::parser::{CodeParser, SpanKind};
use crate::syntax::TokenKind;

/// Keyword of the unrestricted route directive.
pub const ROUTE_KEYWORD: &str = "route";

/// Keyword for a route directive restricted to `verb`.
#[must_use]
pub const fn route_keyword(verb: Option<HttpVerb>) -> &'static str {
    match verb {
        None => ROUTE_KEYWORD,
        Some(HttpVerb::Get) => "httpget",
        Some(HttpVerb::Put) => "httpput",
        Some(HttpVerb::Post) => "httppost",
        Some(HttpVerb::Delete) => "httpdelete",
        Some(HttpVerb::Patch) => "httppatch",
    }
}

/// Parse a route-family directive with the cursor on its keyword.
///
/// The pattern is the rest of the line, trimmed, with one pair of
/// surrounding double quotes removed. An empty pattern is accepted.
pub(super) fn route_directive(
    parser: &mut CodeParser,
    verb: Option<HttpVerb>,
) -> Result<(), ParseError> {
    parser.assert_directive(route_keyword(verb))?;
    parser.accept_and_move_next();
    parser.output_directive_keyword();

    parser.accept_until(TokenKind::NewLine);
    if !parser.design_time() {
        parser.optional(TokenKind::NewLine);
    }

    let content = parser.span_content();
    let pattern = unquote(content.trim());
    tracing::trace!(pattern, verb = verb.map(HttpVerb::as_str), "Parsed route directive");

    parser.set_descriptor(CodeGeneratorDescriptor::route(pattern, verb));
    parser.complete_block();
    parser.output(SpanKind::MetaCode);
    Ok(())
}

fn unquote(pattern: &str) -> &str {
    pattern
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(pattern)
}

#[cfg(test)]
mod tests {
    use super::super::tests::{parse, parse_with};
    use super::super::{Directive, DirectiveParser};
    use super::*;
    use crate::config::ParserConfig;
    use crate::parser::{AcceptedCharacters, BlockKind};
    use pretty_assertions::assert_eq;

    fn routes(source: &str) -> Vec<CodeGeneratorDescriptor> {
        parse(source).descriptors().cloned().collect()
    }

    #[test]
    fn test_route_without_verb() {
        assert_eq!(
            routes("@route /foo\n"),
            vec![CodeGeneratorDescriptor::route("/foo", None)]
        );
    }

    #[test]
    fn test_quoted_pattern() {
        assert_eq!(
            routes("@httpget \"/foo/{bar}\"\n"),
            vec![CodeGeneratorDescriptor::route(
                "/foo/{bar}",
                Some(HttpVerb::Get)
            )]
        );
    }

    #[test]
    fn test_every_verb() {
        let source = "@httpget /a\n@httpput /a\n@httppost /a\n@httpdelete /a\n@httppatch /a\n";
        let verbs: Vec<Option<HttpVerb>> = routes(source)
            .into_iter()
            .map(|d| match d {
                CodeGeneratorDescriptor::Route { verb, .. } => verb,
                other => panic!("expected route, got {other:?}"),
            })
            .collect();
        assert_eq!(
            verbs,
            vec![
                Some(HttpVerb::Get),
                Some(HttpVerb::Put),
                Some(HttpVerb::Post),
                Some(HttpVerb::Delete),
                Some(HttpVerb::Patch),
            ]
        );
    }

    #[test]
    fn test_pattern_is_trimmed() {
        assert_eq!(
            routes("@route   /items/{id:int}   \r\n"),
            vec![CodeGeneratorDescriptor::route("/items/{id:int}", None)]
        );
    }

    #[test]
    fn test_empty_pattern_is_accepted() {
        let results = parse("@route\n<p>");
        assert!(results.diagnostics.is_empty());
        assert_eq!(
            results.descriptors().cloned().collect::<Vec<_>>(),
            vec![CodeGeneratorDescriptor::route("", None)]
        );
        // The following line is left alone.
        assert_eq!(results.blocks[1].content(), "<p>");
    }

    #[test]
    fn test_unbalanced_quote_kept() {
        assert_eq!(
            routes("@route \"/open\n"),
            vec![CodeGeneratorDescriptor::route("\"/open", None)]
        );
    }

    #[test]
    fn test_route_spans() {
        let results = parse("@httppost  /submit\n");
        let block = &results.blocks[0];

        assert_eq!(block.kind, BlockKind::Directive);
        let kinds: Vec<SpanKind> = block.spans.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [SpanKind::Transition, SpanKind::MetaCode, SpanKind::MetaCode]
        );
        assert_eq!(block.spans[1].content(), "httppost ");
        assert_eq!(
            block.spans[1].accepted_characters,
            AcceptedCharacters::None
        );
        assert_eq!(block.spans[2].content(), " /submit\n");
        assert!(block.spans[2].descriptor.is_some());
    }

    #[test]
    fn test_route_design_time_keeps_newline() {
        let config = ParserConfig::new().with_design_time(true);
        let mut parser = DirectiveParser::new("route /x\nnext", &config);
        parser.handle(Directive::Route(None)).unwrap();
        assert!(parser.code_parser().at(TokenKind::NewLine));

        let results = parse_with("@route /x\n", &config);
        assert_eq!(results.blocks[0].content(), "@route /x");
    }

    #[test]
    fn test_route_consumes_newline() {
        let mut parser = DirectiveParser::new("route /x\nnext", &ParserConfig::default());
        parser.handle(Directive::Route(None)).unwrap();
        assert!(parser.code_parser().at_keyword("next"));
    }

    #[test]
    fn test_verb_keyword_must_match_handler() {
        let mut parser = DirectiveParser::new("httpget /x", &ParserConfig::default());
        let err = parser.handle(Directive::Route(Some(HttpVerb::Post))).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedDirective {
                expected: "httppost",
                ..
            }
        ));
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"/a\""), "/a");
        assert_eq!(unquote("/a"), "/a");
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote("\"\""), "");
    }
}
