//! Template directives: `@model`, `@inherits`, `@inject` and the route family.
//!
//! # Architecture
//!
//! [`DirectiveParser`] extends the base [`CodeParser`] with a fixed set of
//! directive handlers. The keyword table is filled once at construction and
//! dispatch is a `match` over [`Directive`]. Handlers share one piece of
//! document state, [`ParserState`], used to detect conflicting directives.
//!
//! # Example
//!
//! ```
//! use rw_template::{CodeGeneratorDescriptor, DirectiveParser, ParserConfig};
//!
//! let config = ParserConfig::new().with_base_type("Page");
//! let mut parser = DirectiveParser::new("@model Person\n<h1>Hi</h1>", &config);
//! parser.parse().unwrap();
//!
//! let results = parser.into_results();
//! assert!(!results.has_errors());
//! assert_eq!(
//!     results.descriptors().next(),
//!     Some(&CodeGeneratorDescriptor::model("Page", "Person"))
//! );
//! ```

mod inject;
mod model;
mod route;

use crate::config::ParserConfig;
use crate::descriptor::HttpVerb;
use crate::error::ParseError;
use crate::parser::{CodeParser, DirectiveTable, INHERITS_KEYWORD, ParseResults, document};
use crate::syntax::SourceLocation;

pub use inject::INJECT_KEYWORD;
pub use model::MODEL_KEYWORD;
pub use route::{ROUTE_KEYWORD, route_keyword};

/// Handler selected by a directive keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `@inherits <type-name>`
    Inherits,
    /// `@model <type-name>`
    Model,
    /// `@inject <type-name> <property-name>`
    Inject,
    /// `@route <pattern>` (`None`) or `@http<verb> <pattern>`.
    Route(Option<HttpVerb>),
}

impl Directive {
    /// Keyword that selects this handler.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Inherits => INHERITS_KEYWORD,
            Self::Model => MODEL_KEYWORD,
            Self::Inject => INJECT_KEYWORD,
            Self::Route(verb) => route_keyword(verb),
        }
    }
}

/// Directives registered by [`DirectiveParser`] on top of `inherits`.
const DIRECTIVES: [Directive; 8] = [
    Directive::Model,
    Directive::Inject,
    Directive::Route(None),
    Directive::Route(Some(HttpVerb::Get)),
    Directive::Route(Some(HttpVerb::Put)),
    Directive::Route(Some(HttpVerb::Post)),
    Directive::Route(Some(HttpVerb::Delete)),
    Directive::Route(Some(HttpVerb::Patch)),
];

/// Document-level state shared by the directive handlers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserState {
    base_type: String,
    model_statement_seen: bool,
    inherits_directive_end_location: Option<SourceLocation>,
}

impl ParserState {
    /// Fresh state for a document whose default base class is `base_type`.
    #[must_use]
    pub fn new(base_type: impl Into<String>) -> Self {
        Self {
            base_type: base_type.into(),
            ..Self::default()
        }
    }

    /// Default base class wrapped by `@model`.
    #[must_use]
    pub fn base_type(&self) -> &str {
        &self.base_type
    }

    /// Whether a model directive has been parsed.
    #[must_use]
    pub fn model_statement_seen(&self) -> bool {
        self.model_statement_seen
    }

    /// Location just after the last `inherits` keyword, if any.
    #[must_use]
    pub fn inherits_directive_end_location(&self) -> Option<SourceLocation> {
        self.inherits_directive_end_location
    }
}

/// Template parser that recognizes the directive set.
///
/// One instance parses one document.
#[derive(Debug)]
pub struct DirectiveParser {
    parser: CodeParser,
    directives: DirectiveTable<Directive>,
    state: ParserState,
}

impl DirectiveParser {
    /// Create a parser for `source` and register every directive.
    #[must_use]
    pub fn new(source: &str, config: &ParserConfig) -> Self {
        Self::from_code_parser(
            CodeParser::new(source, config.design_time),
            &config.base_type,
        )
    }

    /// Wrap an existing code parser.
    #[must_use]
    pub fn from_code_parser(parser: CodeParser, base_type: &str) -> Self {
        let mut directives = DirectiveTable::new();
        directives.register(INHERITS_KEYWORD, Directive::Inherits);
        for directive in DIRECTIVES {
            directives.register(directive.keyword(), directive);
        }

        Self {
            parser,
            directives,
            state: ParserState::new(base_type),
        }
    }

    /// Registered keywords.
    #[must_use]
    pub fn directives(&self) -> &DirectiveTable<Directive> {
        &self.directives
    }

    /// Conflict-tracking state.
    #[must_use]
    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// Parse the whole document.
    ///
    /// Recoverable problems are collected as diagnostics; an error is only
    /// returned when a handler is dispatched on the wrong keyword.
    pub fn parse(&mut self) -> Result<(), ParseError> {
        let Self {
            parser,
            directives,
            state,
        } = self;
        document::parse_document(parser, directives, |parser, directive| {
            dispatch(parser, state, directive)
        })
    }

    /// Run the handler for `directive` with the cursor on its keyword.
    pub fn handle(&mut self, directive: Directive) -> Result<(), ParseError> {
        dispatch(&mut self.parser, &mut self.state, directive)
    }

    /// Underlying code parser.
    #[must_use]
    pub fn code_parser(&self) -> &CodeParser {
        &self.parser
    }

    /// Close the open block and return everything emitted.
    #[must_use]
    pub fn into_results(self) -> ParseResults {
        self.parser.finish()
    }
}

fn dispatch(
    parser: &mut CodeParser,
    state: &mut ParserState,
    directive: Directive,
) -> Result<(), ParseError> {
    match directive {
        Directive::Inherits => model::inherits_directive(parser, state),
        Directive::Model => model::model_directive(parser, state),
        Directive::Inject => inject::inject_directive(parser),
        Directive::Route(verb) => route::route_directive(parser, verb),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::CodeGeneratorDescriptor;
    use crate::diagnostics::DiagnosticKind;
    use crate::parser::{BlockKind, SpanKind};
    use pretty_assertions::assert_eq;

    pub(super) fn parse(source: &str) -> ParseResults {
        parse_with(source, &ParserConfig::new().with_base_type("Page"))
    }

    pub(super) fn parse_with(source: &str, config: &ParserConfig) -> ParseResults {
        let mut parser = DirectiveParser::new(source, config);
        parser.parse().unwrap();
        parser.into_results()
    }

    #[test]
    fn test_registers_all_keywords() {
        let parser = DirectiveParser::new("", &ParserConfig::default());
        let keywords: Vec<&str> = parser.directives().keywords().collect();
        assert_eq!(
            keywords,
            [
                "httpdelete",
                "httpget",
                "httppatch",
                "httppost",
                "httpput",
                "inherits",
                "inject",
                "model",
                "route",
            ]
        );
    }

    #[test]
    fn test_keyword_round_trip() {
        let parser = DirectiveParser::new("", &ParserConfig::default());
        for directive in DIRECTIVES {
            assert_eq!(parser.directives().get(directive.keyword()), Some(directive));
        }
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let results = parse("@Model Foo\n@INJECT A b\n");
        assert_eq!(results.blocks.len(), 1);
        assert_eq!(results.blocks[0].kind, BlockKind::Markup);
        assert_eq!(results.descriptors().count(), 0);
    }

    #[test]
    fn test_wrong_keyword_is_fatal() {
        let mut parser = DirectiveParser::new("inject Foo bar", &ParserConfig::default());
        let err = parser.handle(Directive::Model).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedDirective {
                expected: "model",
                found: "inject".to_owned(),
                location: SourceLocation::default(),
            }
        );
    }

    #[test]
    fn test_mixed_document() {
        let source = "@model Person\n@inject ILogger Log\n@httpget /people\n<h1>@Model.Name</h1>\n";
        let results = parse(source);

        assert!(!results.has_errors());
        assert_eq!(
            results.descriptors().cloned().collect::<Vec<_>>(),
            vec![
                CodeGeneratorDescriptor::model("Page", "Person"),
                CodeGeneratorDescriptor::inject("ILogger", "Log"),
                CodeGeneratorDescriptor::route("/people", Some(HttpVerb::Get)),
            ]
        );

        let kinds: Vec<BlockKind> = results.blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            [
                BlockKind::Directive,
                BlockKind::Directive,
                BlockKind::Directive,
                BlockKind::Markup,
            ]
        );
        assert_eq!(results.content(), source);
    }

    #[test]
    fn test_directive_spans_are_classified() {
        let results = parse("@inject A b\n@route /x\n");

        let inject: Vec<SpanKind> = results.blocks[0].spans.iter().map(|s| s.kind).collect();
        assert_eq!(
            inject,
            [SpanKind::Transition, SpanKind::MetaCode, SpanKind::Code]
        );

        let route: Vec<SpanKind> = results.blocks[1].spans.iter().map(|s| s.kind).collect();
        assert_eq!(
            route,
            [SpanKind::Transition, SpanKind::MetaCode, SpanKind::MetaCode]
        );
    }

    #[test]
    fn test_handlers_stop_at_next_directive() {
        let results = parse("@inject A b\n@inject C d");
        assert_eq!(results.blocks.len(), 2);
        assert_eq!(results.blocks[0].content(), "@inject A b\n");
        assert_eq!(results.blocks[1].content(), "@inject C d");
    }

    #[test]
    fn test_design_time_newline_becomes_markup() {
        let config = ParserConfig::new().with_design_time(true);
        let results = parse_with("@model Foo\n<p>", &config);

        assert_eq!(results.blocks.len(), 2);
        assert_eq!(results.blocks[0].content(), "@model Foo");
        assert_eq!(results.blocks[1].kind, BlockKind::Markup);
        assert_eq!(results.blocks[1].content(), "\n<p>");
    }

    #[test]
    fn test_diagnostics_do_not_stop_parsing() {
        let results = parse("@inject\n@model\n@route /ok\n");

        assert_eq!(
            results
                .diagnostics
                .iter()
                .map(|d| d.kind.clone())
                .collect::<Vec<_>>(),
            vec![
                DiagnosticKind::MissingTypeName { keyword: "inject" },
                DiagnosticKind::MissingTypeName { keyword: "model" },
            ]
        );
        assert_eq!(results.descriptors().count(), 3);
    }
}
