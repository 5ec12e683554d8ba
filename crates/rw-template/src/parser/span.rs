//! Spans: classified token runs emitted by the parser.

use crate::descriptor::CodeGeneratorDescriptor;
use crate::syntax::{SourceLocation, Token};

/// Classification of an emitted span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum SpanKind {
    /// The `@` that switches from markup into a directive.
    Transition,
    /// Directive metadata, consumed by code generation.
    MetaCode,
    /// Host-language code emitted into the generated output.
    Code,
    /// Template text outside directives.
    Markup,
}

/// Which characters an editor may insert into a span without reparsing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum AcceptedCharacters {
    /// Any edit stays inside the span.
    #[default]
    Any,
    /// Any edit requires a reparse.
    None,
}

/// An immutable run of tokens with its classification.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Span {
    /// Span classification.
    pub kind: SpanKind,
    /// Tokens in source order.
    pub tokens: Vec<Token>,
    /// Location of the first token (or of the cursor for an empty span).
    pub start: SourceLocation,
    /// Edit policy.
    pub accepted_characters: AcceptedCharacters,
    /// Code generation payload, if any.
    pub descriptor: Option<CodeGeneratorDescriptor>,
}

impl Span {
    /// Concatenated token text.
    #[must_use]
    pub fn content(&self) -> String {
        join_tokens(&self.tokens)
    }
}

/// Accumulates tokens for the span being built.
#[derive(Debug, Default)]
pub(crate) struct SpanBuilder {
    tokens: Vec<Token>,
    accepted_characters: AcceptedCharacters,
    descriptor: Option<CodeGeneratorDescriptor>,
}

impl SpanBuilder {
    pub(crate) fn accept(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub(crate) fn len(&self) -> usize {
        self.tokens.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.descriptor.is_none()
    }

    pub(crate) fn content(&self) -> String {
        join_tokens(&self.tokens)
    }

    /// Tokens accepted since the span held `from` tokens.
    pub(crate) fn content_from(&self, from: usize) -> String {
        join_tokens(self.tokens.get(from..).unwrap_or_default())
    }

    pub(crate) fn set_accepted_characters(&mut self, accepted: AcceptedCharacters) {
        self.accepted_characters = accepted;
    }

    pub(crate) fn set_descriptor(&mut self, descriptor: CodeGeneratorDescriptor) {
        self.descriptor = Some(descriptor);
    }

    /// Take the accumulated state as a span and reset the builder.
    pub(crate) fn build(&mut self, kind: SpanKind, fallback_start: SourceLocation) -> Span {
        let builder = std::mem::take(self);
        let start = builder
            .tokens
            .first()
            .map_or(fallback_start, |token| token.location);
        Span {
            kind,
            tokens: builder.tokens,
            start,
            accepted_characters: builder.accepted_characters,
            descriptor: builder.descriptor,
        }
    }
}

fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.content.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    fn token(content: &str, at: usize) -> Token {
        Token::new(
            TokenKind::Identifier,
            content,
            SourceLocation::new(at, 0, at),
        )
    }

    #[test]
    fn test_build_resets_builder() {
        let mut builder = SpanBuilder::default();
        builder.accept(token("a", 3));
        builder.set_accepted_characters(AcceptedCharacters::None);

        let span = builder.build(SpanKind::MetaCode, SourceLocation::default());

        assert_eq!(span.content(), "a");
        assert_eq!(span.start, SourceLocation::new(3, 0, 3));
        assert_eq!(span.accepted_characters, AcceptedCharacters::None);
        assert!(builder.is_empty());
        assert_eq!(builder.len(), 0);
    }

    #[test]
    fn test_empty_span_uses_fallback_start() {
        let mut builder = SpanBuilder::default();
        let span = builder.build(SpanKind::Code, SourceLocation::new(9, 1, 2));
        assert_eq!(span.start, SourceLocation::new(9, 1, 2));
    }

    #[test]
    fn test_descriptor_makes_builder_non_empty() {
        let mut builder = SpanBuilder::default();
        builder.set_descriptor(CodeGeneratorDescriptor::route("", None));
        assert!(!builder.is_empty());
    }

    #[test]
    fn test_content_from() {
        let mut builder = SpanBuilder::default();
        builder.accept(token("a", 0));
        builder.accept(token("b", 1));
        builder.accept(token("c", 2));

        assert_eq!(builder.content(), "abc");
        assert_eq!(builder.content_from(1), "bc");
        assert_eq!(builder.content_from(5), "");
    }
}
