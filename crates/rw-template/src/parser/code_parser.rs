//! Token cursor and shared grammar routines for code inside a template.

use crate::descriptor::CodeGeneratorDescriptor;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::error::ParseError;
use crate::syntax::{SourceLocation, Token, TokenKind, tokenize};

use super::block::{Block, BlockKind};
use super::results::ParseResults;
use super::span::{AcceptedCharacters, SpanBuilder, SpanKind};

/// Keyword of the built-in base class directive.
pub const INHERITS_KEYWORD: &str = "inherits";

/// Statement parser over a tokenized template.
///
/// Owns the token cursor, the span being accumulated, the block being
/// built and the diagnostics sink. Directive handlers drive it through
/// the accept/output primitives below.
#[derive(Debug)]
pub struct CodeParser {
    tokens: Vec<Token>,
    position: usize,
    end_location: SourceLocation,
    design_time: bool,
    span: SpanBuilder,
    block: Option<Block>,
    complete_pending: bool,
    blocks: Vec<Block>,
    diagnostics: Vec<Diagnostic>,
}

impl CodeParser {
    /// Tokenize `source` and position the cursor at its first token.
    #[must_use]
    pub fn new(source: &str, design_time: bool) -> Self {
        Self::from_tokens(tokenize(source), design_time)
    }

    /// Create a parser over already tokenized input.
    #[must_use]
    pub fn from_tokens(tokens: Vec<Token>, design_time: bool) -> Self {
        let end_location = tokens
            .last()
            .map_or_else(SourceLocation::default, Token::end_location);
        Self {
            tokens,
            position: 0,
            end_location,
            design_time,
            span: SpanBuilder::default(),
            block: None,
            complete_pending: false,
            blocks: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Whether trailing newlines are left for the markup that follows.
    #[must_use]
    pub fn design_time(&self) -> bool {
        self.design_time
    }

    /// Index of the current token.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current token, `None` at end of input.
    #[must_use]
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Token after the current one.
    #[must_use]
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position + 1)
    }

    /// Whether the cursor is past the last token.
    #[must_use]
    pub fn end_of_file(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Whether the current token has the given kind.
    #[must_use]
    pub fn at(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|token| token.kind == kind)
    }

    /// Whether the current token is the identifier `keyword`.
    #[must_use]
    pub fn at_keyword(&self, keyword: &str) -> bool {
        self.current().is_some_and(|token| token.is_keyword(keyword))
    }

    /// Location of the current token, or the end of the document.
    #[must_use]
    pub fn current_location(&self) -> SourceLocation {
        self.current()
            .map_or(self.end_location, |token| token.location)
    }

    /// Accept the current token into the span and advance.
    ///
    /// Returns `false` at end of input.
    pub fn accept_and_move_next(&mut self) -> bool {
        let Some(token) = self.current().cloned() else {
            return false;
        };
        self.span.accept(token);
        self.position += 1;
        true
    }

    /// Accept a token that was previously taken off the stream.
    pub fn accept(&mut self, token: Token) {
        self.span.accept(token);
    }

    /// Accept tokens while `predicate` holds.
    pub fn accept_while(&mut self, predicate: impl Fn(&Token) -> bool) {
        while self.current().is_some_and(&predicate) {
            self.accept_and_move_next();
        }
    }

    /// Accept tokens until one of `kind` (not accepted) or end of input.
    pub fn accept_until(&mut self, kind: TokenKind) {
        self.accept_while(|token| token.kind != kind);
    }

    /// Accept the current token if it has the given kind.
    pub fn optional(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.accept_and_move_next()
        } else {
            false
        }
    }

    /// Fail unless the current token is the directive `keyword`.
    ///
    /// A mismatch means a handler was dispatched for the wrong keyword.
    pub fn assert_directive(&self, keyword: &'static str) -> Result<(), ParseError> {
        if self.at_keyword(keyword) {
            return Ok(());
        }
        Err(ParseError::UnexpectedDirective {
            expected: keyword,
            found: self
                .current()
                .map(|token| token.content.clone())
                .unwrap_or_default(),
            location: self.current_location(),
        })
    }

    /// Accept exactly one whitespace character.
    ///
    /// When the current whitespace token is longer than one character, the
    /// remainder is returned so the caller can accept it into the next span.
    pub fn accept_single_whitespace_character(&mut self) -> Option<Token> {
        let token = self
            .current()
            .filter(|token| token.kind == TokenKind::WhiteSpace)?
            .clone();
        self.position += 1;

        match token.split_first_char() {
            Some((head, tail)) => {
                self.span.accept(head);
                Some(tail)
            }
            None => {
                self.span.accept(token);
                None
            }
        }
    }

    /// Number of tokens in the span being built.
    #[must_use]
    pub fn span_len(&self) -> usize {
        self.span.len()
    }

    /// Text of the span being built.
    #[must_use]
    pub fn span_content(&self) -> String {
        self.span.content()
    }

    /// Text of the span being built, starting at token index `from`.
    #[must_use]
    pub fn span_content_from(&self, from: usize) -> String {
        self.span.content_from(from)
    }

    /// Set the edit policy of the span being built.
    pub fn set_accepted_characters(&mut self, accepted: AcceptedCharacters) {
        self.span.set_accepted_characters(accepted);
    }

    /// Attach a code generation descriptor to the span being built.
    pub fn set_descriptor(&mut self, descriptor: CodeGeneratorDescriptor) {
        self.span.set_descriptor(descriptor);
    }

    /// Classify the enclosing block as a directive.
    pub fn mark_directive_block(&mut self) {
        self.open_block(BlockKind::Statement).kind = BlockKind::Directive;
    }

    /// Finalize the current block after the next emitted span.
    pub fn complete_block(&mut self) {
        self.complete_pending = true;
    }

    /// Emit the accumulated tokens as a span of `kind`.
    ///
    /// An empty span without a descriptor is dropped.
    pub fn output(&mut self, kind: SpanKind) {
        if !self.span.is_empty() {
            let fallback_start = self.current_location();
            let span = self.span.build(kind, fallback_start);
            self.open_block(BlockKind::Statement).spans.push(span);
        }

        if self.complete_pending {
            self.complete_pending = false;
            self.close_block();
        }
    }

    /// Report a recoverable error.
    pub fn on_error(&mut self, location: SourceLocation, kind: DiagnosticKind) {
        let diagnostic = Diagnostic { location, kind };
        tracing::debug!(%location, message = %diagnostic.kind, "Directive diagnostic");
        self.diagnostics.push(diagnostic);
    }

    /// Diagnostics reported so far, in order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Blocks finalized so far.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Close any open block and return everything emitted.
    #[must_use]
    pub fn finish(mut self) -> ParseResults {
        self.end_block();
        ParseResults {
            blocks: self.blocks,
            diagnostics: self.diagnostics,
        }
    }

    pub(crate) fn begin_block(&mut self, kind: BlockKind) {
        self.end_block();
        self.block = Some(Block::new(kind));
    }

    pub(crate) fn current_block_kind(&self) -> Option<BlockKind> {
        self.block.as_ref().map(|block| block.kind)
    }

    /// Flush leftover tokens and close the open block, if any.
    pub(crate) fn end_block(&mut self) {
        if !self.span.is_empty() {
            let kind = match self.current_block_kind() {
                Some(BlockKind::Markup) => SpanKind::Markup,
                _ => SpanKind::Code,
            };
            self.output(kind);
        }
        self.complete_pending = false;
        self.close_block();
    }

    fn open_block(&mut self, kind: BlockKind) -> &mut Block {
        self.block.get_or_insert_with(|| Block::new(kind))
    }

    fn close_block(&mut self) {
        if let Some(block) = self.block.take() {
            tracing::trace!(kind = ?block.kind, spans = block.spans.len(), "Completed block");
            self.blocks.push(block);
        }
    }

    /// Parse a dotted, optionally generic type name.
    ///
    /// Accepts `Name(.Name)*`, an optional `<...>` argument list, an optional
    /// `?` and any number of `[]` ranks. Returns exactly the consumed text,
    /// which is empty when the cursor is not at an identifier.
    pub fn namespace_or_type_name(&mut self) -> String {
        let start = self.span.len();
        self.type_name();
        self.span.content_from(start)
    }

    /// Type name grammar, walked iteratively with an explicit nesting depth.
    ///
    /// Each `<` opens an argument list and each argument is a type name in
    /// turn. A missing `>` closes the list at the first token that cannot
    /// continue it.
    fn type_name(&mut self) -> bool {
        if !self.at(TokenKind::Identifier) {
            return false;
        }

        let mut depth = 0usize;
        'argument: loop {
            let mut parsed = self.qualified_name();
            if parsed && self.optional(TokenKind::LessThan) {
                depth += 1;
                self.accept_while(is_spacing_token(false, true));
                continue;
            }
            if parsed {
                self.type_suffix();
            }

            while depth > 0 {
                if parsed {
                    self.accept_while(is_spacing_token(false, true));
                    if self.optional(TokenKind::Comma) {
                        self.accept_while(is_spacing_token(false, true));
                        continue 'argument;
                    }
                }
                self.optional(TokenKind::GreaterThan);
                depth -= 1;
                self.type_suffix();
                parsed = true;
            }
            return true;
        }
    }

    /// `Name(.Name)*`
    fn qualified_name(&mut self) -> bool {
        if !self.optional(TokenKind::Identifier) {
            return false;
        }
        while self.at(TokenKind::Dot) && self.peek_is(TokenKind::Identifier) {
            self.accept_and_move_next();
            self.accept_and_move_next();
        }
        true
    }

    /// Optional `?` followed by any number of `[]` ranks.
    fn type_suffix(&mut self) {
        self.optional(TokenKind::QuestionMark);
        while self.at(TokenKind::LeftBracket) && self.peek_is(TokenKind::RightBracket) {
            self.accept_and_move_next();
            self.accept_and_move_next();
        }
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.kind == kind)
    }

    /// Emit the directive keyword as a metacode span.
    ///
    /// Expects the keyword to be accepted already. Marks the block as a
    /// directive, takes one separating whitespace character into the
    /// metacode span and the rest of the spacing (comments included,
    /// newlines excluded) into the next span. A metacode span holding more
    /// than the keyword accepts no edits.
    pub fn output_directive_keyword(&mut self) {
        self.mark_directive_block();

        let remaining_whitespace = self.accept_single_whitespace_character();
        if self.span_len() > 1 {
            self.set_accepted_characters(AcceptedCharacters::None);
        }
        self.output(SpanKind::MetaCode);

        if let Some(whitespace) = remaining_whitespace {
            self.accept(whitespace);
        }
        self.accept_while(is_spacing_token(false, true));
    }

    /// Shared grammar of directives that name a base type.
    ///
    /// Expects the cursor just after the directive keyword. Emits the keyword
    /// and one separating whitespace character as a metacode span, then the
    /// rest of the line as a code span carrying `create(type_name)`.
    pub fn base_type_directive<F>(&mut self, keyword: &'static str, create: F)
    where
        F: FnOnce(String) -> CodeGeneratorDescriptor,
    {
        self.output_directive_keyword();

        if self.end_of_file() || self.at(TokenKind::NewLine) {
            self.on_error(
                self.current_location(),
                DiagnosticKind::MissingTypeName { keyword },
            );
        }

        self.accept_until(TokenKind::NewLine);
        if !self.design_time {
            self.optional(TokenKind::NewLine);
        }

        let type_name = self.span_content();
        self.set_descriptor(create(type_name.trim().to_owned()));

        self.complete_block();
        self.output(SpanKind::Code);
    }

    /// Grammar of `inherits <type-name>` after the keyword.
    pub fn inherits_directive_core(&mut self) {
        self.base_type_directive(INHERITS_KEYWORD, |base_type| {
            CodeGeneratorDescriptor::SetBaseType { base_type }
        });
    }
}

/// Predicate matching whitespace, and optionally newlines and comments.
pub fn is_spacing_token(include_newlines: bool, include_comments: bool) -> impl Fn(&Token) -> bool {
    move |token: &Token| match token.kind {
        TokenKind::WhiteSpace => true,
        TokenKind::NewLine => include_newlines,
        TokenKind::Comment => include_comments,
        _ => false,
    }
}
