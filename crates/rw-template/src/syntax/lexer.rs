//! Template source tokenizer.
//!
//! Splits a document into classified tokens. The lexer is lossless:
//! concatenating the content of every token reproduces the input.

use super::{SourceLocation, Token, TokenKind};

/// Tokenize a template document.
///
/// # Example
///
/// ```
/// use rw_template::syntax::{TokenKind, tokenize};
///
/// let tokens = tokenize("@model Foo\n");
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Transition,
///         TokenKind::Identifier,
///         TokenKind::WhiteSpace,
///         TokenKind::Identifier,
///         TokenKind::NewLine,
///     ]
/// );
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut location = SourceLocation::default();
    let mut remaining = source;

    while !remaining.is_empty() {
        let (kind, len) = scan(remaining);
        let (content, rest) = remaining.split_at(len);
        let token = Token::new(kind, content, location);
        location = token.end_location();
        tokens.push(token);
        remaining = rest;
    }

    tokens
}

/// Classify the token at the start of `s` and return its byte length.
///
/// `s` must not be empty.
fn scan(s: &str) -> (TokenKind, usize) {
    let Some(first) = s.chars().next() else {
        return (TokenKind::Other, 0);
    };

    match first {
        '\n' => (TokenKind::NewLine, 1),
        '\r' if s[1..].starts_with('\n') => (TokenKind::NewLine, 2),
        ' ' | '\t' => (
            TokenKind::WhiteSpace,
            prefix_len(s, |c| c == ' ' || c == '\t'),
        ),
        '/' if s[1..].starts_with('/') => (TokenKind::Comment, line_len(s)),
        '/' if s[1..].starts_with('*') => (TokenKind::Comment, block_comment_len(s)),
        '"' => (TokenKind::StringLiteral, string_literal_len(s)),
        '@' => (TokenKind::Transition, 1),
        '.' => (TokenKind::Dot, 1),
        ',' => (TokenKind::Comma, 1),
        '<' => (TokenKind::LessThan, 1),
        '>' => (TokenKind::GreaterThan, 1),
        '?' => (TokenKind::QuestionMark, 1),
        '[' => (TokenKind::LeftBracket, 1),
        ']' => (TokenKind::RightBracket, 1),
        c if is_identifier_start(c) => (
            TokenKind::Identifier,
            prefix_len(s, is_identifier_part),
        ),
        c => (TokenKind::Other, c.len_utf8()),
    }
}

fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_identifier_part(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Byte length of the longest prefix whose characters satisfy `pred`.
fn prefix_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.find(|c: char| !pred(c)).unwrap_or(s.len())
}

/// Byte length up to, not including, the line terminator.
fn line_len(s: &str) -> usize {
    let end = s.find('\n').unwrap_or(s.len());
    if s[..end].ends_with('\r') {
        end - 1
    } else {
        end
    }
}

/// Byte length of a `/* ... */` comment. Unterminated comments run to the end.
fn block_comment_len(s: &str) -> usize {
    s[2..].find("*/").map_or(s.len(), |i| i + 4)
}

/// Byte length of a string literal, honoring backslash escapes.
///
/// An unterminated literal stops before the line terminator.
fn string_literal_len(s: &str) -> usize {
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        match c {
            '\n' | '\r' if !escaped => return i,
            '"' if !escaped => return i + 1,
            '\\' => escaped = !escaped,
            _ => escaped = false,
        }
    }
    s.len()
}
