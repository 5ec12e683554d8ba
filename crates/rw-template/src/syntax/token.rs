//! Token types produced by the lexer.

use std::fmt;

/// Position of a token in the source document.
///
/// All indices are zero-based. `absolute_index` is a byte offset,
/// `character_index` counts characters from the start of the line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct SourceLocation {
    /// Byte offset from the start of the document.
    pub absolute_index: usize,
    /// Line number.
    pub line_index: usize,
    /// Character offset within the line.
    pub character_index: usize,
}

impl SourceLocation {
    /// Create a location from its three indices.
    #[must_use]
    pub const fn new(absolute_index: usize, line_index: usize, character_index: usize) -> Self {
        Self {
            absolute_index,
            line_index,
            character_index,
        }
    }

    /// Location reached after reading `text` starting at `self`.
    #[must_use]
    pub fn advance(self, text: &str) -> Self {
        let mut location = self;
        location.absolute_index += text.len();
        for c in text.chars() {
            if c == '\n' {
                location.line_index += 1;
                location.character_index = 0;
            } else {
                location.character_index += 1;
            }
        }
        location
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_index + 1, self.character_index + 1)
    }
}

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum TokenKind {
    /// Letters, digits and underscores, not starting with a digit.
    Identifier,
    /// A run of spaces and tabs.
    WhiteSpace,
    /// `\n` or `\r\n`.
    NewLine,
    /// `// ...` up to the end of the line, or `/* ... */`.
    Comment,
    /// A double-quoted string, including the quotes.
    StringLiteral,
    /// `@`
    Transition,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `?`
    QuestionMark,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// Any other single character.
    Other,
}

/// A classified slice of the source document.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Token {
    /// Token classification.
    pub kind: TokenKind,
    /// Exact source text.
    pub content: String,
    /// Location of the first character.
    pub location: SourceLocation,
}

impl Token {
    /// Create a token.
    #[must_use]
    pub fn new(kind: TokenKind, content: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            content: content.into(),
            location,
        }
    }

    /// Location just past the last character of this token.
    #[must_use]
    pub fn end_location(&self) -> SourceLocation {
        self.location.advance(&self.content)
    }

    /// Whether this token is the identifier `keyword`.
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Identifier && self.content == keyword
    }

    /// Split a multi-character token after its first character.
    ///
    /// Returns `None` for single-character tokens.
    pub(crate) fn split_first_char(&self) -> Option<(Self, Self)> {
        let mut chars = self.content.chars();
        let first = chars.next()?;
        let rest = chars.as_str();
        if rest.is_empty() {
            return None;
        }

        let head = Self::new(self.kind, first.to_string(), self.location);
        let tail = Self::new(self.kind, rest, head.end_location());
        Some((head, tail))
    }
}
