//! Fatal parse errors.

use crate::syntax::SourceLocation;

/// Error that aborts parsing of a document.
///
/// User mistakes in directive syntax are never reported through this type;
/// they become [`Diagnostic`](crate::Diagnostic)s and parsing continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A directive handler was entered on a token that is not its keyword.
    #[error("Expected directive '{expected}' at {location}, found '{found}'")]
    UnexpectedDirective {
        /// Keyword the handler expects.
        expected: &'static str,
        /// Text of the current token (empty at end of input).
        found: String,
        /// Location of the current token.
        location: SourceLocation,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_directive_message() {
        let err = ParseError::UnexpectedDirective {
            expected: "model",
            found: "inject".to_owned(),
            location: SourceLocation::new(1, 0, 1),
        };
        assert_eq!(
            err.to_string(),
            "Expected directive 'model' at 1:2, found 'inject'"
        );
    }
}
