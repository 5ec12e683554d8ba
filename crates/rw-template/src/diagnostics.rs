//! Recoverable parse diagnostics.

use std::fmt;

use crate::syntax::SourceLocation;

/// Kind of a recoverable error reported while parsing directives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum DiagnosticKind {
    /// A base-type or inject directive has no type name on its line.
    #[error("The '{keyword}' keyword must be followed by a type name on the same line.")]
    MissingTypeName {
        /// Directive keyword.
        keyword: &'static str,
    },
    /// An inject directive has a type name but no property name.
    #[error(
        "A property name must be specified when using the '{keyword}' statement. \
         Format for a '{keyword}' statement is '@{keyword} <Type Name> <Property Name>'."
    )]
    MissingPropertyName {
        /// Directive keyword.
        keyword: &'static str,
    },
    /// A second model directive in the same document.
    #[error("Only one '{keyword}' statement is allowed.")]
    DuplicateModel {
        /// Directive keyword.
        keyword: &'static str,
    },
    /// Both an inherits and a model directive in the same document.
    #[error("The 'inherits' keyword is not allowed when a '{keyword}' keyword is used.")]
    ModelAndInherits {
        /// Model directive keyword.
        keyword: &'static str,
    },
}

/// A recoverable error with its position in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Diagnostic {
    /// Where the problem was detected.
    pub location: SourceLocation,
    /// What went wrong.
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.location, self.kind)
    }
}
