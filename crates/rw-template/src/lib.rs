//! Directive parser for the template compiler front end.
//!
//! Templates mix markup with `@`-prefixed directives. This crate tokenizes a
//! template, recognizes the directive set and slices the token stream into
//! classified spans. Directive spans carry a [`CodeGeneratorDescriptor`]
//! telling the code generator what to emit.
//!
//! # Architecture
//!
//! - [`syntax`]: tokens and the tokenizer
//! - [`parser`]: [`CodeParser`], the cursor, span and block primitives shared
//!   by all directives, plus the document loop
//! - [`directive`]: [`DirectiveParser`] and the directive handlers
//!
//! Problems in user input are collected as [`Diagnostic`]s and never stop
//! the parse. [`ParseError`] is reserved for dispatch bugs.
//!
//! # Example
//!
//! ```
//! use rw_template::{CodeGeneratorDescriptor, HttpVerb, ParserConfig, parse};
//!
//! let source = "@inject MyApp.MyService MySvc\n@httpget \"/foo/{bar}\"\n<p>Hi</p>\n";
//! let results = parse(source, &ParserConfig::default()).unwrap();
//!
//! assert!(!results.has_errors());
//! let descriptors: Vec<_> = results.descriptors().cloned().collect();
//! assert_eq!(
//!     descriptors,
//!     [
//!         CodeGeneratorDescriptor::inject("MyApp.MyService", "MySvc"),
//!         CodeGeneratorDescriptor::route("/foo/{bar}", Some(HttpVerb::Get)),
//!     ]
//! );
//! ```

mod config;
mod descriptor;
pub mod diagnostics;
pub mod directive;
mod error;
pub mod parser;
pub mod syntax;

pub use config::{ConfigError, DEFAULT_BASE_TYPE, ParserConfig};
pub use descriptor::{CodeGeneratorDescriptor, HttpVerb};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use directive::{Directive, DirectiveParser, ParserState};
pub use error::ParseError;
pub use parser::{CodeParser, ParseResults};

/// Parse a template document with the full directive set.
pub fn parse(source: &str, config: &ParserConfig) -> Result<ParseResults, ParseError> {
    let mut parser = DirectiveParser::new(source, config);
    parser.parse()?;
    Ok(parser.into_results())
}
