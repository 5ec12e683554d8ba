//! Lexical layer: tokens, locations and the tokenizer.

mod lexer;
mod token;

pub use lexer::tokenize;
pub use token::{SourceLocation, Token, TokenKind};
