//! Rune Parse - front end for RuneScribe spells.
//!
//! `lex` turns source text into tokens and `parse` builds a
//! [`rune_ir::Program`] from them. The first syntax error stops parsing.

mod error;
pub mod lexer;
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use lexer::{lex, Token, TokenKind};
pub use parser::{parse, Parser, DEFAULT_TARGET};
