//! OpenSearch SQL lexer.
//!
//! This module provides a hand-written lexer that produces the token stream
//! consumed by [`crate::parser::Parser`].

mod span;
mod token;
mod tokenizer;
mod vocabulary;

pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
pub use vocabulary::FunctionCategory;
