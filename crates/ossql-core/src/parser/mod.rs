//! OpenSearch SQL parser.
//!
//! A hand-written recursive descent parser. Expressions are parsed by
//! precedence climbing on three levels (boolean connectives, predicates and
//! arithmetic); the binding powers live in `precedence`. The few places where
//! a fixed lookahead cannot choose an alternative are resolved by a trial
//! parse whose outcome is cached per token position.

mod decision;
mod error;
mod expression;
mod function;
mod literal;
mod parser;
mod precedence;
mod recursion;
mod relevance;
mod rule;
mod stream;

pub use decision::Decision;
pub use error::{ParseError, ParseErrorKind};
pub use parser::{Batch, Parser, ParserOptions, ParserStats, DEFAULT_MAX_DEPTH};
pub use rule::Rule;
pub use stream::{Mark, TokenStream};
