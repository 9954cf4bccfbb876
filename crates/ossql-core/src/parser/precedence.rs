//! Operator binding powers for the three precedence-climbing levels.
//!
//! Higher binding power binds tighter. Each level is climbed by its own loop
//! (`parse_expression`, `parse_predicate`, `parse_expression_atom`); an
//! operator is taken only while its binding power is at least the loop's
//! minimum.

use crate::ast::{ComparisonOp, MathOp};
use crate::lexer::{Keyword, TokenKind};

/// Binding power the operand of a prefix `NOT` is parsed at.
pub(crate) const NOT_OPERAND: u8 = 4;

/// Binding power the lower bound of `BETWEEN` is parsed at.
pub(crate) const BETWEEN_LOW: u8 = 0;

/// Boolean connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BooleanOperator {
    And,
    Or,
}

impl BooleanOperator {
    pub(crate) const fn from_token(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Keyword(Keyword::And) => Some(Self::And),
            TokenKind::Keyword(Keyword::Or) => Some(Self::Or),
            _ => None,
        }
    }

    pub(crate) const fn binding_power(self) -> u8 {
        match self {
            Self::And => 3,
            Self::Or => 2,
        }
    }

    /// Binding power of the right operand; one above the operator makes the
    /// connective left-associative.
    pub(crate) const fn right_binding_power(self) -> u8 {
        self.binding_power() + 1
    }
}

/// Infix operators of the predicate level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PredicateOperator {
    /// A comparison spelled with `width` single-character tokens.
    Comparison { op: ComparisonOp, width: usize },
    IsNull,
    Between { negated: bool },
    Like { negated: bool },
    Regexp,
    In { negated: bool },
}

impl PredicateOperator {
    /// Recognizes an operator from the next three tokens.
    pub(crate) const fn from_tokens(
        first: &TokenKind,
        second: &TokenKind,
        third: &TokenKind,
    ) -> Option<Self> {
        let op = match (first, second) {
            (TokenKind::Gt, TokenKind::Eq) => Self::comparison(ComparisonOp::GtEq, 2),
            (TokenKind::Lt, TokenKind::Eq) => Self::comparison(ComparisonOp::LtEq, 2),
            (TokenKind::Lt, TokenKind::Gt) => Self::comparison(ComparisonOp::LtGt, 2),
            (TokenKind::Bang, TokenKind::Eq) => Self::comparison(ComparisonOp::NotEq, 2),
            (TokenKind::Eq, _) => Self::comparison(ComparisonOp::Eq, 1),
            (TokenKind::Gt, _) => Self::comparison(ComparisonOp::Gt, 1),
            (TokenKind::Lt, _) => Self::comparison(ComparisonOp::Lt, 1),
            (TokenKind::Keyword(Keyword::Is), _) => Self::IsNull,
            (TokenKind::Keyword(Keyword::Between), _) => Self::Between { negated: false },
            (TokenKind::Keyword(Keyword::Like), _) => Self::Like { negated: false },
            (TokenKind::Keyword(Keyword::Regexp), _) => Self::Regexp,
            (TokenKind::Keyword(Keyword::In), TokenKind::LeftParen) => Self::In { negated: false },
            (TokenKind::Keyword(Keyword::Not), TokenKind::Keyword(Keyword::Between)) => {
                Self::Between { negated: true }
            }
            (TokenKind::Keyword(Keyword::Not), TokenKind::Keyword(Keyword::Like)) => {
                Self::Like { negated: true }
            }
            (TokenKind::Keyword(Keyword::Not), TokenKind::Keyword(Keyword::In))
                if matches!(third, TokenKind::LeftParen) =>
            {
                Self::In { negated: true }
            }
            _ => return None,
        };
        Some(op)
    }

    const fn comparison(op: ComparisonOp, width: usize) -> Self {
        Self::Comparison { op, width }
    }

    pub(crate) const fn binding_power(self) -> u8 {
        match self {
            Self::Comparison { .. } => 6,
            Self::IsNull => 5,
            Self::Between { .. } => 4,
            Self::Like { .. } => 3,
            Self::Regexp => 2,
            Self::In { .. } => 1,
        }
    }

    /// Binding power of the right operand. Comparison is right-recursive;
    /// the rest are left-associative.
    pub(crate) const fn right_binding_power(self) -> u8 {
        match self {
            Self::Comparison { .. } => self.binding_power(),
            _ => self.binding_power() + 1,
        }
    }
}

/// Returns the arithmetic operator for a token.
pub(crate) const fn math_operator(kind: &TokenKind) -> Option<MathOp> {
    match kind {
        TokenKind::Star => Some(MathOp::Mul),
        TokenKind::Slash => Some(MathOp::Div),
        TokenKind::Percent => Some(MathOp::Mod),
        TokenKind::Plus => Some(MathOp::Add),
        TokenKind::Minus => Some(MathOp::Sub),
        _ => None,
    }
}

/// Binding power of an arithmetic operator: `* / %` above `+ -`.
pub(crate) const fn math_binding_power(op: MathOp) -> u8 {
    match op {
        MathOp::Mul | MathOp::Div | MathOp::Mod => 2,
        MathOp::Add | MathOp::Sub => 1,
    }
}
