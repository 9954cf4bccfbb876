//! Expression AST types.
//!
//! Expressions are layered the way the grammar layers them: boolean
//! [`Expression`]s combine [`Predicate`]s, which compare arithmetic
//! [`ExpressionAtom`]s. Precedence is encoded by nesting.

use std::fmt;

use super::{comma_separated, Constant, FunctionCall, QualifiedName};

/// A boolean expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expression {
    /// `NOT expr`
    Not(Box<Expression>),
    /// `left AND right`
    And {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// `left OR right`
    Or {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// A predicate.
    Predicate(Predicate),
}

impl Expression {
    /// Returns the predicate if this expression is a bare predicate.
    #[must_use]
    pub const fn as_predicate(&self) -> Option<&Predicate> {
        match self {
            Self::Predicate(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the atom if this expression is a bare expression atom.
    #[must_use]
    pub const fn as_atom(&self) -> Option<&ExpressionAtom> {
        match self.as_predicate() {
            Some(Predicate::Atom(atom)) => Some(atom),
            _ => None,
        }
    }

    /// Returns the column name if this expression is a bare column reference.
    #[must_use]
    pub const fn as_column(&self) -> Option<&QualifiedName> {
        match self.as_atom() {
            Some(ExpressionAtom::Column(name)) => Some(name),
            _ => None,
        }
    }

    /// Returns the function call if this expression is a bare function call.
    #[must_use]
    pub fn as_function(&self) -> Option<&FunctionCall> {
        match self.as_atom() {
            Some(ExpressionAtom::Function(call)) => Some(call.as_ref()),
            _ => None,
        }
    }

    /// Returns the constant if this expression is a bare constant.
    #[must_use]
    pub const fn as_constant(&self) -> Option<&Constant> {
        match self.as_atom() {
            Some(ExpressionAtom::Constant(c)) => Some(c),
            _ => None,
        }
    }
}

impl From<Predicate> for Expression {
    fn from(p: Predicate) -> Self {
        Self::Predicate(p)
    }
}

impl From<ExpressionAtom> for Expression {
    fn from(atom: ExpressionAtom) -> Self {
        Self::Predicate(Predicate::Atom(atom))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not(e) => write!(f, "NOT {e}"),
            Self::And { left, right } => write!(f, "{left} AND {right}"),
            Self::Or { left, right } => write!(f, "{left} OR {right}"),
            Self::Predicate(p) => write!(f, "{p}"),
        }
    }
}

/// Comparison operators. `<>` and `!=` are kept apart so rendering
/// reproduces the source spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ComparisonOp {
    Eq,
    Gt,
    Lt,
    GtEq,
    LtEq,
    /// `<>`
    LtGt,
    /// `!=`
    NotEq,
}

impl ComparisonOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::GtEq => ">=",
            Self::LtEq => "<=",
            Self::LtGt => "<>",
            Self::NotEq => "!=",
        }
    }
}

/// A predicate: an atom optionally combined by comparison, range, pattern,
/// null test or list membership.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Predicate {
    Atom(ExpressionAtom),
    /// `left op right`
    Comparison {
        left: Box<Predicate>,
        op: ComparisonOp,
        right: Box<Predicate>,
    },
    /// `expr [NOT] BETWEEN low AND high`
    Between {
        expr: Box<Predicate>,
        negated: bool,
        low: Box<Predicate>,
        high: Box<Predicate>,
    },
    /// `expr IS [NOT] NULL`
    IsNull { expr: Box<Predicate>, negated: bool },
    /// `left [NOT] LIKE right`
    Like {
        left: Box<Predicate>,
        negated: bool,
        right: Box<Predicate>,
    },
    /// `left REGEXP right`
    Regexp {
        left: Box<Predicate>,
        right: Box<Predicate>,
    },
    /// `expr [NOT] IN (list)`
    In {
        expr: Box<Predicate>,
        negated: bool,
        list: Vec<Expression>,
    },
}

fn not(negated: bool) -> &'static str {
    if negated {
        "NOT "
    } else {
        ""
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom(atom) => write!(f, "{atom}"),
            Self::Comparison { left, op, right } => write!(f, "{left} {} {right}", op.as_str()),
            Self::Between {
                expr,
                negated,
                low,
                high,
            } => write!(f, "{expr} {}BETWEEN {low} AND {high}", not(*negated)),
            Self::IsNull { expr, negated } => write!(f, "{expr} IS {}NULL", not(*negated)),
            Self::Like {
                left,
                negated,
                right,
            } => write!(f, "{left} {}LIKE {right}", not(*negated)),
            Self::Regexp { left, right } => write!(f, "{left} REGEXP {right}"),
            Self::In {
                expr,
                negated,
                list,
            } => write!(f, "{expr} {}IN ({})", not(*negated), comma_separated(list)),
        }
    }
}

/// Arithmetic operators between expression atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MathOp {
    Mul,
    Div,
    Mod,
    Add,
    Sub,
}

impl MathOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Add => "+",
            Self::Sub => "-",
        }
    }
}

/// An arithmetic operand: constant, column, function call, parenthesized
/// expression, or a binary arithmetic combination of atoms.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ExpressionAtom {
    Constant(Constant),
    Column(QualifiedName),
    Function(Box<FunctionCall>),
    /// `( expression )`
    Nested(Box<Expression>),
    /// `left op right`
    Math {
        left: Box<ExpressionAtom>,
        op: MathOp,
        right: Box<ExpressionAtom>,
    },
}

impl fmt::Display for ExpressionAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(c) => write!(f, "{c}"),
            Self::Column(name) => write!(f, "{name}"),
            Self::Function(call) => write!(f, "{call}"),
            Self::Nested(e) => write!(f, "({e})"),
            Self::Math { left, op, right } => write!(f, "{left} {} {right}", op.as_str()),
        }
    }
}
