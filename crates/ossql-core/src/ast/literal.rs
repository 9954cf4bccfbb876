//! Constant (literal) AST types.

use std::fmt;

use super::{DateTimeUnit, Expression};
use crate::lexer::Keyword;

/// An unsigned integer literal. The digits are kept as written, so values
/// wider than any machine integer survive parsing and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecimalLiteral(String);

impl DecimalLiteral {
    /// Wraps a run of ASCII digits.
    #[must_use]
    pub fn new(digits: impl Into<String>) -> Self {
        Self(digits.into())
    }

    #[must_use]
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The value, if it fits in a `u64`.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for DecimalLiteral {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for DecimalLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A string literal, single- or double-quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StringLiteral {
    /// The decoded text.
    pub value: String,
    /// Whether the literal used `"` rather than `'`.
    pub double_quoted: bool,
}

impl StringLiteral {
    /// Creates a single-quoted string literal.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            double_quoted: false,
        }
    }
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quote = if self.double_quoted { '"' } else { '\'' };
        let escaped = self
            .value
            .replace('\\', "\\\\")
            .replace(quote, &format!("{quote}{quote}"));
        write!(f, "{quote}{escaped}{quote}")
    }
}

/// Unary sign in front of a numeric constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }
}

/// `DATE '...'`, `TIME '...'`, `TIMESTAMP '...'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DatetimeKind {
    Date,
    Time,
    Timestamp,
}

/// A date, time or timestamp literal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DatetimeLiteral {
    pub kind: DatetimeKind,
    /// The keyword that introduced the literal (`DATE` or `D`, ...).
    pub marker: Keyword,
    pub value: StringLiteral,
    /// True for the ODBC escape form `{d '...'}`.
    pub escaped: bool,
}

impl fmt::Display for DatetimeLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.escaped {
            write!(f, "{{{} {}}}", self.marker, self.value)
        } else {
            write!(f, "{} {}", self.marker, self.value)
        }
    }
}

/// `INTERVAL expr unit`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IntervalLiteral {
    pub value: Box<Expression>,
    pub unit: DateTimeUnit,
}

impl fmt::Display for IntervalLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INTERVAL {} {}", self.value, self.unit)
    }
}

/// A constant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Constant {
    String(StringLiteral),
    /// Decimal literal with optional sign.
    Decimal {
        sign: Option<Sign>,
        value: DecimalLiteral,
    },
    /// Real literal with optional sign.
    Real { sign: Option<Sign>, value: f64 },
    Boolean(bool),
    Datetime(DatetimeLiteral),
    Interval(IntervalLiteral),
    Null,
}

impl Constant {
    /// Returns the signed integer value of a decimal constant, if it fits in
    /// an `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Decimal {
                sign: Some(Sign::Minus),
                value,
            } => format!("-{value}").parse().ok(),
            Self::Decimal { value, .. } => value.digits().parse().ok(),
            _ => None,
        }
    }

    /// Returns the string value of a string constant.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(&s.value),
            _ => None,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Decimal { sign, value } => {
                if let Some(sign) = sign {
                    f.write_str(sign.as_str())?;
                }
                write!(f, "{value}")
            }
            Self::Real { sign, value } => {
                if let Some(sign) = sign {
                    f.write_str(sign.as_str())?;
                }
                write!(f, "{value:?}")
            }
            Self::Boolean(true) => f.write_str("TRUE"),
            Self::Boolean(false) => f.write_str("FALSE"),
            Self::Datetime(dt) => write!(f, "{dt}"),
            Self::Interval(interval) => write!(f, "{interval}"),
            Self::Null => f.write_str("NULL"),
        }
    }
}
