//! Constants, identifiers, qualified names and aliases.

use super::{ParseError, Parser, Rule};
use crate::ast::{
    Constant, DateTimeUnit, DatetimeKind, DatetimeLiteral, DecimalLiteral, Ident, IdentKind,
    IntervalLiteral, QualifiedName, Sign, StringLiteral,
};
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    pub(crate) fn parse_constant(&mut self) -> Result<Constant, ParseError> {
        let _rule = self.enter(Rule::Constant)?;
        match self.kind().clone() {
            TokenKind::String(_) | TokenKind::DoubleQuoted(_) => {
                Ok(Constant::String(self.parse_string_literal()?))
            }
            TokenKind::Plus | TokenKind::Minus | TokenKind::Integer(_) | TokenKind::Float(_) => {
                self.parse_numeric_constant()
            }
            TokenKind::Keyword(kw @ (Keyword::True | Keyword::False)) => {
                let _rule = self.enter(Rule::BooleanLiteral)?;
                self.advance();
                Ok(Constant::Boolean(kw == Keyword::True))
            }
            TokenKind::Keyword(Keyword::Null) => {
                let _rule = self.enter(Rule::NullLiteral)?;
                self.advance();
                Ok(Constant::Null)
            }
            TokenKind::Keyword(Keyword::Interval) => {
                Ok(Constant::Interval(self.parse_interval_literal()?))
            }
            TokenKind::LeftBrace
            | TokenKind::Keyword(Keyword::Date | Keyword::Time | Keyword::Timestamp) => {
                Ok(Constant::Datetime(self.parse_datetime_literal()?))
            }
            _ => Err(self.no_viable("a constant")),
        }
    }

    fn parse_numeric_constant(&mut self) -> Result<Constant, ParseError> {
        let sign = self.parse_sign()?;
        match self.kind() {
            TokenKind::Integer(_) => Ok(Constant::Decimal {
                sign,
                value: self.parse_decimal_literal()?,
            }),
            TokenKind::Float(value) => {
                let value = *value;
                let _rule = self.enter(Rule::RealLiteral)?;
                self.advance();
                Ok(Constant::Real { sign, value })
            }
            _ => Err(self.unexpected("a number")),
        }
    }

    fn parse_sign(&mut self) -> Result<Option<Sign>, ParseError> {
        let sign = match self.kind() {
            TokenKind::Plus => Sign::Plus,
            TokenKind::Minus => Sign::Minus,
            _ => return Ok(None),
        };
        let _rule = self.enter(Rule::Sign)?;
        self.advance();
        Ok(Some(sign))
    }

    pub(crate) fn parse_string_literal(&mut self) -> Result<StringLiteral, ParseError> {
        let _rule = self.enter(Rule::StringLiteral)?;
        let (value, double_quoted) = match self.kind() {
            TokenKind::String(s) => (s.clone(), false),
            TokenKind::DoubleQuoted(s) => (s.clone(), true),
            _ => return Err(self.unexpected("a string literal")),
        };
        self.advance();
        Ok(StringLiteral {
            value,
            double_quoted,
        })
    }

    /// An unsigned integer literal.
    pub(crate) fn parse_decimal_literal(&mut self) -> Result<DecimalLiteral, ParseError> {
        let _rule = self.enter(Rule::DecimalLiteral)?;
        match self.kind() {
            TokenKind::Integer(digits) => {
                let value = DecimalLiteral::new(digits.as_str());
                self.advance();
                Ok(value)
            }
            _ => Err(self.unexpected("an integer")),
        }
    }

    /// `DATE '...'` or the escape form `{D '...'}`, and likewise for times and
    /// timestamps.
    fn parse_datetime_literal(&mut self) -> Result<DatetimeLiteral, ParseError> {
        let _rule = self.enter(Rule::DatetimeLiteral)?;
        let escaped = self.eat(&TokenKind::LeftBrace);
        let (kind, marker) = match self.kind() {
            TokenKind::Keyword(kw @ Keyword::Date) => (DatetimeKind::Date, *kw),
            TokenKind::Keyword(kw @ Keyword::Time) => (DatetimeKind::Time, *kw),
            TokenKind::Keyword(kw @ Keyword::Timestamp) => (DatetimeKind::Timestamp, *kw),
            TokenKind::Keyword(kw @ Keyword::D) if escaped => (DatetimeKind::Date, *kw),
            TokenKind::Keyword(kw @ Keyword::T) if escaped => (DatetimeKind::Time, *kw),
            TokenKind::Keyword(kw @ Keyword::Ts) if escaped => (DatetimeKind::Timestamp, *kw),
            _ => return Err(self.no_viable("DATE, TIME or TIMESTAMP")),
        };
        self.advance();
        let value = self.parse_string_literal()?;
        if escaped {
            self.expect(&TokenKind::RightBrace)?;
        }
        Ok(DatetimeLiteral {
            kind,
            marker,
            value,
            escaped,
        })
    }

    /// `INTERVAL expression unit`
    fn parse_interval_literal(&mut self) -> Result<IntervalLiteral, ParseError> {
        let _rule = self.enter(Rule::IntervalLiteral)?;
        self.expect_keyword(Keyword::Interval)?;
        let value = Box::new(self.parse_expression(0)?);
        let unit = self.parse_interval_unit()?;
        Ok(IntervalLiteral { value, unit })
    }

    fn parse_interval_unit(&mut self) -> Result<DateTimeUnit, ParseError> {
        let _rule = self.enter(Rule::IntervalUnit)?;
        self.parse_date_time_unit()
    }

    // ===================================================================
    // Names
    // ===================================================================

    /// `ident ('.' ident)*`
    ///
    /// A `.` is consumed only when an identifier follows it, so `path.*`
    /// stops before the dot.
    pub(crate) fn parse_qualified_name(&mut self) -> Result<QualifiedName, ParseError> {
        let _rule = self.enter(Rule::QualifiedName)?;
        let mut parts = vec![self.parse_ident()?];
        while self.check(&TokenKind::Dot) && self.is_name_part(1) {
            self.advance();
            parts.push(self.parse_ident()?);
        }
        Ok(QualifiedName::new(parts))
    }

    /// Whether the token at `offset` can be a name part after a separating
    /// dot. A second dot is never a leading-dot identifier here.
    fn is_name_part(&self, offset: usize) -> bool {
        match self.peek_kind(offset) {
            TokenKind::Dot => false,
            _ => self.can_start_ident(offset),
        }
    }

    pub(crate) fn parse_ident(&mut self) -> Result<Ident, ParseError> {
        let _rule = self.enter(Rule::Ident)?;
        let start = self.current().span;
        let dotted = self.check(&TokenKind::Dot)
            && matches!(self.peek_kind(1), TokenKind::Identifier(_));
        if dotted {
            self.advance();
        }

        let token = self.current().clone();
        let (value, kind) = match token.kind {
            TokenKind::Identifier(name) if dotted => (name, IdentKind::DotPrefixed),
            TokenKind::Identifier(name) => (name, IdentKind::Plain),
            TokenKind::BacktickIdentifier(name) => (name, IdentKind::Backtick),
            TokenKind::Keyword(kw) if kw.can_be_identifier() => {
                let text = self
                    .token_text(token.span)
                    .map_or_else(|| kw.as_str().to_string(), str::to_string);
                (text, IdentKind::Keyword(kw))
            }
            _ => return Err(self.no_viable("an identifier")),
        };
        self.advance();
        Ok(Ident {
            value,
            kind,
            span: start.merge(token.span),
        })
    }

    /// `AS? alias`, if an alias follows.
    pub(crate) fn parse_optional_alias(&mut self) -> Result<Option<Ident>, ParseError> {
        if self.eat_keyword(Keyword::As) || self.can_start_ident(0) {
            return self.parse_alias().map(Some);
        }
        Ok(None)
    }

    pub(crate) fn parse_alias(&mut self) -> Result<Ident, ParseError> {
        let _rule = self.enter(Rule::Alias)?;
        if !self.can_start_ident(0) {
            return Err(self.unexpected("an alias"));
        }
        self.parse_ident()
    }
}
