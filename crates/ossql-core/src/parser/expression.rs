//! Expression parsing: boolean expressions, predicates and arithmetic atoms.

use super::decision::Decision;
use super::precedence::{
    math_binding_power, math_operator, BooleanOperator, PredicateOperator, BETWEEN_LOW,
    NOT_OPERAND,
};
use super::{ParseError, Parser, Rule};
use crate::ast::{Expression, ExpressionAtom, FunctionCall, Predicate};
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    /// Parses a boolean expression whose connectives bind at least as
    /// tightly as `min_bp`.
    pub(crate) fn parse_expression(&mut self, min_bp: u8) -> Result<Expression, ParseError> {
        let _rule = self.enter(Rule::Expression)?;
        let mut left = if self.eat_keyword(Keyword::Not) {
            Expression::Not(Box::new(self.parse_expression(NOT_OPERAND)?))
        } else {
            Expression::Predicate(self.parse_predicate(0)?)
        };

        while let Some(op) = BooleanOperator::from_token(self.kind()) {
            if op.binding_power() < min_bp {
                break;
            }
            self.advance();
            let right = Box::new(self.parse_expression(op.right_binding_power())?);
            let left_box = Box::new(left);
            left = match op {
                BooleanOperator::And => Expression::And {
                    left: left_box,
                    right,
                },
                BooleanOperator::Or => Expression::Or {
                    left: left_box,
                    right,
                },
            };
        }
        Ok(left)
    }

    pub(crate) fn parse_predicate(&mut self, min_bp: u8) -> Result<Predicate, ParseError> {
        let _rule = self.enter(Rule::Predicate)?;
        let mut left = Predicate::Atom(self.parse_expression_atom(0)?);

        while let Some(op) = PredicateOperator::from_tokens(
            self.peek_kind(0),
            self.peek_kind(1),
            self.peek_kind(2),
        ) {
            if op.binding_power() < min_bp {
                break;
            }
            left = self.parse_predicate_operator(left, op)?;
        }
        Ok(left)
    }

    fn parse_predicate_operator(
        &mut self,
        left: Predicate,
        op: PredicateOperator,
    ) -> Result<Predicate, ParseError> {
        // Right operands recurse through here, so each level is charged
        // against the depth limit on top of `parse_predicate`.
        let _rule = self.enter(Rule::Predicate)?;
        let left = Box::new(left);
        let right_bp = op.right_binding_power();
        let predicate = match op {
            PredicateOperator::Comparison { op, width } => {
                {
                    let _rule = self.enter(Rule::ComparisonOperator)?;
                    for _ in 0..width {
                        self.advance();
                    }
                }
                Predicate::Comparison {
                    left,
                    op,
                    right: Box::new(self.parse_predicate(right_bp)?),
                }
            }
            PredicateOperator::IsNull => {
                self.expect_keyword(Keyword::Is)?;
                let negated = self.eat_keyword(Keyword::Not);
                self.expect_keyword(Keyword::Null)?;
                Predicate::IsNull {
                    expr: left,
                    negated,
                }
            }
            PredicateOperator::Between { negated } => {
                if negated {
                    self.advance();
                }
                self.expect_keyword(Keyword::Between)?;
                let low = Box::new(self.parse_predicate(BETWEEN_LOW)?);
                self.expect_keyword(Keyword::And)?;
                let high = Box::new(self.parse_predicate(right_bp)?);
                Predicate::Between {
                    expr: left,
                    negated,
                    low,
                    high,
                }
            }
            PredicateOperator::Like { negated } => {
                if negated {
                    self.advance();
                }
                self.expect_keyword(Keyword::Like)?;
                Predicate::Like {
                    left,
                    negated,
                    right: Box::new(self.parse_predicate(right_bp)?),
                }
            }
            PredicateOperator::Regexp => {
                self.expect_keyword(Keyword::Regexp)?;
                Predicate::Regexp {
                    left,
                    right: Box::new(self.parse_predicate(right_bp)?),
                }
            }
            PredicateOperator::In { negated } => {
                if negated {
                    self.advance();
                }
                self.expect_keyword(Keyword::In)?;
                self.expect(&TokenKind::LeftParen)?;
                let list = self.parse_expressions()?;
                self.expect(&TokenKind::RightParen)?;
                Predicate::In {
                    expr: left,
                    negated,
                    list,
                }
            }
        };
        Ok(predicate)
    }

    /// Parses an arithmetic operand whose operators bind at least as tightly
    /// as `min_bp`.
    pub(crate) fn parse_expression_atom(
        &mut self,
        min_bp: u8,
    ) -> Result<ExpressionAtom, ParseError> {
        let _rule = self.enter(Rule::ExpressionAtom)?;
        let mut left = self.parse_primary()?;

        while let Some(op) = math_operator(self.kind()) {
            let bp = math_binding_power(op);
            if bp < min_bp {
                break;
            }
            self.advance();
            let right = self.parse_expression_atom(bp + 1)?;
            left = ExpressionAtom::Math {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<ExpressionAtom, ParseError> {
        if self.looks_like_alt_relevance_call() {
            let call = self.speculate(
                Decision::AltRelevanceSyntax,
                Self::parse_alt_relevance_function,
            )?;
            if let Some(call) = call {
                return Ok(ExpressionAtom::Function(Box::new(FunctionCall::Relevance(
                    call,
                ))));
            }
        }

        if self.eat(&TokenKind::LeftParen) {
            let inner = self.parse_expression(0)?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(ExpressionAtom::Nested(Box::new(inner)));
        }
        if self.can_start_constant() {
            return Ok(ExpressionAtom::Constant(self.parse_constant()?));
        }
        if self.can_start_function_call() {
            return Ok(ExpressionAtom::Function(Box::new(
                self.parse_function_call()?,
            )));
        }
        if self.can_start_ident(0) {
            let _rule = self.enter(Rule::ColumnName)?;
            return Ok(ExpressionAtom::Column(self.parse_qualified_name()?));
        }
        Err(self.no_viable("an expression"))
    }

    /// `expression (',' expression)*`
    pub(crate) fn parse_expressions(&mut self) -> Result<Vec<Expression>, ParseError> {
        let _rule = self.enter(Rule::ExpressionList)?;
        let mut exprs = vec![self.parse_expression(0)?];
        while self.eat(&TokenKind::Comma) {
            exprs.push(self.parse_expression(0)?);
        }
        Ok(exprs)
    }

    // ===================================================================
    // Lookahead sets
    // ===================================================================

    /// Returns true if the current token can begin an expression.
    pub(crate) fn can_start_expression(&self) -> bool {
        self.check_keyword(Keyword::Not)
            || self.check(&TokenKind::LeftParen)
            || self.can_start_constant()
            || self.can_start_function_call()
            || self.can_start_ident(0)
    }

    pub(crate) fn can_start_constant(&self) -> bool {
        match self.kind() {
            TokenKind::String(_)
            | TokenKind::DoubleQuoted(_)
            | TokenKind::Integer(_)
            | TokenKind::Float(_)
            | TokenKind::LeftBrace => true,
            TokenKind::Plus | TokenKind::Minus => {
                matches!(self.peek_kind(1), TokenKind::Integer(_) | TokenKind::Float(_))
            }
            TokenKind::Keyword(Keyword::True | Keyword::False | Keyword::Null | Keyword::Interval) => {
                true
            }
            TokenKind::Keyword(Keyword::Date | Keyword::Time | Keyword::Timestamp) => matches!(
                self.peek_kind(1),
                TokenKind::String(_) | TokenKind::DoubleQuoted(_)
            ),
            _ => false,
        }
    }

    pub(crate) fn can_start_function_call(&self) -> bool {
        let TokenKind::Keyword(kw) = *self.kind() else {
            return false;
        };
        if kw == Keyword::Case {
            return true;
        }
        if !self.peek_is(1, &TokenKind::LeftParen) {
            return false;
        }
        matches!(
            kw,
            Keyword::Cast
                | Keyword::Highlight
                | Keyword::Position
                | Keyword::Extract
                | Keyword::GetFormat
        ) || kw.is_aggregation_function_name()
            || kw.is_ranking_function_name()
            || kw.is_timestamp_function_name()
            || kw.is_score_relevance_function_name()
            || kw.is_no_field_relevance_function_name()
            || kw.is_single_field_relevance_function_name()
            || kw.is_multi_field_relevance_function_name()
            || kw.is_scalar_function_name()
    }

    /// Returns true if the token `offset` positions ahead can begin an
    /// identifier.
    pub(crate) fn can_start_ident(&self, offset: usize) -> bool {
        match self.peek_kind(offset) {
            TokenKind::Identifier(_) | TokenKind::BacktickIdentifier(_) => true,
            TokenKind::Dot => matches!(self.peek_kind(offset + 1), TokenKind::Identifier(_)),
            TokenKind::Keyword(kw) => kw.can_be_identifier(),
            _ => false,
        }
    }

    /// Cheap prefilter for `field = alt_name (`: a string or dotted name,
    /// then `=`, an infix relevance function name and `(`.
    fn looks_like_alt_relevance_call(&self) -> bool {
        let mut offset = match self.kind() {
            TokenKind::String(_) | TokenKind::DoubleQuoted(_) => 1,
            _ if self.can_start_ident(0) => {
                let mut offset = self.ident_width(0);
                while self.peek_is(offset, &TokenKind::Dot) && self.can_start_ident(offset + 1) {
                    offset += 1 + self.ident_width(offset + 1);
                }
                offset
            }
            _ => return false,
        };
        if !self.peek_is(offset, &TokenKind::Eq) {
            return false;
        }
        offset += 1;
        let TokenKind::Keyword(name) = *self.peek_kind(offset) else {
            return false;
        };
        (name.is_alt_single_field_relevance_function_name()
            || name.is_alt_multi_field_relevance_function_name())
            && self.peek_is(offset + 1, &TokenKind::LeftParen)
    }

    /// Number of tokens the identifier at `offset` spans.
    fn ident_width(&self, offset: usize) -> usize {
        if self.peek_is(offset, &TokenKind::Dot) {
            2
        } else {
            1
        }
    }
}
