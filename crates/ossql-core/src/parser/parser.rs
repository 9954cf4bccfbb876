//! SQL Parser implementation: parser state, token helpers, statements and
//! clauses.

use tracing::{debug, warn};

use super::decision::{Decision, DecisionCache};
use super::error::{ParseError, ParseErrorKind};
use super::recursion::{RuleGuard, RuleStack};
use super::stream::TokenStream;
use super::Rule;
use crate::ast::{
    DescribeStatement, Expression, FromClause, LimitClause, LimitSyntax, NullOrdering,
    OrderByElement, OrderDirection, QuerySpecification, Relation, Root, SelectClause,
    SelectElement, SelectSpec, ShowDescribePattern, ShowStatement, Statement,
};
use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind};

/// Default nesting limit. Parses at this depth fit a 2 MiB thread stack in
/// debug builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of nested grammar rules before parsing fails with
    /// [`ParseErrorKind::RecursionLimit`].
    pub max_depth: usize,
    /// Whether speculative decisions are memoized per token position.
    pub decision_cache: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            decision_cache: true,
        }
    }
}

impl ParserOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_decision_cache(mut self, enabled: bool) -> Self {
        self.decision_cache = enabled;
        self
    }
}

/// Counters describing the work done by a parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserStats {
    /// Speculative outcomes recorded in the decision cache.
    pub decisions_recorded: usize,
    /// Speculative trials skipped because the cache already knew the outcome.
    pub cache_hits: usize,
}

/// Statements parsed from a `;`-separated batch, with the errors of the
/// statements that were skipped.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Batch {
    pub statements: Vec<Statement>,
    pub errors: Vec<ParseError>,
}

impl Batch {
    /// Returns true if every statement parsed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// OpenSearch SQL parser.
///
/// A parser is built for one input and consumed by one of the `parse_*`
/// entry points.
pub struct Parser<'a> {
    source: &'a str,
    stream: TokenStream,
    rules: RuleStack,
    decisions: DecisionCache,
    options: ParserOptions,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParserOptions::default())
    }

    /// Creates a new parser with explicit options.
    #[must_use]
    pub fn with_options(input: &'a str, options: ParserOptions) -> Self {
        let tokens = Lexer::new(input).tokenize();
        Self::from_tokens_with_options(input, tokens, options)
    }

    /// Creates a parser over tokens produced elsewhere. `source` is used to
    /// resolve line/column positions and identifier spellings.
    #[must_use]
    pub fn from_tokens(source: &'a str, tokens: Vec<Token>) -> Self {
        Self::from_tokens_with_options(source, tokens, ParserOptions::default())
    }

    #[must_use]
    pub fn from_tokens_with_options(
        source: &'a str,
        tokens: Vec<Token>,
        options: ParserOptions,
    ) -> Self {
        Self {
            source,
            stream: TokenStream::new(tokens),
            rules: RuleStack::new(options.max_depth),
            decisions: DecisionCache::new(options.decision_cache),
            options,
        }
    }

    /// Returns the options the parser was built with.
    #[must_use]
    pub const fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Returns decision cache counters.
    #[must_use]
    pub fn stats(&self) -> ParserStats {
        ParserStats {
            decisions_recorded: self.decisions.len(),
            cache_hits: self.decisions.hits(),
        }
    }

    /// Parses `statement? ';'? EOF`.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a single valid statement.
    pub fn parse_root(&mut self) -> Result<Root, ParseError> {
        let _rule = self.enter(Rule::Root)?;
        let statement = if matches!(self.kind(), TokenKind::Eof | TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_sql_statement()?)
        };
        let semicolon = self.eat(&TokenKind::Semicolon);
        if !self.current().is_eof() {
            let expected = if semicolon {
                "end of input"
            } else {
                "';' or end of input"
            };
            return Err(self.unexpected(expected));
        }
        Ok(Root {
            statement,
            semicolon,
        })
    }

    /// Parses `statement (';' statement)* ';'?`, skipping statements that
    /// fail to parse.
    ///
    /// Each failure is logged at `warn` level and recorded in
    /// [`Batch::errors`]; parsing resumes after the next `;`.
    pub fn parse_batch(&mut self) -> Batch {
        let mut batch = Batch::default();
        loop {
            while self.eat(&TokenKind::Semicolon) {}
            if self.current().is_eof() {
                break;
            }
            match self.parse_batch_statement() {
                Ok(statement) => batch.statements.push(statement),
                Err(err) => {
                    warn!(
                        rule = %err.rule,
                        line = err.line,
                        column = err.column,
                        "skipping statement: {}",
                        err.message
                    );
                    batch.errors.push(err);
                    self.skip_statement();
                }
            }
        }
        debug!(
            statements = batch.statements.len(),
            errors = batch.errors.len(),
            "parsed batch"
        );
        batch
    }

    fn parse_batch_statement(&mut self) -> Result<Statement, ParseError> {
        let _rule = self.enter(Rule::Root)?;
        let statement = self.parse_sql_statement()?;
        if !matches!(self.kind(), TokenKind::Semicolon | TokenKind::Eof) {
            return Err(self.unexpected("';' or end of input"));
        }
        Ok(statement)
    }

    fn skip_statement(&mut self) {
        while !matches!(self.kind(), TokenKind::Semicolon | TokenKind::Eof) {
            self.stream.consume();
        }
    }

    // ===================================================================
    // Token helpers
    // ===================================================================

    pub(super) fn current(&self) -> &Token {
        self.stream.current()
    }

    pub(super) fn kind(&self) -> &TokenKind {
        &self.stream.current().kind
    }

    pub(super) fn peek_kind(&self, offset: usize) -> &TokenKind {
        &self.stream.peek(offset).kind
    }

    pub(super) fn advance(&mut self) -> Token {
        self.stream.consume().clone()
    }

    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        self.kind() == kind
    }

    pub(super) fn check_keyword(&self, keyword: Keyword) -> bool {
        matches!(self.kind(), TokenKind::Keyword(kw) if *kw == keyword)
    }

    pub(super) fn peek_is(&self, offset: usize, kind: &TokenKind) -> bool {
        self.peek_kind(offset) == kind
    }

    pub(super) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.stream.consume();
            true
        } else {
            false
        }
    }

    pub(super) fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        if self.check_keyword(keyword) {
            self.stream.consume();
            true
        } else {
            false
        }
    }

    pub(super) fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(&kind.describe()))
        }
    }

    pub(super) fn expect_keyword(&mut self, keyword: Keyword) -> Result<Span, ParseError> {
        if self.check_keyword(keyword) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(keyword.as_str()))
        }
    }

    /// Returns the source text of a token, if the span lies inside the source.
    pub(super) fn token_text(&self, span: Span) -> Option<&'a str> {
        self.source.get(span.start..span.end)
    }

    // ===================================================================
    // Rule tracking, errors and speculation
    // ===================================================================

    pub(super) fn enter(&self, rule: Rule) -> Result<RuleGuard, ParseError> {
        self.rules.enter(rule).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::RecursionLimit,
                rule,
                format!(
                    "maximum nesting depth of {} exceeded in {rule}",
                    self.options.max_depth
                ),
                self.current().span,
                self.source,
            )
        })
    }

    /// A mismatched-token error at the current token.
    pub(super) fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.current();
        ParseError::unexpected(
            self.rules.current(),
            expected,
            token.kind.clone(),
            token.span,
            self.source,
        )
    }

    /// An error for a lookahead no alternative of the active rule accepts.
    pub(super) fn no_viable(&self, expected: &str) -> ParseError {
        self.unexpected(expected)
            .with_kind(ParseErrorKind::NoViableAlternative)
    }

    /// An error for tokens that matched but failed a semantic check.
    pub(super) fn failed_predicate(&self, message: impl Into<String>, span: Span) -> ParseError {
        let rule = self.rules.current();
        let message = format!("{} in {rule}", message.into());
        ParseError {
            found: Some(self.current().kind.clone()),
            ..ParseError::new(
                ParseErrorKind::FailedPredicate,
                rule,
                message,
                span,
                self.source,
            )
        }
    }

    /// Tries `f` at the current position, rewinding on failure.
    ///
    /// The outcome is recorded per decision and token position; a position
    /// already known to fail is skipped without running `f`. Recursion limit
    /// errors are never swallowed.
    pub(super) fn speculate<T>(
        &mut self,
        decision: Decision,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Option<T>, ParseError> {
        let mark = self.stream.position();
        if self.decisions.lookup(decision, mark.index()) == Some(false) {
            return Ok(None);
        }
        match f(self) {
            Ok(node) => {
                self.decisions.record(decision, mark.index(), true);
                Ok(Some(node))
            }
            Err(err) if err.kind == ParseErrorKind::RecursionLimit => Err(err),
            Err(_) => {
                self.stream.reset_to(mark);
                self.decisions.record(decision, mark.index(), false);
                Ok(None)
            }
        }
    }

    // ===================================================================
    // Statements
    // ===================================================================

    /// Parses one statement.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the tokens at the current position do not
    /// form a `SELECT`, `SHOW` or `DESCRIBE` statement.
    pub fn parse_sql_statement(&mut self) -> Result<Statement, ParseError> {
        let _rule = self.enter(Rule::SqlStatement)?;
        match self.kind() {
            TokenKind::Keyword(Keyword::Select) => self.parse_dml_statement(),
            TokenKind::Keyword(Keyword::Show | Keyword::Describe) => self.parse_admin_statement(),
            _ => Err(self.no_viable("SELECT, SHOW or DESCRIBE")),
        }
    }

    fn parse_dml_statement(&mut self) -> Result<Statement, ParseError> {
        let _rule = self.enter(Rule::DmlStatement)?;
        let _select = self.enter(Rule::SelectStatement)?;
        Ok(Statement::Select(self.parse_query_specification()?))
    }

    fn parse_admin_statement(&mut self) -> Result<Statement, ParseError> {
        let _rule = self.enter(Rule::AdminStatement)?;
        if self.check_keyword(Keyword::Show) {
            Ok(Statement::Show(self.parse_show_statement()?))
        } else {
            Ok(Statement::Describe(self.parse_describe_statement()?))
        }
    }

    fn parse_show_statement(&mut self) -> Result<ShowStatement, ParseError> {
        let _rule = self.enter(Rule::ShowStatement)?;
        self.expect_keyword(Keyword::Show)?;
        self.expect_keyword(Keyword::Tables)?;
        let table_filter = self.parse_table_filter()?;
        Ok(ShowStatement { table_filter })
    }

    fn parse_describe_statement(&mut self) -> Result<DescribeStatement, ParseError> {
        let _rule = self.enter(Rule::DescribeStatement)?;
        self.expect_keyword(Keyword::Describe)?;
        self.expect_keyword(Keyword::Tables)?;
        let table_filter = self.parse_table_filter()?;
        let column_filter = if self.check_keyword(Keyword::Columns) {
            let _rule = self.enter(Rule::ColumnFilter)?;
            self.advance();
            self.expect_keyword(Keyword::Like)?;
            Some(self.parse_show_describe_pattern()?)
        } else {
            None
        };
        Ok(DescribeStatement {
            table_filter,
            column_filter,
        })
    }

    fn parse_table_filter(&mut self) -> Result<ShowDescribePattern, ParseError> {
        let _rule = self.enter(Rule::TableFilter)?;
        self.expect_keyword(Keyword::Like)?;
        self.parse_show_describe_pattern()
    }

    fn parse_show_describe_pattern(&mut self) -> Result<ShowDescribePattern, ParseError> {
        let _rule = self.enter(Rule::ShowDescribePattern)?;
        match self.kind() {
            TokenKind::String(_) | TokenKind::DoubleQuoted(_) => {
                Ok(ShowDescribePattern::String(self.parse_string_literal()?))
            }
            TokenKind::Identifier(_) | TokenKind::Percent => {
                Ok(ShowDescribePattern::CompatibleId(self.parse_compatible_id()?))
            }
            _ => Err(self.no_viable("a table pattern")),
        }
    }

    /// A run of identifier and `%` tokens, joined without separators.
    fn parse_compatible_id(&mut self) -> Result<String, ParseError> {
        let _rule = self.enter(Rule::CompatibleId)?;
        let mut pattern = String::new();
        loop {
            match self.kind() {
                TokenKind::Identifier(name) => pattern.push_str(name),
                TokenKind::Percent => pattern.push('%'),
                _ => break,
            }
            self.advance();
        }
        Ok(pattern)
    }

    // ===================================================================
    // Query clauses
    // ===================================================================

    pub(super) fn parse_query_specification(&mut self) -> Result<QuerySpecification, ParseError> {
        let _rule = self.enter(Rule::QuerySpecification)?;
        let select = self.parse_select_clause()?;
        let from = if self.check_keyword(Keyword::From) {
            Some(self.parse_from_clause()?)
        } else {
            None
        };
        let limit = if self.check_keyword(Keyword::Limit) {
            Some(self.parse_limit_clause()?)
        } else {
            None
        };
        Ok(QuerySpecification {
            select,
            from,
            limit,
        })
    }

    fn parse_select_clause(&mut self) -> Result<SelectClause, ParseError> {
        let _rule = self.enter(Rule::SelectClause)?;
        self.expect_keyword(Keyword::Select)?;
        let spec = {
            let _rule = self.enter(Rule::SelectSpec)?;
            if self.eat_keyword(Keyword::All) {
                Some(SelectSpec::All)
            } else if self.eat_keyword(Keyword::Distinct) {
                Some(SelectSpec::Distinct)
            } else {
                None
            }
        };

        let _rule = self.enter(Rule::SelectElements)?;
        let star = self.eat(&TokenKind::Star);
        let mut elements = Vec::new();
        if !star {
            elements.push(self.parse_select_element()?);
        }
        while self.eat(&TokenKind::Comma) {
            elements.push(self.parse_select_element()?);
        }
        Ok(SelectClause {
            spec,
            star,
            elements,
        })
    }

    fn parse_select_element(&mut self) -> Result<SelectElement, ParseError> {
        if !self.can_start_expression() {
            return Err(self.no_viable("an expression"));
        }
        let _rule = self.enter(Rule::SelectElement)?;
        let expr = self.parse_expression(0)?;
        let alias = self.parse_optional_alias()?;
        Ok(SelectElement { expr, alias })
    }

    fn parse_from_clause(&mut self) -> Result<FromClause, ParseError> {
        let _rule = self.enter(Rule::FromClause)?;
        self.expect_keyword(Keyword::From)?;
        let relation = self.parse_relation()?;

        let where_clause = if self.check_keyword(Keyword::Where) {
            let _rule = self.enter(Rule::WhereClause)?;
            self.advance();
            Some(self.parse_expression(0)?)
        } else {
            None
        };

        let group_by = if self.check_keyword(Keyword::Group) {
            self.parse_group_by_clause()?
        } else {
            vec![]
        };

        let having = if self.check_keyword(Keyword::Having) {
            let _rule = self.enter(Rule::HavingClause)?;
            self.advance();
            Some(self.parse_expression(0)?)
        } else {
            None
        };

        let order_by = if self.check_keyword(Keyword::Order) {
            self.parse_order_by_clause()?
        } else {
            vec![]
        };

        Ok(FromClause {
            relation,
            where_clause,
            group_by,
            having,
            order_by,
        })
    }

    fn parse_relation(&mut self) -> Result<Relation, ParseError> {
        let _rule = self.enter(Rule::Relation)?;
        if self.eat(&TokenKind::LeftParen) {
            let query = self.parse_query_specification()?;
            self.expect(&TokenKind::RightParen)?;
            self.eat_keyword(Keyword::As);
            let alias = self.parse_alias()?;
            return Ok(Relation::Subquery {
                query: Box::new(query),
                alias,
            });
        }
        let name = {
            let _rule = self.enter(Rule::TableName)?;
            self.parse_qualified_name()?
        };
        let alias = self.parse_optional_alias()?;
        Ok(Relation::Table { name, alias })
    }

    fn parse_group_by_clause(&mut self) -> Result<Vec<Expression>, ParseError> {
        let _rule = self.enter(Rule::GroupByClause)?;
        self.expect_keyword(Keyword::Group)?;
        self.expect_keyword(Keyword::By)?;
        let _rule = self.enter(Rule::GroupByElements)?;
        let mut elements = Vec::new();
        loop {
            let _element = self.enter(Rule::GroupByElement)?;
            elements.push(self.parse_expression(0)?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(elements)
    }

    pub(super) fn parse_order_by_clause(&mut self) -> Result<Vec<OrderByElement>, ParseError> {
        let _rule = self.enter(Rule::OrderByClause)?;
        self.expect_keyword(Keyword::Order)?;
        self.expect_keyword(Keyword::By)?;
        let mut elements = vec![self.parse_order_by_element()?];
        while self.eat(&TokenKind::Comma) {
            elements.push(self.parse_order_by_element()?);
        }
        Ok(elements)
    }

    fn parse_order_by_element(&mut self) -> Result<OrderByElement, ParseError> {
        let _rule = self.enter(Rule::OrderByElement)?;
        let expr = self.parse_expression(0)?;
        let direction = if self.eat_keyword(Keyword::Asc) {
            Some(OrderDirection::Asc)
        } else if self.eat_keyword(Keyword::Desc) {
            Some(OrderDirection::Desc)
        } else {
            None
        };
        let nulls = if self.eat_keyword(Keyword::Nulls) {
            if self.eat_keyword(Keyword::First) {
                Some(NullOrdering::First)
            } else if self.eat_keyword(Keyword::Last) {
                Some(NullOrdering::Last)
            } else {
                return Err(self.no_viable("FIRST or LAST"));
            }
        } else {
            None
        };
        Ok(OrderByElement {
            expr,
            direction,
            nulls,
        })
    }

    /// `LIMIT [offset ,] limit` or `LIMIT limit OFFSET offset`, told apart
    /// by the token after the first number.
    fn parse_limit_clause(&mut self) -> Result<LimitClause, ParseError> {
        let _rule = self.enter(Rule::LimitClause)?;
        let syntax = match self.peek_kind(2) {
            TokenKind::Keyword(Keyword::Offset) => LimitSyntax::Offset,
            _ => LimitSyntax::Comma,
        };
        let comma_offset = self.peek_is(2, &TokenKind::Comma);
        self.expect_keyword(Keyword::Limit)?;

        let first = self.parse_decimal_literal()?;
        match syntax {
            LimitSyntax::Offset => {
                self.expect_keyword(Keyword::Offset)?;
                let offset = self.parse_decimal_literal()?;
                Ok(LimitClause {
                    limit: first,
                    offset: Some(offset),
                    syntax,
                })
            }
            LimitSyntax::Comma if comma_offset => {
                self.expect(&TokenKind::Comma)?;
                let limit = self.parse_decimal_literal()?;
                Ok(LimitClause {
                    limit,
                    offset: Some(first),
                    syntax,
                })
            }
            LimitSyntax::Comma => Ok(LimitClause {
                limit: first,
                offset: None,
                syntax,
            }),
        }
    }
}
