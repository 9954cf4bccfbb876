//! Relevance-search functions: `match`, `multi_match`, `query`, the infix
//! `field = match_query(...)` forms, `score` and `highlight`.

use super::{ParseError, Parser, Rule};
use crate::ast::{
    AlternateMultiMatchArgName, AlternateMultiMatchField, AlternateMultiMatchQuery, DecimalLiteral,
    HighlightArg, HighlightArgName, HighlightFunction, RelevanceArg, RelevanceArgName,
    RelevanceArgValue, RelevanceField, RelevanceFieldAndWeight, RelevanceFieldWeight,
    RelevanceFunction, ScoreRelevanceFunction,
};
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    /// `SCORE ( relevance_function [, weight] )`
    pub(crate) fn parse_score_relevance_function(
        &mut self,
    ) -> Result<ScoreRelevanceFunction, ParseError> {
        let _rule = self.enter(Rule::ScoreRelevanceFunction)?;
        let name = match self.kind() {
            TokenKind::Keyword(kw) if kw.is_score_relevance_function_name() => *kw,
            _ => return Err(self.no_viable("SCORE, SCOREQUERY or SCORE_QUERY")),
        };
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let function = Box::new(self.parse_relevance_function()?);
        let weight = if self.eat(&TokenKind::Comma) {
            Some(self.parse_relevance_field_weight()?)
        } else {
            None
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(ScoreRelevanceFunction {
            name,
            function,
            weight,
        })
    }

    /// Any relevance function, prefix or infix.
    pub(crate) fn parse_relevance_function(&mut self) -> Result<RelevanceFunction, ParseError> {
        let _rule = self.enter(Rule::RelevanceFunction)?;
        match self.kind() {
            TokenKind::Keyword(kw) if kw.is_no_field_relevance_function_name() => {
                let name = *kw;
                self.parse_no_field_relevance_function(name)
            }
            TokenKind::Keyword(kw) if kw.is_single_field_relevance_function_name() => {
                let name = *kw;
                self.parse_single_field_relevance_function(name)
            }
            TokenKind::Keyword(kw) if kw.is_multi_field_relevance_function_name() => {
                let name = *kw;
                self.parse_multi_field_relevance_function(name)
            }
            _ if self.can_start_ident(0)
                || matches!(self.kind(), TokenKind::String(_) | TokenKind::DoubleQuoted(_)) =>
            {
                self.parse_alt_relevance_function()
            }
            _ => Err(self.no_viable("a relevance function")),
        }
    }

    /// `QUERY ( query [, option = value]* )`
    fn parse_no_field_relevance_function(
        &mut self,
        name: Keyword,
    ) -> Result<RelevanceFunction, ParseError> {
        let _rule = self.enter(Rule::NoFieldRelevanceFunction)?;
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let query = self.parse_relevance_query()?;
        let args = self.parse_relevance_args()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(RelevanceFunction::NoField { name, query, args })
    }

    /// `MATCH ( field , query [, option = value]* )`
    fn parse_single_field_relevance_function(
        &mut self,
        name: Keyword,
    ) -> Result<RelevanceFunction, ParseError> {
        let _rule = self.enter(Rule::SingleFieldRelevanceFunction)?;
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let field = self.parse_relevance_field()?;
        self.expect(&TokenKind::Comma)?;
        let query = self.parse_relevance_query()?;
        let args = self.parse_relevance_args()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(RelevanceFunction::SingleField {
            name,
            field,
            query,
            args,
        })
    }

    /// `MULTI_MATCH ( [field ^ weight, ...] , query [, options] )` or the
    /// named form `MULTI_MATCH ( query = q , fields = f [, options] )`.
    fn parse_multi_field_relevance_function(
        &mut self,
        name: Keyword,
    ) -> Result<RelevanceFunction, ParseError> {
        let _rule = self.enter(Rule::MultiFieldRelevanceFunction)?;
        self.advance();
        self.expect(&TokenKind::LeftParen)?;

        if !self.eat(&TokenKind::LeftBracket) {
            let query = self.parse_alternate_multi_match_query()?;
            self.expect(&TokenKind::Comma)?;
            let field = self.parse_alternate_multi_match_field()?;
            let args = self.parse_relevance_args()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(RelevanceFunction::MultiFieldNamed {
                name,
                query,
                field,
                args,
            });
        }

        let mut fields = vec![self.parse_relevance_field_and_weight()?];
        while self.eat(&TokenKind::Comma) {
            fields.push(self.parse_relevance_field_and_weight()?);
        }
        self.expect(&TokenKind::RightBracket)?;
        self.expect(&TokenKind::Comma)?;
        let query = self.parse_relevance_query()?;
        let args = self.parse_relevance_args()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(RelevanceFunction::MultiField {
            name,
            fields,
            query,
            args,
        })
    }

    /// `field = MATCH_QUERY ( query [, options] )` and
    /// `field = MULTI_MATCH ( query [, options] )`.
    pub(crate) fn parse_alt_relevance_function(
        &mut self,
    ) -> Result<RelevanceFunction, ParseError> {
        let field = self.parse_relevance_field()?;
        self.expect(&TokenKind::Eq)?;
        let name = match self.kind() {
            TokenKind::Keyword(kw)
                if kw.is_alt_single_field_relevance_function_name()
                    || kw.is_alt_multi_field_relevance_function_name() =>
            {
                *kw
            }
            _ => return Err(self.no_viable("MATCH_QUERY, MATCH_PHRASE or MULTI_MATCH")),
        };
        let single = name.is_alt_single_field_relevance_function_name();
        let _rule = self.enter(if single {
            Rule::AltSingleFieldRelevanceFunction
        } else {
            Rule::AltMultiFieldRelevanceFunction
        })?;
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let query = self.parse_relevance_query()?;
        let args = self.parse_relevance_args()?;
        self.expect(&TokenKind::RightParen)?;

        Ok(if single {
            RelevanceFunction::AltSingleField {
                field,
                name,
                query,
                args,
            }
        } else {
            RelevanceFunction::AltMultiField {
                field,
                name,
                query,
                args,
            }
        })
    }

    // ===================================================================
    // Fields, queries and options
    // ===================================================================

    fn parse_relevance_field(&mut self) -> Result<RelevanceField, ParseError> {
        let _rule = self.enter(Rule::RelevanceField)?;
        match self.kind() {
            TokenKind::String(_) | TokenKind::DoubleQuoted(_) => {
                Ok(RelevanceField::String(self.parse_string_literal()?))
            }
            _ if self.can_start_ident(0) => Ok(RelevanceField::Name(self.parse_qualified_name()?)),
            _ => Err(self.no_viable("a field name")),
        }
    }

    /// `field`, `field weight` or `field ^ weight`.
    fn parse_relevance_field_and_weight(
        &mut self,
    ) -> Result<RelevanceFieldAndWeight, ParseError> {
        let _rule = self.enter(Rule::RelevanceFieldAndWeight)?;
        let field = self.parse_relevance_field()?;
        let caret = self.eat(&TokenKind::Caret);
        let weight = if caret || matches!(self.kind(), TokenKind::Integer(_) | TokenKind::Float(_))
        {
            Some(self.parse_relevance_field_weight()?)
        } else {
            None
        };
        Ok(RelevanceFieldAndWeight {
            field,
            weight,
            caret,
        })
    }

    fn parse_relevance_field_weight(&mut self) -> Result<RelevanceFieldWeight, ParseError> {
        let _rule = self.enter(Rule::RelevanceFieldWeight)?;
        let weight = match self.kind() {
            TokenKind::Integer(digits) => {
                RelevanceFieldWeight::Decimal(DecimalLiteral::new(digits.as_str()))
            }
            TokenKind::Float(v) => RelevanceFieldWeight::Real(*v),
            _ => return Err(self.unexpected("a weight")),
        };
        self.advance();
        Ok(weight)
    }

    fn parse_relevance_query(&mut self) -> Result<RelevanceArgValue, ParseError> {
        let _rule = self.enter(Rule::RelevanceQuery)?;
        self.parse_relevance_arg_value()
    }

    /// A qualified name or a constant.
    fn parse_relevance_arg_value(&mut self) -> Result<RelevanceArgValue, ParseError> {
        let _rule = self.enter(Rule::RelevanceArgValue)?;
        if self.can_start_constant() {
            Ok(RelevanceArgValue::Constant(self.parse_constant()?))
        } else if self.can_start_ident(0) {
            Ok(RelevanceArgValue::Name(self.parse_qualified_name()?))
        } else {
            Err(self.no_viable("a name or constant"))
        }
    }

    /// `(, option = value)*`, stopping before `)`.
    fn parse_relevance_args(&mut self) -> Result<Vec<RelevanceArg>, ParseError> {
        let mut args = Vec::new();
        while self.eat(&TokenKind::Comma) {
            args.push(self.parse_relevance_arg()?);
        }
        Ok(args)
    }

    fn parse_relevance_arg(&mut self) -> Result<RelevanceArg, ParseError> {
        let _rule = self.enter(Rule::RelevanceArg)?;
        let name = self.parse_relevance_arg_name()?;
        self.expect(&TokenKind::Eq)?;
        let value = self.parse_relevance_arg_value()?;
        Ok(RelevanceArg { name, value })
    }

    /// An option keyword from the fixed vocabulary, or a quoted name.
    fn parse_relevance_arg_name(&mut self) -> Result<RelevanceArgName, ParseError> {
        let _rule = self.enter(Rule::RelevanceArgName)?;
        match self.kind() {
            TokenKind::String(_) | TokenKind::DoubleQuoted(_) => {
                Ok(RelevanceArgName::Quoted(self.parse_string_literal()?))
            }
            TokenKind::Keyword(kw) if kw.is_relevance_arg_name() => {
                let kw = *kw;
                self.advance();
                Ok(RelevanceArgName::Option(kw))
            }
            TokenKind::Keyword(_) | TokenKind::Identifier(_) | TokenKind::BacktickIdentifier(_)
                if self.peek_is(1, &TokenKind::Eq) =>
            {
                let token = self.current();
                let text = self
                    .token_text(token.span)
                    .map_or_else(|| token.kind.describe(), str::to_string);
                Err(self.failed_predicate(
                    format!("unknown relevance option '{text}'"),
                    token.span,
                ))
            }
            _ => Err(self.no_viable("a relevance option")),
        }
    }

    fn parse_alternate_multi_match_arg_name(
        &mut self,
    ) -> Result<AlternateMultiMatchArgName, ParseError> {
        let _rule = self.enter(Rule::AlternateMultiMatchArgName)?;
        match self.kind() {
            TokenKind::Keyword(Keyword::Fields) => {
                self.advance();
                Ok(AlternateMultiMatchArgName::Fields)
            }
            TokenKind::Keyword(Keyword::Query) => {
                self.advance();
                Ok(AlternateMultiMatchArgName::Query)
            }
            TokenKind::String(_) | TokenKind::DoubleQuoted(_) => Ok(
                AlternateMultiMatchArgName::Quoted(self.parse_string_literal()?),
            ),
            _ => Err(self.no_viable("FIELDS, QUERY or a quoted name")),
        }
    }

    /// `name = value`
    fn parse_alternate_multi_match_query(
        &mut self,
    ) -> Result<AlternateMultiMatchQuery, ParseError> {
        let _rule = self.enter(Rule::AlternateMultiMatchQuery)?;
        let name = self.parse_alternate_multi_match_arg_name()?;
        self.expect(&TokenKind::Eq)?;
        let value = self.parse_relevance_arg_value()?;
        Ok(AlternateMultiMatchQuery { name, value })
    }

    /// `name = value` or `name = [value]`
    fn parse_alternate_multi_match_field(
        &mut self,
    ) -> Result<AlternateMultiMatchField, ParseError> {
        let _rule = self.enter(Rule::AlternateMultiMatchField)?;
        let name = self.parse_alternate_multi_match_arg_name()?;
        self.expect(&TokenKind::Eq)?;
        let bracketed = self.eat(&TokenKind::LeftBracket);
        let value = self.parse_relevance_arg_value()?;
        if bracketed {
            self.expect(&TokenKind::RightBracket)?;
        }
        Ok(AlternateMultiMatchField {
            name,
            value,
            bracketed,
        })
    }

    // ===================================================================
    // HIGHLIGHT
    // ===================================================================

    /// `HIGHLIGHT ( field [, PRE_TAGS = '..' | POST_TAGS = '..']* )`
    pub(crate) fn parse_highlight_function(&mut self) -> Result<HighlightFunction, ParseError> {
        let _rule = self.enter(Rule::HighlightFunction)?;
        self.expect_keyword(Keyword::Highlight)?;
        self.expect(&TokenKind::LeftParen)?;
        let field = self.parse_relevance_field()?;
        let mut args = Vec::new();
        while self.eat(&TokenKind::Comma) {
            args.push(self.parse_highlight_arg()?);
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(HighlightFunction { field, args })
    }

    fn parse_highlight_arg(&mut self) -> Result<HighlightArg, ParseError> {
        let _rule = self.enter(Rule::HighlightArg)?;
        let name = match self.kind() {
            TokenKind::Keyword(Keyword::PreTags) => HighlightArgName::PreTags,
            TokenKind::Keyword(Keyword::PostTags) => HighlightArgName::PostTags,
            _ => return Err(self.no_viable("PRE_TAGS or POST_TAGS")),
        };
        self.advance();
        self.expect(&TokenKind::Eq)?;
        let value = self.parse_string_literal()?;
        Ok(HighlightArg { name, value })
    }
}
