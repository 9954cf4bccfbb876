//! Relevance-search function AST types.
//!
//! Relevance functions (`match`, `multi_match`, `query_string`, ...) take a
//! field (or weighted field list), a query and a list of `option = value`
//! pairs. Option names are keywords from a fixed vocabulary or quoted strings.

use std::fmt;

use super::{comma_separated, Constant, DecimalLiteral, QualifiedName, StringLiteral};
use crate::lexer::Keyword;

/// The field a relevance function searches.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RelevanceField {
    Name(QualifiedName),
    String(StringLiteral),
}

impl fmt::Display for RelevanceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

/// An option value or query text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RelevanceArgValue {
    Name(QualifiedName),
    Constant(Constant),
}

impl fmt::Display for RelevanceArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Constant(c) => write!(f, "{c}"),
        }
    }
}

/// The name half of an option.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RelevanceArgName {
    /// One of the known option keywords (`boost`, `analyzer`, ...).
    Option(Keyword),
    /// A quoted option name.
    Quoted(StringLiteral),
}

impl fmt::Display for RelevanceArgName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Option(kw) => write!(f, "{kw}"),
            Self::Quoted(s) => write!(f, "{s}"),
        }
    }
}

/// `name = value`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RelevanceArg {
    pub name: RelevanceArgName,
    pub value: RelevanceArgValue,
}

impl fmt::Display for RelevanceArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// A field weight (`title ^ 2.5`) or score boost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RelevanceFieldWeight {
    Real(f64),
    Decimal(DecimalLiteral),
}

impl fmt::Display for RelevanceFieldWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(v) => write!(f, "{v:?}"),
            Self::Decimal(v) => write!(f, "{v}"),
        }
    }
}

/// One entry of a bracketed multi-field list: `field`, `field 2` or `field ^ 2`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RelevanceFieldAndWeight {
    pub field: RelevanceField,
    pub weight: Option<RelevanceFieldWeight>,
    /// Whether the weight was introduced by `^`.
    pub caret: bool,
}

impl fmt::Display for RelevanceFieldAndWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field)?;
        match (&self.weight, self.caret) {
            (Some(weight), true) => write!(f, " ^ {weight}"),
            (Some(weight), false) => write!(f, " {weight}"),
            (None, _) => Ok(()),
        }
    }
}

/// Name of an argument in the named `multi_match(query=..., fields=...)` form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AlternateMultiMatchArgName {
    Fields,
    Query,
    Quoted(StringLiteral),
}

impl fmt::Display for AlternateMultiMatchArgName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fields => f.write_str("FIELDS"),
            Self::Query => f.write_str("QUERY"),
            Self::Quoted(s) => write!(f, "{s}"),
        }
    }
}

/// The query argument of the named multi-field form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlternateMultiMatchQuery {
    pub name: AlternateMultiMatchArgName,
    pub value: RelevanceArgValue,
}

impl fmt::Display for AlternateMultiMatchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// The fields argument of the named multi-field form, optionally bracketed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlternateMultiMatchField {
    pub name: AlternateMultiMatchArgName,
    pub value: RelevanceArgValue,
    pub bracketed: bool,
}

impl fmt::Display for AlternateMultiMatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bracketed {
            write!(f, "{} = [{}]", self.name, self.value)
        } else {
            write!(f, "{} = {}", self.name, self.value)
        }
    }
}

/// A relevance-search function call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RelevanceFunction {
    /// `query('text', ...)`
    NoField {
        name: Keyword,
        query: RelevanceArgValue,
        args: Vec<RelevanceArg>,
    },
    /// `match(field, 'text', ...)`
    SingleField {
        name: Keyword,
        field: RelevanceField,
        query: RelevanceArgValue,
        args: Vec<RelevanceArg>,
    },
    /// `multi_match([f1, f2 ^ 2], 'text', ...)`
    MultiField {
        name: Keyword,
        fields: Vec<RelevanceFieldAndWeight>,
        query: RelevanceArgValue,
        args: Vec<RelevanceArg>,
    },
    /// `multi_match(query = 'text', fields = 'f1', ...)`
    MultiFieldNamed {
        name: Keyword,
        query: AlternateMultiMatchQuery,
        field: AlternateMultiMatchField,
        args: Vec<RelevanceArg>,
    },
    /// `field = match_query('text', ...)`
    AltSingleField {
        field: RelevanceField,
        name: Keyword,
        query: RelevanceArgValue,
        args: Vec<RelevanceArg>,
    },
    /// `field = multi_match('text', ...)`
    AltMultiField {
        field: RelevanceField,
        name: Keyword,
        query: RelevanceArgValue,
        args: Vec<RelevanceArg>,
    },
}

impl RelevanceFunction {
    /// Returns the function name keyword.
    #[must_use]
    pub const fn name(&self) -> Keyword {
        match self {
            Self::NoField { name, .. }
            | Self::SingleField { name, .. }
            | Self::MultiField { name, .. }
            | Self::MultiFieldNamed { name, .. }
            | Self::AltSingleField { name, .. }
            | Self::AltMultiField { name, .. } => *name,
        }
    }

    /// Returns the option list.
    #[must_use]
    pub fn args(&self) -> &[RelevanceArg] {
        match self {
            Self::NoField { args, .. }
            | Self::SingleField { args, .. }
            | Self::MultiField { args, .. }
            | Self::MultiFieldNamed { args, .. }
            | Self::AltSingleField { args, .. }
            | Self::AltMultiField { args, .. } => args,
        }
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[RelevanceArg]) -> fmt::Result {
    for arg in args {
        write!(f, ", {arg}")?;
    }
    Ok(())
}

impl fmt::Display for RelevanceFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoField { name, query, args } => {
                write!(f, "{name}({query}")?;
                write_args(f, args)?;
            }
            Self::SingleField {
                name,
                field,
                query,
                args,
            } => {
                write!(f, "{name}({field}, {query}")?;
                write_args(f, args)?;
            }
            Self::MultiField {
                name,
                fields,
                query,
                args,
            } => {
                write!(f, "{name}([{}], {query}", comma_separated(fields))?;
                write_args(f, args)?;
            }
            Self::MultiFieldNamed {
                name,
                query,
                field,
                args,
            } => {
                write!(f, "{name}({query}, {field}")?;
                write_args(f, args)?;
            }
            Self::AltSingleField {
                field,
                name,
                query,
                args,
            }
            | Self::AltMultiField {
                field,
                name,
                query,
                args,
            } => {
                write!(f, "{field} = {name}({query}")?;
                write_args(f, args)?;
            }
        }
        f.write_str(")")
    }
}

/// `score(relevance_fn [, boost])`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoreRelevanceFunction {
    pub name: Keyword,
    pub function: Box<RelevanceFunction>,
    pub weight: Option<RelevanceFieldWeight>,
}

impl fmt::Display for ScoreRelevanceFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}", self.name, self.function)?;
        if let Some(weight) = &self.weight {
            write!(f, ", {weight}")?;
        }
        f.write_str(")")
    }
}

/// `PRE_TAGS` / `POST_TAGS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HighlightArgName {
    PreTags,
    PostTags,
}

/// `pre_tags = '<em>'`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HighlightArg {
    pub name: HighlightArgName,
    pub value: StringLiteral,
}

impl fmt::Display for HighlightArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.name {
            HighlightArgName::PreTags => "PRE_TAGS",
            HighlightArgName::PostTags => "POST_TAGS",
        };
        write!(f, "{name} = {}", self.value)
    }
}

/// `highlight(field [, pre_tags = '...', post_tags = '...'])`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HighlightFunction {
    pub field: RelevanceField,
    pub args: Vec<HighlightArg>,
}

impl fmt::Display for HighlightFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HIGHLIGHT({}", self.field)?;
        for arg in &self.args {
            write!(f, ", {arg}")?;
        }
        f.write_str(")")
    }
}
