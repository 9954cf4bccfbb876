//! Keyword classification tables.
//!
//! The grammar selects alternatives by asking whether the lookahead keyword
//! belongs to a named set (scalar function names, relevance option names,
//! ...). Each set is a `matches!` over [`Keyword`] variants.

use super::Keyword;

/// The family a scalar function name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FunctionCategory {
    Mathematical,
    Trigonometric,
    Arithmetic,
    DateTime,
    Text,
    FlowControl,
    System,
    Nested,
}

impl Keyword {
    /// Keywords the grammar explicitly allows as identifiers.
    #[must_use]
    pub const fn is_keyword_can_be_id(self) -> bool {
        matches!(
            self,
            Self::Full
                | Self::Field
                | Self::D
                | Self::T
                | Self::Ts
                | Self::Count
                | Self::Sum
                | Self::Avg
                | Self::Max
                | Self::Min
                | Self::First
                | Self::Last
                | Self::Type
        )
    }

    /// Returns true if the keyword can appear in identifier position, either
    /// from the keyword-as-identifier list or as a bare scalar function name.
    #[must_use]
    pub const fn can_be_identifier(self) -> bool {
        self.is_keyword_can_be_id() || self.function_category().is_some()
    }

    /// Returns true if the keyword names a scalar function.
    #[must_use]
    pub const fn is_scalar_function_name(self) -> bool {
        self.function_category().is_some()
    }

    /// Classifies a scalar function name, or `None` if the keyword is not one.
    #[must_use]
    pub const fn function_category(self) -> Option<FunctionCategory> {
        let category = match self {
            Self::Abs
            | Self::Cbrt
            | Self::Ceil
            | Self::Ceiling
            | Self::Conv
            | Self::Crc32
            | Self::E
            | Self::Exp
            | Self::Expm1
            | Self::Floor
            | Self::Ln
            | Self::Log
            | Self::Log10
            | Self::Log2
            | Self::Mod
            | Self::Pi
            | Self::Pow
            | Self::Power
            | Self::Rand
            | Self::Rint
            | Self::Round
            | Self::Sign
            | Self::Signum
            | Self::Sqrt
            | Self::Truncate => FunctionCategory::Mathematical,
            Self::Acos
            | Self::Asin
            | Self::Atan
            | Self::Atan2
            | Self::Cos
            | Self::Cosh
            | Self::Cot
            | Self::Degrees
            | Self::Radians
            | Self::Sin
            | Self::Sinh
            | Self::Tan => FunctionCategory::Trigonometric,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Modulus => {
                FunctionCategory::Arithmetic
            }
            Self::Substr
            | Self::Substring
            | Self::Trim
            | Self::Ltrim
            | Self::Rtrim
            | Self::Lower
            | Self::Upper
            | Self::Concat
            | Self::ConcatWs
            | Self::Length
            | Self::Strcmp
            | Self::Right
            | Self::Left
            | Self::Ascii
            | Self::Locate
            | Self::Replace
            | Self::Reverse => FunctionCategory::Text,
            Self::If | Self::Ifnull | Self::Nullif | Self::Isnull => FunctionCategory::FlowControl,
            Self::Typeof => FunctionCategory::System,
            Self::Nested => FunctionCategory::Nested,
            kw if kw.is_datetime_function_name() => FunctionCategory::DateTime,
            _ => return None,
        };
        Some(category)
    }

    /// `CURRENT_DATE`, `LOCALTIME`, `UTC_TIMESTAMP` and friends.
    #[must_use]
    pub const fn is_datetime_constant(self) -> bool {
        matches!(
            self,
            Self::CurrentDate
                | Self::CurrentTime
                | Self::CurrentTimestamp
                | Self::Localtime
                | Self::Localtimestamp
                | Self::UtcTimestamp
                | Self::UtcDate
                | Self::UtcTime
        )
    }

    const fn is_datetime_function_name(self) -> bool {
        self.is_datetime_constant()
            || matches!(
                self,
                Self::Adddate
                    | Self::Addtime
                    | Self::ConvertTz
                    | Self::Curdate
                    | Self::Curtime
                    | Self::Date
                    | Self::DateAdd
                    | Self::DateFormat
                    | Self::DateSub
                    | Self::Datediff
                    | Self::Datetime
                    | Self::Day
                    | Self::Dayname
                    | Self::Dayofmonth
                    | Self::DayOfMonth
                    | Self::Dayofweek
                    | Self::Dayofyear
                    | Self::DayOfYear
                    | Self::DayOfWeek
                    | Self::FromDays
                    | Self::FromUnixtime
                    | Self::Hour
                    | Self::HourOfDay
                    | Self::LastDay
                    | Self::Makedate
                    | Self::Maketime
                    | Self::Microsecond
                    | Self::Minute
                    | Self::MinuteOfDay
                    | Self::MinuteOfHour
                    | Self::Month
                    | Self::Monthname
                    | Self::MonthOfYear
                    | Self::Now
                    | Self::PeriodAdd
                    | Self::PeriodDiff
                    | Self::Quarter
                    | Self::SecToTime
                    | Self::Second
                    | Self::SecondOfMinute
                    | Self::Subdate
                    | Self::Subtime
                    | Self::Sysdate
                    | Self::StrToDate
                    | Self::Time
                    | Self::TimeFormat
                    | Self::TimeToSec
                    | Self::Timediff
                    | Self::Timestamp
                    | Self::ToDays
                    | Self::ToSeconds
                    | Self::UnixTimestamp
                    | Self::Week
                    | Self::Weekday
                    | Self::WeekOfYear
                    | Self::Weekofyear
                    | Self::Year
                    | Self::Yearweek
            )
    }

    /// Aggregation function names usable as `name(arg)`.
    #[must_use]
    pub const fn is_aggregation_function_name(self) -> bool {
        matches!(
            self,
            Self::Avg
                | Self::Count
                | Self::Sum
                | Self::Min
                | Self::Max
                | Self::VarPop
                | Self::VarSamp
                | Self::Variance
                | Self::Std
                | Self::Stddev
                | Self::StddevPop
                | Self::StddevSamp
        )
    }

    /// `ROW_NUMBER`, `RANK`, `DENSE_RANK`.
    #[must_use]
    pub const fn is_ranking_function_name(self) -> bool {
        matches!(self, Self::RowNumber | Self::Rank | Self::DenseRank)
    }

    /// `TIMESTAMPADD`, `TIMESTAMPDIFF`.
    #[must_use]
    pub const fn is_timestamp_function_name(self) -> bool {
        matches!(self, Self::Timestampadd | Self::Timestampdiff)
    }

    #[must_use]
    pub const fn is_score_relevance_function_name(self) -> bool {
        matches!(self, Self::Score | Self::Scorequery | Self::ScoreQuery)
    }

    #[must_use]
    pub const fn is_no_field_relevance_function_name(self) -> bool {
        matches!(self, Self::Query)
    }

    #[must_use]
    pub const fn is_single_field_relevance_function_name(self) -> bool {
        matches!(
            self,
            Self::Match
                | Self::Matchquery
                | Self::MatchQuery
                | Self::MatchPhrase
                | Self::Matchphrase
                | Self::Matchphrasequery
                | Self::MatchBoolPrefix
                | Self::MatchPhrasePrefix
                | Self::WildcardQuery
                | Self::Wildcardquery
        )
    }

    #[must_use]
    pub const fn is_multi_field_relevance_function_name(self) -> bool {
        matches!(
            self,
            Self::MultiMatch
                | Self::Multimatch
                | Self::Multimatchquery
                | Self::SimpleQueryString
                | Self::QueryString
        )
    }

    /// Names accepted after `field =` in the single-field infix syntax.
    #[must_use]
    pub const fn is_alt_single_field_relevance_function_name(self) -> bool {
        matches!(
            self,
            Self::MatchQuery | Self::Matchquery | Self::MatchPhrase | Self::Matchphrase
        )
    }

    /// Names accepted after `field =` in the multi-field infix syntax.
    #[must_use]
    pub const fn is_alt_multi_field_relevance_function_name(self) -> bool {
        matches!(self, Self::MultiMatch | Self::Multimatch)
    }

    /// Option names accepted as `name = value` in relevance functions.
    #[must_use]
    pub const fn is_relevance_arg_name(self) -> bool {
        matches!(
            self,
            Self::AllowLeadingWildcard
                | Self::Analyzer
                | Self::AnalyzeWildcard
                | Self::AutoGenerateSynonymsPhraseQuery
                | Self::Boost
                | Self::CaseInsensitive
                | Self::CutoffFrequency
                | Self::DefaultField
                | Self::DefaultOperator
                | Self::EnablePositionIncrements
                | Self::Escape
                | Self::Fields
                | Self::Flags
                | Self::Fuzziness
                | Self::FuzzyMaxExpansions
                | Self::FuzzyPrefixLength
                | Self::FuzzyRewrite
                | Self::FuzzyTranspositions
                | Self::Lenient
                | Self::LowFreqOperator
                | Self::MaxDeterminizedStates
                | Self::MaxExpansions
                | Self::MinimumShouldMatch
                | Self::Operator
                | Self::PhraseSlop
                | Self::PrefixLength
                | Self::QuoteAnalyzer
                | Self::QuoteFieldSuffix
                | Self::Rewrite
                | Self::Slop
                | Self::TieBreaker
                | Self::TimeZone
                | Self::Type
                | Self::ZeroTermsQuery
        )
    }
}
