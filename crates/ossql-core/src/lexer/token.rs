//! Token types for the OpenSearch SQL lexer.

use super::Span;

macro_rules! define_keywords {
    ($($variant:ident => $text:literal),* $(,)?) => {
        /// Keywords of the OpenSearch SQL dialect.
        ///
        /// Keywords are matched case-insensitively. Several of them (function
        /// names, `FIELD`, `TYPE`, ...) may also appear in identifier position;
        /// see [`Keyword::can_be_identifier`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum Keyword {
            $(
                #[doc = $text]
                $variant,
            )*
        }

        impl Keyword {
            /// Every keyword of the vocabulary.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Looks up a keyword, ignoring case.
            #[must_use]
            #[allow(clippy::should_implement_trait)]
            pub fn from_str(s: &str) -> Option<Self> {
                let upper = s.to_ascii_uppercase();
                match upper.as_str() {
                    $($text => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Returns the canonical (upper-case) spelling of the keyword.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)*
                }
            }
        }
    };
}

define_keywords! {
    // Statements and clauses
    All => "ALL",
    And => "AND",
    As => "AS",
    Asc => "ASC",
    Boolean => "BOOLEAN",
    Between => "BETWEEN",
    By => "BY",
    Case => "CASE",
    Cast => "CAST",
    Cross => "CROSS",
    Columns => "COLUMNS",
    Datetime => "DATETIME",
    Delete => "DELETE",
    Desc => "DESC",
    Describe => "DESCRIBE",
    Distinct => "DISTINCT",
    Double => "DOUBLE",
    Else => "ELSE",
    Exists => "EXISTS",
    False => "FALSE",
    Float => "FLOAT",
    First => "FIRST",
    From => "FROM",
    Group => "GROUP",
    Having => "HAVING",
    In => "IN",
    Inner => "INNER",
    Int => "INT",
    Integer => "INTEGER",
    Is => "IS",
    Join => "JOIN",
    Last => "LAST",
    Left => "LEFT",
    Like => "LIKE",
    Limit => "LIMIT",
    Long => "LONG",
    Match => "MATCH",
    Natural => "NATURAL",
    Missing => "MISSING",
    Not => "NOT",
    Null => "NULL",
    Nulls => "NULLS",
    On => "ON",
    Or => "OR",
    Order => "ORDER",
    Outer => "OUTER",
    Over => "OVER",
    Partition => "PARTITION",
    Regexp => "REGEXP",
    Right => "RIGHT",
    Select => "SELECT",
    Show => "SHOW",
    String => "STRING",
    Then => "THEN",
    True => "TRUE",
    Union => "UNION",
    Using => "USING",
    When => "WHEN",
    Where => "WHERE",
    Except => "MINUS",
    End => "END",
    Full => "FULL",
    Offset => "OFFSET",
    Interval => "INTERVAL",
    Tables => "TABLES",
    Div => "DIV",
    Mod => "MOD",

    // Aggregates
    Avg => "AVG",
    Count => "COUNT",
    Max => "MAX",
    Min => "MIN",
    Sum => "SUM",
    VarPop => "VAR_POP",
    VarSamp => "VAR_SAMP",
    Variance => "VARIANCE",
    Std => "STD",
    Stddev => "STDDEV",
    StddevPop => "STDDEV_POP",
    StddevSamp => "STDDEV_SAMP",

    // Date and time units
    Microsecond => "MICROSECOND",
    Second => "SECOND",
    Minute => "MINUTE",
    Hour => "HOUR",
    Day => "DAY",
    Week => "WEEK",
    Month => "MONTH",
    Quarter => "QUARTER",
    Year => "YEAR",
    SecondMicrosecond => "SECOND_MICROSECOND",
    MinuteMicrosecond => "MINUTE_MICROSECOND",
    MinuteSecond => "MINUTE_SECOND",
    HourMicrosecond => "HOUR_MICROSECOND",
    HourSecond => "HOUR_SECOND",
    HourMinute => "HOUR_MINUTE",
    DayMicrosecond => "DAY_MICROSECOND",
    DaySecond => "DAY_SECOND",
    DayMinute => "DAY_MINUTE",
    DayHour => "DAY_HOUR",
    YearMonth => "YEAR_MONTH",

    // Scalar functions
    Abs => "ABS",
    Acos => "ACOS",
    Add => "ADD",
    Adddate => "ADDDATE",
    Addtime => "ADDTIME",
    Ascii => "ASCII",
    Asin => "ASIN",
    Atan => "ATAN",
    Atan2 => "ATAN2",
    Cbrt => "CBRT",
    Ceil => "CEIL",
    Ceiling => "CEILING",
    Concat => "CONCAT",
    ConcatWs => "CONCAT_WS",
    Conv => "CONV",
    ConvertTz => "CONVERT_TZ",
    Cos => "COS",
    Cosh => "COSH",
    Cot => "COT",
    Crc32 => "CRC32",
    Curdate => "CURDATE",
    Curtime => "CURTIME",
    CurrentDate => "CURRENT_DATE",
    CurrentTime => "CURRENT_TIME",
    CurrentTimestamp => "CURRENT_TIMESTAMP",
    Date => "DATE",
    DateAdd => "DATE_ADD",
    DateFormat => "DATE_FORMAT",
    DateSub => "DATE_SUB",
    Datediff => "DATEDIFF",
    Dayname => "DAYNAME",
    Dayofmonth => "DAYOFMONTH",
    Dayofweek => "DAYOFWEEK",
    Dayofyear => "DAYOFYEAR",
    DayOfMonth => "DAY_OF_MONTH",
    DayOfWeek => "DAY_OF_WEEK",
    DayOfYear => "DAY_OF_YEAR",
    Degrees => "DEGREES",
    Divide => "DIVIDE",
    E => "E",
    Exp => "EXP",
    Expm1 => "EXPM1",
    Extract => "EXTRACT",
    Floor => "FLOOR",
    FromDays => "FROM_DAYS",
    FromUnixtime => "FROM_UNIXTIME",
    GetFormat => "GET_FORMAT",
    HourOfDay => "HOUR_OF_DAY",
    If => "IF",
    Ifnull => "IFNULL",
    Isnull => "ISNULL",
    LastDay => "LAST_DAY",
    Length => "LENGTH",
    Ln => "LN",
    Localtime => "LOCALTIME",
    Localtimestamp => "LOCALTIMESTAMP",
    Locate => "LOCATE",
    Log => "LOG",
    Log10 => "LOG10",
    Log2 => "LOG2",
    Lower => "LOWER",
    Ltrim => "LTRIM",
    Makedate => "MAKEDATE",
    Maketime => "MAKETIME",
    MinuteOfDay => "MINUTE_OF_DAY",
    MinuteOfHour => "MINUTE_OF_HOUR",
    Modulus => "MODULUS",
    Monthname => "MONTHNAME",
    MonthOfYear => "MONTH_OF_YEAR",
    Multiply => "MULTIPLY",
    Now => "NOW",
    Nullif => "NULLIF",
    PeriodAdd => "PERIOD_ADD",
    PeriodDiff => "PERIOD_DIFF",
    Pi => "PI",
    Position => "POSITION",
    Pow => "POW",
    Power => "POWER",
    Radians => "RADIANS",
    Rand => "RAND",
    Replace => "REPLACE",
    Rint => "RINT",
    Round => "ROUND",
    Rtrim => "RTRIM",
    Reverse => "REVERSE",
    SecToTime => "SEC_TO_TIME",
    SecondOfMinute => "SECOND_OF_MINUTE",
    Sign => "SIGN",
    Signum => "SIGNUM",
    Sin => "SIN",
    Sinh => "SINH",
    Sqrt => "SQRT",
    StrToDate => "STR_TO_DATE",
    Strcmp => "STRCMP",
    Subdate => "SUBDATE",
    Substr => "SUBSTR",
    Substring => "SUBSTRING",
    Subtime => "SUBTIME",
    Subtract => "SUBTRACT",
    Sysdate => "SYSDATE",
    Tan => "TAN",
    Time => "TIME",
    Timediff => "TIMEDIFF",
    TimeFormat => "TIME_FORMAT",
    TimeToSec => "TIME_TO_SEC",
    Timestamp => "TIMESTAMP",
    Timestampadd => "TIMESTAMPADD",
    Timestampdiff => "TIMESTAMPDIFF",
    Trim => "TRIM",
    Truncate => "TRUNCATE",
    ToDays => "TO_DAYS",
    ToSeconds => "TO_SECONDS",
    Typeof => "TYPEOF",
    UnixTimestamp => "UNIX_TIMESTAMP",
    Upper => "UPPER",
    UtcDate => "UTC_DATE",
    UtcTime => "UTC_TIME",
    UtcTimestamp => "UTC_TIMESTAMP",
    Weekday => "WEEKDAY",
    WeekOfYear => "WEEK_OF_YEAR",
    Weekofyear => "WEEKOFYEAR",
    Yearweek => "YEARWEEK",

    // ODBC escape markers
    D => "D",
    T => "T",
    Ts => "TS",

    // Window functions
    DenseRank => "DENSE_RANK",
    Rank => "RANK",
    RowNumber => "ROW_NUMBER",

    // Legacy OpenSearch functions, reserved
    DateHistogram => "DATE_HISTOGRAM",
    Exclude => "EXCLUDE",
    ExtendedStats => "EXTENDED_STATS",
    Field => "FIELD",
    Filter => "FILTER",
    GeoBoundingBox => "GEO_BOUNDING_BOX",
    GeoCell => "GEO_CELL",
    GeoDistance => "GEO_DISTANCE",
    GeoDistanceRange => "GEO_DISTANCE_RANGE",
    GeoIntersects => "GEO_INTERSECTS",
    GeoPolygon => "GEO_POLYGON",
    Histogram => "HISTOGRAM",
    Include => "INCLUDE",
    InTerms => "IN_TERMS",
    Nested => "NESTED",
    Percentiles => "PERCENTILES",
    ReverseNested => "REVERSE_NESTED",
    Range => "RANGE",
    Stats => "STATS",
    Term => "TERM",
    Terms => "TERMS",
    Tophits => "TOPHITS",

    // Relevance functions
    Wildcardquery => "WILDCARDQUERY",
    WildcardQuery => "WILDCARD_QUERY",
    Matchphrase => "MATCHPHRASE",
    MatchPhrase => "MATCH_PHRASE",
    Matchphrasequery => "MATCHPHRASEQUERY",
    SimpleQueryString => "SIMPLE_QUERY_STRING",
    QueryString => "QUERY_STRING",
    MatchPhrasePrefix => "MATCH_PHRASE_PREFIX",
    Matchquery => "MATCHQUERY",
    MatchQuery => "MATCH_QUERY",
    MatchBoolPrefix => "MATCH_BOOL_PREFIX",
    Multimatch => "MULTIMATCH",
    MultiMatch => "MULTI_MATCH",
    Multimatchquery => "MULTIMATCHQUERY",
    Query => "QUERY",
    Score => "SCORE",
    Scorequery => "SCOREQUERY",
    ScoreQuery => "SCORE_QUERY",
    Highlight => "HIGHLIGHT",

    // Relevance function options
    AllowLeadingWildcard => "ALLOW_LEADING_WILDCARD",
    Analyzer => "ANALYZER",
    AnalyzeWildcard => "ANALYZE_WILDCARD",
    AutoGenerateSynonymsPhraseQuery => "AUTO_GENERATE_SYNONYMS_PHRASE_QUERY",
    Boost => "BOOST",
    CaseInsensitive => "CASE_INSENSITIVE",
    CutoffFrequency => "CUTOFF_FREQUENCY",
    DefaultField => "DEFAULT_FIELD",
    DefaultOperator => "DEFAULT_OPERATOR",
    Escape => "ESCAPE",
    EnablePositionIncrements => "ENABLE_POSITION_INCREMENTS",
    Fields => "FIELDS",
    Flags => "FLAGS",
    Fuzziness => "FUZZINESS",
    FuzzyMaxExpansions => "FUZZY_MAX_EXPANSIONS",
    FuzzyPrefixLength => "FUZZY_PREFIX_LENGTH",
    FuzzyRewrite => "FUZZY_REWRITE",
    FuzzyTranspositions => "FUZZY_TRANSPOSITIONS",
    Lenient => "LENIENT",
    LowFreqOperator => "LOW_FREQ_OPERATOR",
    MaxDeterminizedStates => "MAX_DETERMINIZED_STATES",
    MaxExpansions => "MAX_EXPANSIONS",
    MinimumShouldMatch => "MINIMUM_SHOULD_MATCH",
    Operator => "OPERATOR",
    PhraseSlop => "PHRASE_SLOP",
    PrefixLength => "PREFIX_LENGTH",
    QuoteAnalyzer => "QUOTE_ANALYZER",
    QuoteFieldSuffix => "QUOTE_FIELD_SUFFIX",
    Rewrite => "REWRITE",
    Slop => "SLOP",
    TieBreaker => "TIE_BREAKER",
    TimeZone => "TIME_ZONE",
    Type => "TYPE",
    ZeroTermsQuery => "ZERO_TERMS_QUERY",

    // Highlight options
    PreTags => "PRE_TAGS",
    PostTags => "POST_TAGS",
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    // Literals
    /// Decimal literal (e.g., 42), kept as its digits
    Integer(String),
    /// Real literal (e.g., 3.14, .5, 1e3)
    Float(f64),
    /// Single-quoted string literal (e.g., 'hello')
    String(String),
    /// Double-quoted string (e.g., "hello"); a string literal in this dialect
    DoubleQuoted(String),

    // Identifiers and keywords
    /// Identifier (e.g., `column_name`, `@timestamp`, `logs-*`)
    Identifier(String),
    /// Backtick-quoted identifier
    BacktickIdentifier(String),
    /// SQL keyword
    Keyword(Keyword),

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// =
    Eq,
    /// <
    Lt,
    /// >
    Gt,
    /// !
    Bang,
    /// &
    BitAnd,
    /// |
    BitOr,
    /// ~
    BitNot,
    /// ^
    Caret,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,
    /// :
    Colon,
    /// @
    At,

    // Special
    /// End of input
    Eof,
    /// Invalid/unknown token
    Error(String),
}

impl TokenKind {
    /// Returns a short human-readable description, used in diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Integer(digits) => digits.clone(),
            Self::Float(f) => format!("{f:?}"),
            Self::String(s) => format!("'{s}'"),
            Self::DoubleQuoted(s) => format!("\"{s}\""),
            Self::Identifier(s) => s.clone(),
            Self::BacktickIdentifier(s) => format!("`{s}`"),
            Self::Keyword(kw) => kw.as_str().to_string(),
            Self::Eof => "end of input".to_string(),
            Self::Error(msg) => format!("invalid token ({msg})"),
            other => format!("'{}'", other.punctuation().unwrap_or("?")),
        }
    }

    /// Returns the source spelling of a punctuation token.
    #[must_use]
    pub const fn punctuation(&self) -> Option<&'static str> {
        let s = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Eq => "=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Bang => "!",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitNot => "~",
            Self::Caret => "^",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Dot => ".",
            Self::Colon => ":",
            Self::At => "@",
            _ => return None,
        };
        Some(s)
    }
}

/// A token with its span in the source code.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this is a keyword.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self.kind, TokenKind::Keyword(_))
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Keyword::from_str("SELECT"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("select"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("SeLeCt"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("multi_match"), Some(Keyword::MultiMatch));
        assert_eq!(Keyword::from_str("not_a_keyword"), None);
    }

    #[test]
    fn test_keyword_as_str() {
        assert_eq!(Keyword::Select.as_str(), "SELECT");
        assert_eq!(Keyword::MatchBoolPrefix.as_str(), "MATCH_BOOL_PREFIX");
        assert_eq!(Keyword::PreTags.as_str(), "PRE_TAGS");
        assert_eq!(Keyword::Except.as_str(), "MINUS");
    }

    #[test]
    fn test_keyword_spellings_round_trip() {
        for kw in Keyword::ALL {
            assert_eq!(Keyword::from_str(kw.as_str()), Some(*kw), "{kw:?}");
        }
    }

    #[test]
    fn test_token_is_eof() {
        let eof = Token::new(TokenKind::Eof, Span::new(0, 0));
        let select = Token::new(TokenKind::Keyword(Keyword::Select), Span::new(0, 6));
        assert!(eof.is_eof());
        assert!(!select.is_eof());
    }

    #[test]
    fn test_token_as_keyword() {
        let select = Token::new(TokenKind::Keyword(Keyword::Select), Span::new(0, 6));
        let plus = Token::new(TokenKind::Plus, Span::new(0, 1));
        assert_eq!(select.as_keyword(), Some(Keyword::Select));
        assert_eq!(plus.as_keyword(), None);
    }

    #[test]
    fn test_describe() {
        assert_eq!(TokenKind::Keyword(Keyword::From).describe(), "FROM");
        assert_eq!(TokenKind::Comma.describe(), "','");
        assert_eq!(TokenKind::Eof.describe(), "end of input");
        assert_eq!(TokenKind::String("a".into()).describe(), "'a'");
    }
}
