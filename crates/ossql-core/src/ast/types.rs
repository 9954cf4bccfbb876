//! Type names and date-time units.

use core::fmt;

use crate::lexer::Keyword;

/// Target type of `CAST(expr AS type)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ConvertedDataType {
    Date,
    Time,
    Timestamp,
    Int,
    Integer,
    Double,
    Long,
    Float,
    String,
    Boolean,
}

impl ConvertedDataType {
    /// Maps a type keyword.
    #[must_use]
    pub const fn from_keyword(kw: Keyword) -> Option<Self> {
        let ty = match kw {
            Keyword::Date => Self::Date,
            Keyword::Time => Self::Time,
            Keyword::Timestamp => Self::Timestamp,
            Keyword::Int => Self::Int,
            Keyword::Integer => Self::Integer,
            Keyword::Double => Self::Double,
            Keyword::Long => Self::Long,
            Keyword::Float => Self::Float,
            Keyword::String => Self::String,
            Keyword::Boolean => Self::Boolean,
            _ => return None,
        };
        Some(ty)
    }

    /// Returns the SQL representation of the data type.
    #[must_use]
    pub const fn to_sql(&self) -> &'static str {
        match self {
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Int => "INT",
            Self::Integer => "INTEGER",
            Self::Double => "DOUBLE",
            Self::Long => "LONG",
            Self::Float => "FLOAT",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
        }
    }
}

impl fmt::Display for ConvertedDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_sql())
    }
}

/// A date-time unit, used by `INTERVAL`, `EXTRACT` and `TIMESTAMPADD`.
///
/// The first nine variants are the simple parts; the rest are the compound
/// parts accepted by `INTERVAL` and `EXTRACT` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DateTimeUnit {
    Microsecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
    SecondMicrosecond,
    MinuteMicrosecond,
    MinuteSecond,
    HourMicrosecond,
    HourSecond,
    HourMinute,
    DayMicrosecond,
    DaySecond,
    DayMinute,
    DayHour,
    YearMonth,
}

impl DateTimeUnit {
    /// Maps a unit keyword.
    #[must_use]
    pub const fn from_keyword(kw: Keyword) -> Option<Self> {
        let unit = match kw {
            Keyword::Microsecond => Self::Microsecond,
            Keyword::Second => Self::Second,
            Keyword::Minute => Self::Minute,
            Keyword::Hour => Self::Hour,
            Keyword::Day => Self::Day,
            Keyword::Week => Self::Week,
            Keyword::Month => Self::Month,
            Keyword::Quarter => Self::Quarter,
            Keyword::Year => Self::Year,
            Keyword::SecondMicrosecond => Self::SecondMicrosecond,
            Keyword::MinuteMicrosecond => Self::MinuteMicrosecond,
            Keyword::MinuteSecond => Self::MinuteSecond,
            Keyword::HourMicrosecond => Self::HourMicrosecond,
            Keyword::HourSecond => Self::HourSecond,
            Keyword::HourMinute => Self::HourMinute,
            Keyword::DayMicrosecond => Self::DayMicrosecond,
            Keyword::DaySecond => Self::DaySecond,
            Keyword::DayMinute => Self::DayMinute,
            Keyword::DayHour => Self::DayHour,
            Keyword::YearMonth => Self::YearMonth,
            _ => return None,
        };
        Some(unit)
    }

    /// Returns true for the nine single-field units.
    #[must_use]
    pub const fn is_simple(&self) -> bool {
        matches!(
            self,
            Self::Microsecond
                | Self::Second
                | Self::Minute
                | Self::Hour
                | Self::Day
                | Self::Week
                | Self::Month
                | Self::Quarter
                | Self::Year
        )
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Microsecond => "MICROSECOND",
            Self::Second => "SECOND",
            Self::Minute => "MINUTE",
            Self::Hour => "HOUR",
            Self::Day => "DAY",
            Self::Week => "WEEK",
            Self::Month => "MONTH",
            Self::Quarter => "QUARTER",
            Self::Year => "YEAR",
            Self::SecondMicrosecond => "SECOND_MICROSECOND",
            Self::MinuteMicrosecond => "MINUTE_MICROSECOND",
            Self::MinuteSecond => "MINUTE_SECOND",
            Self::HourMicrosecond => "HOUR_MICROSECOND",
            Self::HourSecond => "HOUR_SECOND",
            Self::HourMinute => "HOUR_MINUTE",
            Self::DayMicrosecond => "DAY_MICROSECOND",
            Self::DaySecond => "DAY_SECOND",
            Self::DayMinute => "DAY_MINUTE",
            Self::DayHour => "DAY_HOUR",
            Self::YearMonth => "YEAR_MONTH",
        }
    }
}

impl fmt::Display for DateTimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First argument of `GET_FORMAT(type, locale)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GetFormatType {
    Date,
    Datetime,
    Time,
    Timestamp,
}

impl GetFormatType {
    #[must_use]
    pub const fn from_keyword(kw: Keyword) -> Option<Self> {
        match kw {
            Keyword::Date => Some(Self::Date),
            Keyword::Datetime => Some(Self::Datetime),
            Keyword::Time => Some(Self::Time),
            Keyword::Timestamp => Some(Self::Timestamp),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "DATE",
            Self::Datetime => "DATETIME",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
        }
    }
}

impl fmt::Display for GetFormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
