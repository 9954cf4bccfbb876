//! Grammar rule names.

macro_rules! define_rules {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// A grammar rule. Parse errors report the innermost rule that was
        /// active when recognition failed.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum Rule {
            $(
                #[doc = $name]
                $variant,
            )*
        }

        impl Rule {
            /// Every rule.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Returns the grammar name of the rule (`selectElements`, ...).
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }
    };
}

define_rules! {
    // Statements
    Root => "root",
    SqlStatement => "sqlStatement",
    DmlStatement => "dmlStatement",
    AdminStatement => "adminStatement",
    SelectStatement => "selectStatement",
    ShowStatement => "showStatement",
    DescribeStatement => "describeStatement",
    TableFilter => "tableFilter",
    ColumnFilter => "columnFilter",
    ShowDescribePattern => "showDescribePattern",
    CompatibleId => "compatibleID",

    // Query clauses
    QuerySpecification => "querySpecification",
    SelectClause => "selectClause",
    SelectSpec => "selectSpec",
    SelectElements => "selectElements",
    SelectElement => "selectElement",
    FromClause => "fromClause",
    Relation => "relation",
    WhereClause => "whereClause",
    GroupByClause => "groupByClause",
    GroupByElements => "groupByElements",
    GroupByElement => "groupByElement",
    HavingClause => "havingClause",
    OrderByClause => "orderByClause",
    OrderByElement => "orderByElement",
    LimitClause => "limitClause",

    // Window functions
    WindowFunctionClause => "windowFunctionClause",
    WindowFunction => "windowFunction",
    OverClause => "overClause",
    PartitionByClause => "partitionByClause",

    // Literals
    Constant => "constant",
    DecimalLiteral => "decimalLiteral",
    StringLiteral => "stringLiteral",
    BooleanLiteral => "booleanLiteral",
    RealLiteral => "realLiteral",
    Sign => "sign",
    NullLiteral => "nullLiteral",
    DatetimeLiteral => "datetimeLiteral",
    IntervalLiteral => "intervalLiteral",
    IntervalUnit => "intervalUnit",

    // Names
    TableName => "tableName",
    ColumnName => "columnName",
    AllTupleFields => "allTupleFields",
    Alias => "alias",
    QualifiedName => "qualifiedName",
    Ident => "ident",

    // Expressions
    Expression => "expression",
    Predicate => "predicate",
    ExpressionAtom => "expressionAtom",
    ComparisonOperator => "comparisonOperator",
    ExpressionList => "expressions",

    // Functions
    FunctionCall => "functionCall",
    NestedAllFunctionCall => "nestedAllFunctionCall",
    ScalarFunctionCall => "scalarFunctionCall",
    SpecificFunction => "specificFunction",
    CaseFuncAlternative => "caseFuncAlternative",
    ConvertedDataType => "convertedDataType",
    AggregateFunction => "aggregateFunction",
    FilteredAggregationFunctionCall => "filteredAggregationFunctionCall",
    FilterClause => "filterClause",
    FunctionArgs => "functionArgs",
    FunctionArg => "functionArg",
    PositionFunction => "positionFunction",
    ExtractFunction => "extractFunction",
    DatetimePart => "datetimePart",
    SimpleDateTimePart => "simpleDateTimePart",
    GetFormatFunction => "getFormatFunction",
    GetFormatType => "getFormatType",
    TimestampFunction => "timestampFunction",

    // Relevance functions
    ScoreRelevanceFunction => "scoreRelevanceFunction",
    RelevanceFunction => "relevanceFunction",
    NoFieldRelevanceFunction => "noFieldRelevanceFunction",
    SingleFieldRelevanceFunction => "singleFieldRelevanceFunction",
    MultiFieldRelevanceFunction => "multiFieldRelevanceFunction",
    AltSingleFieldRelevanceFunction => "altSingleFieldRelevanceFunction",
    AltMultiFieldRelevanceFunction => "altMultiFieldRelevanceFunction",
    AlternateMultiMatchQuery => "alternateMultiMatchQuery",
    AlternateMultiMatchField => "alternateMultiMatchField",
    AlternateMultiMatchArgName => "alternateMultiMatchArgName",
    RelevanceField => "relevanceField",
    RelevanceFieldAndWeight => "relevanceFieldAndWeight",
    RelevanceFieldWeight => "relevanceFieldWeight",
    RelevanceQuery => "relevanceQuery",
    RelevanceArg => "relevanceArg",
    RelevanceArgName => "relevanceArgName",
    RelevanceArgValue => "relevanceArgValue",
    HighlightFunction => "highlightFunction",
    HighlightArg => "highlightArg",
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rule_names_are_unique() {
        let names: HashSet<_> = Rule::ALL.iter().map(Rule::as_str).collect();
        assert_eq!(names.len(), Rule::ALL.len());
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(Rule::SelectElements.to_string(), "selectElements");
        assert_eq!(Rule::CompatibleId.to_string(), "compatibleID");
    }
}
