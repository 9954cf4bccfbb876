//! OpenSearch SQL tokenizer.

use super::{Keyword, Span, Token, TokenKind};

/// A lexer that tokenizes OpenSearch SQL input.
///
/// Comparison operators are emitted one character at a time (`<`, `=`, ...);
/// the parser assembles `<=`, `>=`, `<>` and `!=`.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_line(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    /// Skips whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            // -- ... and # ...
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                self.skip_line();
                continue;
            }
            if self.peek() == Some('#') {
                self.skip_line();
                continue;
            }

            // /* ... */, including /*! ... */
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        None => break,
                        _ => {}
                    }
                }
                continue;
            }

            break;
        }
    }

    /// Creates a span from start to current position.
    fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token with the current span.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.make_span())
    }

    const fn is_identifier_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_' || c == '@'
    }

    /// Identifier bodies also admit `-` and `*`, so index patterns such as
    /// `logs-*` lex as one token.
    const fn is_identifier_part(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '@' | '-' | '*')
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(Self::is_identifier_part) {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];

        if let Some(keyword) = Keyword::from_str(text) {
            self.make_token(TokenKind::Keyword(keyword))
        } else {
            self.make_token(TokenKind::Identifier(String::from(text)))
        }
    }

    /// Scans a quoted token body up to the closing `quote`.
    ///
    /// A doubled quote stands for itself; a backslash escapes the quote and
    /// the backslash, and is kept verbatim before any other character.
    fn scan_quoted(&mut self, quote: char) -> Result<String, String> {
        self.advance(); // consume opening quote
        let mut value = String::new();

        loop {
            match self.advance() {
                Some(c) if c == quote => {
                    if self.peek() == Some(quote) {
                        value.push(quote);
                        self.advance();
                    } else {
                        return Ok(value);
                    }
                }
                Some('\\') => match self.advance() {
                    Some(c) if c == quote || c == '\\' => value.push(c),
                    Some(c) => {
                        value.push('\\');
                        value.push(c);
                    }
                    None => break,
                },
                Some(c) => value.push(c),
                None => break,
            }
        }

        let what = match quote {
            '`' => "quoted identifier",
            _ => "string literal",
        };
        Err(format!("Unterminated {what}"))
    }

    fn scan_string(&mut self, quote: char) -> Token {
        match self.scan_quoted(quote) {
            Ok(value) if quote == '"' => self.make_token(TokenKind::DoubleQuoted(value)),
            Ok(value) => self.make_token(TokenKind::String(value)),
            Err(message) => self.make_token(TokenKind::Error(message)),
        }
    }

    fn scan_backtick_identifier(&mut self) -> Token {
        match self.scan_quoted('`') {
            Ok(value) => self.make_token(TokenKind::BacktickIdentifier(value)),
            Err(message) => self.make_token(TokenKind::Error(message)),
        }
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// Scans a decimal or real literal.
    fn scan_number(&mut self) -> Token {
        let mut is_float = false;

        self.skip_digits();

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance(); // consume .
            self.skip_digits();
        }

        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            let mut lookahead = self.input[self.pos..].chars().skip(1);
            let exponent_follows = match lookahead.next() {
                Some('+' | '-') => lookahead.next().is_some_and(|c| c.is_ascii_digit()),
                Some(c) => c.is_ascii_digit(),
                None => false,
            };
            if exponent_follows {
                is_float = true;
                self.advance(); // consume e/E
                if self.peek().is_some_and(|c| c == '+' || c == '-') {
                    self.advance();
                }
                self.skip_digits();
            }
        }

        let text = &self.input[self.start..self.pos];

        if !is_float {
            return self.make_token(TokenKind::Integer(text.to_string()));
        }
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => self.make_token(TokenKind::Float(f)),
            Ok(_) => self.make_token(TokenKind::Error(format!(
                "Real literal out of range: {text}"
            ))),
            Err(e) => self.make_token(TokenKind::Error(format!("Invalid real literal: {e}"))),
        }
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '[' => self.make_token(TokenKind::LeftBracket),
            ']' => self.make_token(TokenKind::RightBracket),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            ',' => self.make_token(TokenKind::Comma),
            ';' => self.make_token(TokenKind::Semicolon),
            ':' => self.make_token(TokenKind::Colon),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '%' => self.make_token(TokenKind::Percent),
            '=' => self.make_token(TokenKind::Eq),
            '<' => self.make_token(TokenKind::Lt),
            '>' => self.make_token(TokenKind::Gt),
            '!' => self.make_token(TokenKind::Bang),
            '~' => self.make_token(TokenKind::BitNot),
            '|' => self.make_token(TokenKind::BitOr),
            '&' => self.make_token(TokenKind::BitAnd),
            '^' => self.make_token(TokenKind::Caret),

            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                self.pos = self.start;
                self.scan_number()
            }
            '.' => self.make_token(TokenKind::Dot),

            '\'' | '"' => {
                self.pos = self.start;
                self.scan_string(c)
            }
            '`' => {
                self.pos = self.start;
                self.scan_backtick_identifier()
            }

            c if c.is_ascii_digit() => {
                self.pos = self.start;
                self.scan_number()
            }

            '@' if !self.peek().is_some_and(Self::is_identifier_part) => {
                self.make_token(TokenKind::At)
            }
            c if Self::is_identifier_start(c) => {
                self.pos = self.start;
                self.scan_identifier()
            }

            _ => self.make_token(TokenKind::Error(format!("Unexpected character: {c}"))),
        }
    }

    /// Tokenizes the entire input and returns all tokens, ending with EOF.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize()
    }

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    fn ident(s: &str) -> TokenKind {
        TokenKind::Identifier(String::from(s))
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert!(matches!(tokens[0].kind, TokenKind::Eof));
    }

    #[test]
    fn test_whitespace_only() {
        let tokens = tokenize("   \n\t  ");
        assert_eq!(tokens.len(), 1);
        assert!(matches!(tokens[0].kind, TokenKind::Eof));
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            token_kinds("SELECT -- comment\n/* block */ # hash\nFROM"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(
            token_kinds("select FROM wHeRe match_query"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Keyword(Keyword::Where),
                TokenKind::Keyword(Keyword::MatchQuery),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            token_kinds("foo bar_baz _qux @timestamp logs-2021 logs-*"),
            vec![
                ident("foo"),
                ident("bar_baz"),
                ident("_qux"),
                ident("@timestamp"),
                ident("logs-2021"),
                ident("logs-*"),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_quoted_identifiers_and_strings() {
        assert_eq!(
            token_kinds("`column name` \"double\" 'single'"),
            vec![
                TokenKind::BacktickIdentifier(String::from("column name")),
                TokenKind::DoubleQuoted(String::from("double")),
                TokenKind::String(String::from("single")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            token_kinds(r"'it''s' 'it\'s' 'a\\b' 'a\nb'"),
            vec![
                TokenKind::String(String::from("it's")),
                TokenKind::String(String::from("it's")),
                TokenKind::String(String::from("a\\b")),
                TokenKind::String(String::from("a\\nb")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let kinds = token_kinds("'abc");
        assert!(matches!(&kinds[0], TokenKind::Error(m) if m.contains("Unterminated")));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            token_kinds("42 0 3.14 .5 1e10 2.5e-3"),
            vec![
                TokenKind::Integer("42".into()),
                TokenKind::Integer("0".into()),
                TokenKind::Float(3.14),
                TokenKind::Float(0.5),
                TokenKind::Float(1e10),
                TokenKind::Float(2.5e-3),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_wide_integer_keeps_digits() {
        assert_eq!(
            token_kinds("99999999999999999999"),
            vec![
                TokenKind::Integer("99999999999999999999".into()),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_infinite_real_is_error() {
        let kinds = token_kinds("1e999");
        assert!(matches!(&kinds[0], TokenKind::Error(m) if m.contains("out of range")));
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            token_kinds("+ - * / % = ! < > ~ | & ^"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::Eq,
                TokenKind::Bang,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::BitNot,
                TokenKind::BitOr,
                TokenKind::BitAnd,
                TokenKind::Caret,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            token_kinds("( ) [ ] { } , ; . : @"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Dot,
                TokenKind::Colon,
                TokenKind::At,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_simple_select() {
        let sql = "SELECT id, name FROM accounts WHERE age >= 1";
        assert_eq!(
            token_kinds(sql),
            vec![
                TokenKind::Keyword(Keyword::Select),
                ident("id"),
                TokenKind::Comma,
                ident("name"),
                TokenKind::Keyword(Keyword::From),
                ident("accounts"),
                TokenKind::Keyword(Keyword::Where),
                ident("age"),
                TokenKind::Gt,
                TokenKind::Eq,
                TokenKind::Integer("1".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_qualified_name_with_star() {
        assert_eq!(
            token_kinds("nested(a.b.*)"),
            vec![
                TokenKind::Keyword(Keyword::Nested),
                TokenKind::LeftParen,
                ident("a"),
                TokenKind::Dot,
                ident("b"),
                TokenKind::Dot,
                TokenKind::Star,
                TokenKind::RightParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_span_tracking() {
        let tokens = tokenize("SELECT id");
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(7, 9));
    }

    #[test]
    fn test_unexpected_character() {
        let kinds = token_kinds("SELECT ?");
        assert!(matches!(&kinds[1], TokenKind::Error(m) if m.contains('?')));
    }
}
