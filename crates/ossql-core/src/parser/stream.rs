//! Buffered token source with mark/reset.

use crate::lexer::{Span, Token, TokenKind};

/// A saved position in a [`TokenStream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mark(usize);

impl Mark {
    /// Returns the token index the mark points at.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A token buffer the parser reads from.
///
/// The buffer always ends with an EOF token; reading past the end keeps
/// returning it.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    /// Creates a stream, appending an EOF token if `tokens` lacks one.
    #[must_use]
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let end = tokens.last().map_or(0, |t| t.span.end);
            tokens.push(Token::new(TokenKind::Eof, Span::new(end, end)));
        }
        Self { tokens, pos: 0 }
    }

    /// Returns the token at the current position.
    #[must_use]
    pub fn current(&self) -> &Token {
        self.peek(0)
    }

    /// Returns the token `offset` positions ahead of the current one.
    #[must_use]
    pub fn peek(&self, offset: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + offset).min(last)]
    }

    /// Moves past the current token and returns it.
    pub fn consume(&mut self) -> &Token {
        let index = self.pos.min(self.tokens.len() - 1);
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Returns a mark for the current position.
    #[must_use]
    pub const fn position(&self) -> Mark {
        Mark(self.pos)
    }

    /// Rewinds (or fast-forwards) to a previously taken mark.
    pub fn reset_to(&mut self, mark: Mark) {
        self.pos = mark.0.min(self.tokens.len() - 1);
    }

    /// Returns the span of the token before the current one.
    #[must_use]
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1) {
            Some(i) => self.tokens[i].span,
            None => self.current().span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn stream(sql: &str) -> TokenStream {
        TokenStream::new(Lexer::new(sql).tokenize())
    }

    #[test]
    fn test_consume_stops_at_eof() {
        let mut s = stream("a");
        assert!(matches!(s.consume().kind, TokenKind::Identifier(_)));
        assert!(s.consume().is_eof());
        assert!(s.consume().is_eof());
        assert!(s.current().is_eof());
    }

    #[test]
    fn test_peek_is_clamped() {
        let s = stream("a , b");
        assert_eq!(s.peek(1).kind, TokenKind::Comma);
        assert!(s.peek(10).is_eof());
    }

    #[test]
    fn test_mark_and_reset() {
        let mut s = stream("a b c");
        let mark = s.position();
        s.consume();
        s.consume();
        assert_eq!(s.position().index(), 2);
        s.reset_to(mark);
        assert_eq!(s.current().kind, TokenKind::Identifier(String::from("a")));
    }

    #[test]
    fn test_eof_appended() {
        let s = TokenStream::new(Vec::new());
        assert!(s.current().is_eof());
        assert_eq!(s.previous_span(), Span::new(0, 0));
    }
}
