//! Token cursor for navigating the token stream.

use rune_ir::Span;

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};

/// Cursor over lexed tokens.
///
/// Never moves past the final `Eof`; reading beyond the slice yields a
/// synthetic `Eof` so callers need no bounds checks.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    eof: Token,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let end = tokens.last().map_or(Span::DUMMY, |t| Span::new(t.span.end, t.span.end));
        Cursor {
            tokens,
            pos: 0,
            eof: Token::new(TokenKind::Eof, end),
        }
    }

    // Token access

    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    #[inline]
    pub fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    pub fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Span::DUMMY, |t| t.span)
    }

    // Lookahead

    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Whether the current token is the identifier `word`, ignoring case.
    pub fn check_word(&self, word: &str) -> bool {
        matches!(self.current_kind(), TokenKind::Ident(text) if text.eq_ignore_ascii_case(word))
    }

    // Consumption

    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        let matched = self.check(kind);
        if matched {
            self.advance();
        }
        matched
    }

    pub fn eat_word(&mut self, word: &str) -> bool {
        let matched = self.check_word(word);
        if matched {
            self.advance();
        }
        matched
    }

    pub fn skip_newlines(&mut self) {
        while self.check(&TokenKind::Newline) {
            self.advance();
        }
    }

    /// Error for the current token, described against what was expected.
    pub fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.current();
        let kind = match &token.kind {
            TokenKind::Error(_) => ParseErrorKind::InvalidToken(token.kind.describe()),
            other => ParseErrorKind::Expected {
                expected: expected.to_string(),
                found: other.describe(),
            },
        };
        ParseError::new(kind, token.span)
    }

    pub fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            let span = self.current_span();
            self.advance();
            Ok(span)
        } else {
            Err(self.unexpected(&kind.describe()))
        }
    }

    pub fn expect_word(&mut self, word: &str) -> Result<(), ParseError> {
        if self.eat_word(word) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("`{word}`")))
        }
    }

    /// Consume an identifier, returning its text and span.
    pub fn expect_ident(&mut self, expected: &str) -> Result<(String, Span), ParseError> {
        if let TokenKind::Ident(text) = self.current_kind() {
            let found = (text.clone(), self.current_span());
            self.advance();
            Ok(found)
        } else {
            Err(self.unexpected(expected))
        }
    }
}
