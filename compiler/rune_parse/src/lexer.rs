//! Lexer for spells using logos.
//!
//! Keywords are case-insensitive. Every other word is an identifier; the
//! parser decides whether it is a name, a realm, an operation or filler.
//! Horizontal whitespace and `#` comments are dropped, newlines are kept
//! because they end statements.

use std::fmt;

use logos::Logos;
use rune_ir::Span;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")]
enum RawToken {
    #[regex(r"#[^\n]*")]
    LineComment,

    #[token("\n")]
    Newline,

    #[token("invoke", ignore(ascii_case))]
    Invoke,
    #[token("spirit", ignore(ascii_case))]
    #[token("spirits", ignore(ascii_case))]
    Spirit,
    #[token("and", ignore(ascii_case))]
    And,
    #[token("from", ignore(ascii_case))]
    From,
    #[token("channel", ignore(ascii_case))]
    Channel,
    #[token("weave", ignore(ascii_case))]
    Weave,
    #[token("with", ignore(ascii_case))]
    With,
    #[token("of", ignore(ascii_case))]
    Of,
    #[token("manifest", ignore(ascii_case))]
    Manifest,
    #[token("as", ignore(ascii_case))]
    As,
    #[token("speak", ignore(ascii_case))]
    Speak,
    #[token("forth", ignore(ascii_case))]
    Forth,
    #[token("to", ignore(ascii_case))]
    To,
    #[token("if", ignore(ascii_case))]
    If,
    #[token("then", ignore(ascii_case))]
    Then,
    #[token("elsewise", ignore(ascii_case))]
    Elsewise,
    #[token("end", ignore(ascii_case))]
    End,
    #[token("while", ignore(ascii_case))]
    While,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}

/// Token kinds seen by the parser.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Invoke,
    Spirit,
    And,
    From,
    Channel,
    Weave,
    With,
    Of,
    Manifest,
    As,
    Speak,
    Forth,
    To,
    If,
    Then,
    Elsewise,
    End,
    While,
    Ident(String),
    Newline,
    /// Input no rule matches; carries the offending text.
    Error(String),
    Eof,
}

impl TokenKind {
    /// Human-readable description for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ident(name) => format!("`{name}`"),
            TokenKind::Error(text) => format!("`{text}`"),
            TokenKind::Newline => "end of line".to_string(),
            TokenKind::Eof => "end of spell".to_string(),
            keyword => format!("`{keyword}`"),
        }
    }

    pub fn is_line_end(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Invoke => "INVOKE",
            TokenKind::Spirit => "SPIRIT",
            TokenKind::And => "AND",
            TokenKind::From => "FROM",
            TokenKind::Channel => "CHANNEL",
            TokenKind::Weave => "WEAVE",
            TokenKind::With => "WITH",
            TokenKind::Of => "OF",
            TokenKind::Manifest => "MANIFEST",
            TokenKind::As => "AS",
            TokenKind::Speak => "SPEAK",
            TokenKind::Forth => "FORTH",
            TokenKind::To => "TO",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Elsewise => "ELSEWISE",
            TokenKind::End => "END",
            TokenKind::While => "WHILE",
            TokenKind::Ident(name) => return write!(f, "Ident({name})"),
            TokenKind::Error(text) => return write!(f, "Error({text})"),
            TokenKind::Newline => "Newline",
            TokenKind::Eof => "Eof",
        };
        f.write_str(text)
    }
}

/// A token with its source location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lex a spell into tokens. The last token is always `Eof`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();
        let kind = match result {
            Ok(raw) => match convert_token(raw, slice) {
                Some(kind) => kind,
                None => continue,
            },
            Err(()) => TokenKind::Error(slice.to_string()),
        };
        tokens.push(Token::new(kind, span));
    }

    let end = Span::from_range(source.len()..source.len());
    tokens.push(Token::new(TokenKind::Eof, end));
    tokens
}

/// Convert a raw token; `None` for trivia.
fn convert_token(raw: RawToken, slice: &str) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::LineComment => return None,
        RawToken::Newline => TokenKind::Newline,
        RawToken::Invoke => TokenKind::Invoke,
        RawToken::Spirit => TokenKind::Spirit,
        RawToken::And => TokenKind::And,
        RawToken::From => TokenKind::From,
        RawToken::Channel => TokenKind::Channel,
        RawToken::Weave => TokenKind::Weave,
        RawToken::With => TokenKind::With,
        RawToken::Of => TokenKind::Of,
        RawToken::Manifest => TokenKind::Manifest,
        RawToken::As => TokenKind::As,
        RawToken::Speak => TokenKind::Speak,
        RawToken::Forth => TokenKind::Forth,
        RawToken::To => TokenKind::To,
        RawToken::If => TokenKind::If,
        RawToken::Then => TokenKind::Then,
        RawToken::Elsewise => TokenKind::Elsewise,
        RawToken::End => TokenKind::End,
        RawToken::While => TokenKind::While,
        RawToken::Ident => TokenKind::Ident(slice.to_string()),
    };
    Some(kind)
}

#[cfg(test)]
mod tests;
