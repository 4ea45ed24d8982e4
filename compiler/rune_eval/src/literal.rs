//! Structured literal parser for the ASTRAL and DIVINE realms.
//!
//! Raw input that looks like `[...]` or `{...}` is parsed with a fixed token
//! set (brackets, braces, commas, colons, numbers, quoted text, booleans,
//! null). Input is data only: there is no expression syntax, no names that
//! resolve to anything, and nesting depth is bounded.
//!
//! Grammar:
//!
//! ```text
//! value := INT | FLOAT | STRING | true | false | null
//!        | '[' (value (',' value)* ','?)? ']'
//!        | '{' (key ':' value (',' key ':' value)* ','?)? '}'
//! key   := STRING | IDENT | INT
//! ```

use logos::Logos;
use num_bigint::BigInt;
use std::collections::BTreeMap;
use std::ops::Range;

use crate::value::Value;

/// Deepest `[`/`{` nesting accepted.
pub const MAX_DEPTH: usize = 64;

/// Why a literal could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    #[error("unrecognized input at byte {0}")]
    InvalidToken(usize),
    #[error("unexpected `{found}` at byte {offset}")]
    Unexpected { found: String, offset: usize },
    #[error("unexpected end of literal")]
    UnexpectedEnd,
    #[error("trailing input at byte {0}")]
    Trailing(usize),
    #[error("nesting deeper than {} levels", MAX_DEPTH)]
    TooDeep,
    #[error("expected a {0} literal")]
    WrongShape(&'static str),
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum Token {
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,

    #[token("true")]
    #[token("True")]
    True,
    #[token("false")]
    #[token("False")]
    False,
    #[token("null")]
    #[token("none")]
    #[token("None")]
    Null,

    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().parse::<BigInt>().ok())]
    Int(BigInt),
    #[regex(r"[+-]?[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[+-]?[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Float(f64),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| unescape(lex.slice()))]
    #[regex(r"'([^'\\]|\\.)*'", |lex| unescape(lex.slice()))]
    Str(String),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::LBracket => "[".into(),
            Token::RBracket => "]".into(),
            Token::LBrace => "{".into(),
            Token::RBrace => "}".into(),
            Token::Comma => ",".into(),
            Token::Colon => ":".into(),
            Token::True => "true".into(),
            Token::False => "false".into(),
            Token::Null => "null".into(),
            Token::Int(n) => n.to_string(),
            Token::Float(x) => x.to_string(),
            Token::Str(s) => format!("{s:?}"),
            Token::Ident(s) => s.clone(),
        }
    }
}

/// Strip the surrounding quotes and resolve backslash escapes.
fn unescape(quoted: &str) -> String {
    let inner = &quoted[1..quoted.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn tokenize(source: &str) -> Result<Vec<(Token, Range<usize>)>, LiteralError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => return Err(LiteralError::InvalidToken(lexer.span().start)),
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<(Token, Range<usize>)>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn next(&mut self) -> Result<(Token, usize), LiteralError> {
        let (token, span) = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(LiteralError::UnexpectedEnd)?;
        self.pos += 1;
        Ok((token, span.start))
    }

    fn value(&mut self, depth: usize) -> Result<Value, LiteralError> {
        let (token, offset) = self.next()?;
        match token {
            Token::Int(n) => Ok(Value::from_bigint(n)),
            Token::Float(x) => Ok(Value::Float(x)),
            Token::Str(s) => Ok(Value::Str(s)),
            Token::True => Ok(Value::Bool(true)),
            Token::False => Ok(Value::Bool(false)),
            Token::Null => Ok(Value::Null),
            Token::LBracket => self.list_tail(depth + 1),
            Token::LBrace => self.map_tail(depth + 1),
            other => Err(LiteralError::Unexpected {
                found: other.describe(),
                offset,
            }),
        }
    }

    /// After `[`: items up to and including `]`.
    fn list_tail(&mut self, depth: usize) -> Result<Value, LiteralError> {
        if depth > MAX_DEPTH {
            return Err(LiteralError::TooDeep);
        }
        let mut items = Vec::new();
        loop {
            if self.peek() == Some(&Token::RBracket) {
                self.pos += 1;
                return Ok(Value::List(items));
            }
            items.push(self.value(depth)?);
            match self.next()? {
                (Token::Comma, _) => {}
                (Token::RBracket, _) => return Ok(Value::List(items)),
                (other, offset) => {
                    return Err(LiteralError::Unexpected {
                        found: other.describe(),
                        offset,
                    })
                }
            }
        }
    }

    /// After `{`: entries up to and including `}`.
    fn map_tail(&mut self, depth: usize) -> Result<Value, LiteralError> {
        if depth > MAX_DEPTH {
            return Err(LiteralError::TooDeep);
        }
        let mut entries = BTreeMap::new();
        loop {
            if self.peek() == Some(&Token::RBrace) {
                self.pos += 1;
                return Ok(Value::Map(entries));
            }
            let key = match self.next()? {
                (Token::Str(s) | Token::Ident(s), _) => s,
                (Token::Int(n), _) => n.to_string(),
                (other, offset) => {
                    return Err(LiteralError::Unexpected {
                        found: other.describe(),
                        offset,
                    })
                }
            };
            match self.next()? {
                (Token::Colon, _) => {}
                (other, offset) => {
                    return Err(LiteralError::Unexpected {
                        found: other.describe(),
                        offset,
                    })
                }
            }
            let value = self.value(depth)?;
            entries.insert(key, value);
            match self.next()? {
                (Token::Comma, _) => {}
                (Token::RBrace, _) => return Ok(Value::Map(entries)),
                (other, offset) => {
                    return Err(LiteralError::Unexpected {
                        found: other.describe(),
                        offset,
                    })
                }
            }
        }
    }
}

/// Parse a complete literal. The whole input must be consumed.
pub fn parse_literal(source: &str) -> Result<Value, LiteralError> {
    let mut parser = Parser {
        tokens: tokenize(source)?,
        pos: 0,
    };
    let value = parser.value(0)?;
    if let Some((_, span)) = parser.tokens.get(parser.pos) {
        return Err(LiteralError::Trailing(span.start));
    }
    Ok(value)
}

/// Parse a literal that must be a list.
pub fn parse_list(source: &str) -> Result<Vec<Value>, LiteralError> {
    match parse_literal(source)? {
        Value::List(items) => Ok(items),
        _ => Err(LiteralError::WrongShape("list")),
    }
}

/// Parse a literal that must be a key/value map.
pub fn parse_map(source: &str) -> Result<BTreeMap<String, Value>, LiteralError> {
    match parse_literal(source)? {
        Value::Map(entries) => Ok(entries),
        _ => Err(LiteralError::WrongShape("map")),
    }
}

#[cfg(test)]
mod tests;
