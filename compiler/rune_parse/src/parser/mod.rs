//! Recursive descent parser for spells.
//!
//! One statement per line. Filler words (`the`, `essence`, `force`, `their`,
//! realm nouns) are optional wherever they appear in the canonical phrasing.
//!
//! `MANIFEST` records as its operands every name channeled or woven since
//! the previous `MANIFEST`, in source order.

mod cursor;

pub use cursor::Cursor;

use rune_ir::{CompareOp, Comparison, Operation, Program, Realm, Span, Stmt, StmtKind};

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{lex, Token, TokenKind};

/// Target used by `SPEAK FORTH x` without `TO`.
pub const DEFAULT_TARGET: &str = "the void";

const REALM_NOUNS: [&str; 4] = ["realm", "plane", "dimension", "world"];

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Names staged since the last `MANIFEST`.
    pending_operands: Vec<String>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            pending_operands: Vec::new(),
        }
    }

    /// Parse the whole token stream.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let statements = self.parse_block(None)?;
        Ok(Program::new(statements))
    }

    /// Statements up to `END`/`ELSEWISE` (inside a block) or end of input.
    ///
    /// `opener` names the enclosing block and where it began, for the
    /// unclosed-block diagnostic.
    fn parse_block(&mut self, opener: Option<(&'static str, Span)>) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        loop {
            self.cursor.skip_newlines();
            match (self.cursor.current_kind(), opener) {
                (TokenKind::Eof, None) => break,
                (TokenKind::Eof, Some((keyword, span))) => {
                    return Err(ParseError::new(ParseErrorKind::UnclosedBlock(keyword), span));
                }
                (TokenKind::End | TokenKind::Elsewise, Some(_)) => break,
                _ => {
                    statements.push(self.parse_statement()?);
                    self.expect_line_end()?;
                }
            }
        }
        Ok(statements)
    }

    fn expect_line_end(&mut self) -> Result<(), ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Newline => {
                self.cursor.advance();
                Ok(())
            }
            TokenKind::Eof => Ok(()),
            _ => Err(self.cursor.unexpected("end of line")),
        }
    }

    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_span();
        let kind = match self.cursor.current_kind() {
            TokenKind::Invoke => self.parse_invoke()?,
            TokenKind::Channel => self.parse_channel()?,
            TokenKind::Weave => self.parse_weave()?,
            TokenKind::Manifest => self.parse_manifest()?,
            TokenKind::Speak => self.parse_speak()?,
            TokenKind::If => self.parse_conditional(start)?,
            TokenKind::While => self.parse_while(start)?,
            _ => return Err(self.cursor.unexpected("a statement")),
        };
        let span = start.merge(self.cursor.previous_span());
        tracing::trace!(statement = %kind, %span, "parsed statement");
        Ok(Stmt::new(kind, span))
    }

    /// `INVOKE spirit|spirits a (AND b)* FROM [the] <realm> [realm]`
    fn parse_invoke(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        self.cursor.expect(&TokenKind::Spirit)?;

        let mut names = vec![self.cursor.expect_ident("a spirit name")?.0];
        while self.cursor.eat(&TokenKind::And) {
            names.push(self.cursor.expect_ident("a spirit name")?.0);
        }

        self.cursor.expect(&TokenKind::From)?;
        self.cursor.eat_word("the");
        // `spirit` lexes as a keyword; as a realm word it names SPIRIT.
        let realm = if self.cursor.eat(&TokenKind::Spirit) {
            Realm::Spirit
        } else {
            let (word, span) = self.cursor.expect_ident("a realm")?;
            word.parse()
                .map_err(|_| ParseError::new(ParseErrorKind::UnknownRealm(word), span))?
        };
        for noun in REALM_NOUNS {
            if self.cursor.eat_word(noun) {
                break;
            }
        }
        Ok(StmtKind::Invoke { names, realm })
    }

    /// `CHANNEL [the essence] OF x`
    fn parse_channel(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        self.cursor.eat_word("the");
        self.cursor.eat_word("essence");
        self.cursor.expect(&TokenKind::Of)?;
        let (name, _) = self.cursor.expect_ident("a spirit name")?;
        self.pending_operands.push(name.clone());
        Ok(StmtKind::Channel { name })
    }

    /// `WEAVE WITH [the force] OF y`
    fn parse_weave(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        self.cursor.expect(&TokenKind::With)?;
        self.cursor.eat_word("the");
        self.cursor.eat_word("force");
        self.cursor.expect(&TokenKind::Of)?;
        let (name, _) = self.cursor.expect_ident("a spirit name")?;
        self.pending_operands.push(name.clone());
        Ok(StmtKind::Weave { name })
    }

    /// `MANIFEST [their] <operation> AS z`
    fn parse_manifest(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        self.cursor.eat_word("their");
        let (word, span) = self.cursor.expect_ident("an operation")?;
        let operation = Operation::from_keyword(&word)
            .ok_or_else(|| ParseError::new(ParseErrorKind::UnknownOperation(word), span))?;
        self.cursor.expect(&TokenKind::As)?;
        let (result, _) = self.cursor.expect_ident("a result name")?;
        Ok(StmtKind::Manifest {
            operation,
            operands: std::mem::take(&mut self.pending_operands),
            result,
        })
    }

    /// `SPEAK FORTH z [TO <target words>]`
    fn parse_speak(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        self.cursor.expect(&TokenKind::Forth)?;
        let (name, _) = self.cursor.expect_ident("a spirit name")?;
        let target = if self.cursor.eat(&TokenKind::To) {
            self.parse_target()?
        } else {
            DEFAULT_TARGET.to_string()
        };
        Ok(StmtKind::Speak { name, target })
    }

    /// Rest of the line after `TO`, lowercased and single-spaced.
    fn parse_target(&mut self) -> Result<String, ParseError> {
        let mut words = Vec::new();
        loop {
            match self.cursor.current_kind() {
                kind if kind.is_line_end() => break,
                TokenKind::Ident(text) => words.push(text.to_ascii_lowercase()),
                TokenKind::Error(_) => return Err(self.cursor.unexpected("a target")),
                keyword => words.push(keyword.to_string().to_ascii_lowercase()),
            }
            self.cursor.advance();
        }
        if words.is_empty() {
            return Err(self.cursor.unexpected("a target"));
        }
        Ok(words.join(" "))
    }

    /// `IF the spirits decree <cmp> THEN ... [ELSEWISE ...] END`
    fn parse_conditional(&mut self, start: Span) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        self.cursor.eat_word("the");
        self.cursor.eat(&TokenKind::Spirit);
        self.cursor.eat_word("decree");
        let condition = self.parse_comparison()?;
        self.cursor.expect(&TokenKind::Then)?;

        let then_branch = self.parse_block(Some(("IF", start)))?;
        let else_branch = if self.cursor.eat(&TokenKind::Elsewise) {
            Some(self.parse_block(Some(("IF", start)))?)
        } else {
            None
        };
        self.cursor.expect(&TokenKind::End)?;
        Ok(StmtKind::Conditional {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// `WHILE the essence flows AND <cmp> ... END`
    fn parse_while(&mut self, start: Span) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        self.cursor.eat_word("the");
        self.cursor.eat_word("essence");
        self.cursor.eat_word("flows");
        self.cursor.expect(&TokenKind::And)?;
        let condition = self.parse_comparison()?;
        let body = self.parse_block(Some(("WHILE", start)))?;
        self.cursor.expect(&TokenKind::End)?;
        Ok(StmtKind::WhileLoop { condition, body })
    }

    /// `a battles b`, `a harmonizes with b`, `a speaks truth with b`,
    /// `a conflicts with b`
    fn parse_comparison(&mut self) -> Result<Comparison, ParseError> {
        let (left, _) = self.cursor.expect_ident("a spirit name")?;
        let (word, span) = self.cursor.expect_ident("a comparison")?;
        let op = match word.to_ascii_lowercase().as_str() {
            "battles" => CompareOp::Greater,
            "harmonizes" => {
                self.cursor.expect(&TokenKind::With)?;
                CompareOp::Less
            }
            "speaks" => {
                self.cursor.expect_word("truth")?;
                self.cursor.expect(&TokenKind::With)?;
                CompareOp::Equal
            }
            "conflicts" => {
                self.cursor.expect(&TokenKind::With)?;
                CompareOp::NotEqual
            }
            _ => {
                return Err(ParseError::new(
                    ParseErrorKind::UnknownComparison(word),
                    span,
                ))
            }
        };
        let (right, _) = self.cursor.expect_ident("a spirit name")?;
        Ok(Comparison { left, op, right })
    }
}

/// Lex and parse a spell.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = lex(source);
    let program = Parser::new(&tokens).parse_program()?;
    tracing::debug!(statements = program.len(), "parsed spell");
    Ok(program)
}
