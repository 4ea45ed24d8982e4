//! Parse errors.

use rune_ir::Span;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unrecognized input {0}")]
    InvalidToken(String),
    #[error("expected {expected}, found {found}")]
    Expected { expected: String, found: String },
    #[error("unknown realm `{0}`")]
    UnknownRealm(String),
    #[error(
        "unknown operation `{0}`; expected union, difference, fusion, division, power or essence"
    )]
    UnknownOperation(String),
    #[error("unknown comparison `{0}`; expected battles, harmonizes, speaks truth or conflicts")]
    UnknownComparison(String),
    #[error("`{0}` block is never closed with END")]
    UnclosedBlock(&'static str),
}

/// A parse error with the location it was found at.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    /// `line N: message`, for terminal output.
    pub fn render(&self, source: &str) -> String {
        format!("line {}: {}", self.span.line_in(source), self.kind)
    }
}
