//! Error types for spell execution.
//!
//! `EvalErrorKind` provides typed error categories; the factory functions
//! (e.g. `division_by_zero()`) are the public API and populate both `kind`
//! and `message`.
//!
//! Every kind here is fatal: it aborts the remaining statements and reaches
//! the caller as the single terminal error of the run. Coercion failures are
//! the one exception and never appear here; see [`ConversionFailure`].

use std::fmt;

use rune_ir::{Operation, Realm, Span};

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Which accumulator slot an operation found empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Filled by `CHANNEL`.
    Left,
    /// Filled by `WEAVE`.
    Right,
}

impl Slot {
    /// The statement that fills this slot.
    pub const fn staged_by(self) -> &'static str {
        match self {
            Slot::Left => "CHANNEL",
            Slot::Right => "WEAVE",
        }
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Read of a name that was never summoned or bound.
    UnboundVariable { name: String },
    /// `MANIFEST` without the required `CHANNEL`/`WEAVE` staging.
    MissingOperand { operation: Operation, slot: Slot },
    /// `division` with a right operand that is (or coerces to) zero.
    DivisionByZero,
    /// No operation rule applies and no numeric interpretation exists.
    CoercionError {
        operation: Operation,
        left: String,
        right: String,
    },
    /// A statement the interpreter does not execute.
    UnknownStatement { tag: String },
    /// The input provider could not supply a line for an `INVOKE`.
    InputUnavailable { name: String, reason: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundVariable { name } => {
                write!(f, "spirit '{name}' has not been summoned; use INVOKE first")
            }
            Self::MissingOperand { operation, slot } => write!(
                f,
                "cannot manifest {operation}: no operand staged by {}",
                slot.staged_by()
            ),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::CoercionError {
                operation,
                left,
                right,
            } => write!(
                f,
                "operator `{}` cannot be applied to `{left}` and `{right}`",
                operation.as_symbol()
            ),
            Self::UnknownStatement { tag } => {
                write!(f, "statement `{tag}` is not supported by the interpreter")
            }
            Self::InputUnavailable { name, reason } => {
                write!(f, "no input available for '{name}': {reason}")
            }
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
    /// Source location of the statement that failed, when known.
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span: None,
        }
    }

    /// Attach the failing statement's span, keeping any span already set.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() && !span.is_dummy() {
            self.span = Some(span);
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

/// A raw-text-to-value coercion that found no valid interpretation.
///
/// Always recovered locally by storing the unmodified text; it exists so the
/// coercion rules can say *why* they fell back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionFailure {
    pub realm: Realm,
    pub reason: String,
}

impl ConversionFailure {
    pub fn new(realm: Realm, reason: impl Into<String>) -> Self {
        Self {
            realm,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConversionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} realm conversion failed: {}", self.realm, self.reason)
    }
}

// Factory functions

#[cold]
pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn missing_operand(operation: Operation, slot: Slot) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingOperand { operation, slot })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn coercion_error(operation: Operation, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CoercionError {
        operation,
        left: left.type_name().to_string(),
        right: right.type_name().to_string(),
    })
}

#[cold]
pub fn unknown_statement(tag: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownStatement {
        tag: tag.to_string(),
    })
}

#[cold]
pub fn input_unavailable(name: &str, reason: impl fmt::Display) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InputUnavailable {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}
