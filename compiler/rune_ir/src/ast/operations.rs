//! Manifest operations and comparison operators.

use std::fmt;

/// The operation a `MANIFEST` statement performs on the staged operands.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operation {
    /// `union`: addition, concatenation, logical OR.
    Combine,
    /// `difference`: subtraction, text removal, AND NOT.
    Separate,
    /// `fusion`: multiplication, repetition, logical AND.
    Merge,
    /// `division`: floating-point quotient.
    Split,
    /// `power`: exponentiation.
    Raise,
    /// `essence`: returns the channeled operand unchanged.
    Identity,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 6] = [
        Operation::Combine,
        Operation::Separate,
        Operation::Merge,
        Operation::Split,
        Operation::Raise,
        Operation::Identity,
    ];

    /// Source-level word (`union`, `difference`, ...).
    pub const fn keyword(self) -> &'static str {
        match self {
            Operation::Combine => "union",
            Operation::Separate => "difference",
            Operation::Merge => "fusion",
            Operation::Split => "division",
            Operation::Raise => "power",
            Operation::Identity => "essence",
        }
    }

    /// Arithmetic symbol, used in diagnostics.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Operation::Combine => "+",
            Operation::Separate => "-",
            Operation::Merge => "*",
            Operation::Split => "/",
            Operation::Raise => "^",
            Operation::Identity => "=",
        }
    }

    /// Whether the operation reads only the left (channeled) slot.
    pub const fn is_unary(self) -> bool {
        matches!(self, Operation::Identity)
    }

    /// Look up an operation by its source word, ignoring case.
    pub fn from_keyword(word: &str) -> Option<Operation> {
        Operation::ALL
            .into_iter()
            .find(|op| op.keyword().eq_ignore_ascii_case(word))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Comparison operators used by the (non-executed) conditional forms.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompareOp {
    /// `a battles b`
    Greater,
    /// `a harmonizes with b`
    Less,
    /// `a speaks truth with b`
    Equal,
    /// `a conflicts with b`
    NotEqual,
}

impl CompareOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            CompareOp::Greater => ">",
            CompareOp::Less => "<",
            CompareOp::Equal => "==",
            CompareOp::NotEqual => "!=",
        }
    }
}
