//! Statement Types
//!
//! Statement node, its variants, and the program root.

use std::fmt;

use super::operations::{CompareOp, Operation};
use crate::{Realm, Span};

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }

    /// Statement without a source location.
    pub fn synthetic(kind: StmtKind) -> Self {
        Stmt {
            kind,
            span: Span::DUMMY,
        }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

/// A comparison between two variables: `left <op> right`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Comparison {
    pub left: String,
    pub op: CompareOp,
    pub right: String,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op.as_symbol(), self.right)
    }
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `INVOKE spirits x AND y FROM the mortal realm`
    Invoke { names: Vec<String>, realm: Realm },

    /// `CHANNEL the essence OF x`: stage the left operand.
    Channel { name: String },

    /// `WEAVE WITH the force OF y`: stage the right operand.
    Weave { name: String },

    /// `MANIFEST their union AS z`
    ///
    /// `operands` are the names channeled or woven since the previous
    /// manifest; they drive result realm inference.
    Manifest {
        operation: Operation,
        operands: Vec<String>,
        result: String,
    },

    /// `SPEAK FORTH z TO the void`
    Speak { name: String, target: String },

    /// `IF the spirits decree ... THEN ... ELSEWISE ... END`
    ///
    /// Parsed but never executed by the interpreter.
    Conditional {
        condition: Comparison,
        then_branch: Vec<Stmt>,
        else_branch: Option<Vec<Stmt>>,
    },

    /// `WHILE the essence flows AND ... END`
    ///
    /// Parsed but never executed by the interpreter.
    WhileLoop { condition: Comparison, body: Vec<Stmt> },
}

impl StmtKind {
    /// Short lowercase tag, used in diagnostics and logs.
    pub const fn tag(&self) -> &'static str {
        match self {
            StmtKind::Invoke { .. } => "invoke",
            StmtKind::Channel { .. } => "channel",
            StmtKind::Weave { .. } => "weave",
            StmtKind::Manifest { .. } => "manifest",
            StmtKind::Speak { .. } => "speak",
            StmtKind::Conditional { .. } => "conditional",
            StmtKind::WhileLoop { .. } => "while",
        }
    }
}

impl fmt::Display for StmtKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StmtKind::Invoke { names, realm } => {
                write!(f, "Invoke({} from {realm} realm)", names.join(" AND "))
            }
            StmtKind::Channel { name } => write!(f, "Channel({name})"),
            StmtKind::Weave { name } => write!(f, "Weave({name})"),
            StmtKind::Manifest {
                operation,
                operands,
                result,
            } => write!(
                f,
                "Manifest({operation} of {} -> {result})",
                operands.join(" and ")
            ),
            StmtKind::Speak { name, target } => write!(f, "Speak({name} to {target})"),
            StmtKind::Conditional {
                condition,
                then_branch,
                ..
            } => write!(
                f,
                "Conditional({condition} -> {} statements)",
                then_branch.len()
            ),
            StmtKind::WhileLoop { condition, body } => {
                write!(f, "WhileLoop({condition} -> {} statements)", body.len())
            }
        }
    }
}

/// Root node: the ordered statement sequence of one spell.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    /// Build a program from statement kinds with dummy spans.
    pub fn from_kinds(kinds: impl IntoIterator<Item = StmtKind>) -> Self {
        Program {
            statements: kinds.into_iter().map(Stmt::synthetic).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Every `(name, realm)` pair introduced by an `INVOKE`, in source order.
    ///
    /// Only top-level statements are scanned; block bodies never execute.
    pub fn invoked_variables(&self) -> Vec<(&str, Realm)> {
        self.statements
            .iter()
            .filter_map(|stmt| match &stmt.kind {
                StmtKind::Invoke { names, realm } => Some((names, *realm)),
                _ => None,
            })
            .flat_map(|(names, realm)| names.iter().map(move |n| (n.as_str(), realm)))
            .collect()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SpellProgram({} statements)", self.statements.len())
    }
}
