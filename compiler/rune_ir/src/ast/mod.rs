//! AST node types.
//!
//! - `operations`: what `MANIFEST` computes, and comparison operators
//! - `stmt`: statements and the program root

mod operations;
mod stmt;

pub use operations::{CompareOp, Operation};
pub use stmt::{Comparison, Program, Stmt, StmtKind};
