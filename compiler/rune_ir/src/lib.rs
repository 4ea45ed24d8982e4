//! Rune IR - AST model for the RuneScribe runtime.
//!
//! This crate contains the passive data structures shared by the front end
//! and the evaluator:
//! - Spans for source locations
//! - Realms (the coercion category attached to a variable)
//! - Operations performed by `MANIFEST`
//! - Statements and programs
//!
//! Nothing in here has behavior beyond naming helpers. Parsing lives in
//! `rune_parse`, execution in `rune_eval`.

pub mod ast;
mod realm;
mod span;

pub use ast::{Comparison, CompareOp, Operation, Program, Stmt, StmtKind};
pub use realm::{ParseRealmError, Realm};
pub use span::Span;
