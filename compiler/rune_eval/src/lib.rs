//! Rune Eval - execution runtime for RuneScribe spells.
//!
//! # Architecture
//!
//! - `Environment`: name to binding map; summoning coerces raw text by realm
//! - `coerce`: one total `(text) -> Value` rule per realm
//! - `Engine`: the two-slot accumulator behind `CHANNEL`/`WEAVE`/`MANIFEST`
//! - `evaluate_operation`: direct enum-based dispatch of manifest operations
//! - `Interpreter`: sequential statement loop wired to an input provider, a
//!   presentation sink and an optional operation observer
//!
//! The runtime never touches a terminal. Input arrives through
//! [`InputProvider`] and everything observable leaves through
//! [`PresentationSink`].

pub mod coerce;
mod engine;
mod environment;
pub mod errors;
mod history;
mod io;
mod interpreter;
pub mod literal;
mod operators;
mod sink;
mod value;

pub use engine::{Accumulator, Engine};
pub use environment::{Binding, BindingStatus, Environment};
pub use errors::{ConversionFailure, EvalError, EvalErrorKind, EvalResult, Slot};
pub use history::{OperationHistory, OperationObserver};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use io::{InputProvider, NoInput, ScriptedInput};
pub use operators::evaluate_operation;
pub use sink::{Event, PresentationSink, RecordingSink, SilentSink};
pub use value::{Timestamp, Value};
