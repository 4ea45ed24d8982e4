//! Two-slot accumulator engine.
//!
//! `CHANNEL` stages the left operand and `WEAVE` the right; `MANIFEST`
//! consumes both and produces one value. Each engine owns its own slots, so
//! independent interpreters never share staging state.

use rune_ir::Operation;

use crate::errors::{missing_operand, EvalResult, Slot};
use crate::operators::evaluate_operation;
use crate::value::Value;

/// Staging area for the next operation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Accumulator {
    pub left: Option<Value>,
    pub right: Option<Value>,
}

impl Accumulator {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[derive(Debug, Default)]
pub struct Engine {
    slots: Accumulator,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage the left operand, replacing any value already staged there.
    pub fn channel(&mut self, value: Value) {
        self.slots.left = Some(value);
    }

    /// Stage the right operand, replacing any value already staged there.
    pub fn weave(&mut self, value: Value) {
        self.slots.right = Some(value);
    }

    /// Currently staged operands.
    #[inline]
    pub fn staged(&self) -> &Accumulator {
        &self.slots
    }

    /// Whether nothing is staged.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.slots.is_empty()
    }

    /// Perform `op` on the staged operands.
    ///
    /// Both slots are empty when this returns, whether it succeeded or not.
    /// `essence` needs only the left slot; every other operation needs both.
    pub fn evaluate(&mut self, op: Operation) -> EvalResult {
        let Accumulator { left, right } = std::mem::take(&mut self.slots);
        let Some(left) = left else {
            return Err(missing_operand(op, Slot::Left));
        };
        if op.is_unary() {
            return Ok(left);
        }
        let Some(right) = right else {
            return Err(missing_operand(op, Slot::Right));
        };
        tracing::trace!(%op, %left, %right, "evaluating");
        evaluate_operation(op, left, right)
    }
}

#[cfg(test)]
mod tests;
