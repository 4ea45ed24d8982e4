//! Optional operation history.
//!
//! Telemetry only: the engine works the same with or without an observer.

use std::sync::Arc;

use parking_lot::Mutex;

use rune_ir::Operation;

use crate::value::Value;

/// Hook called as operands are staged and operations complete.
pub trait OperationObserver {
    fn channeled(&self, name: &str, value: &Value);
    fn woven(&self, name: &str, value: &Value);
    /// `right` is `None` for `essence`, which reads only the left operand.
    fn manifested(&self, operation: Operation, left: &Value, right: Option<&Value>, result: &Value);
}

impl<T: OperationObserver + ?Sized> OperationObserver for Arc<T> {
    fn channeled(&self, name: &str, value: &Value) {
        (**self).channeled(name, value);
    }

    fn woven(&self, name: &str, value: &Value) {
        (**self).woven(name, value);
    }

    fn manifested(&self, operation: Operation, left: &Value, right: Option<&Value>, result: &Value) {
        (**self).manifested(operation, left, right, result);
    }
}

/// Observer that keeps a human-readable line per event.
#[derive(Debug, Default)]
pub struct OperationHistory {
    entries: Mutex<Vec<String>>,
}

impl OperationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    fn push(&self, line: String) {
        self.entries.lock().push(line);
    }
}

impl OperationObserver for OperationHistory {
    fn channeled(&self, name: &str, value: &Value) {
        self.push(format!("Channeled essence of {name}: {value}"));
    }

    fn woven(&self, name: &str, value: &Value) {
        self.push(format!("Woven force of {name}: {value}"));
    }

    fn manifested(&self, operation: Operation, left: &Value, right: Option<&Value>, result: &Value) {
        let line = match right {
            Some(right) => format!("Manifested {operation}: {left} ⚡ {right} = {result}"),
            None => format!("Manifested {operation}: {left} = {result}"),
        };
        self.push(line);
    }
}
