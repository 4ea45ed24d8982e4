//! Presentation sink for interpreter events.
//!
//! The interpreter reports what happened; the sink decides how it looks.
//! Narration style (mystical or plain) lives entirely outside the runtime.

use std::sync::Arc;

use parking_lot::Mutex;

use rune_ir::{Operation, Realm};

use crate::value::Value;

/// Something observable that happened during a run.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// The program is about to execute its first statement.
    Started,
    /// Every statement completed.
    Succeeded,
    /// A statement failed; carries the error message. No more statements run.
    Failed(String),
    /// A variable was summoned from input.
    Summoned { name: String, realm: Realm, value: Value },
    /// A value was staged as the left operand.
    Channeled { name: String },
    /// A value was staged as the right operand.
    Woven { name: String },
    /// An operation produced a value bound to `result`.
    Manifested {
        operation: Operation,
        result: String,
        value: Value,
    },
    /// `SPEAK` emitted a value toward a target.
    Spoke {
        name: String,
        value: Value,
        target: String,
    },
}

/// Receiver of interpreter events. Purely observational.
pub trait PresentationSink {
    fn notify(&self, event: Event);

    /// Prompt shown when reading input for `name`.
    fn invocation_prompt(&self, name: &str, realm: Realm) -> String {
        format!("Enter value for {name} ({realm} realm): ")
    }
}

impl<T: PresentationSink + ?Sized> PresentationSink for Arc<T> {
    fn notify(&self, event: Event) {
        (**self).notify(event);
    }

    fn invocation_prompt(&self, name: &str, realm: Realm) -> String {
        (**self).invocation_prompt(name, realm)
    }
}

/// Sink that discards everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct SilentSink;

impl PresentationSink for SilentSink {
    fn notify(&self, _event: Event) {}
}

/// Sink that records events for later inspection.
///
/// Share it with the interpreter through an `Arc` and read it back after the
/// run.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Event>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event received so far.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    /// `(name, value, target)` for every `SPEAK`, in order.
    pub fn spoken(&self) -> Vec<(String, Value, String)> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::Spoke {
                    name,
                    value,
                    target,
                } => Some((name.clone(), value.clone(), target.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl PresentationSink for RecordingSink {
    fn notify(&self, event: Event) {
        self.events.lock().push(event);
    }
}
