//! `InterpreterBuilder` for wiring an interpreter to its collaborators.

use super::Interpreter;
use crate::engine::Engine;
use crate::environment::Environment;
use crate::history::OperationObserver;
use crate::io::{InputProvider, NoInput};
use crate::sink::{PresentationSink, SilentSink};

/// Builder for creating Interpreter instances with various configurations.
///
/// Defaults: no input source (any `INVOKE` fails), a silent sink, no
/// operation observer and an empty environment.
#[derive(Default)]
pub struct InterpreterBuilder {
    env: Option<Environment>,
    input: Option<Box<dyn InputProvider>>,
    sink: Option<Box<dyn PresentationSink>>,
    observer: Option<Box<dyn OperationObserver>>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source of raw text for `INVOKE`.
    #[must_use]
    pub fn input(mut self, input: impl InputProvider + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    /// Set the presentation sink.
    #[must_use]
    pub fn sink(mut self, sink: impl PresentationSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Attach an operation observer.
    #[must_use]
    pub fn observer(mut self, observer: impl OperationObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Start from existing bindings.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            env: self.env.unwrap_or_default(),
            engine: Engine::new(),
            input: self.input.unwrap_or_else(|| Box::new(NoInput)),
            sink: self.sink.unwrap_or_else(|| Box::new(SilentSink)),
            observer: self.observer,
        }
    }
}
