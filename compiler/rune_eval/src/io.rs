//! Raw input for `INVOKE`.
//!
//! The interpreter never reads a terminal directly. It asks an
//! [`InputProvider`] for one line per invoked variable; the CLI supplies a
//! stdin-backed provider, tests supply [`ScriptedInput`].

use std::collections::VecDeque;
use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

/// Source of raw text for summoned variables.
pub trait InputProvider {
    /// Block until one line is available. The trailing newline is stripped.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

impl<T: InputProvider + ?Sized> InputProvider for Box<T> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        (**self).read_line(prompt)
    }
}

/// Shared provider: the caller keeps a handle and inspects it after the run.
impl<T: InputProvider + ?Sized> InputProvider for Arc<Mutex<T>> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.lock().read_line(prompt)
    }
}

/// Pre-recorded answers, handed out in order.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        ScriptedInput {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.lines
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted"))
    }
}

/// Provider for programs that never invoke; any read fails.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoInput;

impl InputProvider for NoInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<String> {
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no input source configured",
        ))
    }
}
