//! Output destination for narration.
//!
//! The CLI writes to stdout; tests capture into a buffer and assert on the
//! text. Enum dispatch keeps the narrators free of generics.

use std::sync::Arc;

use parking_lot::Mutex;

/// Where narrated lines go.
pub enum Output {
    /// Writes to stdout.
    Stdout,
    /// Captures into a buffer.
    Buffer(Mutex<String>),
}

/// Output shared between a narrator and whoever reads it back.
pub type SharedOutput = Arc<Output>;

impl Output {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Output::Stdout => println!("{msg}"),
            Output::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
        }
    }

    /// Everything captured so far. Empty for stdout.
    pub fn get_output(&self) -> String {
        match self {
            Output::Stdout => String::new(),
            Output::Buffer(buf) => buf.lock().clone(),
        }
    }

    pub fn clear(&self) {
        if let Output::Buffer(buf) = self {
            buf.lock().clear();
        }
    }
}

pub fn stdout_output() -> SharedOutput {
    Arc::new(Output::Stdout)
}

pub fn buffer_output() -> SharedOutput {
    Arc::new(Output::Buffer(Mutex::new(String::new())))
}
