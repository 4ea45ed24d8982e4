//! Runec - the RuneScribe command line.
//!
//! Library half of the `rune` binary: narrators, terminal input and the
//! command handlers. The binary only dispatches on arguments.
//!
//! # Tracing
//!
//! Diagnostic logs are off unless `RUST_LOG` is set, so narration and logs
//! never interleave by default:
//! - `RUST_LOG=rune_eval=debug`: one event per statement and evaluation.
//! - `RUST_LOG=rune_parse=trace`: every parsed statement.

use std::sync::Once;

pub mod commands;
pub mod narrator;
pub mod output;
pub mod stdin;

pub use narrator::{render_status, Narrator, Style};
pub use output::{buffer_output, stdout_output, Output, SharedOutput};
pub use stdin::StdinInput;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}
