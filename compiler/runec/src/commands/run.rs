//! The `run` command: parse and execute a spell.

use std::sync::Arc;

use rune_eval::{InputProvider, Interpreter, OperationHistory};

use super::parse::type_information;
use super::read_file;
use crate::narrator::{render_status, Narrator, Style};
use crate::output::{stdout_output, SharedOutput};
use crate::stdin::StdinInput;

/// Flags accepted by `rune run`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Technical output instead of mystical narration.
    pub plain: bool,
    /// Print the parsed statements first and the realm status last.
    pub verbose: bool,
    /// Print the operation history after the run.
    pub history: bool,
}

/// Split `rune run` arguments into the file path and flags.
///
/// The first non-flag argument is the path. Unknown flags are rejected.
pub fn parse_run_options(args: &[String]) -> Result<(Option<&str>, RunOptions), String> {
    let mut options = RunOptions::default();
    let mut path = None;
    for arg in args {
        match arg.as_str() {
            "--plain" | "-p" => options.plain = true,
            "--verbose" | "-v" => options.verbose = true,
            "--history" => options.history = true,
            flag if flag.starts_with('-') => return Err(format!("unknown option '{flag}'")),
            file if path.is_none() => path = Some(file),
            extra => return Err(format!("unexpected argument '{extra}'")),
        }
    }
    Ok((path, options))
}

/// Run a spell file against the terminal, exiting with status 1 on failure.
pub fn run_file(path: &str, options: &RunOptions) {
    let content = read_file(path);
    if let Err(msg) = run_source(&content, path, options, StdinInput, &stdout_output()) {
        eprintln!("{msg}");
        std::process::exit(1);
    }
}

/// Parse and execute `source`, narrating to `out`.
///
/// Returns the rendered error, with its line number, if parsing or any
/// statement fails. Bindings made before a runtime failure still appear in
/// the verbose status report.
pub fn run_source(
    source: &str,
    path: &str,
    options: &RunOptions,
    input: impl InputProvider + 'static,
    out: &SharedOutput,
) -> Result<(), String> {
    let program = rune_parse::parse(source)
        .map_err(|err| format!("error in '{path}': {}", err.render(source)))?;

    if options.verbose {
        out.println(&format!("Successfully parsed {path}"));
        out.println("");
        out.println("Statements:");
        for (i, stmt) in program.statements.iter().enumerate() {
            out.println(&format!("  {}. {stmt}", i + 1));
        }
        out.println("");
        out.println("Type Information:");
        for line in type_information(&program) {
            out.println(&format!("  {line}"));
        }
    }

    let style = if options.plain {
        Style::Plain
    } else {
        Style::Mystical
    };
    let mut builder = Interpreter::builder()
        .input(input)
        .sink(Narrator::new(style, Arc::clone(out)));
    let history = options.history.then(|| Arc::new(OperationHistory::new()));
    if let Some(history) = &history {
        builder = builder.observer(Arc::clone(history));
    }
    let mut interpreter = builder.build();

    let result = interpreter.execute(&program);

    if let Some(history) = &history {
        out.println("");
        out.println("=== OPERATION HISTORY ===");
        let entries = history.entries();
        if entries.is_empty() {
            out.println("  (no operations recorded)");
        }
        for entry in entries {
            out.println(&format!("  {entry}"));
        }
    }
    if options.verbose {
        out.println("");
        out.println(&render_status(&interpreter.status()));
    }

    result.map_err(|err| match err.span {
        Some(span) => format!(
            "runtime error in '{path}' at line {}: {err}",
            span.line_in(source)
        ),
        None => format!("runtime error in '{path}': {err}"),
    })
}
