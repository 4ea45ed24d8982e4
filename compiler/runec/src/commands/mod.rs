//! Command handlers for the `rune` CLI.
//!
//! Each submodule implements one command. Shared file handling lives here.

mod lex;
mod parse;
mod realms;
mod run;

pub use lex::{lex_file, render_tokens};
pub use parse::{parse_file, render_parse, type_information};
pub use realms::{list_realms, render_realms};
pub use run::{parse_run_options, run_file, run_source, RunOptions};

/// Conventional extension for spell files.
pub const SPELL_EXTENSION: &str = "spell";

/// Read a spell from disk, exiting with a user-friendly error message on
/// failure. Warns, but carries on, when the file is not a `.spell`.
pub(crate) fn read_file(path: &str) -> String {
    if !has_spell_extension(path) {
        eprintln!("warning: '{path}' does not have a .{SPELL_EXTENSION} extension");
    }
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

pub fn has_spell_extension(path: &str) -> bool {
    std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext == SPELL_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spell_extension() {
        assert!(has_spell_extension("hello.spell"));
        assert!(has_spell_extension("dir/nested.spell"));
        assert!(!has_spell_extension("hello.txt"));
        assert!(!has_spell_extension("spell"));
    }
}
