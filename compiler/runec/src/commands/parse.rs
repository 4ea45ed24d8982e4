//! The `parse` command: show the statements of a spell and what each
//! invoked variable may turn out to be.

use rune_ir::Program;

use super::read_file;

/// Parse a file and display its statements and type information.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    match rune_parse::parse(&content) {
        Ok(program) => print!("{}", render_parse(path, &program)),
        Err(err) => {
            eprintln!("error in '{path}': {}", err.render(&content));
            std::process::exit(1);
        }
    }
}

pub fn render_parse(path: &str, program: &Program) -> String {
    let mut text = format!("Parse result for '{path}':\n");
    text.push_str(&format!("  Statements: {}\n", program.len()));

    if !program.is_empty() {
        text.push_str("\nStatements:\n");
        for (i, stmt) in program.statements.iter().enumerate() {
            text.push_str(&format!("  {}. {stmt}\n", i + 1));
        }
    }

    let types = type_information(program);
    if !types.is_empty() {
        text.push_str("\nType Information:\n");
        for line in types {
            text.push_str(&format!("  {line}\n"));
        }
    }
    text
}

/// `name: realm=<realm>, types=[...]` for every invoked variable.
pub fn type_information(program: &Program) -> Vec<String> {
    program
        .invoked_variables()
        .into_iter()
        .map(|(name, realm)| {
            format!(
                "{name}: realm={realm}, types=[{}]",
                realm.possible_types().join(", ")
            )
        })
        .collect()
}
