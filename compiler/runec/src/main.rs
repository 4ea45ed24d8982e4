//! RuneScribe CLI
//!
//! Runs and inspects `.spell` files.

use runec::commands::{lex_file, list_realms, parse_file, parse_run_options, run_file};

fn main() {
    runec::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let (path, options) = match parse_run_options(&args[2..]) {
                Ok(parsed) => parsed,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    print_run_usage();
                    std::process::exit(1);
                }
            };
            let Some(path) = path else {
                eprintln!("error: missing file path");
                print_run_usage();
                std::process::exit(1);
            };
            run_file(path, &options);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: rune parse <file.spell>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: rune lex <file.spell>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "realms" => list_realms(),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("rune {}", env!("CARGO_PKG_VERSION"));
        }
        // `rune file.spell` is shorthand for `rune run file.spell`
        path if std::path::Path::new(path).exists() => {
            let (_, options) = match parse_run_options(&args[2..]) {
                Ok(parsed) => parsed,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            };
            run_file(path, &options);
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_run_usage() {
    eprintln!("Usage: rune run <file.spell> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -p, --plain      Technical output instead of mystical narration");
    eprintln!("  -v, --verbose    Show parsed statements and the final realm status");
    eprintln!("  --history        Show the operation history after the run");
}

fn print_usage() {
    println!("RuneScribe - a ritualistic programming language");
    println!();
    println!("Usage: rune <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.spell>     Execute a spell");
    println!("  parse <file.spell>   Show statements and invoked variable types");
    println!("  lex <file.spell>     Dump the token stream");
    println!("  realms               List realms and their type families");
    println!("  help                 Show this message");
    println!("  version              Show version");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=rune_eval=debug) for diagnostic logs.");
}
