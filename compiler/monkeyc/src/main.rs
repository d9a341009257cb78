//! Monkey interpreter CLI.

use std::process::ExitCode;

use monkeyc::commands::{expand_file, lex_file, parse_file, run_file, run_repl, CommandError};

fn main() -> ExitCode {
    monkeyc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let result = match args.get(1).map(String::as_str) {
        None | Some("repl") => run_repl(),
        Some("run") => with_path(&args, "run", run_file),
        Some("parse") => with_path(&args, "parse", parse_file),
        Some("expand") => with_path(&args, "expand", expand_file),
        Some("lex") => with_path(&args, "lex", lex_file),
        Some("help" | "--help" | "-h") => {
            print_usage();
            Ok(())
        }
        Some("version" | "--version" | "-v") => {
            println!("Monkey {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(command) => {
            // A bare source path runs the file.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("monkey"))
            {
                run_file(command)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                return ExitCode::FAILURE;
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Runtime(error)) => {
            eprintln!("ERROR: {error}");
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn with_path(
    args: &[String],
    command: &str,
    handler: fn(&str) -> Result<(), CommandError>,
) -> Result<(), CommandError> {
    let Some(path) = args.get(2) else {
        eprintln!("Usage: monkey {command} <file.monkey>");
        std::process::exit(1);
    };
    handler(path)
}

fn print_usage() {
    println!("Monkey interpreter");
    println!();
    println!("Usage: monkey [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Start the interactive prompt (default)");
    println!("  run <file.monkey>    Evaluate a Monkey program");
    println!("  parse <file.monkey>  Print the parsed program");
    println!("  expand <file.monkey> Print the program after macro expansion");
    println!("  lex <file.monkey>    Print the token stream");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Environment:");
    println!("  MONKEY_LOG=<filter>  Enable debug logging, e.g. MONKEY_LOG=monkey_eval=debug");
    println!();
    println!("Examples:");
    println!("  monkey");
    println!("  monkey run fibonacci.monkey");
    println!("  monkey expand unless.monkey");
    println!("  monkey fibonacci.monkey");
}
