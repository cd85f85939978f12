//! Monkey interpreter CLI.

use std::io;

use monkey_eval::{Interpreter, Session};
use monkeyc::commands::{lex_file, parse_file, run_file};
use monkeyc::{init_tracing, CliError, Repl, ReplConfig};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        exit_on_error(repl());
        return;
    };

    let result = match command.as_str() {
        "repl" => repl(),
        "run" => {
            let Some(path) = args.get(2) else {
                usage_error("Usage: monkey run <file>");
            };
            run_file(path)
        }
        "parse" => {
            let Some(path) = args.get(2) else {
                usage_error("Usage: monkey parse <file>");
            };
            parse_file(path)
        }
        "lex" => {
            let Some(path) = args.get(2) else {
                usage_error("Usage: monkey lex <file>");
            };
            lex_file(path)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("Monkey {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ if command.starts_with('-') => {
            eprintln!("Unknown option: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
        // Anything else is taken as a file to run.
        path => run_file(path),
    };

    exit_on_error(result);
}

fn repl() -> Result<(), CliError> {
    let session = Session::new(Interpreter::new());
    let repl = Repl::new(
        ReplConfig::default(),
        session,
        io::stdin().lock(),
        io::stdout(),
    );
    Ok(repl.run()?)
}

fn exit_on_error(result: Result<(), CliError>) {
    if let Err(error) = result {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn usage_error(usage: &str) -> ! {
    eprintln!("{usage}");
    std::process::exit(1);
}

fn print_usage() {
    println!("Monkey interpreter");
    println!();
    println!("Usage: monkey [command] [file]");
    println!();
    println!("Commands:");
    println!("  repl                 Start the interactive shell (default)");
    println!("  run <file>           Run a Monkey program");
    println!("  <file>               Same as run");
    println!("  parse <file>         Print the parsed program, one statement per line");
    println!("  lex <file>           Print the token stream, one token per line");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Environment:");
    println!("  MONKEY_LOG           Log filter, e.g. monkey_eval=trace (falls back to RUST_LOG)");
}
