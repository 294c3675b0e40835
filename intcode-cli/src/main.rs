//! Intcode CLI — run and disassemble program images.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input/parse error
//! - 2: Runtime error (including a program left waiting on input)

mod commands;

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => commands::run(&args[2..]),
        "dis" => commands::dis(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: intcode <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <program>   Run a program; inputs from stdin, outputs to stdout");
    eprintln!("  dis <program>   Disassemble a program to stdout");
}
