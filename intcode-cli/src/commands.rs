//! CLI command implementations.

use std::fs;
use std::io::{self, BufRead, Write};

use intcode_common::Program;
use intcode_vm::{InputSource, Machine, Step};

/// Line-based input from stdin: prints the prompt to stderr, reads one
/// line, parses it as an integer. A non-numeric line is reported and the
/// prompt retried; only EOF (or a read error) suspends the machine.
struct StdinInput {
    stdin: io::Stdin,
}

impl InputSource for StdinInput {
    fn next_input(&mut self, prompt: &str) -> Option<i64> {
        loop {
            eprint!("{prompt}");
            let _ = io::stderr().flush();

            let mut line = String::new();
            match self.stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => match line.trim().parse() {
                    Ok(value) => return Some(value),
                    Err(_) => eprintln!("not a number: '{}'", line.trim()),
                },
            }
        }
    }
}

/// Load and run a program image.
pub fn run(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: run requires an input file");
        eprintln!("Usage: intcode run <program>");
        return Err(1);
    }

    let program = read_program(&args[0])?;

    let input = StdinInput { stdin: io::stdin() };
    let output = |value: i64| println!("{value}");
    let mut machine = Machine::new(&program.cells, input, output).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    match machine.run() {
        Ok(Step::Halted) => {
            eprintln!("halted; memory[0] = {}", machine.mem_get(0));
            Ok(())
        }
        Ok(Step::NeedsInput) | Ok(Step::Continuing) => {
            eprintln!("error: program is waiting for input but stdin is exhausted");
            Err(2)
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(2)
        }
    }
}

/// Disassemble a program image to stdout.
pub fn dis(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: dis requires an input file");
        eprintln!("Usage: intcode dis <program>");
        return Err(1);
    }

    let program = read_program(&args[0])?;
    print!("{}", intcode_dis::disassemble(&program));
    Ok(())
}

/// Read and parse a textual program image, reporting failures to stderr.
fn read_program(path: &str) -> Result<Program, i32> {
    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        1
    })?;

    Program::parse(&text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}
