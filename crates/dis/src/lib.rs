//! Intcode disassembler — renders a program image as assembly-style text.
//!
//! The scan is linear from address 0. Because programs can jump anywhere
//! and freely mix code with data, there is no reliable way to tell the two
//! apart; a cell that does not decode as an instruction is rendered as a
//! `DATA` line and scanning resumes at the next cell.
//!
//! # Usage
//!
//! ```
//! use intcode_common::Program;
//! use intcode_dis::disassemble;
//!
//! let program = Program::parse("104,1024,99").unwrap();
//! assert_eq!(disassemble(&program), "0000  OUTPUT $1024\n0002  HALT\n");
//! ```

use std::fmt::Write;

use intcode_common::{Instruction, Program};

/// Disassemble a program image, one instruction (or data cell) per line.
///
/// Lines are `{address:04x}  {instruction}`, addresses in hex.
pub fn disassemble(program: &Program) -> String {
    let mem = &program.cells;
    let mut out = String::new();
    let mut pc = 0;

    while pc < mem.len() {
        match Instruction::decode_at(mem, pc) {
            Ok((inst, next_pc)) => {
                writeln!(out, "{pc:04x}  {inst}").expect("writing to a String cannot fail");
                pc = next_pc;
            }
            Err(_) => {
                writeln!(out, "{pc:04x}  DATA {}", mem[pc])
                    .expect("writing to a String cannot fail");
                pc += 1;
            }
        }
    }

    out
}
