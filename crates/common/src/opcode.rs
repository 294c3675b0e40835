//! Opcode definitions for the Intcode instruction set.
//!
//! The opcode space is small and closed: ten operations, identified by the
//! low two decimal digits of the cell at the program counter.

/// Identifies the operation to perform.
///
/// Raw values are the decimal opcodes as they appear in program images.
#[repr(i64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// dst = src1 + src2.
    Add = 1,
    /// dst = src1 * src2.
    Multiply = 2,
    /// dst = next input value. The destination can never be immediate.
    Input = 3,
    /// Emit src1 through the output sink.
    Output = 4,
    /// If src1 != 0, set pc to src2.
    JumpIfTrue = 5,
    /// If src1 == 0, set pc to src2.
    JumpIfFalse = 6,
    /// dst = 1 if src1 < src2, else 0.
    LessThan = 7,
    /// dst = 1 if src1 == src2, else 0.
    Equals = 8,
    /// rb += src1.
    AdjustRelativeBase = 9,
    /// Stop execution. The only normal termination path.
    Halt = 99,
}

/// All valid opcodes, in numeric order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 10] = [
    Opcode::Add,
    Opcode::Multiply,
    Opcode::Input,
    Opcode::Output,
    Opcode::JumpIfTrue,
    Opcode::JumpIfFalse,
    Opcode::LessThan,
    Opcode::Equals,
    Opcode::AdjustRelativeBase,
    Opcode::Halt,
];

impl Opcode {
    /// Look up an opcode from its raw decimal value (the low two digits of
    /// an instruction cell, already isolated by the caller).
    ///
    /// Returns `None` for values outside the opcode table, including
    /// anything negative.
    pub fn from_raw(value: i64) -> Option<Opcode> {
        match value {
            1 => Some(Opcode::Add),
            2 => Some(Opcode::Multiply),
            3 => Some(Opcode::Input),
            4 => Some(Opcode::Output),
            5 => Some(Opcode::JumpIfTrue),
            6 => Some(Opcode::JumpIfFalse),
            7 => Some(Opcode::LessThan),
            8 => Some(Opcode::Equals),
            9 => Some(Opcode::AdjustRelativeBase),
            99 => Some(Opcode::Halt),
            _ => None,
        }
    }

    /// Number of parameter cells following the opcode cell.
    ///
    /// Fixed and statically known per opcode.
    pub fn param_count(self) -> usize {
        match self {
            Opcode::Add | Opcode::Multiply | Opcode::LessThan | Opcode::Equals => 3,
            Opcode::JumpIfTrue | Opcode::JumpIfFalse => 2,
            Opcode::Input | Opcode::Output | Opcode::AdjustRelativeBase => 1,
            Opcode::Halt => 0,
        }
    }

    /// Assembly-style mnemonic, used by the disassembler.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "ADD",
            Opcode::Multiply => "MULTIPLY",
            Opcode::Input => "INPUT",
            Opcode::Output => "OUTPUT",
            Opcode::JumpIfTrue => "JT",
            Opcode::JumpIfFalse => "JF",
            Opcode::LessThan => "LT",
            Opcode::Equals => "EQ",
            Opcode::AdjustRelativeBase => "INC_RB",
            Opcode::Halt => "HALT",
        }
    }
}
