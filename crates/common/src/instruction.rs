//! Instruction decoding for the Intcode machine.
//!
//! An instruction is encoded in one memory cell plus one cell per
//! parameter. Reading the opcode cell's decimal digits right to left:
//! the two least-significant digits are the opcode; each subsequent digit
//! is the addressing mode of the corresponding parameter, in left-to-right
//! parameter order; absent digits default to position mode.
//!
//! So `1202` decodes as: opcode `02` (multiply), first parameter mode `2`
//! (relative), second parameter mode `1` (immediate), third parameter mode
//! `0` (position, padded).
//!
//! Instructions are transient: they are reconstructed on every decode and
//! never persisted.

use std::fmt::{self, Display};

use crate::error::DecodeError;
use crate::mode::ParamMode;
use crate::opcode::Opcode;

/// A single decoded parameter: an addressing mode and a raw value.
///
/// Resolution to an effective value or address happens at use time, in the
/// machine, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    /// How `value` is interpreted.
    pub mode: ParamMode,
    /// The raw cell contents.
    pub value: i64,
}

/// A decoded instruction: an opcode plus 0-3 parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The operation to perform.
    pub opcode: Opcode,
    /// Parameter slots. Only the first `opcode.param_count()` are
    /// meaningful; the rest stay zeroed.
    params: [Parameter; 3],
}

impl Instruction {
    /// The instruction's parameters, `opcode.param_count()` long.
    pub fn params(&self) -> &[Parameter] {
        &self.params[..self.opcode.param_count()]
    }

    /// Decode the instruction starting at `pc`.
    ///
    /// Returns the instruction and the address just past its encoding (the
    /// next pc if no jump occurs). Decode never mutates anything.
    ///
    /// Mode digits beyond the opcode's parameter count are ignored; digits
    /// that map to a declared parameter must name a valid mode.
    pub fn decode_at(mem: &[i64], pc: usize) -> Result<(Instruction, usize), DecodeError> {
        let raw = *mem.get(pc).ok_or(DecodeError::Truncated { at: pc })?;
        // Truncating remainder: a negative cell yields a negative low pair,
        // which can never name an opcode.
        let opcode =
            Opcode::from_raw(raw % 100).ok_or(DecodeError::UnknownOpcode { at: pc, raw })?;

        let count = opcode.param_count();
        if pc + count >= mem.len() && count > 0 {
            return Err(DecodeError::Truncated { at: pc });
        }

        let mut params = [Parameter {
            mode: ParamMode::Position,
            value: 0,
        }; 3];
        let mut digits = raw / 100;
        for (i, slot) in params.iter_mut().take(count).enumerate() {
            let digit = digits % 10;
            digits /= 10;
            slot.mode = ParamMode::from_digit(digit).ok_or(DecodeError::UnknownMode {
                at: pc,
                raw,
                digit,
            })?;
            slot.value = mem[pc + 1 + i];
        }

        Ok((Instruction { opcode, params }, pc + 1 + count))
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            ParamMode::Position => write!(f, "{}", self.value),
            ParamMode::Immediate => write!(f, "${}", self.value),
            ParamMode::Relative => {
                // A zero offset renders as `%rb - 0`, keeping the sign rule
                // strictly "positive means plus".
                if self.value > 0 {
                    write!(f, "%rb + {}", self.value)
                } else {
                    write!(f, "%rb - {}", self.value.unsigned_abs())
                }
            }
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode.mnemonic())?;
        for (i, param) in self.params().iter().enumerate() {
            if i == 0 {
                write!(f, " {param}")?;
            } else {
                write!(f, ", {param}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(mem: &[i64]) -> (Instruction, usize) {
        Instruction::decode_at(mem, 0).unwrap()
    }

    #[test]
    fn decode_plain_add() {
        let (inst, next) = decode(&[1, 9, 10, 3, 99]);
        assert_eq!(inst.opcode, Opcode::Add);
        assert_eq!(next, 4);
        assert_eq!(
            inst.params(),
            &[
                Parameter {
                    mode: ParamMode::Position,
                    value: 9
                },
                Parameter {
                    mode: ParamMode::Position,
                    value: 10
                },
                Parameter {
                    mode: ParamMode::Position,
                    value: 3
                },
            ]
        );
    }

    #[test]
    fn decode_mixed_modes() {
        // 1202: multiply, first param relative, second immediate, third
        // position (padded).
        let (inst, next) = decode(&[1202, 4, 5, 6]);
        assert_eq!(inst.opcode, Opcode::Multiply);
        assert_eq!(next, 4);
        let modes: Vec<ParamMode> = inst.params().iter().map(|p| p.mode).collect();
        assert_eq!(
            modes,
            vec![ParamMode::Relative, ParamMode::Immediate, ParamMode::Position]
        );
    }

    #[test]
    fn decode_halt_has_no_params() {
        let (inst, next) = decode(&[99]);
        assert_eq!(inst.opcode, Opcode::Halt);
        assert!(inst.params().is_empty());
        assert_eq!(next, 1);
    }

    #[test]
    fn decode_output_immediate() {
        let (inst, next) = decode(&[104, 1024, 99]);
        assert_eq!(inst.opcode, Opcode::Output);
        assert_eq!(
            inst.params(),
            &[Parameter {
                mode: ParamMode::Immediate,
                value: 1024
            }]
        );
        assert_eq!(next, 2);
    }

    #[test]
    fn decode_at_nonzero_pc() {
        let mem = [99, 109, 19];
        let (inst, next) = Instruction::decode_at(&mem, 1).unwrap();
        assert_eq!(inst.opcode, Opcode::AdjustRelativeBase);
        assert_eq!(inst.params()[0].mode, ParamMode::Immediate);
        assert_eq!(inst.params()[0].value, 19);
        assert_eq!(next, 3);
    }

    #[test]
    fn decode_unknown_opcode() {
        assert_eq!(
            Instruction::decode_at(&[50, 0, 0], 0),
            Err(DecodeError::UnknownOpcode { at: 0, raw: 50 })
        );
    }

    #[test]
    fn decode_negative_cell_is_unknown_opcode() {
        assert_eq!(
            Instruction::decode_at(&[-1, 0, 0], 0),
            Err(DecodeError::UnknownOpcode { at: 0, raw: -1 })
        );
    }

    #[test]
    fn decode_unknown_mode_digit() {
        // 302: input with mode digit 3 on its only parameter.
        assert_eq!(
            Instruction::decode_at(&[302, 0], 0),
            Err(DecodeError::UnknownMode {
                at: 0,
                raw: 302,
                digit: 3
            })
        );
    }

    #[test]
    fn decode_ignores_mode_digits_past_param_count() {
        // 11104: output (1 param, immediate); the extra leading 11 is
        // ignored, matching decimal padding semantics.
        let (inst, _) = decode(&[11104, 7]);
        assert_eq!(inst.opcode, Opcode::Output);
        assert_eq!(inst.params()[0].mode, ParamMode::Immediate);
    }

    #[test]
    fn decode_truncated_instruction() {
        // Add needs three parameter cells; only two remain.
        assert_eq!(
            Instruction::decode_at(&[1, 2, 3], 0),
            Err(DecodeError::Truncated { at: 0 })
        );
        assert_eq!(
            Instruction::decode_at(&[], 0),
            Err(DecodeError::Truncated { at: 0 })
        );
    }

    #[test]
    fn display_formats() {
        let (inst, _) = decode(&[21002, 7, 1, 3]);
        assert_eq!(inst.to_string(), "MULTIPLY 7, $1, %rb + 3");

        let (inst, _) = decode(&[204, -1]);
        assert_eq!(inst.to_string(), "OUTPUT %rb - 1");

        let (inst, _) = decode(&[204, 0]);
        assert_eq!(inst.to_string(), "OUTPUT %rb - 0");

        let (inst, _) = decode(&[99]);
        assert_eq!(inst.to_string(), "HALT");
    }
}
