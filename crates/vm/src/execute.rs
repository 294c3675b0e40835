//! Fetch/decode/execute loop and opcode dispatch.

use intcode_common::{Instruction, Opcode, ParamMode, Parameter};

use crate::error::RuntimeError;
use crate::io::{InputSource, OutputSink};
use crate::machine::Machine;
use crate::trace::{TraceEvent, TraceFlags};

/// Prompt handed to the input provider on every input instruction.
const INPUT_PROMPT: &str = "> ";

/// Result of executing instructions.
///
/// Expected control flow is a value, not an error: a machine that ran out
/// of input is suspended, not broken, and resumes at the same instruction
/// once its provider has a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// An instruction executed; there are more to run.
    /// Returned by [`step`], never by [`run`].
    ///
    /// [`step`]: Machine::step
    /// [`run`]: Machine::run
    Continuing,
    /// The next instruction is an input and the provider has no value.
    /// Nothing was mutated.
    NeedsInput,
    /// A halt instruction executed. The machine will not run further.
    Halted,
}

impl<I: InputSource, O: OutputSink> Machine<I, O> {
    /// Load a parameter's effective value.
    fn load(&mut self, at: usize, param: Parameter) -> Result<i64, RuntimeError> {
        match param.mode {
            ParamMode::Immediate => Ok(param.value),
            ParamMode::Position => self.read(at, param.value),
            ParamMode::Relative => self.read(at, self.rb + param.value),
        }
    }

    /// Compute a parameter's effective address. Not the same as loading a
    /// value: immediate parameters have no address and are rejected here.
    fn effective_address(&self, at: usize, param: Parameter) -> Result<usize, RuntimeError> {
        let addr = match param.mode {
            ParamMode::Position => param.value,
            ParamMode::Relative => self.rb + param.value,
            ParamMode::Immediate => {
                return Err(RuntimeError::WriteToImmediate {
                    at,
                    value: param.value,
                })
            }
        };
        self.check_addr(at, addr)
    }

    /// Bounds-check a computed address. Addresses never wrap.
    fn check_addr(&self, at: usize, addr: i64) -> Result<usize, RuntimeError> {
        if addr < 0 || addr as usize >= self.memory.len() {
            return Err(RuntimeError::AddressOutOfRange {
                at,
                addr,
                size: self.memory.len(),
            });
        }
        Ok(addr as usize)
    }

    fn read(&mut self, at: usize, addr: i64) -> Result<i64, RuntimeError> {
        let addr = self.check_addr(at, addr)?;
        let value = self.memory[addr];
        self.record(TraceEvent::Load { addr, value });
        Ok(value)
    }

    /// Store a value at the effective address of the given parameter.
    fn store(&mut self, at: usize, param: Parameter, value: i64) -> Result<(), RuntimeError> {
        let addr = self.effective_address(at, param)?;
        self.memory[addr] = value;
        self.record(TraceEvent::Store { addr, value });
        Ok(())
    }

    /// Resolve a loaded jump target to a program counter.
    fn jump_target(&self, at: usize, target: i64) -> Result<usize, RuntimeError> {
        self.check_addr(at, target)
    }

    /// Execute one instruction.
    ///
    /// Decodes at the program counter, dispatches, and advances (or jumps).
    /// An input instruction whose provider returns no value leaves the
    /// machine untouched and reports [`Step::NeedsInput`]; re-running after
    /// the provider has a value re-executes the same instruction.
    pub fn step(&mut self) -> Result<Step, RuntimeError> {
        let at = self.pc;
        let (inst, next_pc) = Instruction::decode_at(&self.memory, at)?;
        if self.tracing(TraceFlags::DECODE) {
            self.record(TraceEvent::Decode {
                at,
                text: inst.to_string(),
            });
        }
        let p = inst.params();

        match inst.opcode {
            Opcode::Add => {
                let value = self.load(at, p[0])? + self.load(at, p[1])?;
                self.store(at, p[2], value)?;
                self.pc = next_pc;
            }
            Opcode::Multiply => {
                let value = self.load(at, p[0])? * self.load(at, p[1])?;
                self.store(at, p[2], value)?;
                self.pc = next_pc;
            }
            Opcode::Input => {
                // Resolve the destination before consuming input, so a bad
                // destination never swallows a value.
                self.effective_address(at, p[0])?;
                match self.input.next_input(INPUT_PROMPT) {
                    Some(value) => {
                        self.record(TraceEvent::Input { value });
                        self.store(at, p[0], value)?;
                        self.pc = next_pc;
                    }
                    None => return Ok(Step::NeedsInput),
                }
            }
            Opcode::Output => {
                let value = self.load(at, p[0])?;
                self.output.emit(value);
                self.pc = next_pc;
            }
            Opcode::JumpIfTrue => {
                if self.load(at, p[0])? != 0 {
                    let target = self.load(at, p[1])?;
                    self.pc = self.jump_target(at, target)?;
                } else {
                    self.pc = next_pc;
                }
            }
            Opcode::JumpIfFalse => {
                if self.load(at, p[0])? == 0 {
                    let target = self.load(at, p[1])?;
                    self.pc = self.jump_target(at, target)?;
                } else {
                    self.pc = next_pc;
                }
            }
            Opcode::LessThan => {
                let value = (self.load(at, p[0])? < self.load(at, p[1])?) as i64;
                self.store(at, p[2], value)?;
                self.pc = next_pc;
            }
            Opcode::Equals => {
                let value = (self.load(at, p[0])? == self.load(at, p[1])?) as i64;
                self.store(at, p[2], value)?;
                self.pc = next_pc;
            }
            Opcode::AdjustRelativeBase => {
                self.rb += self.load(at, p[0])?;
                self.record(TraceEvent::RelativeBase { rb: self.rb });
                self.pc = next_pc;
            }
            Opcode::Halt => {
                self.record(TraceEvent::Halted { at });
                return Ok(Step::Halted);
            }
        }

        Ok(Step::Continuing)
    }

    /// Execute instructions until the program halts or suspends on input.
    ///
    /// Returns [`Step::Halted`] or [`Step::NeedsInput`], never
    /// [`Step::Continuing`]. Side effects flow through the output sink;
    /// by convention many programs also leave a summary result at
    /// address 0 ([`mem_get`]).
    ///
    /// [`mem_get`]: Machine::mem_get
    pub fn run(&mut self) -> Result<Step, RuntimeError> {
        loop {
            match self.step()? {
                Step::Continuing => {}
                stopped => return Ok(stopped),
            }
        }
    }
}
