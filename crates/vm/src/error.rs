//! Runtime errors for the Intcode machine.
//!
//! Every fatal condition halts execution entirely and is surfaced
//! synchronously to the caller of `run()`/`step()`; there is no recovery or
//! retry inside the machine. Variants carry the address (`at`) of the
//! instruction being executed.

use intcode_common::DecodeError;
use thiserror::Error;

/// Errors that occur during program execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The cell at the program counter did not decode as an instruction.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// An effective address is negative or beyond the reserved memory.
    /// Addresses never wrap.
    #[error("address {addr} out of range (memory size {size}) at address {at}")]
    AddressOutOfRange { at: usize, addr: i64, size: usize },

    /// An immediate-mode parameter was used as a write destination.
    /// A programming error in the supplied program; fail fast.
    #[error("write to immediate parameter {value} at address {at}")]
    WriteToImmediate { at: usize, value: i64 },

    /// The initial image does not fit in the reserved memory.
    #[error("program image of {len} cells exceeds reserved memory of {size} cells")]
    ProgramTooLarge { len: usize, size: usize },
}
